use super::{Demo, DemoCommand};
use crate::raster::{scan, Color, Point2D, Surface, Triangle2D};

/// How the mesh is scan-converted, mirroring the classic draw modes
/// 0: Fill, 1: Fill+Wireframe, 2: Wireframe, 3: Points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    Fill,
    FillWireframe,
    Wireframe,
    Points,
}

impl DrawMode {
    pub fn from_index(index: u32) -> Self {
        match index {
            1 => Self::FillWireframe,
            2 => Self::Wireframe,
            3 => Self::Points,
            _ => Self::Fill,
        }
    }

    /// Inverse of `from_index` for the persisted config value.
    pub fn index(self) -> u32 {
        match self {
            Self::Fill => 0,
            Self::FillWireframe => 1,
            Self::Wireframe => 2,
            Self::Points => 3,
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            Self::Fill => Self::FillWireframe,
            Self::FillWireframe => Self::Wireframe,
            Self::Wireframe => Self::Points,
            Self::Points => Self::Fill,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::FillWireframe => "fill+wire",
            Self::Wireframe => "wireframe",
            Self::Points => "points",
        }
    }
}

struct RegionSpec {
    name: &'static str,
    center: [f32; 2],
    radius: f32,
}

const fn region(name: &'static str, cx: f32, cy: f32, radius: f32) -> RegionSpec {
    RegionSpec {
        name,
        center: [cx, cy],
        radius,
    }
}

/// Facial regions laid out in normalized texture space.
static REGIONS: [RegionSpec; 12] = [
    region("brow_l", 0.35, 0.28, 0.10),
    region("brow_r", 0.65, 0.28, 0.10),
    region("eye_l", 0.35, 0.40, 0.09),
    region("eye_r", 0.65, 0.40, 0.09),
    region("nose", 0.50, 0.52, 0.11),
    region("ear_l", 0.12, 0.46, 0.10),
    region("ear_r", 0.88, 0.46, 0.10),
    region("cheek_l", 0.30, 0.60, 0.13),
    region("cheek_r", 0.70, 0.60, 0.13),
    region("mouth", 0.50, 0.72, 0.11),
    region("jaw", 0.50, 0.84, 0.16),
    region("neck", 0.50, 0.96, 0.14),
];

/// Symmetric pairs selectable as one combined map.
static GROUPS: [(&str, [usize; 2]); 4] = [
    ("brows", [0, 1]),
    ("eyes", [2, 3]),
    ("ears", [5, 6]),
    ("cheeks", [7, 8]),
];

/// 12 single regions plus 4 symmetric groups.
const NUM_SELECTIONS: usize = 16;

/// Grid resolution of the procedural stand-in mesh (cells per side).
const GRID: usize = 48;

/// Triangle mesh in normalized [0,1]² texture space with one weight per
/// vertex per region — the same table shape as the external head asset, but
/// generated procedurally since asset loading is a collaborator's job.
struct Mesh {
    positions: Vec<[f32; 2]>,
    triangles: Vec<[u16; 3]>,
}

impl Mesh {
    fn grid(n: usize) -> Self {
        let side = n + 1;
        let mut positions = Vec::with_capacity(side * side);
        for j in 0..side {
            for i in 0..side {
                positions.push([i as f32 / n as f32, j as f32 / n as f32]);
            }
        }

        let mut triangles = Vec::with_capacity(n * n * 2);
        for j in 0..n {
            for i in 0..n {
                let v00 = (j * side + i) as u16;
                let v10 = v00 + 1;
                let v01 = v00 + side as u16;
                let v11 = v01 + 1;
                triangles.push([v00, v10, v11]);
                triangles.push([v00, v11, v01]);
            }
        }

        Self {
            positions,
            triangles,
        }
    }
}

/// Compactly supported radial falloff: 1 at the region center, 0 at and
/// beyond the region radius. Zero outside keeps untouched triangles
/// skippable, like the sparse weight tables of the real asset.
fn falloff(dx: f32, dy: f32, radius: f32) -> f32 {
    let d2 = (dx * dx + dy * dy) / (radius * radius);
    if d2 >= 1.0 {
        0.0
    } else {
        let t = 1.0 - d2;
        t * t
    }
}

/// Visualizes per-vertex "split map" region weights as grayscale over a
/// textured-coordinate triangle mesh.
pub struct SplitMap {
    mesh: Mesh,
    // maps[region][vertex], weights in [0, 1]
    maps: Vec<Vec<f32>>,
    selection: usize,
    mode: DrawMode,
}

impl SplitMap {
    pub fn new() -> Self {
        Self::with_draw_mode(DrawMode::Fill)
    }

    pub fn with_draw_mode(mode: DrawMode) -> Self {
        let mesh = Mesh::grid(GRID);
        let maps = REGIONS
            .iter()
            .map(|spec| {
                mesh.positions
                    .iter()
                    .map(|p| falloff(p[0] - spec.center[0], p[1] - spec.center[1], spec.radius))
                    .collect()
            })
            .collect();

        Self {
            mesh,
            maps,
            selection: 0,
            mode,
        }
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.mode
    }

    fn selected_regions(&self) -> &'static [usize] {
        static SINGLES: [[usize; 1]; 12] =
            [[0], [1], [2], [3], [4], [5], [6], [7], [8], [9], [10], [11]];
        if self.selection < REGIONS.len() {
            &SINGLES[self.selection]
        } else {
            &GROUPS[self.selection - REGIONS.len()].1
        }
    }

    fn selection_name(&self) -> &'static str {
        if self.selection < REGIONS.len() {
            REGIONS[self.selection].name
        } else {
            GROUPS[self.selection - REGIONS.len()].0
        }
    }

    /// Summed weight of the selected regions at one vertex, as a grayscale
    /// channel value.
    fn vertex_value(&self, vertex: usize) -> u8 {
        let sum: f32 = self
            .selected_regions()
            .iter()
            .map(|&r| self.maps[r][vertex])
            .sum();
        (sum * 255.0).min(255.0) as u8
    }
}

impl Default for SplitMap {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for SplitMap {
    fn update(&mut self, _dt: f32, _width: u32, _height: u32) {
        // The mesh and weight tables are static; only commands change state.
    }

    fn render(&self, surface: &mut Surface) {
        let scale_x = (surface.width() - 1) as f32;
        let scale_y = (surface.height() - 1) as f32;

        for tri in &self.mesh.triangles {
            let [v0, v1, v2] = tri.map(|v| v as usize);

            let values = [
                self.vertex_value(v0),
                self.vertex_value(v1),
                self.vertex_value(v2),
            ];
            if values == [0, 0, 0] {
                continue;
            }

            let points = [v0, v1, v2].map(|v| {
                let p = self.mesh.positions[v];
                Point2D::new(p[0] * scale_x, p[1] * scale_y)
            });
            let colors = values.map(Color::gray);

            match self.mode {
                DrawMode::Fill | DrawMode::FillWireframe => {
                    scan::fill_triangle(surface, &Triangle2D::new(points, colors));
                }
                _ => {},
            }
            match self.mode {
                DrawMode::FillWireframe | DrawMode::Wireframe => {
                    scan::draw_line(surface, points[0], points[1], colors[0]);
                    scan::draw_line(surface, points[1], points[2], colors[1]);
                    scan::draw_line(surface, points[2], points[0], colors[2]);
                }
                DrawMode::Points => {
                    for (p, c) in points.iter().zip(colors) {
                        surface.set_pixel(p.x as u32, p.y as u32, c);
                    }
                }
                _ => {},
            }
        }
    }

    fn command(&mut self, cmd: DemoCommand) {
        match cmd {
            DemoCommand::NextRegion => {
                self.selection = (self.selection + 1) % NUM_SELECTIONS;
            }
            DemoCommand::PrevRegion => {
                self.selection = (self.selection + NUM_SELECTIONS - 1) % NUM_SELECTIONS;
            }
            DemoCommand::CycleDrawMode => {
                self.mode = self.mode.cycle();
            }
        }
    }

    fn name(&self) -> &str {
        "Split Map"
    }

    fn status(&self) -> String {
        format!("Split Map [{}] {}", self.selection_name(), self.mode.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_indices_are_valid() {
        let demo = SplitMap::new();
        let vertex_count = demo.mesh.positions.len();
        assert!(vertex_count <= u16::MAX as usize + 1);
        for tri in &demo.mesh.triangles {
            for &v in tri {
                assert!((v as usize) < vertex_count);
            }
        }
    }

    #[test]
    fn test_weights_are_normalized() {
        let demo = SplitMap::new();
        assert_eq!(demo.maps.len(), REGIONS.len());
        for map in &demo.maps {
            assert_eq!(map.len(), demo.mesh.positions.len());
            assert!(map.iter().all(|&w| (0.0..=1.0).contains(&w)));
        }
    }

    #[test]
    fn test_every_region_covers_some_vertex() {
        let demo = SplitMap::new();
        for (spec, map) in REGIONS.iter().zip(&demo.maps) {
            assert!(
                map.iter().any(|&w| w > 0.5),
                "region {} has no strong vertex",
                spec.name
            );
        }
    }

    #[test]
    fn test_fill_render_touches_pixels() {
        let demo = SplitMap::new();
        let mut surface = Surface::new(64, 64);
        demo.render(&mut surface);

        let mut lit = 0;
        for y in 0..64 {
            for x in 0..64 {
                if surface.pixel(x, y) != Color::TRANSPARENT {
                    lit += 1;
                }
            }
        }
        assert!(lit > 0);
    }

    #[test]
    fn test_all_draw_modes_stay_in_bounds() {
        // Would panic through the surface's fail-fast contract otherwise
        let mut demo = SplitMap::new();
        for _ in 0..4 {
            let mut surface = Surface::new(48, 32);
            demo.render(&mut surface);
            demo.command(DemoCommand::CycleDrawMode);
        }
        assert_eq!(demo.draw_mode(), DrawMode::Fill);
    }

    #[test]
    fn test_cycle_matches_persisted_mode_index() {
        // The render loop persists the draw mode as `(index + 1) % 4` when
        // it forwards CycleDrawMode; if it ever bumped the index without the
        // demo cycling (or the orders diverged), a saved config would restart
        // the demo in a mode the user never selected.
        for i in 0..4 {
            let mut demo = SplitMap::with_draw_mode(DrawMode::from_index(i));
            demo.command(DemoCommand::CycleDrawMode);
            assert_eq!(demo.draw_mode(), DrawMode::from_index((i + 1) % 4));
            assert_eq!(demo.draw_mode().index(), (i + 1) % 4);
        }
    }

    #[test]
    fn test_region_cycling_wraps() {
        let mut demo = SplitMap::new();
        assert_eq!(demo.selection_name(), "brow_l");
        demo.command(DemoCommand::PrevRegion);
        assert_eq!(demo.selection_name(), "cheeks");
        for _ in 0..NUM_SELECTIONS {
            demo.command(DemoCommand::NextRegion);
        }
        assert_eq!(demo.selection_name(), "cheeks");
    }
}
