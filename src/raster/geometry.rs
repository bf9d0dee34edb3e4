//! Screen-space geometry for the scan converter.

use super::color::Color;

/// A point in pixel space (post-projection, not normalized).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A triangle with one color per vertex, constructed per draw call.
#[derive(Debug, Clone, Copy)]
pub struct Triangle2D {
    pub points: [Point2D; 3],
    pub colors: [Color; 3],
}

impl Triangle2D {
    pub const fn new(points: [Point2D; 3], colors: [Color; 3]) -> Self {
        Self { points, colors }
    }

    /// Twice the signed area — the barycentric denominator. Zero for
    /// degenerate (collinear) triangles.
    pub fn doubled_area(&self) -> f32 {
        let [p0, p1, p2] = self.points;
        (p1.y - p2.y) * (p0.x - p2.x) + (p2.x - p1.x) * (p0.y - p2.y)
    }

    /// Barycentric weights of `p` relative to this triangle. The triple sums
    /// to 1; weights are negative when `p` lies outside.
    ///
    /// Callers must reject degenerate triangles (`doubled_area()` near zero)
    /// before asking for weights — dividing by a zero area would hand back
    /// non-finite values.
    pub fn barycentric(&self, p: Point2D) -> [f32; 3] {
        let [p0, p1, p2] = self.points;
        let d = self.doubled_area();
        let w0 = ((p1.y - p2.y) * (p.x - p2.x) + (p2.x - p1.x) * (p.y - p2.y)) / d;
        let w1 = ((p2.y - p0.y) * (p.x - p2.x) + (p0.x - p2.x) * (p.y - p2.y)) / d;
        let w2 = 1.0 - w0 - w1;
        [w0, w1, w2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(points: [(f32, f32); 3]) -> Triangle2D {
        Triangle2D::new(
            points.map(|(x, y)| Point2D::new(x, y)),
            [Color::WHITE; 3],
        )
    }

    #[test]
    fn test_barycentric_identity_at_vertices() {
        let t = triangle([(1.0, 2.0), (7.0, 3.0), (4.0, 9.0)]);
        let expected = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        for (p, want) in t.points.iter().zip(expected) {
            let w = t.barycentric(*p);
            for (got, want) in w.iter().zip(want) {
                assert!((got - want).abs() < 1e-5, "weights {:?} at {:?}", w, p);
            }
        }
    }

    #[test]
    fn test_barycentric_sums_to_one() {
        let t = triangle([(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
        for p in [(3.0, 3.0), (-5.0, 2.0), (20.0, 20.0)] {
            let w = t.barycentric(Point2D::new(p.0, p.1));
            assert!((w[0] + w[1] + w[2] - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_outside_point_has_negative_weight() {
        let t = triangle([(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
        let w = t.barycentric(Point2D::new(8.0, 8.0));
        assert!(w.iter().any(|&v| v < 0.0));
    }

    #[test]
    fn test_doubled_area_zero_for_collinear() {
        let t = triangle([(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        assert_eq!(t.doubled_area(), 0.0);
    }
}
