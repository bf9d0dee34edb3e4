//! Scan conversion: barycentric triangle fill and Bresenham line drawing.
//!
//! Pure functions over a `&mut Surface`; no long-lived state, no allocation
//! on the draw path.

use super::color::Color;
use super::geometry::{Point2D, Triangle2D};
use super::surface::Surface;

/// Weights down to this far below zero still count as inside — guards
/// against round-off along shared triangle edges.
const EDGE_TOLERANCE: f32 = 1e-5;

/// Triangles with |doubled area| below this are treated as degenerate and
/// skipped, so division by (near-)zero never reaches a pixel write.
const DEGENERATE_AREA: f32 = 1e-6;

/// Rasterize a triangle with per-vertex color interpolation.
///
/// The integer bounding box is inclusive on both ends and clamped to the
/// surface, so partially offscreen triangles are clipped rather than
/// violating the surface's bounds contract. The per-cell query point is the
/// integer coordinate itself. Degenerate (zero-area) triangles draw nothing.
pub fn fill_triangle(surface: &mut Surface, tri: &Triangle2D) {
    if tri.doubled_area().abs() < DEGENERATE_AREA {
        return;
    }

    let [p0, p1, p2] = tri.points;
    let min_x = p0.x.min(p1.x).min(p2.x);
    let min_y = p0.y.min(p1.y).min(p2.y);
    let max_x = p0.x.max(p1.x).max(p2.x);
    let max_y = p0.y.max(p1.y).max(p2.y);

    let x0 = (min_x.floor() as i32).max(0);
    let y0 = (min_y.floor() as i32).max(0);
    let x1 = (max_x.floor() as i32).min(surface.width() as i32 - 1);
    let y1 = (max_y.floor() as i32).min(surface.height() as i32 - 1);
    if x0 > x1 || y0 > y1 {
        return;
    }

    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = Point2D::new(x as f32, y as f32);
            let w = tri.barycentric(p);
            if w[0] < -EDGE_TOLERANCE || w[1] < -EDGE_TOLERANCE || w[2] < -EDGE_TOLERANCE {
                continue;
            }
            let color = Color::mix3(tri.colors[0], tri.colors[1], tri.colors[2], w);
            surface.set_pixel(x as u32, y as u32, color);
        }
    }
}

/// Draw a single-pixel-wide solid line with Bresenham's algorithm.
///
/// The segment is half-open: the endpoint `p1` is never plotted. Iteration
/// runs along the dominant axis; O(max(|dx|, |dy|)) pixel writes. Both
/// endpoints must lie inside the surface (fail-fast bounds policy).
pub fn draw_line(surface: &mut Surface, mut p0: Point2D, mut p1: Point2D, color: Color) {
    let steep = (p1.y - p0.y).abs() > (p1.x - p0.x).abs();
    if steep {
        std::mem::swap(&mut p0.x, &mut p0.y);
        std::mem::swap(&mut p1.x, &mut p1.y);
    }
    if p0.x > p1.x {
        std::mem::swap(&mut p0, &mut p1);
    }

    let dx = p1.x - p0.x;
    let dy = (p1.y - p0.y).abs();
    let y_step: i32 = if p0.y < p1.y { 1 } else { -1 };

    let mut error = dx / 2.0;
    let mut y = p0.y as i32;
    let max_x = p1.x as i32;

    for x in (p0.x as i32)..max_x {
        if steep {
            surface.set_pixel(y as u32, x as u32, color);
        } else {
            surface.set_pixel(x as u32, y as u32, color);
        }

        error -= dy;
        if error < 0.0 {
            y += y_step;
            error += dx;
        }
    }
}
