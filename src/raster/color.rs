//! BGRA color with saturating channel arithmetic.
//!
//! Channel order matches the surface's in-memory layout (B, G, R, A), which
//! is SDL `ARGB8888` as a little-endian u32 — the surface can be uploaded to
//! a streaming texture without a conversion pass.

use std::ops::{Add, Mul};

/// A 32-bit color, one byte per channel, stored B, G, R, A.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { b, g, r, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Grayscale value written to all four channels, alpha included
    /// (split-map visualization convention).
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self {
            b: v,
            g: v,
            r: v,
            a: v,
        }
    }

    /// Unpack a packed `0xAARRGGBB` value.
    #[inline]
    pub const fn from_u32(val: u32) -> Self {
        Self {
            b: (val & 0x0000_00ff) as u8,
            g: ((val & 0x0000_ff00) >> 8) as u8,
            r: ((val & 0x00ff_0000) >> 16) as u8,
            a: ((val & 0xff00_0000) >> 24) as u8,
        }
    }

    /// Barycentric mix of three colors with the given weight triple.
    ///
    /// Accumulates each channel in f32 and rounds once, so a triangle with a
    /// uniform vertex color fills to exactly that color even though the
    /// weights only sum to 1 up to float round-off. Weights may be slightly
    /// negative (edge tolerance); the result is clamped per channel.
    pub fn mix3(c0: Color, c1: Color, c2: Color, w: [f32; 3]) -> Color {
        let channel = |v0: u8, v1: u8, v2: u8| -> u8 {
            let sum = v0 as f32 * w[0] + v1 as f32 * w[1] + v2 as f32 * w[2];
            sum.round().clamp(0.0, 255.0) as u8
        };
        Color {
            b: channel(c0.b, c1.b, c2.b),
            g: channel(c0.g, c1.g, c2.g),
            r: channel(c0.r, c1.r, c2.r),
            a: channel(c0.a, c1.a, c2.a),
        }
    }
}

/// Channel-wise scale, each channel clamped to [0, 255] independently.
impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, w: f32) -> Color {
        let scale = |v: u8| (v as f32 * w).clamp(0.0, 255.0) as u8;
        Color {
            b: scale(self.b),
            g: scale(self.g),
            r: scale(self.r),
            a: scale(self.a),
        }
    }
}

/// Channel-wise saturating add. Overflowing channels clamp at 255 instead
/// of wrapping.
impl Add for Color {
    type Output = Color;

    fn add(self, other: Color) -> Color {
        Color {
            b: self.b.saturating_add(other.b),
            g: self.g.saturating_add(other.g),
            r: self.r.saturating_add(other.r),
            a: self.a.saturating_add(other.a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u32_unpacks_argb() {
        let c = Color::from_u32(0xff80_4020);
        assert_eq!(c, Color::rgba(0x80, 0x40, 0x20, 0xff));
    }

    #[test]
    fn test_scalar_mul_clamps() {
        let c = Color::rgb(200, 10, 0) * 2.0;
        assert_eq!(c, Color::rgba(255, 20, 0, 255));

        // Negative weights clamp to zero instead of wrapping
        let c = Color::rgb(200, 10, 0) * -0.5;
        assert_eq!(c, Color::rgba(0, 0, 0, 0));
    }

    #[test]
    fn test_add_saturates() {
        let c = Color::rgba(200, 100, 0, 255) + Color::rgba(100, 100, 100, 255);
        assert_eq!(c, Color::rgba(255, 200, 100, 255));
    }

    #[test]
    fn test_mix3_uniform_color_is_exact() {
        let c = Color::rgb(100, 37, 255);
        for &w0 in &[0.0_f32, 0.2, 1.0 / 3.0, 0.61] {
            let w1 = (1.0 - w0) / 2.0;
            let w2 = 1.0 - w0 - w1;
            assert_eq!(Color::mix3(c, c, c, [w0, w1, w2]), c);
        }
    }

    #[test]
    fn test_mix3_vertex_weights_pick_vertices() {
        let c0 = Color::rgb(255, 0, 0);
        let c1 = Color::rgb(0, 255, 0);
        let c2 = Color::rgb(0, 0, 255);
        assert_eq!(Color::mix3(c0, c1, c2, [1.0, 0.0, 0.0]), c0);
        assert_eq!(Color::mix3(c0, c1, c2, [0.0, 1.0, 0.0]), c1);
        assert_eq!(Color::mix3(c0, c1, c2, [0.0, 0.0, 1.0]), c2);
    }
}
