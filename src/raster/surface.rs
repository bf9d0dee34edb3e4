//! CPU-side pixel surface: a fixed-size, row-major grid of BGRA colors.
//!
//! Bounds policy is fail-fast: out-of-range pixel coordinates are a contract
//! violation and panic, never silent corruption. Callers that may generate
//! offscreen coordinates (the scan converter's bounding box, the demo
//! projections) clip before writing.

use super::color::Color;

/// Widened before multiplying so `width * height` can't overflow u32.
#[inline]
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

pub struct Surface {
    pixels: Vec<Color>,
    width: u32,
    height: u32,
}

impl Surface {
    /// Create a surface with every pixel set to the zero/transparent color.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![Color::TRANSPARENT; pixel_count(width, height)],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} surface",
            x,
            y,
            self.width,
            self.height
        );
        (y * self.width + x) as usize
    }

    /// Reset every pixel to the zero/transparent color.
    pub fn clear(&mut self) {
        self.pixels.fill(Color::TRANSPARENT);
    }

    /// Set every pixel to `color`.
    pub fn clear_to(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Opaque overwrite at (x, y).
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    /// Read the pixel at (x, y).
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Source-over composite using `color.a / 255` as the blend factor.
    /// Only the RGB channels are written; destination alpha is untouched.
    #[inline]
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        let dst = &mut self.pixels[idx];
        let a = color.a as f32 / 255.0;
        dst.r = (dst.r as f32 * (1.0 - a) + color.r as f32 * a) as u8;
        dst.g = (dst.g as f32 * (1.0 - a) + color.g as f32 * a) as u8;
        dst.b = (dst.b as f32 * (1.0 - a) + color.b as f32 * a) as u8;
    }

    /// Tightly packed B,G,R bytes, 3 per pixel, row-major, no padding.
    /// This is the exact layout the PNG snapshot collaborator consumes.
    pub fn export_rgb(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            bytes.push(px.b);
            bytes.push(px.g);
            bytes.push(px.r);
        }
        bytes
    }

    /// Raw byte view of the BGRA grid (ARGB8888 little-endian) for texture
    /// upload.
    pub fn as_bytes(&self) -> &[u8] {
        // Safety: Color is #[repr(C)] with four u8 fields, so the pixel vec
        // is a contiguous run of pixels.len() * 4 initialized bytes.
        unsafe {
            std::slice::from_raw_parts(self.pixels.as_ptr().cast::<u8>(), self.pixels.len() * 4)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_count_avoids_u32_overflow() {
        // 2^20 * 2^20 pixels overflows u32 but fits usize
        assert_eq!(pixel_count(1 << 20, 1 << 20), 1usize << 40);
    }

    #[test]
    fn test_new_surface_is_transparent() {
        let s = Surface::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(s.pixel(x, y), Color::TRANSPARENT);
            }
        }
    }

    #[test]
    fn test_clear_to_sets_every_pixel() {
        let mut s = Surface::new(4, 3);
        let c = Color::rgb(10, 20, 30);
        s.clear_to(c);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(s.pixel(x, y), c);
            }
        }
        s.clear();
        assert_eq!(s.pixel(2, 1), Color::TRANSPARENT);
    }

    #[test]
    fn test_set_then_get() {
        let mut s = Surface::new(8, 8);
        let c = Color::rgba(1, 2, 3, 4);
        s.set_pixel(5, 6, c);
        assert_eq!(s.pixel(5, 6), c);
        assert_eq!(s.pixel(6, 5), Color::TRANSPARENT);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_set_pixel_out_of_bounds_panics() {
        let mut s = Surface::new(4, 4);
        s.set_pixel(4, 0, Color::WHITE);
    }

    #[test]
    fn test_blend_opaque_equals_set_on_rgb() {
        let mut s = Surface::new(2, 2);
        s.set_pixel(0, 0, Color::rgb(40, 50, 60));
        s.blend_pixel(0, 0, Color::rgba(200, 100, 10, 255));
        let px = s.pixel(0, 0);
        assert_eq!((px.r, px.g, px.b), (200, 100, 10));
    }

    #[test]
    fn test_blend_zero_alpha_leaves_rgb() {
        let mut s = Surface::new(2, 2);
        s.set_pixel(0, 0, Color::rgb(40, 50, 60));
        s.blend_pixel(0, 0, Color::rgba(200, 100, 10, 0));
        let px = s.pixel(0, 0);
        assert_eq!((px.r, px.g, px.b), (40, 50, 60));
    }

    #[test]
    fn test_blend_does_not_touch_destination_alpha() {
        let mut s = Surface::new(2, 2);
        s.set_pixel(1, 1, Color::rgba(0, 0, 0, 77));
        s.blend_pixel(1, 1, Color::rgba(255, 255, 255, 128));
        assert_eq!(s.pixel(1, 1).a, 77);
    }

    #[test]
    fn test_export_rgb_layout() {
        let mut s = Surface::new(2, 2);
        s.set_pixel(1, 0, Color::rgb(10, 20, 30));
        let bytes = s.export_rgb();
        assert_eq!(bytes.len(), 2 * 2 * 3);
        // Pixel (1, 0) starts at byte 3, stored B, G, R
        assert_eq!(&bytes[3..6], &[30, 20, 10]);
    }

    #[test]
    fn test_as_bytes_is_bgra() {
        let mut s = Surface::new(1, 1);
        s.set_pixel(0, 0, Color::rgba(1, 2, 3, 4));
        assert_eq!(s.as_bytes(), &[3, 2, 1, 4]);
    }
}
