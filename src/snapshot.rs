//! Frame dumps: encode the current surface as a PNG on demand.

use std::path::Path;

use crate::raster::Surface;

/// The surface exports tightly packed B,G,R; the encoder wants R,G,B.
fn rgb_bytes(surface: &Surface) -> Vec<u8> {
    let mut bytes = surface.export_rgb();
    for px in bytes.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
    bytes
}

/// Write the surface to `path` as an 8-bit RGB PNG.
pub fn save_png(path: impl AsRef<Path>, surface: &Surface) -> Result<(), String> {
    image::save_buffer(
        path,
        &rgb_bytes(surface),
        surface.width(),
        surface.height(),
        image::ColorType::Rgb8,
    )
    .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Color;

    #[test]
    fn test_rgb_bytes_swizzles_to_rgb() {
        let mut s = Surface::new(2, 1);
        s.set_pixel(0, 0, Color::rgb(10, 20, 30));
        s.set_pixel(1, 0, Color::rgb(40, 50, 60));
        assert_eq!(rgb_bytes(&s), vec![10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn test_save_png_writes_file() {
        let mut s = Surface::new(4, 3);
        s.clear_to(Color::rgb(200, 100, 50));
        let path = std::env::temp_dir().join("softras_snapshot_test.png");
        save_png(&path, &s).unwrap();
        assert!(path.metadata().map(|m| m.len() > 0).unwrap_or(false));
        let _ = std::fs::remove_file(&path);
    }
}
