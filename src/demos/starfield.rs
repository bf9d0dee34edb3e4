use super::Demo;
use crate::raster::{Color, Surface};
use crate::util::Rng;

const NUM_STARS: usize = 4096;
const SPREAD: f32 = 64.0;
const SPEED: f32 = 20.0;

struct Star {
    x: f32,
    y: f32,
    z: f32,
}

/// Perspective-projected 3D starfield: stars fly toward the camera and are
/// re-seeded when they pass it or drift out of the viewport.
pub struct Starfield {
    stars: Vec<Star>,
    rng: Rng,
}

impl Starfield {
    pub fn new() -> Self {
        let mut rng = Rng::new(12345);
        let stars = (0..NUM_STARS).map(|_| Self::random_star(&mut rng)).collect();
        Self { stars, rng }
    }

    fn random_star(rng: &mut Rng) -> Star {
        Star {
            x: (rng.next_f32() - 0.5) * 2.0 * SPREAD,
            y: (rng.next_f32() - 0.5) * 2.0 * SPREAD,
            // Tiny bias keeps the perspective divide away from zero
            z: (rng.next_f32() + 1e-5) * SPREAD,
        }
    }

    /// Screen position, or None when the star projects outside the viewport.
    fn project(star: &Star, width: u32, height: u32) -> Option<(u32, u32)> {
        let half_w = width as f32 / 2.0;
        let half_h = height as f32 / 2.0;
        let sx = (star.x / star.z) * half_w + half_w;
        let sy = (star.y / star.z) * half_h + half_h;
        let (x, y) = (sx as i32, sy as i32);
        if x < 0 || x >= width as i32 || y < 0 || y >= height as i32 {
            None
        } else {
            Some((x as u32, y as u32))
        }
    }
}

impl Default for Starfield {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for Starfield {
    fn update(&mut self, dt: f32, width: u32, height: u32) {
        for star in &mut self.stars {
            star.z -= dt * SPEED;
            if star.z <= 0.0 || Self::project(star, width, height).is_none() {
                *star = Self::random_star(&mut self.rng);
            }
        }
    }

    fn render(&self, surface: &mut Surface) {
        let (width, height) = (surface.width(), surface.height());
        for star in &self.stars {
            // A freshly re-seeded star can still land offscreen; it is
            // skipped this frame and reaped by the next update.
            if let Some((x, y)) = Self::project(star, width, height) {
                surface.set_pixel(x, y, Color::WHITE);
            }
        }
    }

    fn name(&self) -> &str {
        "Starfield"
    }
}
