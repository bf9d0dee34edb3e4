//! The rasterizer core: pixel surface plus scan converter.
//!
//! This module performs no I/O and knows nothing about the window backend or
//! the demo loops; it only reads and writes the `Surface` it is handed.

mod color;
mod geometry;
pub mod scan;
mod surface;

pub use color::Color;
pub use geometry::{Point2D, Triangle2D};
pub use surface::Surface;
