mod split_map;
mod starfield;

pub use split_map::{DrawMode, SplitMap};
pub use starfield::Starfield;

use crate::raster::Surface;

/// Commands forwarded from the input layer into the active demo each frame.
/// Explicit message passing; demos hold no process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoCommand {
    NextRegion,
    PrevRegion,
    CycleDrawMode,
}

/// A frame producer driving the rasterizer core.
pub trait Demo {
    /// Advance simulation state.
    /// - dt: delta time in seconds
    /// - width/height: surface dimensions, for projection and culling
    fn update(&mut self, dt: f32, width: u32, height: u32);

    /// Draw the current state. The caller has already cleared the surface.
    fn render(&self, surface: &mut Surface);

    /// React to an input command. Demos ignore commands they don't handle.
    fn command(&mut self, _cmd: DemoCommand) {}

    /// Demo name for the window title.
    fn name(&self) -> &str;

    /// One-line state description for the window title.
    fn status(&self) -> String {
        self.name().to_string()
    }
}
