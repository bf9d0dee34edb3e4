//! SDL2 presentation layer.
//!
//! The rasterizer core never sees this module; it only fills a `Surface`.
//! Presentation goes through the `PresentSurface` capability trait, whose
//! SDL implementation uploads the surface's BGRA bytes to a streaming
//! texture and flips the canvas.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

use crate::raster::Surface;

pub const DEFAULT_WIDTH: u32 = 1024;
pub const DEFAULT_HEIGHT: u32 = 1024;

/// Anything that can take a finished frame and put it on screen.
pub trait PresentSurface {
    fn present_surface(&mut self, surface: &Surface) -> Result<(), String>;
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Quit,
    KeyDown(Keycode),
}

pub struct Display {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    width: u32,
    height: u32,
}

pub struct RenderTarget<'a> {
    texture: Texture<'a>,
}

impl Display {
    /// Create display with custom resolution and VSync settings.
    /// vsync=true locks presentation to the monitor refresh.
    pub fn with_options(
        title: &str,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> Result<(Self, TextureCreator<WindowContext>), String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let mut canvas_builder = window.into_canvas().accelerated();
        if vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let canvas = canvas_builder.build().map_err(|e| e.to_string())?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump()?;

        Ok((
            Self {
                canvas,
                event_pump,
                width,
                height,
            },
            texture_creator,
        ))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_title(&mut self, title: &str) {
        // A NUL byte in a formatted title is a programming error; ignore it.
        let _ = self.canvas.window_mut().set_title(title);
    }

    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(InputEvent::Quit),
                Event::KeyDown {
                    keycode: Some(k), ..
                } => events.push(InputEvent::KeyDown(k)),
                _ => {},
            }
        }
        events
    }
}

impl<'a> RenderTarget<'a> {
    /// Streaming texture matching the surface's BGRA byte layout
    /// (ARGB8888 as a little-endian u32).
    pub fn with_size(
        texture_creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(Self { texture })
    }
}

/// Display plus its render target, bundled as the SDL presenter.
pub struct Screen<'a> {
    display: Display,
    target: RenderTarget<'a>,
}

impl<'a> Screen<'a> {
    pub fn new(display: Display, target: RenderTarget<'a>) -> Self {
        Self { display, target }
    }

    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        self.display.poll_events()
    }

    pub fn set_title(&mut self, title: &str) {
        self.display.set_title(title);
    }
}

impl PresentSurface for Screen<'_> {
    fn present_surface(&mut self, surface: &Surface) -> Result<(), String> {
        self.target
            .texture
            .update(None, surface.as_bytes(), (surface.width() * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.display.canvas.copy(&self.target.texture, None, None)?;
        self.display.canvas.present();
        Ok(())
    }
}
