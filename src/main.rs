// Allow unused code for designed-but-not-yet-used APIs
// Remove these as the codebase matures
#![allow(dead_code)]

mod config;
mod demos;
mod display;
mod raster;
mod snapshot;
mod util;

use config::Config;
use demos::{Demo, DemoCommand, DrawMode, SplitMap, Starfield};
use display::{Display, InputEvent, PresentSurface, RenderTarget, Screen};
use raster::Surface;
use sdl2::keyboard::Keycode;
use util::FpsCounter;

const CONFIG_FILE: &str = "config.json";
const SNAPSHOT_FILE: &str = "test.png";

/// Apply command line overrides on top of the loaded config
fn parse_args(mut config: Config) -> Config {
    let args: Vec<String> = std::env::args().collect();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => config.vsync = false,
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        config.width = w;
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        config.height = h;
                    }
                    i += 1;
                }
            },
            "--resolution" | "-r" => {
                if i + 1 < args.len() {
                    // Parse WxH format (e.g., 1920x1080)
                    let parts: Vec<&str> = args[i + 1].split('x').collect();
                    if parts.len() == 2 {
                        if let (Ok(w), Ok(h)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                            config.width = w;
                            config.height = h;
                        }
                    }
                    i += 1;
                }
            },
            "--mode" | "-m" => {
                if i + 1 < args.len() {
                    if let Ok(m) = args[i + 1].parse::<u32>() {
                        config.mode = m.min(3);
                    }
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: softras [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  --width W, -w W           Set window width (default: {})",
                    Config::default().width
                );
                println!(
                    "  --height H, -h H          Set window height (default: {})",
                    Config::default().height
                );
                println!("  --resolution WxH, -r WxH  Set resolution (e.g., 1920x1080)");
                println!("  --mode N, -m N            Split-map draw mode");
                println!("                            (0: Fill | 1: Fill+Wireframe | 2: Wireframe | 3: Points)");
                println!("  --no-vsync                Disable VSync for uncapped framerate");
                println!("  --help                    Show this help message");
                println!();
                println!("Defaults come from {} when present.", CONFIG_FILE);
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    config
}

fn main() -> Result<(), String> {
    let mut config = parse_args(Config::load(CONFIG_FILE).unwrap_or_default());
    let (width, height) = (config.width, config.height);

    let (display, texture_creator) =
        Display::with_options("softras", width, height, config.vsync)?;
    let target = RenderTarget::with_size(&texture_creator, width, height)?;
    let mut screen = Screen::new(display, target);
    let mut surface = Surface::new(width, height);

    // FPS counter with 60 sample rolling average
    let mut fps_counter = FpsCounter::new(60);

    let mut demos: Vec<Box<dyn Demo>> = vec![
        Box::new(Starfield::new()), // 1
        Box::new(SplitMap::with_draw_mode(DrawMode::from_index(config.mode))), // 2
    ];
    const SPLIT_MAP_DEMO: usize = 1;
    let mut current = 0usize;

    println!("=== softras ===");
    println!("Resolution: {}x{}", width, height);
    if config.vsync {
        println!("VSync: ON (locked to refresh). Use --no-vsync for uncapped.");
    } else {
        println!("VSync: OFF (uncapped framerate)");
    }
    println!("Use --help for command line options.");
    println!("Controls:");
    println!("  1          - Starfield");
    println!("  2          - Split Map");
    println!("  Left/Right - Cycle through demos");
    println!("  [ / ]      - Previous/next split-map region");
    println!("  M          - Cycle draw mode");
    println!("  S          - Save frame to {}", SNAPSHOT_FILE);
    println!("  C          - Save config to {}", CONFIG_FILE);
    println!("  Escape     - Quit");

    let mut title_timer = 0.0_f32;

    'main: loop {
        let (dt, avg_fps) = fps_counter.tick();

        // Per-frame commands derived from input; no global flags
        let mut save_snapshot = false;

        for event in screen.poll_events() {
            match event {
                InputEvent::Quit => break 'main,
                InputEvent::KeyDown(key) => match key {
                    Keycode::Escape => break 'main,
                    Keycode::Num1 => current = 0,
                    Keycode::Num2 => current = 1,
                    Keycode::Left => current = (current + demos.len() - 1) % demos.len(),
                    Keycode::Right => current = (current + 1) % demos.len(),
                    Keycode::LeftBracket => demos[current].command(DemoCommand::PrevRegion),
                    Keycode::RightBracket => demos[current].command(DemoCommand::NextRegion),
                    Keycode::M => {
                        demos[current].command(DemoCommand::CycleDrawMode);
                        // Keep the persisted draw mode in step with the split
                        // map; other demos ignore the command, so bumping the
                        // config for them would desync the saved mode.
                        if current == SPLIT_MAP_DEMO {
                            config.mode = (config.mode + 1) % 4;
                        }
                    },
                    Keycode::S => save_snapshot = true,
                    Keycode::C => {
                        if let Err(e) = config.save(CONFIG_FILE) {
                            eprintln!("Failed to save config: {}", e);
                        } else {
                            println!("Config saved to {}", CONFIG_FILE);
                        }
                    },
                    _ => {},
                },
            }
        }

        let demo = &mut demos[current];
        demo.update(dt, width, height);

        // The render loop owns the surface and clears it each frame;
        // demos only draw
        surface.clear();
        demo.render(&mut surface);

        if save_snapshot {
            match snapshot::save_png(SNAPSHOT_FILE, &surface) {
                Ok(()) => println!("Saved frame to {}", SNAPSHOT_FILE),
                Err(e) => eprintln!("Failed to save {}: {}", SNAPSHOT_FILE, e),
            }
        }

        screen.present_surface(&surface)?;

        title_timer += dt;
        if title_timer > 0.25 {
            title_timer = 0.0;
            screen.set_title(&format!(
                "softras - {} - {:.2}ms ({:.0} FPS)",
                demo.status(),
                fps_counter.avg_frame_time_ms(),
                avg_fps
            ));
        }
    }

    Ok(())
}
