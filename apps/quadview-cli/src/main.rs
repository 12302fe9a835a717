use anyhow::Context;
use clap::{Parser, Subcommand};
use quadview_common::{DemoConfig, LookMode, MoveMode};
use quadview_input::{InputState, Key, dispatch};
use quadview_render::{
    Camera, DebugTextRenderer, FrameState, FrameTransform, ModelSpin, Projection, Renderer,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quadview-cli", about = "Headless quadview tooling")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON config file; omitted fields keep their defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Print the effective configuration as JSON
    Config,
    /// Drive the camera with scripted input and print the final frame
    Simulate {
        /// Number of frames to run
        #[arg(short, long, default_value = "60")]
        frames: u64,
        /// Movement keys held for every frame, e.g. "wd"
        #[arg(short, long, default_value = "")]
        keys: String,
        /// Horizontal pointer motion per frame, in pixels
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        look_dx: f64,
        /// Vertical pointer motion per frame, in pixels
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        look_dy: f64,
        /// Move relative to the view direction instead of along world axes
        #[arg(long)]
        camera_relative: bool,
        /// Let vertical pointer motion pitch the camera
        #[arg(long)]
        pitch: bool,
    },
}

struct Script<'a> {
    frames: u64,
    keys: &'a str,
    look: (f64, f64),
}

/// Run the scripted frames through the same input path as the desktop app.
fn simulate(config: &DemoConfig, script: &Script<'_>) -> String {
    let mut camera = Camera::from_config(&config.camera);
    let projection =
        Projection::from_config(&config.projection, config.window.width, config.window.height);
    let mut spin = ModelSpin::from_config(&config.frame);
    let mut input = InputState::new();
    input.set_captured(true);
    for key in script.keys.chars().map(Key::from_char) {
        if key == Key::Other {
            tracing::warn!("ignoring unmapped key in script");
            continue;
        }
        input.key_event(key, true);
    }

    let mut model = spin.matrix();
    for frame in 0..script.frames {
        input.record_motion(script.look.0, script.look.1);
        dispatch(input.frame_actions(), &mut camera, config.camera.move_speed);
        model = spin.advance();
        tracing::trace!(frame, eye = ?camera.position, "simulated frame");
    }

    let transform = FrameTransform::compose(&camera, &projection, model);
    DebugTextRenderer::new().render(&FrameState {
        frame: script.frames,
        spin: spin.angle,
        camera: &camera,
        transform: &transform,
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DemoConfig::default(),
    };

    match cli.command {
        Commands::Info => {
            println!("quadview-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", quadview_common::crate_info());
            println!("render: {}", quadview_render::crate_info());
            println!("input: {}", quadview_input::crate_info());
            println!("render-wgpu: {}", quadview_render_wgpu::crate_info());
        }
        Commands::Config => {
            println!("{}", config.to_json_pretty()?);
        }
        Commands::Simulate {
            frames,
            keys,
            look_dx,
            look_dy,
            camera_relative,
            pitch,
        } => {
            if camera_relative {
                config.camera.move_mode = MoveMode::ViewRelative;
            }
            if pitch {
                config.camera.look_mode = LookMode::YawPitch;
            }
            let script = Script {
                frames,
                keys: &keys,
                look: (look_dx, look_dy),
            };
            print!("{}", simulate(&config, &script));
        }
    }

    Ok(())
}
