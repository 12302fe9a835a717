mod state;

use anyhow::{Context, Result};
use clap::Parser;
use quadview_common::{DemoConfig, LookMode, MeshKind, MoveMode};
use quadview_input::{Action, Key};
use quadview_render::FramePace;
use quadview_render_wgpu::{GpuContext, Mesh, ShaderSet, WgpuRenderer};
use state::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{DeviceEvent, ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowId};

#[derive(Parser)]
#[command(name = "quadview", about = "Spinning mesh with a first-person camera")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON config file; omitted fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Mesh to draw: quad or triangle
    #[arg(long)]
    mesh: Option<MeshKind>,

    /// Move relative to the view direction instead of along world axes
    #[arg(long)]
    camera_relative: bool,

    /// Let vertical pointer motion pitch the camera
    #[arg(long)]
    pitch: bool,

    /// Directory containing vertex.wgsl and fragment.wgsl
    #[arg(long)]
    shader_dir: Option<PathBuf>,
}

impl Cli {
    fn demo_config(&self) -> Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => DemoConfig::default(),
        };
        if let Some(mesh) = self.mesh {
            config.mesh = mesh;
        }
        if self.camera_relative {
            config.camera.move_mode = MoveMode::ViewRelative;
        }
        if self.pitch {
            config.camera.look_mode = LookMode::YawPitch;
        }
        if let Some(dir) = &self.shader_dir {
            config.shader_dir = Some(dir.clone());
        }
        Ok(config)
    }
}

fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::KeyW => Key::W,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyD => Key::D,
        KeyCode::Escape => Key::Escape,
        _ => Key::Other,
    }
}

struct DemoApp {
    state: AppState,
    shaders: ShaderSet,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    renderer: Option<WgpuRenderer>,
    next_frame_at: Instant,
    fatal: Option<anyhow::Error>,
}

impl DemoApp {
    fn new(config: DemoConfig, shaders: ShaderSet) -> Self {
        Self {
            state: AppState::new(config),
            shaders,
            window: None,
            gpu: None,
            renderer: None,
            next_frame_at: Instant::now(),
            fatal: None,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_config = &self.state.config.window;
        let attrs = Window::default_attributes()
            .with_title(window_config.title.clone())
            .with_inner_size(PhysicalSize::new(window_config.width, window_config.height));
        let window = Arc::new(event_loop.create_window(attrs).context("creating window")?);

        let size = window.inner_size();
        let gpu = GpuContext::new(window.clone(), size.width, size.height)?;
        let mesh = Mesh::for_kind(self.state.config.mesh);
        let renderer = WgpuRenderer::new(
            &gpu.device,
            gpu.format(),
            size.width,
            size.height,
            &self.shaders,
            &mesh,
            self.state.config.window.clear_color,
        )?;
        self.state.projection.set_viewport(size.width, size.height);

        tracing::info!(
            mesh = %self.state.config.mesh,
            move_mode = ?self.state.camera.move_mode,
            look_mode = ?self.state.camera.look_mode,
            "renderer ready"
        );

        self.window = Some(window);
        self.gpu = Some(gpu);
        self.renderer = Some(renderer);

        if let Some(window) = &self.window {
            let center = PhysicalPosition::new(size.width / 2, size.height / 2);
            if let Err(e) = window.set_cursor_position(center) {
                tracing::debug!("cannot warp cursor: {e}");
            }
        }
        self.set_capture(true);
        Ok(())
    }

    /// Grab and hide the pointer, or release and show it.
    fn set_capture(&mut self, captured: bool) {
        let Some(window) = &self.window else {
            return;
        };
        let grab = if captured {
            window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        } else {
            window.set_cursor_grab(CursorGrabMode::None)
        };
        if let Err(e) = grab {
            tracing::warn!("cursor grab change failed: {e}");
        }
        window.set_cursor_visible(!captured);
        self.state.input.set_captured(captured);
    }

    fn handle_action(&mut self, action: Action, event_loop: &ActiveEventLoop) {
        match action {
            Action::ToggleCapture => {
                let captured = !self.state.input.is_captured();
                self.set_capture(captured);
            }
            Action::Quit => {
                tracing::info!("goodbye");
                event_loop.exit();
            }
            other => tracing::trace!(?other, "unhandled action"),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let started = Instant::now();

        for action in self.state.apply_input() {
            self.handle_action(action, event_loop);
        }
        let transform = self.state.next_frame();

        let (Some(gpu), Some(renderer)) = (&self.gpu, &self.renderer) else {
            return;
        };

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.reconfigure();
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        renderer.render(&gpu.device, &gpu.queue, &view, &transform);
        output.present();

        let wait = match self.state.pacer.finish_frame(started.elapsed()) {
            FramePace::Wait(wait) => wait,
            _ => Default::default(),
        };
        self.next_frame_at = Instant::now() + wait;
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_graphics(event_loop) {
            tracing::error!("{e:#}");
            self.fatal = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.handle_action(Action::Quit, event_loop);
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(gpu), Some(renderer)) = (&mut self.gpu, &mut self.renderer) {
                    gpu.resize(new_size.width, new_size.height);
                    let (width, height) = gpu.size();
                    renderer.resize(&gpu.device, width, height);
                    self.state.projection.set_viewport(width, height);
                }
            }
            WindowEvent::Focused(false) if self.state.input.is_captured() => {
                self.set_capture(false);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                let pressed = key_state == ElementState::Pressed;
                if let Some(action) = self.state.input.key_event(map_key(code), pressed) {
                    self.handle_action(action, event_loop);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.state.input.record_motion(delta.0, delta.1);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if Instant::now() < self.next_frame_at {
            event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame_at));
            return;
        }
        // The redraw request wakes the loop on its own.
        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = cli.demo_config()?;
    let shaders = ShaderSet::from_dir(config.shader_dir.as_deref())?;

    tracing::info!("quadview starting");

    let event_loop = EventLoop::new()?;
    let mut app = DemoApp::new(config, shaders);
    event_loop.run_app(&mut app)?;

    match app.fatal.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
