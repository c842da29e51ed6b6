use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use trackball::cli::Cli;
use trackball::core::{Modifiers, WinitInput};
use trackball::{InputHost, TrackballConfig, TrackballController};

/// Borrowed view of the window handed to the trackball for one event
struct WindowHost<'a> {
    window: &'a Window,
    modifiers: Modifiers,
}

impl InputHost for WindowHost<'_> {
    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    fn viewport_width(&self) -> u32 {
        self.window.inner_size().width
    }

    fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    input: WinitInput,
    trackball: TrackballController,
}

impl App {
    fn new(cli: Cli, config: TrackballConfig) -> Result<Self> {
        let mut trackball = TrackballController::with_config(config)?;
        trackball.set_offset(cli.offset());
        trackball.on_double_click(|at| info!("Double click at {}", at));
        trackball.on_button(|from, _| debug!("Button pressed at {}", from));

        Ok(Self {
            cli,
            window: None,
            input: WinitInput::new(),
            trackball,
        })
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("Trackball")
            .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height));

        match event_loop.create_window(attributes) {
            Ok(window) => self.window = Some(Arc::new(window)),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                debug!("Model transform: {:?}", self.trackball.transform());
            }
            event => {
                if let Some(input) = self.input.translate(&event) {
                    let host = WindowHost {
                        window: &window,
                        modifiers: self.input.modifiers(),
                    };
                    self.trackball.handle_event(&host, &input);
                }
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => TrackballConfig::load(path)?,
        None => TrackballConfig::default(),
    };

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(cli, config)?;

    info!("Trackball - drag to rotate, Ctrl/Shift/Alt to pan XY/pan Z/scale, Home to reset, Escape to quit");
    event_loop.run_app(&mut app).context("Event loop terminated")?;

    Ok(())
}
