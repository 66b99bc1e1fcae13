use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use merry_go_round::cli::Cli;
use merry_go_round::config::SceneConfig;
use merry_go_round::core::{Clock, WinitInput};
use merry_go_round::input::Control;
use merry_go_round::renderer::LogBackend;
use merry_go_round::simulation::Simulation;
use merry_go_round::traits::RenderBackend;

// === Constants ===

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 800;
const WINDOW_NOTICE: &str = "Merry-Go-Round - the window collects input only, frames go to LogBackend \
     (RUST_LOG=trace to see them). C cycles camera, 1/2/3 speed, P pause, I invert, Q to quit";

struct App {
    window: Option<Arc<Window>>,
    simulation: Simulation,
    backend: LogBackend,
    input: WinitInput,
    clock: Clock,
}

impl App {
    fn new(simulation: Simulation) -> Self {
        Self {
            window: None,
            simulation,
            backend: LogBackend::new(),
            input: WinitInput::new(),
            clock: Clock::new(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Merry-Go-Round")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.clock.reset();
            self.window = Some(window);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                let delta = self.clock.tick_ms();
                let frame = self.simulation.tick(delta);
                if let Err(e) = self.backend.submit(&frame) {
                    error!("Render error: {}", e);
                }
            }
            other => {
                if let Some(input) = self.input.process_event(&other) {
                    if self.simulation.handle(input) == Control::Quit {
                        event_loop.exit();
                    }
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn run_headless(mut simulation: Simulation, cli: &Cli) -> Result<()> {
    let mut backend = LogBackend::new();
    for _ in 0..cli.frames {
        let frame = simulation.tick(cli.delta_ms);
        backend
            .submit(&frame)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .context("submitting headless frame")?;
        if cli.report > 0 && frame.frame.number % cli.report == 0 {
            let report = serde_json::to_string(&simulation.report())
                .context("serializing frame report")?;
            println!("{report}");
        }
    }
    info!(
        "headless run finished after {} frames",
        backend.submitted()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("loading scene config {}", path.display()))?,
        None => SceneConfig::default(),
    };

    if cli.dump_config {
        println!("{}", config.to_json().context("serializing scene config")?);
        return Ok(());
    }

    let simulation = Simulation::new(&config).context("building scene")?;

    if cli.headless {
        return run_headless(simulation, &cli);
    }

    let event_loop = EventLoop::new().context("creating event loop")?;
    let mut app = App::new(simulation);

    info!("{WINDOW_NOTICE}");
    event_loop.run_app(&mut app).context("running event loop")?;

    Ok(())
}
