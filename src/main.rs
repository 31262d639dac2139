use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::WindowId,
};

use plot_surface::cli::Cli;
use plot_surface::config::PlotConfig;
use plot_surface::core::{InputAdapter, InputEvent, Key, RenderingSurface, Scene, SurfaceRenderer};
use plot_surface::display::Display;
use plot_surface::math::Pixel;
use plot_surface::window::HostWindow;

// === Constants ===

/// Fraction of the visible span moved per arrow key
const PAN_STEP: f64 = 0.1;
const ZOOM_IN_FACTOR: f64 = 0.8;
const ZOOM_OUT_FACTOR: f64 = 1.25;

struct App {
    config: PlotConfig,
    scene: Box<dyn Scene>,
    window: Option<HostWindow>,
    display: Option<Display<SurfaceRenderer>>,
    input: InputAdapter,
}

impl App {
    fn new(config: PlotConfig, scene: Box<dyn Scene>) -> Self {
        Self {
            config,
            scene,
            window: None,
            display: None,
            input: InputAdapter::new(),
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = HostWindow::attributes(self.scene.name(), self.config.size());
        let window = HostWindow::new(Arc::new(event_loop.create_window(attributes)?));

        let renderer = pollster::block_on(SurfaceRenderer::new(window.inner().clone()))?;

        let mut surface = RenderingSurface::new(window.size()).with_options(self.config.render_options());
        self.scene.configure(&mut surface)?;
        info!("scene '{}' ready", self.scene.name());

        window.request_redraw();
        self.display = Some(Display::new(surface, renderer));
        self.window = Some(window);
        Ok(())
    }

    fn handle_input(&mut self, event: InputEvent, event_loop: &ActiveEventLoop) {
        let Some(display) = self.display.as_mut() else {
            return;
        };

        match event {
            InputEvent::PointerPressed(pixel) => {
                display.surface_mut().on_pointer_press(pixel);
                log_pointer("press", display.surface(), pixel);
            }
            InputEvent::PointerReleased(pixel) => {
                display.surface_mut().on_pointer_release(pixel);
                log_pointer("release", display.surface(), pixel);
            }
            InputEvent::Resized(size) => display.resize(size),
            InputEvent::Key(Key::Escape) => {
                event_loop.exit();
                return;
            }
            InputEvent::Key(key) => {
                if let Err(e) = apply_view_key(display.surface_mut(), key) {
                    warn!("ignoring {:?}: {}", key, e);
                }
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn redraw(&mut self) {
        if let Some(display) = self.display.as_mut() {
            if let Err(e) = display.draw(self.scene.as_ref()) {
                error!("render error: {:#}", e);
            }
        }
    }
}

fn log_pointer(action: &str, surface: &RenderingSurface, pixel: Pixel) {
    match surface.pixel_to_coord(pixel) {
        Ok(coord) => info!("{} at pixel ({}, {}) -> ({:.3}, {:.3})", action, pixel.w, pixel.h, coord.x, coord.y),
        Err(e) => warn!("{} at pixel ({}, {}): {}", action, pixel.w, pixel.h, e),
    }
}

/// Pan, zoom and decoration toggles. A rejected mapping keeps the old one.
fn apply_view_key(surface: &mut RenderingSurface, key: Key) -> plot_surface::Result<()> {
    let mapper = *surface.mapper()?;
    let updated = match key {
        Key::PanLeft => mapper.panned(-PAN_STEP, 0.0)?,
        Key::PanRight => mapper.panned(PAN_STEP, 0.0)?,
        Key::PanUp => mapper.panned(0.0, PAN_STEP)?,
        Key::PanDown => mapper.panned(0.0, -PAN_STEP)?,
        Key::ZoomIn => mapper.zoomed(ZOOM_IN_FACTOR)?,
        Key::ZoomOut => mapper.zoomed(ZOOM_OUT_FACTOR)?,
        Key::ToggleGrid => {
            let options = surface.options_mut();
            options.show_grid = !options.show_grid;
            return Ok(());
        }
        Key::ToggleAxis => {
            let options = surface.options_mut();
            options.show_axis = !options.show_axis;
            return Ok(());
        }
        Key::Escape => return Ok(()),
    };
    surface.set_mapper(updated);
    Ok(())
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            error!("failed to start: {:#}", e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => self.redraw(),
            event => {
                if let Some(input) = self.input.process_event(&event) {
                    self.handle_input(input, event_loop);
                }
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = PlotConfig::from_cli(&cli)?;
    let scene = cli.scene.build(&config);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, scene);

    info!("plot-surface - arrows pan, +/- zoom, G/A toggle grid/axis, Escape quits");
    event_loop.run_app(&mut app)?;

    Ok(())
}
