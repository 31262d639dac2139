use plot_surface::config::PlotConfig;
use plot_surface::core::{Canvas, DrawOp, Presenter, RenderingSurface, Scene, SurfaceSize};
use plot_surface::display::Display;
use plot_surface::math::{Coord, Pixel};
use plot_surface::scenes::{PointerMarkers, SceneKind, View};
use plot_surface::PlotError;

const WHITE: [u8; 4] = [255, 255, 255, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];
const GRAY: [u8; 4] = [128, 128, 128, 255];

/// Keeps the last presented frame
#[derive(Default)]
struct FramePresenter {
    last: Option<Canvas>,
    frames: usize,
}

impl Presenter for FramePresenter {
    fn present(&mut self, canvas: &Canvas) -> anyhow::Result<()> {
        self.last = Some(canvas.clone());
        self.frames += 1;
        Ok(())
    }

    fn resize(&mut self, _size: SurfaceSize) {}
}

fn display_for(scene: &mut dyn Scene, config: &PlotConfig) -> Display<FramePresenter> {
    let mut surface = RenderingSurface::new(config.size()).with_options(config.render_options());
    scene.configure(&mut surface).unwrap();
    Display::new(surface, FramePresenter::default())
}

fn small_config() -> PlotConfig {
    PlotConfig {
        width: 100,
        height: 100,
        span_x: 4.0,
        span_y: 4.0,
        ..PlotConfig::default()
    }
}

// ============================================================================
// Decorations
// ============================================================================

#[test]
fn test_grid_axis_and_background_pixels() {
    let config = small_config();
    let mut scene = PointerMarkers::new(View::from_config(&config));
    let mut display = display_for(&mut scene, &config);

    display.draw(&scene).unwrap();
    let frame = display.presenter().last.as_ref().unwrap();

    // axes through the middle, grid every 25 pixels, white elsewhere
    assert_eq!(frame.pixel(50, 10), Some(BLACK));
    assert_eq!(frame.pixel(10, 50), Some(BLACK));
    assert_eq!(frame.pixel(25, 10), Some(GRAY));
    assert_eq!(frame.pixel(10, 75), Some(GRAY));
    assert_eq!(frame.pixel(10, 10), Some(WHITE));
}

#[test]
fn test_hidden_decorations_leave_background() {
    let config = PlotConfig {
        show_grid: false,
        show_axis: false,
        ..small_config()
    };
    let mut scene = PointerMarkers::new(View::from_config(&config));
    let display = display_for(&mut scene, &config);

    let frame = display.render_frame(&scene).unwrap();
    assert!(frame.pixels().chunks_exact(4).all(|px| px == WHITE));
}

// ============================================================================
// Pointer markers
// ============================================================================

#[test]
fn test_press_marker_is_a_disc() {
    let config = PlotConfig {
        show_grid: false,
        show_axis: false,
        ..small_config()
    };
    let mut scene = PointerMarkers::new(View::from_config(&config));
    let mut display = display_for(&mut scene, &config);
    display.surface_mut().on_pointer_press(Pixel::new(30, 70));

    let frame = display.render_frame(&scene).unwrap();
    assert_eq!(frame.pixel(30, 70), Some(BLACK));
    assert_eq!(frame.pixel(32, 70), Some(BLACK));
    assert_eq!(frame.pixel(30, 73), Some(WHITE));

    let coord = display.surface().last_press_coord().unwrap().unwrap();
    assert!((coord.x + 0.8).abs() < 1e-12 && (coord.y + 0.8).abs() < 1e-12, "{:?}", coord);
}

// ============================================================================
// Failure modes
// ============================================================================

#[test]
fn test_render_before_configure_is_detectable() {
    let scene = PointerMarkers::new(View::new(Coord::ORIGIN, 1.0, 1.0));
    let mut display = Display::new(RenderingSurface::new(SurfaceSize::new(10, 10)), FramePresenter::default());

    let err = display.draw(&scene).unwrap_err();
    assert_eq!(err.downcast_ref::<PlotError>(), Some(&PlotError::Unconfigured));
    assert_eq!(display.presenter().frames, 0);
}

#[test]
fn test_minimized_surface_skips_frame() {
    let config = small_config();
    let mut scene = SceneKind::Function.build(&config);
    let mut display = display_for(scene.as_mut(), &config);

    display.resize(SurfaceSize::new(0, 0));
    display.draw(scene.as_ref()).unwrap();
    assert_eq!(display.presenter().frames, 0);

    display.resize(SurfaceSize::new(50, 40));
    display.draw(scene.as_ref()).unwrap();
    let frame = display.presenter().last.as_ref().unwrap();
    assert_eq!(frame.dimensions(), (50, 40));
}

#[test]
fn test_surface_errors_are_not_partially_drawn() {
    let surface = RenderingSurface::new(SurfaceSize::new(0, 20));
    let mut canvas = Canvas::new(surface.size());
    let scene = PointerMarkers::new(View::new(Coord::ORIGIN, 1.0, 1.0));

    assert!(surface.render(&mut canvas, &scene).is_err());
    assert!(canvas.ops().is_empty());
}

// ============================================================================
// Scenes from configuration
// ============================================================================

#[test]
fn test_function_scene_draws_on_top_of_decorations() {
    let config = small_config();
    let mut scene = SceneKind::Function.build(&config);
    let mut surface = RenderingSurface::new(config.size()).with_options(config.render_options());
    scene.configure(&mut surface).unwrap();

    let mut canvas = Canvas::new(surface.size());
    surface.render(&mut canvas, scene.as_ref()).unwrap();

    // grid fill first, curve markers last
    assert!(matches!(canvas.ops()[0], DrawOp::Rect { x: 0, y: 0, width: 100, height: 100, .. }));
    assert!(matches!(canvas.ops().last(), Some(DrawOp::Line { width: 5, .. })));
}

#[test]
fn test_field_scene_uses_configured_palette() {
    let config = PlotConfig {
        show_grid: false,
        show_axis: false,
        palette: plot_surface::palette::PaletteKind::Grayscale { size: 2 },
        ..small_config()
    };
    let mut scene = SceneKind::Field.build(&config);
    let display = display_for(scene.as_mut(), &config);

    let frame = display.render_frame(scene.as_ref()).unwrap();
    // middle pixel is ring 0 -> first grayscale entry
    assert_eq!(frame.pixel(50, 50), Some(BLACK));
}
