//! Rendering surface: the coordinate mapping plus the draw primitives built on it.
//!
//! Two referentials are involved. Pixel space has its origin at the top-left
//! corner with `h` growing downward:
//!
//! ```text
//! (0,0)      (W,0)
//!      +----+
//!      |    |
//!      +----+
//! (0,H)      (W,H)
//! ```
//!
//! Coordinate space is the usual mathematical plane with `y` growing upward.
//! The middle pixel `(W/2, H/2)` maps to the configured center, and the full
//! surface covers the configured spans.

use log::{debug, warn};

use super::context::DrawingContext;
use super::surface_size::SurfaceSize;
use crate::error::{PlotError, Result};
use crate::math::{Coord, CoordinateMapper, Pixel, Rgb};

/// Default stroke width of point markers, in pixels.
pub const DEFAULT_POINT_SIZE: u32 = 5;

/// Content drawn on top of the surface's background, grid and axis.
pub trait Scene {
    /// Set up the mapping (and any precomputation) before the first render.
    fn configure(&mut self, surface: &mut RenderingSurface) -> Result<()>;

    /// Draw the scene's content; called once per render.
    fn draw(&self, surface: &RenderingSurface, ctx: &mut dyn DrawingContext) -> Result<()>;

    /// Scene name, used for window titles and logs
    fn name(&self) -> &str {
        "Scene"
    }
}

/// Which decorations `render` draws under the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub show_grid: bool,
    pub show_axis: bool,
    /// Marker stroke width used by `draw_point`
    pub point_size: u32,
    pub background: Rgb,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_axis: true,
            point_size: DEFAULT_POINT_SIZE,
            background: Rgb::WHITE,
        }
    }
}

/// Pixel surface with an explicit, validated coordinate mapping.
#[derive(Debug, Clone)]
pub struct RenderingSurface {
    size: SurfaceSize,
    mapper: Option<CoordinateMapper>,
    options: RenderOptions,
    last_press: Option<Pixel>,
    last_release: Option<Pixel>,
}

impl RenderingSurface {
    /// Unconfigured surface; `configure` must run before the first render.
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            mapper: None,
            options: RenderOptions::default(),
            last_press: None,
            last_release: None,
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the visible window. On error the previous mapping is kept.
    pub fn configure(&mut self, center: Coord, span_x: f64, span_y: f64) -> Result<()> {
        let mapper = CoordinateMapper::new(center, span_x, span_y)?;
        debug!(
            "surface configured: center=({}, {}) span=({}, {})",
            center.x, center.y, span_x, span_y
        );
        self.mapper = Some(mapper);
        Ok(())
    }

    /// Install an already validated mapping, e.g. a zoomed or panned one.
    pub fn set_mapper(&mut self, mapper: CoordinateMapper) {
        self.mapper = Some(mapper);
    }

    pub fn is_configured(&self) -> bool {
        self.mapper.is_some()
    }

    pub fn mapper(&self) -> Result<&CoordinateMapper> {
        self.mapper.as_ref().ok_or(PlotError::Unconfigured)
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        debug!("surface resized to {}x{}", size.width, size.height);
        self.size = size;
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }

    pub fn on_pointer_press(&mut self, pixel: Pixel) {
        self.last_press = Some(pixel);
    }

    pub fn on_pointer_release(&mut self, pixel: Pixel) {
        self.last_release = Some(pixel);
    }

    pub fn last_press(&self) -> Option<Pixel> {
        self.last_press
    }

    pub fn last_release(&self) -> Option<Pixel> {
        self.last_release
    }

    /// Coordinate of the last press, `None` if there was none yet.
    pub fn last_press_coord(&self) -> Result<Option<Coord>> {
        self.last_press.map(|p| self.pixel_to_coord(p)).transpose()
    }

    pub fn last_release_coord(&self) -> Result<Option<Coord>> {
        self.last_release.map(|p| self.pixel_to_coord(p)).transpose()
    }

    /// Maps with the surface size as it is right now.
    pub fn coord_to_pixel(&self, coord: Coord) -> Result<Pixel> {
        self.mapper()?.coord_to_pixel(coord, self.size)
    }

    pub fn pixel_to_coord(&self, pixel: Pixel) -> Result<Coord> {
        self.mapper()?.pixel_to_coord(pixel, self.size)
    }

    /// Coordinates of every pixel column (x) and every pixel row (y).
    pub fn pixel_coordinate_axes(&self) -> Result<(Vec<f64>, Vec<f64>)> {
        let mapper = self.mapper()?;
        let xs = (0..self.size.width as i32)
            .map(|w| mapper.pixel_to_coord(Pixel::new(w, 0), self.size).map(|c| c.x))
            .collect::<Result<Vec<_>>>()?;
        let ys = (0..self.size.height as i32)
            .map(|h| mapper.pixel_to_coord(Pixel::new(0, h), self.size).map(|c| c.y))
            .collect::<Result<Vec<_>>>()?;
        Ok((xs, ys))
    }

    /// Draw a full frame: background, grid, axis, then the scene.
    ///
    /// Nothing is drawn when the surface is unconfigured or has zero area.
    pub fn render(&self, ctx: &mut dyn DrawingContext, scene: &dyn Scene) -> Result<()> {
        self.check_drawable().inspect_err(|e| warn!("render of '{}' aborted: {}", scene.name(), e))?;

        if self.options.show_grid {
            self.draw_grid(ctx)?;
        } else {
            self.fill_background(ctx);
        }
        if self.options.show_axis {
            self.draw_axis(ctx)?;
        }
        scene.draw(self, ctx)
    }

    fn check_drawable(&self) -> Result<()> {
        self.mapper()?;
        if self.size.is_empty() {
            return Err(PlotError::InvalidSurfaceSize {
                width: self.size.width,
                height: self.size.height,
            });
        }
        Ok(())
    }

    fn fill_background(&self, ctx: &mut dyn DrawingContext) {
        ctx.set_color(self.options.background);
        ctx.fill_rect(0, 0, self.size.width, self.size.height);
    }

    /// White background with gray lines at every integer coordinate.
    ///
    /// When there are more integer lines than pixel columns (or rows), lines
    /// are thinned to an integer stride so at most one lands per pixel.
    pub fn draw_grid(&self, ctx: &mut dyn DrawingContext) -> Result<()> {
        let mapper = self.mapper()?;
        let (min, max) = mapper.bounds();
        let (min_x, max_x) = (min.x.floor(), max.x.ceil());
        let (min_y, max_y) = (min.y.floor(), max.y.ceil());

        // Line endpoints first, so a failed mapping leaves the context untouched.
        let mut lines = Vec::new();
        for x in grid_positions(min_x, max_x, self.size.width) {
            lines.push((
                self.coord_to_pixel(Coord::new(x, min_y))?,
                self.coord_to_pixel(Coord::new(x, max_y))?,
            ));
        }
        for y in grid_positions(min_y, max_y, self.size.height) {
            lines.push((
                self.coord_to_pixel(Coord::new(min_x, y))?,
                self.coord_to_pixel(Coord::new(max_x, y))?,
            ));
        }

        ctx.set_color(Rgb::WHITE);
        ctx.fill_rect(0, 0, self.size.width, self.size.height);

        ctx.set_color(Rgb::GRAY);
        ctx.set_stroke_width(1);
        for (from, to) in lines {
            ctx.draw_line(from.w, from.h, to.w, to.h);
        }
        Ok(())
    }

    /// Black x and y axes across the visible window.
    pub fn draw_axis(&self, ctx: &mut dyn DrawingContext) -> Result<()> {
        let (min, max) = self.mapper()?.bounds();

        let x1 = self.coord_to_pixel(Coord::new(min.x, 0.0))?;
        let x2 = self.coord_to_pixel(Coord::new(max.x, 0.0))?;
        let y1 = self.coord_to_pixel(Coord::new(0.0, min.y))?;
        let y2 = self.coord_to_pixel(Coord::new(0.0, max.y))?;

        ctx.set_color(Rgb::BLACK);
        ctx.set_stroke_width(1);
        ctx.draw_line(x1.w, x1.h, x2.w, x2.h);
        ctx.draw_line(y1.w, y1.h, y2.w, y2.h);
        Ok(())
    }

    /// Black dot at `pixel`: a zero-length line stroked `point_size` wide.
    pub fn draw_point(&self, ctx: &mut dyn DrawingContext, pixel: Pixel) {
        self.draw_point_colored(ctx, pixel, Rgb::BLACK);
    }

    pub fn draw_point_colored(&self, ctx: &mut dyn DrawingContext, pixel: Pixel, color: Rgb) {
        ctx.set_color(color);
        ctx.set_stroke_width(self.options.point_size);
        ctx.draw_line(pixel.w, pixel.h, pixel.w, pixel.h);
    }

    pub fn draw_coord_point(&self, ctx: &mut dyn DrawingContext, coord: Coord) -> Result<()> {
        let pixel = self.coord_to_pixel(coord)?;
        self.draw_point(ctx, pixel);
        Ok(())
    }
}

/// Integer positions `lo, lo + stride, ..` up to `hi`, with the stride chosen
/// so that no more than `pixels + 1` positions are produced.
fn grid_positions(lo: f64, hi: f64, pixels: u32) -> impl Iterator<Item = f64> {
    let (lo, hi) = (lo as i64, hi as i64);
    let count = hi.abs_diff(lo).saturating_add(1);
    let pixels = u64::from(pixels.max(1));
    let stride = if count > pixels { count.div_ceil(pixels) } else { 1 };
    let stride = i64::try_from(stride).unwrap_or(i64::MAX);

    std::iter::successors(Some(lo), move |&i| i.checked_add(stride))
        .take_while(move |&i| i <= hi)
        .map(|i| i as f64)
}
