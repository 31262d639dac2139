use glam::DVec2;

use super::{Coord, Pixel};
use crate::core::SurfaceSize;
use crate::error::{PlotError, Result};

/// Affine mapping between pixel space and coordinate space.
///
/// The pixel at the middle of the surface maps to `center`, and the full
/// width/height of the surface covers `span_x`/`span_y` coordinate units.
/// Surface dimensions are passed on every call and never cached, so a
/// resized surface maps differently on the very next call.
///
/// With `center = (0, 0)` and both spans equal to 2, the corners map as:
///
/// ```text
///  (-1, 1)      (1, 1)
///         +----+
///         |    |
///         +----+
/// (-1, -1)      (1, -1)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    center: DVec2,
    span: DVec2,
}

impl CoordinateMapper {
    /// Spans must be strictly positive and the center finite.
    pub fn new(center: Coord, span_x: f64, span_y: f64) -> Result<Self> {
        check_positive("span_x", span_x)?;
        check_positive("span_y", span_y)?;
        if !center.is_finite() {
            let value = if center.x.is_finite() { center.y } else { center.x };
            return Err(PlotError::InvalidConfiguration { field: "center", value });
        }

        Ok(Self {
            center: center.as_dvec2(),
            span: DVec2::new(span_x, span_y),
        })
    }

    pub fn center(&self) -> Coord {
        self.center.into()
    }

    pub fn span_x(&self) -> f64 {
        self.span.x
    }

    pub fn span_y(&self) -> f64 {
        self.span.y
    }

    /// Lower-left and upper-right corners of the visible window.
    pub fn bounds(&self) -> (Coord, Coord) {
        let half = self.span * 0.5;
        ((self.center - half).into(), (self.center + half).into())
    }

    pub fn coord_to_pixel(&self, coord: Coord, size: SurfaceSize) -> Result<Pixel> {
        let extent = surface_extent(size)?;
        let half = self.span * 0.5;

        let w = (coord.x - self.center.x + half.x) / self.span.x * extent.x;
        let h = (self.center.y - coord.y + half.y) / self.span.y * extent.y;

        Ok(Pixel::new(w.round() as i32, h.round() as i32))
    }

    pub fn pixel_to_coord(&self, pixel: Pixel, size: SurfaceSize) -> Result<Coord> {
        let extent = surface_extent(size)?;
        let half = self.span * 0.5;

        let x = f64::from(pixel.w) / extent.x * self.span.x - half.x + self.center.x;
        let y = -f64::from(pixel.h) / extent.y * self.span.y + half.y + self.center.y;

        Ok(Coord::new(x, y))
    }

    /// Shift the center by fractions of the current spans.
    pub fn panned(&self, dx: f64, dy: f64) -> Result<Self> {
        let offset = DVec2::new(dx, dy) * self.span;
        Self::new((self.center + offset).into(), self.span.x, self.span.y)
    }

    /// Scale both spans around the current center; `factor < 1` zooms in.
    pub fn zoomed(&self, factor: f64) -> Result<Self> {
        check_positive("zoom_factor", factor)?;
        let span = self.span * factor;
        Self::new(self.center.into(), span.x, span.y)
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PlotError::InvalidConfiguration { field, value })
    }
}

fn surface_extent(size: SurfaceSize) -> Result<DVec2> {
    if size.is_empty() {
        return Err(PlotError::InvalidSurfaceSize {
            width: size.width,
            height: size.height,
        });
    }
    Ok(DVec2::new(f64::from(size.width), f64::from(size.height)))
}
