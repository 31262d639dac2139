use log::trace;

use crate::core::{DrawingContext, RenderingSurface, Scene};
use crate::error::Result;
use crate::math::Rgb;

use super::View;

const RELEASE_COLOR: Rgb = Rgb::new(0.8, 0.0, 0.0);
const DRAG_COLOR: Rgb = Rgb::new(0.4, 0.4, 0.4);

/// Marks the last pointer press (black) and release (red), joined by a
/// thin line when both exist.
pub struct PointerMarkers {
    view: View,
}

impl PointerMarkers {
    pub fn new(view: View) -> Self {
        Self { view }
    }
}

impl Scene for PointerMarkers {
    fn configure(&mut self, surface: &mut RenderingSurface) -> Result<()> {
        self.view.apply(surface)
    }

    fn draw(&self, surface: &RenderingSurface, ctx: &mut dyn DrawingContext) -> Result<()> {
        let press = surface.last_press();
        let release = surface.last_release();

        if let (Some(from), Some(to)) = (press, release) {
            ctx.set_color(DRAG_COLOR);
            ctx.set_stroke_width(1);
            ctx.draw_line(from.w, from.h, to.w, to.h);
        }
        if let Some(pixel) = press {
            trace!("press marker at ({}, {})", pixel.w, pixel.h);
            surface.draw_point(ctx, pixel);
        }
        if let Some(pixel) = release {
            surface.draw_point_colored(ctx, pixel, RELEASE_COLOR);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "Pointer markers"
    }
}
