use crate::core::{DrawingContext, RenderingSurface, Scene};
use crate::error::Result;
use crate::math::{Coord, Rgb};

use super::View;

const CURVE_COLOR: Rgb = Rgb::new(0.0, 0.0, 0.8);

/// Plots `y = f(x)` as point markers, one every `step` pixel columns.
pub struct FunctionPlot {
    name: String,
    f: fn(f64) -> f64,
    view: View,
    step: usize,
}

impl FunctionPlot {
    pub fn new(name: impl Into<String>, f: fn(f64) -> f64, view: View) -> Self {
        Self {
            name: name.into(),
            f,
            view,
            step: 4,
        }
    }

    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step.max(1);
        self
    }
}

impl Scene for FunctionPlot {
    fn configure(&mut self, surface: &mut RenderingSurface) -> Result<()> {
        self.view.apply(surface)
    }

    fn draw(&self, surface: &RenderingSurface, ctx: &mut dyn DrawingContext) -> Result<()> {
        let (xs, _) = surface.pixel_coordinate_axes()?;
        for x in xs.into_iter().step_by(self.step) {
            let y = (self.f)(x);
            // poles and domain holes leave gaps
            if !y.is_finite() {
                continue;
            }
            let pixel = surface.coord_to_pixel(Coord::new(x, y))?;
            surface.draw_point_colored(ctx, pixel, CURVE_COLOR);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
