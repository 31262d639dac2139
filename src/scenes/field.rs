use crate::core::{DrawingContext, RenderingSurface, Scene};
use crate::error::Result;
use crate::palette::Palette;

use super::View;

/// Concentric rings around the origin, one palette entry per ring.
///
/// Ring indices grow without bound, so colors come from the modular lookup.
pub struct ScalarField {
    palette: Palette,
    view: View,
    rings_per_unit: f64,
}

impl ScalarField {
    pub fn new(palette: Palette, view: View) -> Self {
        Self {
            palette,
            view,
            rings_per_unit: 2.0,
        }
    }

    pub fn with_rings_per_unit(mut self, rings: f64) -> Self {
        self.rings_per_unit = rings;
        self
    }

    fn ring(&self, x: f64, y: f64) -> i64 {
        ((x * x + y * y).sqrt() * self.rings_per_unit).floor() as i64
    }

    fn fill_run(&self, ctx: &mut dyn DrawingContext, ring: i64, start: usize, end: usize, row: usize) {
        ctx.set_color(self.palette.get_color_mod(ring));
        ctx.fill_rect(start as i32, row as i32, (end - start) as u32, 1);
    }
}

impl Scene for ScalarField {
    fn configure(&mut self, surface: &mut RenderingSurface) -> Result<()> {
        self.view.apply(surface)
    }

    fn draw(&self, surface: &RenderingSurface, ctx: &mut dyn DrawingContext) -> Result<()> {
        let (xs, ys) = surface.pixel_coordinate_axes()?;

        for (h, y) in ys.iter().enumerate() {
            // one rectangle per run of equal ring index along the row
            let mut run_start = 0;
            let mut run_ring = None;
            for (w, x) in xs.iter().enumerate() {
                let ring = self.ring(*x, *y);
                match run_ring {
                    Some(current) if current == ring => {}
                    Some(current) => {
                        self.fill_run(ctx, current, run_start, w, h);
                        run_start = w;
                        run_ring = Some(ring);
                    }
                    None => run_ring = Some(ring),
                }
            }
            if let Some(current) = run_ring {
                self.fill_run(ctx, current, run_start, xs.len(), h);
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "Scalar field"
    }
}
