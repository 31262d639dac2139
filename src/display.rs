use anyhow::Result;
use log::debug;

use crate::core::{Canvas, Presenter, RenderingSurface, Scene, SurfaceSize};

/// Display combines the rendering surface and the host output
pub struct Display<P: Presenter> {
    surface: RenderingSurface,
    presenter: P,
}

impl<P: Presenter> Display<P> {
    /// Create new display with surface and presenter
    pub fn new(surface: RenderingSurface, presenter: P) -> Self {
        Self { surface, presenter }
    }

    /// Rasterize one frame of `scene` without presenting it
    pub fn render_frame(&self, scene: &dyn Scene) -> Result<Canvas> {
        let mut canvas = Canvas::new(self.surface.size());
        self.surface.render(&mut canvas, scene)?;
        Ok(canvas.execute_ops())
    }

    /// Full render cycle: surface → canvas → presenter.
    /// Zero-area surfaces (minimized windows) are skipped.
    pub fn draw(&mut self, scene: &dyn Scene) -> Result<()> {
        let size = self.surface.size();
        if size.is_empty() {
            debug!("skipping frame for empty {}x{} surface", size.width, size.height);
            return Ok(());
        }

        let canvas = self.render_frame(scene)?;
        self.presenter.present(&canvas)
    }

    /// Resize both the surface mapping and the presenter
    pub fn resize(&mut self, size: SurfaceSize) {
        self.surface.resize(size);
        self.presenter.resize(size);
    }

    pub fn surface(&self) -> &RenderingSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut RenderingSurface {
        &mut self.surface
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}
