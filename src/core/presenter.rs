use super::canvas::Canvas;
use super::surface_size::SurfaceSize;

/// Presenter - shows a rasterized canvas in the host window
pub trait Presenter {
    /// Display the canvas pixels
    fn present(&mut self, canvas: &Canvas) -> anyhow::Result<()>;

    /// Follow a change of the host surface size
    fn resize(&mut self, size: SurfaceSize);
}
