use std::sync::Arc;

use winit::dpi::LogicalPosition;
use winit::window::{Window as WinitWindow, WindowAttributes};

use crate::core::SurfaceSize;

/// Default top-left position of a new plot window, in logical pixels
pub const DEFAULT_POSITION: (i32, i32) = (200, 50);

/// Wrapper around the winit window hosting a plot
pub struct HostWindow {
    inner: Arc<WinitWindow>,
}

impl HostWindow {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    /// Attributes for a plot window of `size` physical pixels
    pub fn attributes(title: &str, size: SurfaceSize) -> WindowAttributes {
        WinitWindow::default_attributes()
            .with_title(title)
            .with_inner_size(winit::dpi::PhysicalSize::new(size.width, size.height))
            .with_position(LogicalPosition::new(DEFAULT_POSITION.0, DEFAULT_POSITION.1))
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    /// Current drawable size in physical pixels
    pub fn size(&self) -> SurfaceSize {
        let size = self.inner.inner_size();
        SurfaceSize::new(size.width, size.height)
    }
}
