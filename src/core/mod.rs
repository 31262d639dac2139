pub mod canvas;
pub mod context;
pub mod input_adapter;
pub mod presenter;
pub mod surface;
pub mod surface_renderer;
pub mod surface_size;

pub use canvas::{Canvas, DrawOp};
pub use context::DrawingContext;
pub use input_adapter::{InputAdapter, InputEvent, Key};
pub use presenter::Presenter;
pub use surface::{RenderOptions, RenderingSurface, Scene, DEFAULT_POINT_SIZE};
pub use surface_renderer::SurfaceRenderer;
pub use surface_size::SurfaceSize;
