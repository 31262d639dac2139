mod color;
mod coord;
mod mapper;
mod pixel;

pub use color::{hsv_to_rgb, Rgb};
pub use coord::Coord;
pub use mapper::CoordinateMapper;
pub use pixel::Pixel;
