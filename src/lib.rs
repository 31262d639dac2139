pub mod cli;
pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod math;
pub mod palette;
pub mod scenes;
pub mod window;

pub use error::{PlotError, Result};
