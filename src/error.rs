//! Error types for mapping, rendering and palette access.

use thiserror::Error;

/// Errors raised by the plotting core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    #[error("invalid configuration: {field} must be positive and finite, got {value}")]
    InvalidConfiguration { field: &'static str, value: f64 },

    #[error("invalid surface size {width}x{height}: both dimensions must be non-zero")]
    InvalidSurfaceSize { width: u32, height: u32 },

    #[error("palette index {index} out of range for a palette of {len} colors")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("surface has not been configured")]
    Unconfigured,
}

pub type Result<T> = std::result::Result<T, PlotError>;
