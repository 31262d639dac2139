//! Scenes drawn by the plot-surface binary.

mod field;
mod function;
mod layered;
mod markers;

pub use field::ScalarField;
pub use function::FunctionPlot;
pub use layered::Layered;
pub use markers::PointerMarkers;

use clap::ValueEnum;

use crate::config::PlotConfig;
use crate::core::{RenderingSurface, Scene};
use crate::error::Result;
use crate::math::Coord;

/// Visible window a scene installs when configured
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub center: Coord,
    pub span_x: f64,
    pub span_y: f64,
}

impl View {
    pub const fn new(center: Coord, span_x: f64, span_y: f64) -> Self {
        Self { center, span_x, span_y }
    }

    pub fn from_config(config: &PlotConfig) -> Self {
        Self::new(config.center(), config.span_x, config.span_y)
    }

    pub fn apply(&self, surface: &mut RenderingSurface) -> Result<()> {
        surface.configure(self.center, self.span_x, self.span_y)
    }
}

/// Scene selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Sampled curve y = sin(x)
    Function,
    /// Distance rings colored by the configured palette
    Field,
    /// Last pointer press and release
    Markers,
    /// Curve with pointer markers on top
    Overlay,
}

impl SceneKind {
    pub fn build(self, config: &PlotConfig) -> Box<dyn Scene> {
        let view = View::from_config(config);
        match self {
            SceneKind::Function => Box::new(FunctionPlot::new("sin(x)", f64::sin, view)),
            SceneKind::Field => Box::new(ScalarField::new(config.palette.build(), view)),
            SceneKind::Markers => Box::new(PointerMarkers::new(view)),
            SceneKind::Overlay => Box::new(
                Layered::new("sin(x) with markers")
                    .with_scene(Box::new(FunctionPlot::new("sin(x)", f64::sin, view)))
                    .with_scene(Box::new(PointerMarkers::new(view))),
            ),
        }
    }
}
