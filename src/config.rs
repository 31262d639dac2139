//! View configuration loaded from JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::core::{RenderOptions, RenderingSurface, SurfaceSize, DEFAULT_POINT_SIZE};
use crate::math::{Coord, Rgb};
use crate::palette::PaletteKind;

/// Initial surface and mapping settings.
///
/// Every field is optional in the file; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    pub center: [f64; 2],
    pub span_x: f64,
    pub span_y: f64,
    pub show_grid: bool,
    pub show_axis: bool,
    pub point_size: u32,
    pub palette: PaletteKind,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            center: [0.0, 0.0],
            span_x: 10.0,
            span_y: 10.0,
            show_grid: true,
            show_axis: true,
            point_size: DEFAULT_POINT_SIZE,
            palette: PaletteKind::Spectrum,
        }
    }
}

impl PlotConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Config file (or defaults) with command-line overrides applied
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_overrides(cli);
        Ok(config)
    }

    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(width) = cli.width {
            self.width = width;
        }
        if let Some(height) = cli.height {
            self.height = height;
        }
        if cli.no_grid {
            self.show_grid = false;
        }
        if cli.no_axis {
            self.show_axis = false;
        }
    }

    pub fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.width, self.height)
    }

    pub fn center(&self) -> Coord {
        Coord::new(self.center[0], self.center[1])
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_grid: self.show_grid,
            show_axis: self.show_axis,
            point_size: self.point_size,
            background: Rgb::WHITE,
        }
    }

    /// Surface sized and configured from this config; fails on bad spans.
    pub fn build_surface(&self) -> crate::Result<RenderingSurface> {
        let mut surface = RenderingSurface::new(self.size()).with_options(self.render_options());
        surface.configure(self.center(), self.span_x, self.span_y)?;
        Ok(surface)
    }
}
