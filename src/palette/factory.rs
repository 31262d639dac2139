//! Ready-made palettes.

use serde::{Deserialize, Serialize};

use super::Palette;
use crate::math::{hsv_to_rgb, Rgb};

/// Entries of [`spectrum`]: black through blues, pale cyan and yellow,
/// orange, then browns.
const SPECTRUM: [[f32; 3]; 10] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.0, 0.5],
    [0.0, 0.0, 1.0],
    [0.0, 0.5, 1.0],
    [0.8, 1.0, 1.0],
    [1.0, 1.0, 0.6],
    [1.0, 1.0, 0.0],
    [1.0, 0.6, 0.0],
    [0.6, 0.3, 0.0],
    [0.3, 0.1, 0.0],
];

/// Linear gray ramp: entry `i` has every channel equal to `i / n`.
pub fn grayscale(n: usize) -> Palette {
    Palette::from_colors(
        (0..n)
            .map(|i| {
                let v = i as f32 / n as f32;
                Rgb::new(v, v, v)
            })
            .collect(),
    )
}

/// Fixed ten-entry ramp for scalar fields such as iteration counts.
pub fn spectrum() -> Palette {
    Palette::from_colors(SPECTRUM.iter().copied().map(Rgb::from).collect())
}

/// `n` fully saturated hues evenly spaced around the color wheel.
pub fn rainbow(n: usize) -> Palette {
    Palette::from_colors(
        (0..n)
            .map(|i| hsv_to_rgb(i as f32 / n as f32, 1.0, 1.0))
            .collect(),
    )
}

/// Palette selection as it appears in configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaletteKind {
    Grayscale { size: usize },
    #[default]
    Spectrum,
    Rainbow { size: usize },
}

impl PaletteKind {
    pub fn build(self) -> Palette {
        match self {
            PaletteKind::Grayscale { size } => grayscale(size),
            PaletteKind::Spectrum => spectrum(),
            PaletteKind::Rainbow { size } => rainbow(size),
        }
    }
}
