//! Indexed color palettes.

pub mod factory;

pub use factory::PaletteKind;

use crate::error::{PlotError, Result};
use crate::math::Rgb;

/// Ordered RGB entries with bounds-checked and wrap-around lookup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Palette of `size` black entries.
    pub fn new(size: usize) -> Self {
        Self {
            colors: vec![Rgb::BLACK; size],
        }
    }

    pub fn from_colors(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    /// Replace every entry at once; the palette takes the new length.
    pub fn replace(&mut self, colors: Vec<Rgb>) {
        self.colors = colors;
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Components are stored as given, without range checks.
    pub fn set_color(&mut self, index: usize, r: f32, g: f32, b: f32) -> Result<()> {
        let len = self.colors.len();
        let slot = self
            .colors
            .get_mut(index)
            .ok_or(PlotError::IndexOutOfRange { index: index as i64, len })?;
        *slot = Rgb::new(r, g, b);
        Ok(())
    }

    pub fn get_color(&self, index: usize) -> Result<Rgb> {
        self.colors
            .get(index)
            .copied()
            .ok_or(PlotError::IndexOutOfRange {
                index: index as i64,
                len: self.colors.len(),
            })
    }

    /// Lookup with the index reduced by Euclidean modulo, so any integer
    /// (negative included) selects an entry. An empty palette yields black.
    pub fn get_color_mod(&self, index: i64) -> Rgb {
        if self.colors.is_empty() {
            return Rgb::BLACK;
        }
        let wrapped = index.rem_euclid(self.colors.len() as i64) as usize;
        self.colors[wrapped]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_palette_is_black() {
        let palette = Palette::new(4);
        assert_eq!(palette.len(), 4);
        assert!(palette.colors().iter().all(|c| *c == Rgb::BLACK));
    }

    #[test]
    fn test_set_and_get() {
        let mut palette = Palette::new(3);
        palette.set_color(1, 0.2, 0.4, 0.6).unwrap();
        assert_eq!(palette.get_color(1).unwrap(), Rgb::new(0.2, 0.4, 0.6));
        assert_eq!(palette.get_color(0).unwrap(), Rgb::BLACK);
    }

    #[test]
    fn test_components_are_not_range_checked() {
        let mut palette = Palette::new(1);
        palette.set_color(0, 2.0, -1.0, 0.5).unwrap();
        assert_eq!(palette.get_color(0).unwrap(), Rgb::new(2.0, -1.0, 0.5));
    }

    #[test]
    fn test_out_of_range_access_fails() {
        let mut palette = Palette::new(3);
        assert_eq!(
            palette.get_color(3),
            Err(PlotError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            palette.set_color(7, 1.0, 1.0, 1.0),
            Err(PlotError::IndexOutOfRange { index: 7, len: 3 })
        );
    }

    #[test]
    fn test_get_color_mod_wraps_negative() {
        let palette = Palette::from_colors((0..10).map(|i| Rgb::new(i as f32, 0.0, 0.0)).collect());
        assert_eq!(palette.get_color_mod(-1).r, 9.0);
        assert_eq!(palette.get_color_mod(-10).r, 0.0);
        assert_eq!(palette.get_color_mod(23).r, 3.0);
    }

    #[test]
    fn test_get_color_mod_on_empty_palette() {
        assert_eq!(Palette::default().get_color_mod(5), Rgb::BLACK);
    }

    #[test]
    fn test_replace() {
        let mut palette = Palette::new(2);
        palette.replace(vec![Rgb::WHITE; 5]);
        assert_eq!(palette.len(), 5);
        assert_eq!(palette.get_color(4).unwrap(), Rgb::WHITE);
    }
}
