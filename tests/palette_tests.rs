use plot_surface::math::Rgb;
use plot_surface::palette::factory::{grayscale, rainbow, spectrum};
use plot_surface::palette::{Palette, PaletteKind};
use plot_surface::PlotError;

#[test]
fn test_modular_lookup_is_periodic() {
    let palette = spectrum();
    let size = palette.len() as i64;

    for i in -25..25 {
        for k in -3..=3 {
            assert_eq!(palette.get_color_mod(i), palette.get_color_mod(i + k * size));
        }
    }
}

#[test]
fn test_modular_lookup_negative_index() {
    let palette = spectrum();
    assert_eq!(palette.len(), 10);
    assert_eq!(palette.get_color_mod(-1), palette.get_color(9).unwrap());
    assert_eq!(palette.get_color_mod(i64::MIN), palette.get_color_mod(i64::MIN % 10 + 10));
}

#[test]
fn test_grayscale_four() {
    let palette = grayscale(4);
    let expected = [0.0, 0.25, 0.5, 0.75];

    for (i, value) in expected.iter().enumerate() {
        let color = palette.get_color(i).unwrap();
        assert_eq!(color, Rgb::new(*value, *value, *value));
    }
}

#[test]
fn test_unfilled_entries_are_black() {
    let mut palette = Palette::new(3);
    palette.set_color(1, 0.2, 0.4, 0.6).unwrap();

    assert_eq!(palette.get_color(0).unwrap(), Rgb::BLACK);
    assert_eq!(palette.get_color(1).unwrap(), Rgb::new(0.2, 0.4, 0.6));
    assert_eq!(palette.get_color(2).unwrap(), Rgb::BLACK);
}

#[test]
fn test_out_of_range_is_an_error_not_a_clamp() {
    let mut palette = Palette::new(3);
    assert_eq!(palette.get_color(3).unwrap_err(), PlotError::IndexOutOfRange { index: 3, len: 3 });
    assert!(palette.set_color(7, 1.0, 1.0, 1.0).is_err());
    // the modular accessor still succeeds
    assert_eq!(palette.get_color_mod(3), Rgb::BLACK);
}

#[test]
fn test_config_kinds_build_expected_sizes() {
    assert_eq!(PaletteKind::Spectrum.build().len(), 10);
    assert_eq!(PaletteKind::Grayscale { size: 16 }.build().len(), 16);
    assert_eq!(PaletteKind::Rainbow { size: 6 }.build(), rainbow(6));
}
