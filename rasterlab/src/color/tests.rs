use std::str::FromStr;

use common::float_ext::FloatExt;
use strum::IntoEnumIterator;

use crate::prelude::*;

fn assert_lab_near(actual: Lab, expected: Lab, tolerance: f64) {
    assert!(
        actual.l.within(expected.l, tolerance)
            && actual.a.within(expected.a, tolerance)
            && actual.b.within(expected.b, tolerance),
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

fn channel_distance(a: Rgb, b: Rgb) -> u8 {
    [(a.r, b.r), (a.g, b.g), (a.b, b.b)]
        .iter()
        .map(|(x, y)| x.abs_diff(*y))
        .max()
        .unwrap()
}

// =============================================================================
// RGB -> Lab
// =============================================================================

#[test]
fn black_and_white_lightness() {
    assert_lab_near(rgb_to_lab(0, 0, 0), Lab::new(0.0, 0.0, 0.0), 1e-9);

    let white = rgb_to_lab(255, 255, 255);
    assert!(white.l.within(100.0, 1e-3), "L = {}", white.l);
    assert!(white.a.abs() < 0.05 && white.b.abs() < 0.05, "{:?}", white);
}

#[test]
fn primary_colors_match_reference_values() {
    assert_lab_near(rgb_to_lab(255, 0, 0), Lab::new(53.24, 80.09, 67.20), 0.05);
    assert_lab_near(rgb_to_lab(0, 255, 0), Lab::new(87.73, -86.18, 83.18), 0.05);
    assert_lab_near(rgb_to_lab(0, 0, 255), Lab::new(32.30, 79.19, -107.86), 0.05);
}

#[test]
fn grays_are_achromatic() {
    for v in [1u8, 10, 64, 128, 200, 254] {
        let lab = rgb_to_lab(v, v, v);
        assert!(lab.a.abs() < 0.05, "a = {} for gray {}", lab.a, v);
        assert!(lab.b.abs() < 0.05, "b = {} for gray {}", lab.b, v);
    }
}

#[test]
fn lightness_is_monotonic_in_gray() {
    let mut previous = -1.0;
    for v in 0..=255u8 {
        let l = rgb_to_lab(v, v, v).l;
        assert!(l > previous, "L not increasing at {}", v);
        previous = l;
    }
}

// =============================================================================
// Lab -> RGB
// =============================================================================

#[test]
fn round_trip_is_within_one_step() {
    for r in (0..=255u16).step_by(5) {
        for g in (0..=255u16).step_by(5) {
            for b in (0..=255u16).step_by(5) {
                let rgb = Rgb::new(r as u8, g as u8, b as u8);
                let lab = rgb.to_lab();
                let back = lab_to_rgb(lab.l, lab.a, lab.b);
                assert!(
                    channel_distance(rgb, back) <= 1,
                    "{} -> {} -> {}",
                    rgb,
                    lab,
                    back
                );
            }
        }
    }
}

#[test]
fn round_trip_all_grays() {
    for v in 0..=255u8 {
        let rgb = Rgb::new(v, v, v);
        assert!(channel_distance(rgb, Rgb::from(Lab::from(rgb))) <= 1);
    }
}

#[test]
fn out_of_gamut_lab_is_clamped() {
    assert_eq!(lab_to_rgb(150.0, 0.0, 0.0), Rgb::WHITE);
    assert_eq!(lab_to_rgb(-20.0, 0.0, 0.0), Rgb::BLACK);

    let saturated = lab_to_rgb(50.0, 127.0, 127.0);
    assert_eq!(saturated.r, 255);
}

#[test]
fn xyz_stages_invert_each_other() {
    let xyz = linear_rgb_to_xyz([20.0, 50.0, 80.0]);
    let rgb = xyz_to_linear_rgb(xyz);
    for (actual, expected) in rgb.iter().zip([20.0, 50.0, 80.0]) {
        assert!(actual.within(expected, 0.05), "{} vs {}", actual, expected);
    }

    let lab = xyz_to_lab(D65_WHITE);
    assert!(lab.l.approximately_eq(100.0));
    let white = lab_to_xyz(lab);
    for (actual, expected) in white.iter().zip(D65_WHITE) {
        assert!(actual.within(expected, 1e-9));
    }
}

#[test]
fn srgb_companding_inverts() {
    for i in 0..=100 {
        let c = i as f64 / 100.0;
        assert!(linear_to_srgb(srgb_to_linear(c)).within(c, 1e-9), "c = {}", c);
    }
}

// =============================================================================
// Pixel values
// =============================================================================

#[test]
fn pixel_value_conversions_round_to_nearest() {
    assert_eq!(PixelValue::Normalized(0.5).to_u8(), 128);
    assert_eq!(PixelValue::Normalized(0.6).to_u8(), 153);
    assert_eq!(PixelValue::EightBit(153).to_f64(), 0.6);
    assert_eq!(PixelValue::from(255).to_f64(), 1.0);
}

#[test]
fn pixel_value_range_is_checked() {
    assert!(PixelValue::normalized(1.0).is_ok());
    assert!(matches!(PixelValue::normalized(1.01), Err(Error::Range(_))));
    assert!(matches!(PixelValue::normalized(-0.1), Err(Error::Range(_))));
    assert!(matches!(PixelValue::normalized(f64::NAN), Err(Error::Range(_))));
    assert!(matches!(PixelValue::eight_bit(256), Err(Error::Range(_))));
    assert!(matches!(PixelValue::eight_bit(-1), Err(Error::Range(_))));
}

#[test]
fn rgb_from_normalized_values() {
    let rgb = Rgb::from_normalized(1.0, 0.6, 0.0).unwrap();
    assert_eq!(rgb, Rgb::new(255, 153, 0));
    assert!(matches!(
        Rgb::from_normalized(1.5, 0.0, 0.0),
        Err(Error::Range(_))
    ));
}

#[test]
fn rgb_rejects_mixed_representations() {
    let result = Rgb::from_values([
        PixelValue::EightBit(10),
        PixelValue::Normalized(0.5),
        PixelValue::EightBit(10),
    ]);
    assert!(matches!(result, Err(Error::Range(_))));
}

// =============================================================================
// Text format
// =============================================================================

#[test]
fn parse_rgb() {
    assert_eq!(Rgb::from_str("rgb(145, 217, 3)").unwrap(), Rgb::new(145, 217, 3));
    assert_eq!("RGB(1,2,3)".parse::<Rgb>().unwrap(), Rgb::new(1, 2, 3));
    assert_eq!(" Rgb( 0 , 0 , 255 ) ".parse::<Rgb>().unwrap(), Rgb::BLUE);
}

#[test]
fn parse_lab() {
    let lab: Lab = "lab(50, -20, 30)".parse().unwrap();
    assert_eq!(lab, Lab::new(50.0, -20.0, 30.0));
    assert!("LAB(0,0,0)".parse::<Lab>().is_ok());
}

#[test]
fn parse_rejects_missing_envelope() {
    for text in ["145, 217, 3", "rgb 145, 217, 3", "rgb(145, 217, 3", "rgb145, 217, 3)", ""] {
        assert!(
            matches!(text.parse::<Rgb>(), Err(Error::Parse(_))),
            "accepted {:?}",
            text
        );
    }
}

#[test]
fn parse_rejects_wrong_model() {
    assert!(matches!("lab(1, 2, 3)".parse::<Rgb>(), Err(Error::Parse(_))));
    assert!(matches!("rgb(1, 2, 3)".parse::<Lab>(), Err(Error::Parse(_))));
    assert!(matches!("hsv(1, 2, 3)".parse::<ColorValue>(), Err(Error::Parse(_))));
}

#[test]
fn parse_rejects_bad_components() {
    assert!(matches!("rgb(1, 2)".parse::<Rgb>(), Err(Error::Parse(_))));
    assert!(matches!("rgb(1, 2, 3, 4)".parse::<Rgb>(), Err(Error::Parse(_))));
    assert!(matches!("rgb(1, x, 3)".parse::<Rgb>(), Err(Error::Parse(_))));
    assert!(matches!("rgb(0.5, 0, 0)".parse::<Rgb>(), Err(Error::Parse(_))));
}

#[test]
fn parse_rejects_out_of_range_rgb() {
    assert!(matches!("rgb(256, 0, 0)".parse::<Rgb>(), Err(Error::Range(_))));
    assert!(matches!("rgb(0, -1, 0)".parse::<Rgb>(), Err(Error::Range(_))));
}

#[test]
fn display_forms() {
    assert_eq!(Rgb::new(1, 2, 3).to_string(), "rgb(1, 2, 3)");
    assert_eq!(Lab::new(50.0, -1.5, 2.25).to_string(), "Lab(50.00, -1.50, 2.25)");
}

#[test]
fn color_value_converts_between_models() {
    let value: ColorValue = "rgb(255, 0, 0)".parse().unwrap();
    assert_eq!(value.model(), ColorModel::Rgb);

    let ColorValue::Lab(lab) = value.convert(ColorModel::Lab) else {
        panic!("expected Lab");
    };
    assert!(lab.l.within(53.24, 0.05));

    let back = ColorValue::Lab(lab).convert(ColorModel::Rgb);
    assert_eq!(back, ColorValue::Rgb(Rgb::RED));
    assert_eq!(value.convert(ColorModel::Rgb), value);
}

#[test]
fn every_model_parses_its_own_tag() {
    for model in ColorModel::iter() {
        let text = format!("{}(10, 20, 30)", model.to_string().to_uppercase());
        let value: ColorValue = text.parse().unwrap();
        assert_eq!(value.model(), model);
    }
}
