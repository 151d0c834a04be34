use crate::common::test_utils::quadrant_image;
use crate::prelude::*;

#[test]
fn new_field_has_requested_kind() {
    let field = ScalarField::new(4, 3, FieldKind::EightBit);
    assert_eq!(field.kind(), FieldKind::EightBit);
    assert_eq!((field.width(), field.height()), (4, 3));
    assert_eq!(field.value(3, 2), PixelValue::EightBit(0));
}

#[test]
fn lightness_field_from_image() {
    let field = ScalarField::from_image(
        &quadrant_image(),
        LuminanceSource::Lightness,
        FieldKind::Normalized,
    );
    let ScalarField::Normalized(plane) = &field else {
        panic!("expected a normalized field");
    };
    assert!((plane[(1, 1)] - 1.0).abs() < 1e-4);
    assert!((plane[(0, 1)] - 0.5323).abs() < 1e-3);
    assert!(plane[(0, 0)] < plane[(1, 0)]);
}

#[test]
fn luma_field_from_image() {
    let field = ScalarField::from_image(&quadrant_image(), LuminanceSource::Luma, FieldKind::EightBit);
    assert_eq!(field.value(0, 0), PixelValue::EightBit(29)); // blue
    assert_eq!(field.value(1, 0), PixelValue::EightBit(149)); // green
    assert_eq!(field.value(0, 1), PixelValue::EightBit(76)); // red
    assert_eq!(field.value(1, 1), PixelValue::EightBit(255)); // white
}

#[test]
fn luma_of_gray_is_identity() {
    for v in 0..=255u8 {
        let image = Image::new_filled(1, 1, Rgb::new(v, v, v)).unwrap();
        let field = ScalarField::from_image(&image, LuminanceSource::Luma, FieldKind::EightBit);
        assert_eq!(field.value(0, 0), PixelValue::EightBit(v));
    }
}

#[test]
fn kind_conversion_rounds_to_nearest() {
    let field = ScalarField::Normalized(Plane::from_vec(3, 1, vec![0.0, 0.5, 0.999]));
    let eight_bit = field.into_kind(FieldKind::EightBit);
    assert_eq!(eight_bit, ScalarField::EightBit(Plane::from_vec(3, 1, vec![0, 128, 255])));

    let back = eight_bit.into_kind(FieldKind::Normalized);
    assert_eq!(back.value(2, 0), PixelValue::Normalized(1.0));
}

#[test]
fn set_converts_to_field_representation() {
    let mut field = ScalarField::new(2, 1, FieldKind::EightBit);
    field.set(0, 0, PixelValue::Normalized(0.2)).unwrap();
    assert_eq!(field.value(0, 0), PixelValue::EightBit(51));

    let mut field = ScalarField::new(2, 1, FieldKind::Normalized);
    field.set(1, 0, PixelValue::EightBit(51)).unwrap();
    assert_eq!(field.value(1, 0), PixelValue::Normalized(0.2));
    assert!(matches!(
        field.set(0, 0, PixelValue::Normalized(1.5)),
        Err(Error::Range(_))
    ));
}

#[test]
fn set_rejects_out_of_range_normalized_in_both_kinds() {
    for kind in [FieldKind::EightBit, FieldKind::Normalized] {
        let mut field = ScalarField::new(2, 1, kind);
        field.set(0, 0, PixelValue::Normalized(0.4)).unwrap();
        let before = field.value(0, 0);

        for value in [1.5, -0.1, f64::NAN] {
            assert!(
                matches!(
                    field.set(0, 0, PixelValue::Normalized(value)),
                    Err(Error::Range(_))
                ),
                "{:?} {}",
                kind,
                value
            );
            assert_eq!(field.value(0, 0), before);
        }
    }
}

#[test]
fn samples_keep_field_scale() {
    let field = ScalarField::EightBit(Plane::from_vec(2, 1, vec![10, 255]));
    assert_eq!(field.to_samples().values(), &[10.0, 255.0]);
    assert_eq!(field.to_normalized_plane().values()[1], 1.0);
}

#[test]
fn apply_to_writes_gray() {
    let mut image = quadrant_image();
    image.set(Channel::Alpha, 0, 0, 9);
    let field = ScalarField::Normalized(Plane::from_vec(2, 2, vec![0.0, 0.5, 1.0, 0.2]));
    field.apply_to(&mut image).unwrap();

    assert!(image.is_grayscale());
    assert_eq!(image.color(0, 0), Rgb::BLACK);
    assert_eq!(image.color(1, 0), Rgb::new(128, 128, 128));
    assert_eq!(image.color(0, 1), Rgb::WHITE);
    assert_eq!(image.get(Channel::Red, 1, 1), 51);
    assert_eq!(image.get(Channel::Alpha, 0, 0), 9);
}

#[test]
fn apply_to_rejects_size_mismatch() {
    let mut image = quadrant_image();
    let field = ScalarField::new(3, 2, FieldKind::Normalized);
    assert!(matches!(field.apply_to(&mut image), Err(Error::Range(_))));
}
