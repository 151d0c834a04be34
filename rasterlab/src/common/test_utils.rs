use crate::prelude::*;

/// 2x2 image: (0,0) blue, (1,0) green, (0,1) red, (1,1) white.
pub fn quadrant_image() -> Image {
    let mut image = Image::new(2, 2).unwrap();
    image.set_rgb(0, 0, Rgb::BLUE);
    image.set_rgb(1, 0, Rgb::GREEN);
    image.set_rgb(0, 1, Rgb::RED);
    image.set_rgb(1, 1, Rgb::WHITE);
    image
}

/// Image with a distinct color at every pixel and zero alpha.
pub fn pattern_image(width: usize, height: usize) -> Image {
    let mut image = Image::new(width, height).unwrap();
    for (x, y) in image.pixels().collect::<Vec<_>>() {
        image.set_rgb(
            x,
            y,
            Rgb::new(
                (x * 37 % 256) as u8,
                (y * 59 % 256) as u8,
                ((x + y) * 13 % 256) as u8,
            ),
        );
    }
    image
}

/// Image that is black left of `step_x` and white from `step_x` on.
pub fn vertical_step_image(width: usize, height: usize, step_x: usize) -> Image {
    let mut image = Image::new(width, height).unwrap();
    for (x, y) in image.pixels().collect::<Vec<_>>() {
        if x >= step_x {
            image.set_rgb(x, y, Rgb::WHITE);
        }
    }
    image
}

/// Normalized field with 0.0 left of `step_x` and 1.0 from `step_x` on.
pub fn vertical_step_field(width: usize, height: usize, step_x: usize) -> ScalarField {
    let values = (0..width * height)
        .map(|i| if i % width >= step_x { 1.0 } else { 0.0 })
        .collect();
    ScalarField::Normalized(Plane::from_vec(width, height, values))
}
