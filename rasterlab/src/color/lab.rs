//! sRGB <-> CIE XYZ <-> CIE Lab conversions under the D65 reference white.
//!
//! XYZ values are on the 0..100 scale used by the reference white.

use super::{Lab, Rgb};

/// D65 tristimulus values (X, Y, Z) of the reference white.
pub const D65_WHITE: [f64; 3] = [95.047, 100.0, 108.883];

// Breakpoint and slope of the linear segment of the Lab companding curve.
const LAB_EPSILON: f64 = 0.008856;
const LAB_SLOPE: f64 = 7.787;
const LAB_OFFSET: f64 = 16.0 / 116.0;

const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
];

#[inline]
fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Inverse sRGB companding of a channel in [0, 1].
#[inline]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

/// Forward sRGB companding of a linear channel. Not clamped.
#[inline]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c > 0.0031308 {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * c
    }
}

/// Linear RGB scaled to 0..100 into XYZ.
pub fn linear_rgb_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    mul(&RGB_TO_XYZ, rgb)
}

/// XYZ into linear RGB scaled to 0..100.
pub fn xyz_to_linear_rgb(xyz: [f64; 3]) -> [f64; 3] {
    mul(&XYZ_TO_RGB, xyz)
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_SLOPE * t + LAB_OFFSET
    }
}

#[inline]
fn lab_f_inv(t: f64) -> f64 {
    let cube = t * t * t;
    if cube > LAB_EPSILON {
        cube
    } else {
        (t - LAB_OFFSET) / LAB_SLOPE
    }
}

pub fn xyz_to_lab(xyz: [f64; 3]) -> Lab {
    let fx = lab_f(xyz[0] / D65_WHITE[0]);
    let fy = lab_f(xyz[1] / D65_WHITE[1]);
    let fz = lab_f(xyz[2] / D65_WHITE[2]);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

pub fn lab_to_xyz(lab: Lab) -> [f64; 3] {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;

    [
        lab_f_inv(fx) * D65_WHITE[0],
        lab_f_inv(fy) * D65_WHITE[1],
        lab_f_inv(fz) * D65_WHITE[2],
    ]
}

/// Converts an 8-bit sRGB color to CIE Lab.
pub fn rgb_to_lab(r: u8, g: u8, b: u8) -> Lab {
    let linear = [r, g, b].map(|c| srgb_to_linear(c as f64 / 255.0) * 100.0);
    xyz_to_lab(linear_rgb_to_xyz(linear))
}

/// Converts CIE Lab to 8-bit sRGB, clamping out-of-gamut channels.
pub fn lab_to_rgb(l: f64, a: f64, b: f64) -> Rgb {
    let xyz = lab_to_xyz(Lab { l, a, b });
    let linear = xyz_to_linear_rgb(xyz);
    let [r, g, b] = linear.map(|c| {
        let encoded = linear_to_srgb(c / 100.0).clamp(0.0, 1.0);
        (encoded * 255.0).round() as u8
    });

    Rgb { r, g, b }
}
