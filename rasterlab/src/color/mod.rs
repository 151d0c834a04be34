mod lab;
mod text;

#[cfg(test)]
mod tests;

use std::fmt;

pub use lab::{
    lab_to_rgb, lab_to_xyz, linear_rgb_to_xyz, linear_to_srgb, rgb_to_lab, srgb_to_linear,
    xyz_to_lab, xyz_to_linear_rgb, D65_WHITE,
};
pub use text::{ColorModel, ColorValue};

use crate::common::{Error, Result};

/// A single channel value, either 8-bit or normalized to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PixelValue {
    EightBit(u8),
    Normalized(f64),
}

impl PixelValue {
    /// Builds a normalized value, rejecting anything outside [0, 1].
    pub fn normalized(value: f64) -> Result<PixelValue> {
        if !(0.0..=1.0).contains(&value) {
            return Err(Error::Range(format!(
                "normalized value {} is outside [0, 1]",
                value
            )));
        }
        Ok(PixelValue::Normalized(value))
    }

    /// Checks that a `Normalized` value lies in [0, 1]. 8-bit values always pass.
    pub fn validate(self) -> Result<PixelValue> {
        match self {
            PixelValue::EightBit(_) => Ok(self),
            PixelValue::Normalized(v) => PixelValue::normalized(v),
        }
    }

    /// Builds an 8-bit value from a wider integer.
    pub fn eight_bit(value: i64) -> Result<PixelValue> {
        u8::try_from(value)
            .map(PixelValue::EightBit)
            .map_err(|_| Error::Range(format!("8-bit value {} is outside [0, 255]", value)))
    }

    /// Rounds to the nearest 8-bit value.
    #[inline]
    pub fn to_u8(self) -> u8 {
        match self {
            PixelValue::EightBit(v) => v,
            PixelValue::Normalized(v) => (v.clamp(0.0, 1.0) * 255.0).round() as u8,
        }
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        match self {
            PixelValue::EightBit(v) => v as f64 / 255.0,
            PixelValue::Normalized(v) => v,
        }
    }

    pub fn is_normalized(&self) -> bool {
        matches!(self, PixelValue::Normalized(_))
    }
}

impl From<u8> for PixelValue {
    fn from(value: u8) -> Self {
        PixelValue::EightBit(value)
    }
}

/// 8-bit device RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from channels in [0, 1], rounding to nearest.
    pub fn from_normalized(r: f64, g: f64, b: f64) -> Result<Rgb> {
        Rgb::from_values([
            PixelValue::normalized(r)?,
            PixelValue::normalized(g)?,
            PixelValue::normalized(b)?,
        ])
    }

    /// Builds a color from three values of the same representation.
    ///
    /// Mixing 8-bit and normalized components is a range error: the triple
    /// must be unambiguously one or the other.
    pub fn from_values(values: [PixelValue; 3]) -> Result<Rgb> {
        let normalized = values[0].is_normalized();
        if values.iter().any(|v| v.is_normalized() != normalized) {
            return Err(Error::Range(format!(
                "mixed 8-bit and normalized components: {:?}",
                values
            )));
        }

        for value in values {
            value.validate()?;
        }

        let [r, g, b] = values.map(PixelValue::to_u8);
        Ok(Rgb { r, g, b })
    }

    pub fn to_lab(self) -> Lab {
        rgb_to_lab(self.r, self.g, self.b)
    }

    pub fn to_normalized(self) -> [f64; 3] {
        [self.r, self.g, self.b].map(|c| c as f64 / 255.0)
    }

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// CIE Lab color. `l` is nominally in [0, 100]; `a` and `b` are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    pub fn lightness(&self) -> f64 {
        self.l
    }

    pub fn to_rgb(self) -> Rgb {
        lab_to_rgb(self.l, self.a, self.b)
    }
}

impl From<Rgb> for Lab {
    fn from(rgb: Rgb) -> Self {
        rgb.to_lab()
    }
}

impl From<Lab> for Rgb {
    fn from(lab: Lab) -> Self {
        lab.to_rgb()
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lab({:.2}, {:.2}, {:.2})", self.l, self.a, self.b)
    }
}
