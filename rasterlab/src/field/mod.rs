#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::color::{rgb_to_lab, PixelValue};
use crate::common::{Error, Plane, Result};
use crate::image::{Channel, Image};

/// How a single-channel intensity is derived from a color pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LuminanceSource {
    /// CIE Lab lightness, `L / 100`.
    #[default]
    Lightness,
    /// Rec. 601 luma, `floor(0.299 r + 0.587 g + 0.114 b)`.
    Luma,
}

/// Value representation of a [`ScalarField`], fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    EightBit,
    Normalized,
}

/// A single-channel grid, either 8-bit in [0, 255] or normalized to [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarField {
    EightBit(Plane<u8>),
    Normalized(Plane<f64>),
}

impl ScalarField {
    /// Zero-filled field.
    pub fn new(width: usize, height: usize, kind: FieldKind) -> ScalarField {
        match kind {
            FieldKind::EightBit => ScalarField::EightBit(Plane::new_filled(width, height, 0)),
            FieldKind::Normalized => {
                ScalarField::Normalized(Plane::new_filled(width, height, 0.0))
            }
        }
    }

    /// Derives an intensity field from the color channels of `image`.
    pub fn from_image(image: &Image, source: LuminanceSource, kind: FieldKind) -> ScalarField {
        let red = image.channel(Channel::Red);
        let green = image.channel(Channel::Green);
        let blue = image.channel(Channel::Blue);

        let normalized = red.values().iter().zip(green.values()).zip(blue.values()).map(
            |((&r, &g), &b)| match source {
                LuminanceSource::Lightness => (rgb_to_lab(r, g, b).l / 100.0).clamp(0.0, 1.0),
                LuminanceSource::Luma => luma(r, g, b) as f64 / 255.0,
            },
        );

        let values = Plane::from_vec(image.width(), image.height(), normalized.collect());
        ScalarField::Normalized(values).into_kind(kind)
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            ScalarField::EightBit(_) => FieldKind::EightBit,
            ScalarField::Normalized(_) => FieldKind::Normalized,
        }
    }

    pub fn width(&self) -> usize {
        match self {
            ScalarField::EightBit(plane) => plane.width(),
            ScalarField::Normalized(plane) => plane.width(),
        }
    }

    pub fn height(&self) -> usize {
        match self {
            ScalarField::EightBit(plane) => plane.height(),
            ScalarField::Normalized(plane) => plane.height(),
        }
    }

    pub fn value(&self, x: usize, y: usize) -> PixelValue {
        match self {
            ScalarField::EightBit(plane) => PixelValue::EightBit(plane[(x, y)]),
            ScalarField::Normalized(plane) => PixelValue::Normalized(plane[(x, y)]),
        }
    }

    /// Stores `value` in the field's own representation, rounding to nearest.
    ///
    /// A normalized value outside [0, 1] is a range error in either
    /// representation.
    pub fn set(&mut self, x: usize, y: usize, value: PixelValue) -> Result<()> {
        let value = value.validate()?;
        match self {
            ScalarField::EightBit(plane) => plane[(x, y)] = value.to_u8(),
            ScalarField::Normalized(plane) => plane[(x, y)] = value.to_f64(),
        }
        Ok(())
    }

    /// Converts to the given representation; 8-bit targets round to nearest.
    pub fn into_kind(self, kind: FieldKind) -> ScalarField {
        match (self, kind) {
            (ScalarField::Normalized(plane), FieldKind::EightBit) => {
                ScalarField::EightBit(plane.map(|&v| PixelValue::Normalized(v).to_u8()))
            }
            (ScalarField::EightBit(plane), FieldKind::Normalized) => {
                ScalarField::Normalized(plane.map(|&v| PixelValue::EightBit(v).to_f64()))
            }
            (field, _) => field,
        }
    }

    /// Values as floats in the field's own scale (0..255 or 0..1).
    pub fn to_samples(&self) -> Plane<f64> {
        match self {
            ScalarField::EightBit(plane) => plane.map(|&v| v as f64),
            ScalarField::Normalized(plane) => plane.clone(),
        }
    }

    /// Values normalized to [0, 1] regardless of representation.
    pub fn to_normalized_plane(&self) -> Plane<f64> {
        match self {
            ScalarField::EightBit(plane) => plane.map(|&v| PixelValue::EightBit(v).to_f64()),
            ScalarField::Normalized(plane) => plane.clone(),
        }
    }

    /// Writes the field into the red, green and blue channels as 8-bit gray.
    pub fn apply_to(&self, image: &mut Image) -> Result<()> {
        if self.width() != image.width() || self.height() != image.height() {
            return Err(Error::Range(format!(
                "field {}x{} does not match image {}x{}",
                self.width(),
                self.height(),
                image.width(),
                image.height()
            )));
        }

        let gray = match self {
            ScalarField::EightBit(plane) => plane.clone(),
            ScalarField::Normalized(plane) => plane.map(|&v| PixelValue::Normalized(v).to_u8()),
        };

        for channel in Channel::COLOR {
            image
                .channel_mut(channel)
                .values_mut()
                .copy_from_slice(gray.values());
        }

        Ok(())
    }
}

/// Integer form of the weighted sum so grays map to themselves exactly.
#[inline]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
}
