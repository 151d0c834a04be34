//! Text form of colors: `rgb(r, g, b)` and `lab(l, a, b)`.

use std::fmt;
use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};

use super::{Lab, PixelValue, Rgb};
use crate::common::{Error, Result};

/// Color model tag of the text form. Parsing is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ColorModel {
    Rgb,
    Lab,
}

/// Splits `model(c0, c1, c2)` into its model tag and three integer components.
fn parse_envelope(text: &str) -> Result<(ColorModel, [i64; 3])> {
    let text = text.trim();
    let malformed = || Error::Parse(format!("cannot parse color from \"{}\"", text));

    let open = text.find('(').ok_or_else(malformed)?;
    let close = text.rfind(')').ok_or_else(malformed)?;
    if close < open || close + 1 != text.len() {
        return Err(malformed());
    }

    let tag = text[..open].trim();
    let model = ColorModel::from_str(tag)
        .map_err(|_| Error::Parse(format!("unknown color model \"{}\"", tag)))?;

    let components = text[open + 1..close]
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<i64>()
                .map_err(|_| Error::Parse(format!("invalid component \"{}\" in \"{}\"", part, text)))
        })
        .collect::<Result<Vec<_>>>()?;

    let components: [i64; 3] = components.try_into().map_err(|parts: Vec<i64>| {
        Error::Parse(format!(
            "expected 3 components, got {} in \"{}\"",
            parts.len(),
            text
        ))
    })?;

    Ok((model, components))
}

fn expect_model(found: ColorModel, expected: ColorModel, text: &str) -> Result<()> {
    if found != expected {
        return Err(Error::Parse(format!(
            "expected {} color, got \"{}\"",
            expected, text
        )));
    }
    Ok(())
}

fn rgb_from_components(components: [i64; 3]) -> Result<Rgb> {
    let [r, g, b] = components;
    Rgb::from_values([
        PixelValue::eight_bit(r)?,
        PixelValue::eight_bit(g)?,
        PixelValue::eight_bit(b)?,
    ])
}

fn lab_from_components(components: [i64; 3]) -> Lab {
    let [l, a, b] = components.map(|c| c as f64);
    Lab { l, a, b }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (model, components) = parse_envelope(s)?;
        expect_model(model, ColorModel::Rgb, s)?;
        rgb_from_components(components)
    }
}

impl FromStr for Lab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (model, components) = parse_envelope(s)?;
        expect_model(model, ColorModel::Lab, s)?;
        Ok(lab_from_components(components))
    }
}

/// A color in whichever model its text named.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorValue {
    Rgb(Rgb),
    Lab(Lab),
}

impl ColorValue {
    pub fn model(&self) -> ColorModel {
        match self {
            ColorValue::Rgb(_) => ColorModel::Rgb,
            ColorValue::Lab(_) => ColorModel::Lab,
        }
    }

    /// Returns the same color expressed in `target`.
    pub fn convert(self, target: ColorModel) -> ColorValue {
        match (self, target) {
            (ColorValue::Rgb(rgb), ColorModel::Lab) => ColorValue::Lab(rgb.to_lab()),
            (ColorValue::Lab(lab), ColorModel::Rgb) => ColorValue::Rgb(lab.to_rgb()),
            (value, _) => value,
        }
    }
}

impl FromStr for ColorValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (model, components) = parse_envelope(s)?;
        Ok(match model {
            ColorModel::Rgb => ColorValue::Rgb(rgb_from_components(components)?),
            ColorModel::Lab => ColorValue::Lab(lab_from_components(components)),
        })
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Rgb(rgb) => fmt::Display::fmt(rgb, f),
            ColorValue::Lab(lab) => fmt::Display::fmt(lab, f),
        }
    }
}
