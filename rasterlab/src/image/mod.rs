
use std::fmt;

use crate::color::{rgb_to_lab, PixelValue, Rgb};
use crate::common::{Error, Plane, Result};

/// Largest width or height an image may have; bitmap headers store signed 32-bit sizes.
pub const MAX_DIMENSION: usize = i32::MAX as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Alpha,
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Alpha, Channel::Red, Channel::Green, Channel::Blue];
    pub const COLOR: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

/// An in-memory ARGB raster stored as four separate 8-bit channel planes.
///
/// All planes share the image dimensions. Filters mutate an image through
/// `&mut Image`; the codec only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    alpha: Plane<u8>,
    red: Plane<u8>,
    green: Plane<u8>,
    blue: Plane<u8>,
}

impl Image {
    /// Creates a zero-filled image (transparent black).
    pub fn new(width: usize, height: usize) -> Result<Image> {
        if width == 0 || height == 0 {
            return Err(Error::Range(format!(
                "image dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(Error::Range(format!(
                "image dimensions {}x{} exceed {}",
                width, height, MAX_DIMENSION
            )));
        }

        let plane = Plane::new_filled(width, height, 0u8);
        Ok(Image {
            alpha: plane.clone(),
            red: plane.clone(),
            green: plane.clone(),
            blue: plane,
        })
    }

    /// Creates an image whose color channels are all `color`; alpha stays zero.
    pub fn new_filled(width: usize, height: usize, color: Rgb) -> Result<Image> {
        let mut image = Image::new(width, height)?;
        image.red.fill(color.r);
        image.green.fill(color.g);
        image.blue.fill(color.b);
        Ok(image)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.red.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.red.height()
    }

    /// Number of pixels.
    #[inline]
    pub fn size(&self) -> usize {
        self.width() * self.height()
    }

    pub fn channel(&self, channel: Channel) -> &Plane<u8> {
        match channel {
            Channel::Alpha => &self.alpha,
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    pub fn channel_mut(&mut self, channel: Channel) -> &mut Plane<u8> {
        match channel {
            Channel::Alpha => &mut self.alpha,
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
        }
    }

    #[inline]
    pub fn get(&self, channel: Channel, x: usize, y: usize) -> u8 {
        self.channel(channel)[(x, y)]
    }

    #[inline]
    pub fn set(&mut self, channel: Channel, x: usize, y: usize, value: u8) {
        self.channel_mut(channel)[(x, y)] = value;
    }

    /// Channel value normalized to [0, 1].
    pub fn get_normalized(&self, channel: Channel, x: usize, y: usize) -> f64 {
        PixelValue::EightBit(self.get(channel, x, y)).to_f64()
    }

    /// Stores either representation; normalized values round to nearest.
    ///
    /// A normalized value outside [0, 1] is a range error and leaves the
    /// pixel untouched.
    pub fn set_value(
        &mut self,
        channel: Channel,
        x: usize,
        y: usize,
        value: PixelValue,
    ) -> Result<()> {
        let value = value.validate()?;
        self.set(channel, x, y, value.to_u8());
        Ok(())
    }

    /// Packed `alpha << 24 | red << 16 | green << 8 | blue`.
    pub fn argb(&self, x: usize, y: usize) -> u32 {
        u32::from_be_bytes([
            self.alpha[(x, y)],
            self.red[(x, y)],
            self.green[(x, y)],
            self.blue[(x, y)],
        ])
    }

    pub fn set_argb(&mut self, x: usize, y: usize, argb: u32) {
        let [a, r, g, b] = argb.to_be_bytes();
        self.alpha[(x, y)] = a;
        self.red[(x, y)] = r;
        self.green[(x, y)] = g;
        self.blue[(x, y)] = b;
    }

    /// Sets the color channels, leaving alpha untouched.
    pub fn set_rgb(&mut self, x: usize, y: usize, color: Rgb) {
        self.red[(x, y)] = color.r;
        self.green[(x, y)] = color.g;
        self.blue[(x, y)] = color.b;
    }

    pub fn color(&self, x: usize, y: usize) -> Rgb {
        Rgb::new(self.red[(x, y)], self.green[(x, y)], self.blue[(x, y)])
    }

    /// CIE Lab lightness of the pixel, in [0, 100].
    pub fn luminance(&self, x: usize, y: usize) -> f64 {
        rgb_to_lab(self.red[(x, y)], self.green[(x, y)], self.blue[(x, y)]).l
    }

    /// True if any pixel has a non-zero alpha value.
    pub fn has_alpha_channel(&self) -> bool {
        self.alpha.values().iter().any(|&a| a > 0)
    }

    pub fn is_grayscale(&self) -> bool {
        self.red
            .values()
            .iter()
            .zip(self.green.values())
            .zip(self.blue.values())
            .all(|((r, g), b)| r == g && g == b)
    }

    /// Iterates pixel coordinates row by row, x fastest.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize)> {
        let width = self.width();
        (0..self.size()).map(move |i| (i % width, i / width))
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Image {} x {} px", self.width(), self.height())
    }
}
