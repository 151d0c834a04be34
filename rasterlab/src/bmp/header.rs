//! Little-endian BITMAPFILEHEADER and BITMAPINFOHEADER layouts.

use crate::common::{Error, Result};

pub const FILE_HEADER_SIZE: usize = 14;
pub const DIB_HEADER_SIZE: usize = 40;
/// Offset of the pixel array in files written by this crate.
pub const PIXEL_DATA_OFFSET: usize = FILE_HEADER_SIZE + DIB_HEADER_SIZE;

pub(super) const SIGNATURE: [u8; 2] = *b"BM";
/// 72 DPI.
pub(super) const PIXELS_PER_METER: i32 = 2835;
const BI_RGB: u32 = 0;

/// Bytes per stored pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelDepth {
    /// Blue, green, red.
    Rgb24,
    /// Blue, green, red, alpha.
    Argb32,
}

impl PixelDepth {
    pub fn from_bits(bits: u16) -> Option<PixelDepth> {
        match bits {
            24 => Some(PixelDepth::Rgb24),
            32 => Some(PixelDepth::Argb32),
            _ => None,
        }
    }

    #[inline]
    pub fn bits(self) -> u16 {
        self.bytes_per_pixel() as u16 * 8
    }

    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelDepth::Rgb24 => 3,
            PixelDepth::Argb32 => 4,
        }
    }
}

/// Zero bytes appended to each row so its length is a multiple of 4.
#[inline]
pub fn row_padding(width: usize, depth: PixelDepth) -> usize {
    (4 - (width * depth.bytes_per_pixel()) % 4) % 4
}

/// Row length in bytes including padding.
#[inline]
pub fn row_stride(width: usize, depth: PixelDepth) -> usize {
    width * depth.bytes_per_pixel() + row_padding(width, depth)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct FileHeader {
    pub file_size: u32,
    pub data_offset: u32,
}

impl FileHeader {
    pub fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&SIGNATURE);
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&[0; 4]);
        out.extend_from_slice(&self.data_offset.to_le_bytes());
    }

    pub fn read(reader: &mut ByteReader<'_>) -> Result<FileHeader> {
        let signature: [u8; 2] = reader.array("file header")?;
        if signature != SIGNATURE {
            return Err(Error::Format(format!(
                "bad signature {:02x?}, expected \"BM\"",
                signature
            )));
        }
        let file_size = reader.u32("file header")?;
        reader.array::<4>("file header")?;
        let data_offset = reader.u32("file header")?;

        Ok(FileHeader {
            file_size,
            data_offset,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct DibHeader {
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl DibHeader {
    pub fn new(width: i32, height: i32, depth: PixelDepth, image_size: u32) -> DibHeader {
        DibHeader {
            width,
            height,
            planes: 1,
            bits_per_pixel: depth.bits(),
            compression: BI_RGB,
            image_size,
            x_pixels_per_meter: PIXELS_PER_METER,
            y_pixels_per_meter: PIXELS_PER_METER,
            colors_used: 0,
            colors_important: 0,
        }
    }

    pub fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&(DIB_HEADER_SIZE as u32).to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&self.image_size.to_le_bytes());
        out.extend_from_slice(&self.x_pixels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.y_pixels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.colors_used.to_le_bytes());
        out.extend_from_slice(&self.colors_important.to_le_bytes());
    }

    pub fn read(reader: &mut ByteReader<'_>) -> Result<DibHeader> {
        let header_size = reader.u32("DIB header")?;
        if header_size as usize != DIB_HEADER_SIZE {
            return Err(Error::Format(format!(
                "unsupported DIB header size {}, expected {}",
                header_size, DIB_HEADER_SIZE
            )));
        }

        Ok(DibHeader {
            width: reader.i32("DIB header")?,
            height: reader.i32("DIB header")?,
            planes: reader.u16("DIB header")?,
            bits_per_pixel: reader.u16("DIB header")?,
            compression: reader.u32("DIB header")?,
            image_size: reader.u32("DIB header")?,
            x_pixels_per_meter: reader.i32("DIB header")?,
            y_pixels_per_meter: reader.i32("DIB header")?,
            colors_used: reader.u32("DIB header")?,
            colors_important: reader.u32("DIB header")?,
        })
    }

    /// Checks the fields this codec supports and returns the pixel depth.
    pub fn validate(&self) -> Result<PixelDepth> {
        if self.planes != 1 {
            return Err(Error::Format(format!(
                "plane count must be 1, got {}",
                self.planes
            )));
        }
        let depth = PixelDepth::from_bits(self.bits_per_pixel).ok_or_else(|| {
            Error::Format(format!(
                "unsupported bit depth {}, expected 24 or 32",
                self.bits_per_pixel
            ))
        })?;
        if self.compression != BI_RGB {
            return Err(Error::Format(format!(
                "unsupported compression method {}",
                self.compression
            )));
        }
        if self.width <= 0 {
            return Err(Error::Format(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if self.height == 0 {
            return Err(Error::Format("height must not be zero".to_string()));
        }
        if self.height < 0 {
            return Err(Error::Format(format!(
                "top-down bitmaps (height {}) are not supported",
                self.height
            )));
        }
        Ok(depth)
    }
}

/// Cursor over a byte slice that reports truncation as a format error.
pub(super) struct ByteReader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    pub fn array<const N: usize>(&mut self, section: &str) -> Result<[u8; N]> {
        let end = self.position + N;
        let slice = self.bytes.get(self.position..end).ok_or_else(|| {
            Error::Format(format!(
                "truncated {}: need {} bytes, have {}",
                section,
                end,
                self.bytes.len()
            ))
        })?;
        self.position = end;

        let mut array = [0u8; N];
        array.copy_from_slice(slice);
        Ok(array)
    }

    pub fn u16(&mut self, section: &str) -> Result<u16> {
        self.array(section).map(u16::from_le_bytes)
    }

    pub fn u32(&mut self, section: &str) -> Result<u32> {
        self.array(section).map(u32::from_le_bytes)
    }

    pub fn i32(&mut self, section: &str) -> Result<i32> {
        self.array(section).map(i32::from_le_bytes)
    }
}
