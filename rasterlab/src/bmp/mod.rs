//! Uncompressed Windows bitmap codec.
//!
//! Writes a 14-byte file header, a 40-byte `BITMAPINFOHEADER` and the pixel
//! array bottom row first. Pixels are stored as the little-endian bytes of the
//! packed ARGB value: 3 bytes (B, G, R) when the image has no alpha, 4 bytes
//! (B, G, R, A) when any alpha value is non-zero. Every row is zero-padded to a
//! multiple of 4 bytes.
//!
//! Decoding accepts exactly what the encoder produces plus any valid 24/32-bit
//! bottom-up file whose pixel array starts at the offset given in the header.

mod header;


use std::fmt;
use std::path::Path;

pub use header::{
    row_padding, row_stride, PixelDepth, DIB_HEADER_SIZE, FILE_HEADER_SIZE, PIXEL_DATA_OFFSET,
};

use crate::common::{Error, Result};
use crate::image::Image;
use header::{ByteReader, DibHeader, FileHeader};

/// Header summary of a bitmap, read without decoding pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpInfo {
    pub width: usize,
    pub height: usize,
    pub depth: PixelDepth,
    /// Byte offset of the pixel array.
    pub data_offset: usize,
    /// Size of the pixel array including row padding.
    pub data_size: usize,
}

impl fmt::Display for BmpInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BMP image (Windows Bitmap) {} x {} px, {} bpp",
            self.width,
            self.height,
            self.depth.bits()
        )
    }
}

/// Encodes `image`, choosing 32 bits per pixel only if it has alpha.
///
/// Header size fields saturate at `u32::MAX` for images whose pixel array
/// exceeds 4 GiB.
pub fn encode(image: &Image) -> Vec<u8> {
    let depth = if image.has_alpha_channel() {
        PixelDepth::Argb32
    } else {
        PixelDepth::Rgb24
    };

    let width = image.width();
    let height = image.height();
    let bytes_per_pixel = depth.bytes_per_pixel();
    let padding = row_padding(width, depth);
    let data_size = row_stride(width, depth) * height;
    let file_size = PIXEL_DATA_OFFSET + data_size;

    let mut out = Vec::with_capacity(file_size);
    FileHeader {
        file_size: saturate(file_size),
        data_offset: PIXEL_DATA_OFFSET as u32,
    }
    .write(&mut out);
    // Image dimensions never exceed i32::MAX.
    DibHeader::new(width as i32, height as i32, depth, saturate(data_size)).write(&mut out);

    for y in (0..height).rev() {
        for x in 0..width {
            let bytes = image.argb(x, y).to_le_bytes();
            out.extend_from_slice(&bytes[..bytes_per_pixel]);
        }
        out.resize(out.len() + padding, 0);
    }

    tracing::debug!(
        width,
        height,
        bits = depth.bits(),
        bytes = out.len(),
        "encoded bitmap"
    );

    out
}

/// Decodes a bitmap produced by [`encode`] or any compatible writer.
pub fn decode(bytes: &[u8]) -> Result<Image> {
    let info = probe(bytes)?;
    let bytes_per_pixel = info.depth.bytes_per_pixel();
    let stride = row_stride(info.width, info.depth);
    let row_bytes = info.width * bytes_per_pixel;

    let end = info
        .data_offset
        .checked_add(info.data_size)
        .filter(|&end| end <= bytes.len())
        .ok_or_else(|| {
            Error::Format(format!(
                "truncated pixel data: need {} bytes after offset {}, have {}",
                info.data_size,
                info.data_offset,
                bytes.len() - info.data_offset
            ))
        })?;

    let mut image = Image::new(info.width, info.height)?;
    for (row, data) in bytes[info.data_offset..end].chunks_exact(stride).enumerate() {
        let y = info.height - 1 - row;
        for (x, pixel) in data[..row_bytes].chunks_exact(bytes_per_pixel).enumerate() {
            let mut argb = [0u8; 4];
            argb[..bytes_per_pixel].copy_from_slice(pixel);
            image.set_argb(x, y, u32::from_le_bytes(argb));
        }
    }

    tracing::debug!(
        width = info.width,
        height = info.height,
        bits = info.depth.bits(),
        "decoded bitmap"
    );

    Ok(image)
}

/// Reads and validates both headers.
pub fn probe(bytes: &[u8]) -> Result<BmpInfo> {
    let mut reader = ByteReader::new(bytes);
    let file_header = FileHeader::read(&mut reader)?;
    let dib_header = DibHeader::read(&mut reader)?;
    let depth = dib_header.validate()?;

    let width = dib_header.width as usize;
    let height = dib_header.height as usize;
    let data_offset = file_header.data_offset as usize;
    if data_offset < PIXEL_DATA_OFFSET || data_offset > bytes.len() {
        return Err(Error::Format(format!(
            "pixel data offset {} is outside {}..={}",
            data_offset,
            PIXEL_DATA_OFFSET,
            bytes.len()
        )));
    }

    let data_size = row_stride(width, depth)
        .checked_mul(height)
        .ok_or_else(|| Error::Format(format!("{}x{} bitmap is too large", width, height)))?;

    Ok(BmpInfo {
        width,
        height,
        depth,
        data_offset,
        data_size,
    })
}

/// Reads and decodes a bitmap file.
pub fn read_file(path: impl AsRef<Path>) -> Result<Image> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read bitmap file");
    decode(&bytes)
}

/// Encodes `image` and writes it to `path`, replacing any existing file.
pub fn write_file(image: &Image, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode(image);
    std::fs::write(path, &bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote bitmap file");
    Ok(())
}

fn saturate(size: usize) -> u32 {
    u32::try_from(size).unwrap_or(u32::MAX)
}
