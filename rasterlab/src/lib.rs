//! Rasterlab - in-memory raster images, CIE Lab conversion, convolution based
//! edge detection and an uncompressed BMP codec.
//!
//! ```rust,ignore
//! use rasterlab::prelude::*;
//!
//! let mut image = bmp::read_file("input.bmp")?;
//! apply_edge_detection(&mut image, &EdgeDetectionConfig::default())?;
//! bmp::write_file(&image, "edges.bmp")?;
//! ```

mod common;

pub mod bmp;
mod color;
mod field;
mod image;
mod ops;

pub mod prelude;

pub use prelude::*;
