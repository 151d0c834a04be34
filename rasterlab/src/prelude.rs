// Error handling
pub use crate::common::{Error, Plane, Result};

// Colors
pub use crate::color::{
    lab_to_rgb, lab_to_xyz, linear_rgb_to_xyz, linear_to_srgb, rgb_to_lab, srgb_to_linear,
    xyz_to_lab, xyz_to_linear_rgb, ColorModel, ColorValue, Lab, PixelValue, Rgb, D65_WHITE,
};

// Pixel grid and scalar fields
pub use crate::field::{FieldKind, LuminanceSource, ScalarField};
pub use crate::image::{Channel, Image};

// Operations
pub use crate::ops::{
    apply_edge_detection, convolve, convolve_plane, detect_edges, gradient_magnitude, normalize,
    EdgeDetectionConfig, EdgeOperator, Kernel,
};

// Codec
pub use crate::bmp;
