pub(crate) mod convolution;
pub(crate) mod edges;

pub use convolution::{convolve, convolve_plane, Kernel};
pub use edges::{
    apply_edge_detection, detect_edges, gradient_magnitude, normalize, EdgeDetectionConfig,
    EdgeOperator,
};
