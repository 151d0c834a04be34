//! Infrastructure shared by the workspace crates: logging setup, float
//! comparison helpers and output paths for tests and demos.

pub mod float_ext;
pub mod log_setup;
pub mod test_utils;

pub const EPSILON: f64 = 1e-6;
