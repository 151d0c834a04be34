pub(crate) mod error;
pub(crate) mod plane;
#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{Error, Result};
pub use plane::Plane;
