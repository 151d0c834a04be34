use thiserror::Error;

/// Errors produced by color parsing, grid construction and the bitmap codec.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed color text or an unexpected color model tag.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A component or dimension outside its valid range.
    #[error("Value out of range: {0}")]
    Range(String),

    /// Bitmap bytes that are truncated, compressed or otherwise unsupported.
    #[error("Invalid bitmap: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
