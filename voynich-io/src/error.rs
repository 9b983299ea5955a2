//! I/O error types.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for I/O operations.
pub type Result<T> = std::result::Result<T, Error>;

/// I/O error types.
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image file does not exist.
    #[error("image not found: {}", .0.display())]
    ImageNotFound(PathBuf),

    /// Image could not be decoded.
    #[error("image decode error: {0}")]
    Image(#[from] image::ImageError),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input is not in the expected format.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Core library error.
    #[error("core error: {0}")]
    CoreError(#[from] voynich_core::Error),
}
