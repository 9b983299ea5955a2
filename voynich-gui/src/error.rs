//! Viewer error types.

use thiserror::Error;

/// Errors raised while showing a folio.
#[derive(Error, Debug)]
pub enum ViewerError {
    /// The image could not be loaded or decoded.
    #[error(transparent)]
    Image(#[from] voynich_io::Error),

    /// The windowing backend failed.
    #[error("window error: {0}")]
    Window(String),
}
