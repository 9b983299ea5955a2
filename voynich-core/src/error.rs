//! Error types for voynich-core.

use thiserror::Error;

/// Result type alias for voynich-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for frequency analysis.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Reference distribution does not have one entry per letter.
    #[error("reference distribution must have 26 entries, got {0}")]
    ReferenceLength(usize),

    /// Reference percentage is negative, NaN or infinite.
    #[error("invalid reference percentage for '{letter}': {value}")]
    InvalidReferenceValue { letter: char, value: f64 },

    /// Requested decimal precision is out of range.
    #[error("precision must be at most {max} decimal places, got {precision}")]
    InvalidPrecision { precision: usize, max: usize },
}
