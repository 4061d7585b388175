//! Error types for the narrator.

use thiserror::Error;

/// Result type alias for narrator operations.
pub type NarratorResult<T> = Result<T, NarratorError>;

/// Errors raised at the input and configuration boundaries.
///
/// Describing layers itself never fails.
#[derive(Debug, Error)]
pub enum NarratorError {
    /// Input or config document is not valid JSON of the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while reading input or configuration.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
