//! Errors surfaced by the demo driver and CLI

use sortkit_core::SortkitError;
use thiserror::Error;

/// Errors from running the demo
#[derive(Debug, Error)]
pub enum AppError {
    /// Core routine rejected its input
    #[error("{0}")]
    Core(SortkitError),

    /// `--values` could not be parsed
    #[error("invalid value list {list:?}: {reason}")]
    InvalidValues { list: String, reason: SortkitError },

    /// `--values` had more items than the demo accepts
    #[error("too many values: at most {max} are accepted")]
    TooManyValues { max: usize },

    /// Writing output failed
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the JSON report failed
    #[cfg(feature = "serde")]
    #[error("report serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

// SortkitError is no_std and does not implement std::error::Error, so it
// cannot be a #[source]
impl From<SortkitError> for AppError {
    fn from(err: SortkitError) -> Self {
        AppError::Core(err)
    }
}

/// Result type for the demo driver
pub type Result<T> = std::result::Result<T, AppError>;
