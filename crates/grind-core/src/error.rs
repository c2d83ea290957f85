//! Error types for Grind core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to exit codes and user-friendly messages.

use thiserror::Error;

/// Result type alias for Grind operations.
pub type Result<T> = std::result::Result<T, GrindError>;

/// Core error type for Grind operations.
#[derive(Debug, Error)]
pub enum GrindError {
    /// Operation referenced a problem id absent from the store
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bulk import payload is missing required shape
    #[error("Malformed import: {0}")]
    MalformedImport(String),

    /// Persistence backend failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl GrindError {
    /// Whether this error is a missing-record error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GrindError::NotFound(_))
    }
}

impl From<std::io::Error> for GrindError {
    fn from(err: std::io::Error) -> Self {
        GrindError::Storage(err.to_string())
    }
}
