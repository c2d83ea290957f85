//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes; anything else surfaces through
//! `anyhow` with exit code 1.

use std::fmt;

use grind_core::GrindError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Problem id or file not found
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// Bundle rejected during import
    ImportFailed { message: String, hint: String },

    /// Data directory unreadable or unwritable
    StorageFailed { message: String, hint: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, .. }
            | CliError::ImportFailed { message, .. }
            | CliError::StorageFailed { message, .. } => write!(f, "{}", message),
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    pub fn import_failed(message: impl Into<String>) -> Self {
        CliError::ImportFailed {
            message: message.into(),
            hint: "Hint: Bundles come from `grind export <DEST>`.".to_string(),
        }
    }

    pub fn storage_failed(message: impl Into<String>) -> Self {
        CliError::StorageFailed {
            message: message.into(),
            hint: "Hint: Check that the data directory (--data or GRIND_DATA) is writable."
                .to_string(),
        }
    }

    /// Hint line shown under the error, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. }
            | CliError::ImportFailed { hint, .. }
            | CliError::StorageFailed { hint, .. } => Some(hint),
            CliError::InvalidInput(_) => None,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::ImportFailed { .. } => exit_codes::IMPORT_FAILED,
            CliError::StorageFailed { .. } => exit_codes::STORAGE_FAILED,
        }
    }
}

impl From<GrindError> for CliError {
    fn from(err: GrindError) -> Self {
        match err {
            GrindError::NotFound(what) => CliError::not_found(
                format!("No {} in the queue", what),
                "Hint: Run `grind list` to see problem ids.",
            ),
            GrindError::MalformedImport(message) => {
                CliError::import_failed(format!("Import rejected: {}", message))
            }
            GrindError::InvalidInput(message) | GrindError::Validation(message) => {
                CliError::InvalidInput(message)
            }
            GrindError::Storage(message) => {
                CliError::storage_failed(format!("Storage failure: {}", message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_exit_code() {
        let err = CliError::from(GrindError::NotFound("problem abc".to_string()));
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
        assert!(err.to_string().contains("problem abc"));
        assert!(err.hint().unwrap().contains("grind list"));
    }

    #[test]
    fn test_malformed_import_exit_code() {
        let err = CliError::from(GrindError::MalformedImport("missing field".to_string()));
        assert_eq!(err.exit_code(), exit_codes::IMPORT_FAILED);
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_storage_error_is_not_invalid_input() {
        let err = CliError::from(GrindError::Storage("disk full".to_string()));
        assert_eq!(err.exit_code(), exit_codes::STORAGE_FAILED);
        assert_ne!(err.exit_code(), exit_codes::INVALID_INPUT);
        assert!(err.to_string().contains("disk full"));
        assert!(err.hint().unwrap().contains("data directory"));
    }

    #[test]
    fn test_ambiguous_prefix_is_invalid_input() {
        let err = CliError::from(GrindError::InvalidInput("ambiguous".to_string()));
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
        assert!(err.hint().is_none());
    }
}
