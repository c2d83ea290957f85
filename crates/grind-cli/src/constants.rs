//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (unhandled `anyhow` errors)
/// - 2: Argument parsing failure (reserved by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Problem id or input file not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Bundle import rejected; nothing was applied.
    pub const IMPORT_FAILED: i32 = 5;

    /// Data directory could not be opened or written.
    pub const STORAGE_FAILED: i32 = 6;
}

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "GRIND_CONFIG";

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "GRIND_LOG";

/// Log filter used when `GRIND_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";
