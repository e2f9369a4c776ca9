//! Error types for the style-check CLI.
//!
//! Uses thiserror for derive macros. Every fatal condition aborts the whole
//! run; style violations only become an error at the command boundary.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for style-check operations.
#[derive(Error, Debug)]
pub enum StyleError {
    /// User provided invalid arguments or the environment is unusable.
    #[error("{0}")]
    UserError(String),

    /// Configuration file is missing or unreadable.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// Formatter, diff utility, or temporary file handling failed.
    #[error("Formatter failed: {0}")]
    FormatterError(String),

    /// The run completed and found violations in this many files.
    #[error("style violations found in {0} file(s)")]
    Violations(usize),
}

impl StyleError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            StyleError::UserError(_) | StyleError::ConfigError(_) => exit_codes::USER_ERROR,
            StyleError::GitError(_) => exit_codes::GIT_FAILURE,
            StyleError::FormatterError(_) => exit_codes::TOOL_FAILURE,
            StyleError::Violations(_) => exit_codes::VIOLATIONS,
        }
    }

    /// Whether the report for this error has already been printed.
    pub fn is_reported(&self) -> bool {
        matches!(self, StyleError::Violations(_))
    }
}

/// Result type alias for style-check operations.
pub type Result<T> = std::result::Result<T, StyleError>;
