//! Formatting error types

use thiserror::Error;

/// Errors produced while interpreting values for display
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Input was empty or only whitespace
    #[error("Empty date input")]
    EmptyDate,

    /// Input did not match any supported date layout
    #[error("Unrecognized date format: {0}")]
    UnrecognizedDate(String),

    /// Input matched a layout but names a day that does not exist
    #[error("Invalid calendar date: {0}")]
    InvalidDate(String),
}

/// Result type alias for formatting operations
pub type FormatResult<T> = Result<T, FormatError>;
