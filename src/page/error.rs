//! Page behavior error types
//!
//! None of these reach the user. Behaviors log them and carry on.

use thiserror::Error;

/// Errors reported by a [`PageHost`](super::PageHost) or its elements
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// The host rejected a selector
    #[error("Invalid selector {selector:?}: {reason}")]
    Selector { selector: String, reason: String },

    /// A DOM call failed
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// Full-page navigation could not be started
    #[error("Navigation to {url:?} failed: {reason}")]
    Navigation { url: String, reason: String },

    /// The tooltip toolkit refused an element
    #[error("Tooltip activation failed: {0}")]
    Tooltip(String),
}

impl PageError {
    pub fn selector(selector: &str, reason: impl Into<String>) -> Self {
        PageError::Selector {
            selector: selector.to_string(),
            reason: reason.into(),
        }
    }

    pub fn navigation(url: &str, reason: impl Into<String>) -> Self {
        PageError::Navigation {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for page operations
pub type PageResult<T> = Result<T, PageError>;
