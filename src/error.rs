//! Shared error type for all transformation modules.
//!
//! Every tool recovers locally: the wasm wrappers flatten these into a short
//! user-visible message and nothing propagates across widget boundaries.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ToolError {
    /// Malformed Base64, percent-escape, or byte-range input.
    #[error("invalid {0} input")]
    InvalidEncoding(String),

    /// Input failed to parse as the named structured format.
    #[error("invalid {format}: {message}")]
    Parse { format: String, message: String },

    /// Input parsed, but has the wrong shape for the requested conversion.
    #[error("{0}")]
    Schema(String),

    /// The regular expression itself is malformed.
    #[error("invalid regular expression: {0}")]
    InvalidPattern(String),

    /// Upload exceeds the fixed size limit; nothing is read past it.
    #[error("file size exceeds {0} byte limit")]
    FileTooLarge(usize),

    /// Out-of-range parameter or missing required field.
    #[error("{0}")]
    InvalidInput(String),
}

impl ToolError {
    pub(crate) fn parse(format: &str, message: impl ToString) -> Self {
        ToolError::Parse {
            format: format.to_string(),
            message: message.to_string(),
        }
    }

    pub(crate) fn input(message: impl Into<String>) -> Self {
        ToolError::InvalidInput(message.into())
    }
}
