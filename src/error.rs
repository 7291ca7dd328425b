//! Error types for numeral formatting
//!
//! Every failure is a local validation failure: the formatter does no I/O,
//! so nothing here is transient or worth retrying.

use thiserror::Error;

/// Error returned by every fallible operation of the crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The input is not an integer (text that does not parse, a float, a string value...)
    #[error("Number must be an integer, got {input:?}")]
    InvalidInput { input: String },

    /// The input is an integer but lies outside 0..=999_999
    #[error("Number out of supported range: {value} (must be between 0 and 999,999)")]
    OutOfRange { value: String },

    /// The dialect token is not one of the supported ones
    #[error("Unsupported language variant: {0}. Supported variants are 'fr' and 'be'.")]
    UnsupportedDialect(String),

    /// A batch operation was given no numbers
    #[error("Can't process an empty list")]
    EmptyInput,

    /// The embedded vocabulary tables could not be loaded
    #[error("Vocabulary error: {0}")]
    Vocabulary(String),
}

impl FormatError {
    pub(crate) fn invalid_input(input: impl Into<String>) -> Self {
        FormatError::InvalidInput {
            input: input.into(),
        }
    }

    pub(crate) fn out_of_range(value: impl ToString) -> Self {
        FormatError::OutOfRange {
            value: value.to_string(),
        }
    }

    /// Whether the error was caused by the caller's input rather than by the crate itself.
    ///
    /// Adapters map these to "bad request" style outcomes.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            FormatError::InvalidInput { .. }
                | FormatError::OutOfRange { .. }
                | FormatError::UnsupportedDialect(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, FormatError>;
