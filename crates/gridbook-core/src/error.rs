//! Error types for gridbook-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridbook-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Row insert/remove index outside the valid bounds
    #[error("Row index {index} out of bounds (row count: {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Inverted column range (start > end)
    #[error("Invalid column range {start}-{end}: start must not be greater than end")]
    InvalidRange { start: usize, end: usize },

    /// Cell reference that is not `[A-Z]+[0-9]+`
    #[error("Malformed cell reference: {0}")]
    MalformedReference(String),

    /// List validation formula exceeds the length spreadsheet readers accept
    #[error("Data validation formula is {len} characters long (maximum: {max})")]
    ValidationFormulaTooLong { len: usize, max: usize },
}

impl Error {
    /// Create a malformed-reference error for the given input
    pub fn malformed<S: Into<String>>(reference: S) -> Self {
        Error::MalformedReference(reference.into())
    }
}
