//! All error types for the datecode crate.
//!
//! Every generator and parser returns exactly one of these on failure; there is no partial
//! success.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input does not have the shape the era requires.
    #[error("format error: {0}")]
    Format(String),

    /// A year, month or week lies outside the range documented for the era.
    #[error("{field} out of range: {value}")]
    Range { field: &'static str, value: u32 },

    /// The location code is well formed but no factory is registered under it.
    #[error("unknown factory location `{0}`")]
    UnknownLocation(String),

    #[error("missing input: {0}")]
    MissingInput(&'static str),
}

/// Discriminant of [`Error`] for callers that only branch on the kind of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Format,
    Range,
    UnknownLocation,
    MissingInput,
}

impl Error {
    /// Creates a new format error
    pub fn format(message: impl Into<String>) -> Self {
        Error::Format(message.into())
    }

    /// Creates a new range error for the named field
    pub fn range(field: &'static str, value: u32) -> Self {
        Error::Range { field, value }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Format(_) => ErrorKind::Format,
            Error::Range { .. } => ErrorKind::Range,
            Error::UnknownLocation(_) => ErrorKind::UnknownLocation,
            Error::MissingInput(_) => ErrorKind::MissingInput,
        }
    }
}
