//! Error type for the binary codec.

use thiserror::Error;

/// Result type for codec operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error produced by encoding or decoding a PostgreSQL wire value.
///
/// Every variant's `Display` output is the exact string documented by the
/// wire-format contract it guards; callers that match on message text
/// (for compatibility with the reference implementation) can rely on it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The value's tag does not accept the descriptor's `typesend`/`typereceive`.
    #[error("{0}")]
    Mismatch(String),

    /// An integer value does not fit the target wire width.
    #[error("Out of range for {0}")]
    OutOfRange(&'static str),

    /// A value's shape (length, dimensionality) does not match the contract.
    #[error("{0}")]
    Shape(String),

    /// The byte payload could not be parsed as the expected wire frame.
    #[error("invalid {0}")]
    Frame(&'static str),

    /// A decoded value violates a semantic constraint (e.g. month out of range).
    #[error("{0}")]
    Semantic(String),

    /// `type_info.typereceive` names a function this codec does not implement.
    #[error("Unsupported type")]
    UnsupportedType,
}

impl Error {
    pub(crate) fn mismatch(expected: &str, actual: &str) -> Self {
        Self::Mismatch(format!("Attempted to encode {expected} as {actual}"))
    }

    pub(crate) fn mismatch_int(literal: i64, actual: &str) -> Self {
        Self::Mismatch(format!("Attempted to encode {literal} as {actual}"))
    }

    pub(crate) fn mismatch_text(text: &str, actual: &str) -> Self {
        Self::Mismatch(format!("Attempted to encode '{text}' as {actual}"))
    }

    pub(crate) fn unsupported_float() -> Self {
        Self::Mismatch("Unsupported float type".to_owned())
    }
}
