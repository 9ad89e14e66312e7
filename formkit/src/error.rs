//! Error types for form construction.
//!
//! Failed validation is never an error here; it is reported as a
//! [`ValidationResult`](crate::validation::ValidationResult).

use thiserror::Error;

/// Errors raised while building a form or resolving field keys.
#[derive(Debug, Error)]
pub enum FormError {
    /// A field key string did not name any field of the record.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// A pattern rule was given an invalid regular expression.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl FormError {
    /// Creates a new unknown field error.
    pub fn unknown_field(key: impl Into<String>) -> Self {
        Self::UnknownField(key.into())
    }
}
