//! Error types

use formkit::FormError;
use thiserror::Error;

/// Errors raised while configuring a signup form.
///
/// Invalid field values are not errors; they are reported through
/// [`ValidationResult`](formkit::validation::ValidationResult).
#[derive(Debug, Error)]
pub enum SignupError {
    #[error(transparent)]
    Form(#[from] FormError),

    /// A message catalog could not be parsed.
    #[error("invalid message catalog: {0}")]
    Messages(#[from] serde_json::Error),
}
