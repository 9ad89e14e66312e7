//! Submission controller types.

use crate::record::FormRecord;
use crate::validation::ValidationResult;

/// Phase of the submit cycle.
///
/// Submitting is transient: it only lasts for the synchronous duration of
/// [`Form::submit`](crate::Form::submit).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
}

/// What happened on a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<R: FormRecord> {
    /// Validation passed and the handler received these values.
    Submitted(R),
    /// Validation failed; the handler's success path was not invoked.
    Rejected(ValidationResult<R::Key>),
}

impl<R: FormRecord> SubmitOutcome<R> {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }

    /// Get the validation errors of a rejected attempt.
    pub fn errors(&self) -> Option<&ValidationResult<R::Key>> {
        match self {
            Self::Submitted(_) => None,
            Self::Rejected(result) => Some(result),
        }
    }
}

/// Receiver of submit attempts.
///
/// Closures taking `&R` implement this directly.
pub trait SubmitHandler<R: FormRecord> {
    /// Called once per submit attempt whose values passed validation.
    fn on_valid_submit(&mut self, values: &R);

    /// Called once per submit attempt that failed validation.
    fn on_invalid_submit(&mut self, _result: &ValidationResult<R::Key>) {}
}

impl<R, F> SubmitHandler<R> for F
where
    R: FormRecord,
    F: FnMut(&R),
{
    fn on_valid_submit(&mut self, values: &R) {
        self(values)
    }
}
