//! Headless form machinery.
//!
//! `formkit` knows nothing about any particular form. A form is described by a
//! record type implementing [`FormRecord`], a [`Schema`] of ordered rules over
//! that record, and a [`Form`] that tracks values, per-field bookkeeping and
//! the submit cycle.
//!
//! [`Schema`]: validation::Schema

pub mod error;
pub mod field;
pub mod form;
pub mod mode;
pub mod record;
pub mod submit;
pub mod toggle;
pub mod validation;

pub use error::FormError;
pub use form::Form;
pub use record::FormRecord;

pub mod prelude {
    pub use crate::error::FormError;
    pub use crate::field::{FieldState, InputKind};
    pub use crate::form::Form;
    pub use crate::mode::{RevalidateMode, ValidationMode};
    pub use crate::record::FormRecord;
    pub use crate::submit::{SubmitHandler, SubmitOutcome, SubmitPhase};
    pub use crate::toggle::Toggle;
    pub use crate::validation::{ErrorDisplay, FieldError, Schema, ValidationResult};
}
