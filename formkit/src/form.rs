//! Form container: values, field bookkeeping and the submit cycle.

use std::collections::HashMap;
use std::iter;

use log::{debug, trace};

use crate::field::FieldState;
use crate::mode::{RevalidateMode, ValidationMode};
use crate::record::FormRecord;
use crate::submit::{SubmitHandler, SubmitOutcome, SubmitPhase};
use crate::validation::{ErrorDisplay, FieldError, Schema, ValidationResult};

/// A form over a [`FormRecord`].
///
/// Owns the current values, the defaults they are compared against for dirty
/// tracking, one [`FieldState`] per key and the schema used to validate.
/// All handlers take `&mut self` and run synchronously.
///
/// # Example
///
/// ```ignore
/// let mut form = Form::new(schema).mode(ValidationMode::OnBlur);
///
/// form.set_field(Key::Name, "Ada");
/// form.blur(Key::Name);
///
/// match form.submit(&mut |values: &Record| println!("{values:?}")) {
///     SubmitOutcome::Submitted(_) => {}
///     SubmitOutcome::Rejected(result) => { /* errors are attached */ }
/// }
/// ```
#[derive(Debug)]
pub struct Form<R: FormRecord> {
    schema: Schema<R>,
    defaults: R,
    values: R,
    fields: HashMap<R::Key, FieldState>,
    mode: ValidationMode,
    revalidate_mode: RevalidateMode,
    phase: SubmitPhase,
    submit_count: usize,
    submit_successful: bool,
}

impl<R: FormRecord> Form<R> {
    /// Create a form with default (empty) values.
    pub fn new(schema: Schema<R>) -> Self {
        Self::with_defaults(schema, R::default())
    }

    /// Create a form starting from `defaults`.
    pub fn with_defaults(schema: Schema<R>, defaults: R) -> Self {
        let fields = R::keys()
            .iter()
            .map(|&key| (key, FieldState::new()))
            .collect();
        Self {
            schema,
            values: defaults.clone(),
            defaults,
            fields,
            mode: ValidationMode::default(),
            revalidate_mode: RevalidateMode::default(),
            phase: SubmitPhase::default(),
            submit_count: 0,
            submit_successful: false,
        }
    }

    /// Set the validation mode used before the first submit.
    pub fn mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the validation mode used after a submit attempt.
    pub fn revalidate_mode(mut self, mode: RevalidateMode) -> Self {
        self.revalidate_mode = mode;
        self
    }

    /// Set the error display mode of every field.
    pub fn error_display(mut self, display: ErrorDisplay) -> Self {
        for state in self.fields.values_mut() {
            state.set_error_display(display);
        }
        self
    }

    // -------------------------------------------------------------------------
    // Values
    // -------------------------------------------------------------------------

    /// Get the current values.
    pub fn values(&self) -> &R {
        &self.values
    }

    /// Get the current text of one field.
    pub fn value(&self, key: R::Key) -> &str {
        self.values.get(key)
    }

    /// Store a new value for a field.
    ///
    /// Accepts any text. Depending on the validation mode the field (and its
    /// dependents) may be re-validated.
    pub fn set_field(&mut self, key: R::Key, value: impl Into<String>) {
        let value = value.into();
        let dirty = value != self.defaults.get(key);
        self.values.set(key, value);

        let state = self.fields.entry(key).or_default();
        state.set_dirty(dirty);
        let touched = state.is_touched();

        let validate = if self.submit_count > 0 {
            self.revalidate_mode.validates_on_change()
        } else {
            self.mode.validates_on_change(touched)
        };
        trace!("{key} changed (dirty: {dirty}, validate: {validate})");
        if validate {
            self.revalidate(key);
        }
    }

    /// Mark a field as having lost focus.
    pub fn blur(&mut self, key: R::Key) {
        self.fields.entry(key).or_default().touch();

        let validate = if self.submit_count > 0 {
            self.revalidate_mode.validates_on_blur()
        } else {
            self.mode.validates_on_blur()
        };
        if validate {
            self.revalidate(key);
        }
    }

    /// Restore the defaults and forget all bookkeeping.
    pub fn reset(&mut self) {
        self.values = self.defaults.clone();
        for state in self.fields.values_mut() {
            let display = state.error_display();
            *state = FieldState::new();
            state.set_error_display(display);
        }
        self.phase = SubmitPhase::Editing;
        self.submit_count = 0;
        self.submit_successful = false;
        debug!("form reset");
    }

    // -------------------------------------------------------------------------
    // Field state
    // -------------------------------------------------------------------------

    /// Get the bookkeeping of a field.
    pub fn field(&self, key: R::Key) -> Option<&FieldState> {
        self.fields.get(&key)
    }

    /// Get the error currently shown on a field.
    pub fn error(&self, key: R::Key) -> Option<&str> {
        self.field(key).and_then(FieldState::error)
    }

    pub fn is_touched(&self, key: R::Key) -> bool {
        self.field(key).is_some_and(FieldState::is_touched)
    }

    /// Check if any field differs from its default.
    pub fn is_dirty(&self) -> bool {
        self.fields.values().any(FieldState::is_dirty)
    }

    /// Keys of fields that differ from their defaults, in form order.
    pub fn dirty_fields(&self) -> Vec<R::Key> {
        self.keys_where(FieldState::is_dirty)
    }

    /// Keys of touched fields, in form order.
    pub fn touched_fields(&self) -> Vec<R::Key> {
        self.keys_where(FieldState::is_touched)
    }

    fn keys_where(&self, pred: impl Fn(&FieldState) -> bool) -> Vec<R::Key> {
        R::keys()
            .iter()
            .copied()
            .filter(|key| self.fields.get(key).is_some_and(&pred))
            .collect()
    }

    /// Errors currently shown, in form order.
    pub fn errors(&self) -> ValidationResult<R::Key> {
        let errors = R::keys()
            .iter()
            .filter_map(|&key| {
                self.error(key).map(|msg| FieldError::new(key, msg))
            })
            .collect();
        ValidationResult::from_errors(errors)
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Validate the current values without touching displayed errors.
    pub fn validate(&self) -> ValidationResult<R::Key> {
        self.schema.validate(&self.values)
    }

    /// Validate everything and show the result on every field.
    pub fn trigger(&mut self) -> ValidationResult<R::Key> {
        let result = self.validate();
        self.apply(&result);
        result
    }

    fn revalidate(&mut self, key: R::Key) {
        let result = self.validate();
        let targets = iter::once(key).chain(R::dependents(key).iter().copied());
        for target in targets {
            let Some(state) = self.fields.get_mut(&target) else {
                continue;
            };
            // Dependents only refresh once the user has reached them.
            if target != key && !state.is_touched() && !state.has_error() {
                continue;
            }
            state.replace_error(result.error(target));
        }
    }

    /// Replace every displayed error with the outcome of `result`.
    fn apply(&mut self, result: &ValidationResult<R::Key>) {
        for (&key, state) in self.fields.iter_mut() {
            state.replace_error(result.error(key));
        }
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Run a submit attempt.
    ///
    /// Marks every field touched and validates the whole record. Valid
    /// values go to `handler.on_valid_submit` exactly once; otherwise the
    /// errors are attached to their fields and returned. Values are kept
    /// either way.
    pub fn submit<H>(&mut self, handler: &mut H) -> SubmitOutcome<R>
    where
        H: SubmitHandler<R> + ?Sized,
    {
        self.phase = SubmitPhase::Submitting;
        self.submit_count += 1;
        for state in self.fields.values_mut() {
            state.touch();
        }

        let result = self.trigger();
        let outcome = if result.is_valid() {
            debug!("submit #{} passed validation", self.submit_count);
            self.submit_successful = true;
            handler.on_valid_submit(&self.values);
            SubmitOutcome::Submitted(self.values.clone())
        } else {
            debug!(
                "submit #{} rejected with {} field error(s)",
                self.submit_count,
                result.errors().len()
            );
            self.submit_successful = false;
            handler.on_invalid_submit(&result);
            SubmitOutcome::Rejected(result)
        };

        self.phase = SubmitPhase::Editing;
        outcome
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Number of submit attempts since creation or the last reset.
    pub fn submit_count(&self) -> usize {
        self.submit_count
    }

    pub fn is_submitted(&self) -> bool {
        self.submit_count > 0
    }

    /// Whether the most recent submit attempt passed validation.
    pub fn is_submit_successful(&self) -> bool {
        self.submit_successful
    }
}
