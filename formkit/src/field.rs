//! Per-field bookkeeping.

use serde::Serialize;

use crate::validation::ErrorDisplay;

/// How a text field should be presented by the rendering surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Plain text.
    #[default]
    Text,
    /// Email address entry.
    Email,
    /// Phone number entry.
    Phone,
    /// Obscured text.
    Password,
}

impl InputKind {
    /// Whether the value should be masked when displayed.
    pub fn is_masked(self) -> bool {
        matches!(self, Self::Password)
    }
}

/// Display state of a single field.
///
/// The value itself lives in the form's record; this only tracks whether the
/// user has interacted with the field and which error, if any, is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Set once the field has lost focus or the form was submitted.
    touched: bool,
    /// Whether the value differs from the field's default.
    dirty: bool,
    /// Validation error message (if any)
    error: Option<String>,
    /// How to display validation errors
    error_display: ErrorDisplay,
}

impl FieldState {
    /// Create a pristine field state.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Interaction
    // -------------------------------------------------------------------------

    /// Check if the field has been touched.
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Mark the field as touched.
    pub fn touch(&mut self) {
        self.touched = true;
    }

    /// Check if the value differs from its default.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Set a validation error message on this field.
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }

    /// Clear the validation error.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Replace the error with `error`, clearing it on `None`.
    pub(crate) fn replace_error(&mut self, error: Option<&str>) {
        match error {
            Some(msg) => self.set_error(msg),
            None => self.clear_error(),
        }
    }

    /// Check if this field has a validation error.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Get the current validation error message (if any).
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Get the error display mode.
    pub fn error_display(&self) -> ErrorDisplay {
        self.error_display
    }

    /// Set the error display mode.
    pub fn set_error_display(&mut self, display: ErrorDisplay) {
        self.error_display = display;
    }
}
