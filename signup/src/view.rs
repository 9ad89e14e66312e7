//! What a renderer needs to draw one field.

use formkit::field::InputKind;
use formkit::validation::ErrorDisplay;
use serde::Serialize;

use crate::field::Field;

/// Snapshot of a single field for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub field: Field,
    pub label: String,
    /// Stored value, unmasked. Masking is up to the renderer, driven by
    /// `input_kind`.
    pub value: String,
    pub error: Option<String>,
    pub input_kind: InputKind,
    pub error_display: ErrorDisplay,
}

impl FieldView {
    /// Whether the field should be highlighted as invalid.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
