use serde::Serialize;

/// Information about a single field validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError<K> {
    /// Key of the field the error belongs to.
    pub field: K,
    /// Error message.
    pub message: String,
}

impl<K> FieldError<K> {
    pub fn new(field: K, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Result of one validation pass over a record.
///
/// Holds at most one error per field, in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "errors", rename_all = "snake_case")]
pub enum ValidationResult<K> {
    /// All fields passed validation.
    Valid,
    /// One or more fields failed validation.
    Invalid(Vec<FieldError<K>>),
}

impl<K> Default for ValidationResult<K> {
    fn default() -> Self {
        Self::Valid
    }
}

impl<K> ValidationResult<K> {
    /// Build a result from collected errors; empty means valid.
    pub fn from_errors(errors: Vec<FieldError<K>>) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }

    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all validation errors.
    pub fn errors(&self) -> &[FieldError<K>] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<&FieldError<K>> {
        self.errors().first()
    }
}

impl<K: Copy + PartialEq> ValidationResult<K> {
    /// Get the error message attached to `field`.
    pub fn error(&self, field: K) -> Option<&str> {
        self.errors()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Check if `field` carries an error.
    pub fn has_error(&self, field: K) -> bool {
        self.error(field).is_some()
    }

    /// Get the key of the first invalid field (for focusing).
    pub fn first_invalid_field(&self) -> Option<K> {
        self.first_error().map(|e| e.field)
    }
}
