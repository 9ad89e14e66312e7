//! When fields are validated outside of a submit.

/// Validation strategy before the first submit attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Only validate on submit.
    #[default]
    OnSubmit,
    /// Validate a field on every change.
    OnChange,
    /// Validate a field when it loses focus.
    OnBlur,
    /// Validate on first blur, then on every change.
    OnTouched,
    /// Validate on both change and blur.
    All,
}

impl ValidationMode {
    /// Whether an edit should re-validate the field.
    pub fn validates_on_change(self, touched: bool) -> bool {
        match self {
            Self::OnChange | Self::All => true,
            Self::OnTouched => touched,
            Self::OnSubmit | Self::OnBlur => false,
        }
    }

    /// Whether losing focus should re-validate the field.
    pub fn validates_on_blur(self) -> bool {
        matches!(self, Self::OnBlur | Self::OnTouched | Self::All)
    }
}

/// Validation strategy after a submit attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevalidateMode {
    /// Re-validate a field on every change.
    #[default]
    OnChange,
    /// Re-validate a field when it loses focus.
    OnBlur,
    /// Wait for the next submit.
    OnSubmit,
}

impl RevalidateMode {
    pub fn validates_on_change(self) -> bool {
        matches!(self, Self::OnChange)
    }

    pub fn validates_on_blur(self) -> bool {
        matches!(self, Self::OnBlur)
    }
}
