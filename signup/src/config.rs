//! Form configuration.

use std::ops::RangeInclusive;

use formkit::mode::{RevalidateMode, ValidationMode};
use formkit::validation::ErrorDisplay;

use crate::messages::Messages;

/// Israeli mobile number: `05`, one digit, optional hyphen, seven digits.
pub const DEFAULT_PHONE_PATTERN: &str = r"^05[0-9]-?[0-9]{7}$";

/// Configuration of a [`SignupForm`](crate::SignupForm).
///
/// The defaults reproduce the form's fixed rule set; the builder methods
/// exist for hosts that need different bounds or wording.
#[derive(Debug, Clone)]
pub struct SignupConfig {
    /// Allowed length (in characters) of first and last name.
    pub name_length: RangeInclusive<usize>,

    /// Allowed length (in characters) of the password.
    pub password_length: RangeInclusive<usize>,

    /// Regex the phone number must match.
    pub phone_pattern: String,

    /// Also require a syntactically valid email address.
    /// Off by default: the form only checks that an email was entered.
    pub strict_email: bool,

    /// Validation messages and labels.
    pub messages: Messages,

    /// When fields validate before the first submit.
    pub mode: ValidationMode,

    /// When fields validate after a submit attempt.
    pub revalidate_mode: RevalidateMode,

    /// Where errors are displayed.
    pub error_display: ErrorDisplay,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            name_length: 2..=10,
            password_length: 2..=8,
            phone_pattern: DEFAULT_PHONE_PATTERN.to_string(),
            strict_email: false,
            messages: Messages::default(),
            mode: ValidationMode::default(),
            revalidate_mode: RevalidateMode::default(),
            error_display: ErrorDisplay::default(),
        }
    }
}

impl SignupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the allowed name length.
    pub fn name_length(mut self, range: RangeInclusive<usize>) -> Self {
        self.name_length = range;
        self
    }

    /// Set the allowed password length.
    pub fn password_length(mut self, range: RangeInclusive<usize>) -> Self {
        self.password_length = range;
        self
    }

    /// Set the phone regex.
    pub fn phone_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.phone_pattern = pattern.into();
        self
    }

    /// Require a well-formed email address.
    pub fn strict_email(mut self, strict: bool) -> Self {
        self.strict_email = strict;
        self
    }

    /// Replace the message catalog.
    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Set the validation mode.
    pub fn mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the revalidation mode.
    pub fn revalidate_mode(mut self, mode: RevalidateMode) -> Self {
        self.revalidate_mode = mode;
        self
    }

    /// Set the error display mode.
    pub fn error_display(mut self, display: ErrorDisplay) -> Self {
        self.error_display = display;
        self
    }
}
