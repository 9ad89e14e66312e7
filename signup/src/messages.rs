//! Message catalog: validation messages and field labels.
//!
//! The defaults are the Hebrew strings the form ships with. Another catalog of
//! the same shape can be loaded from JSON; missing keys keep their default.

use serde::{Deserialize, Serialize};

use crate::error::SignupError;
use crate::field::Field;

/// Validation messages shown next to fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub first_name_required: String,
    pub last_name_required: String,
    pub email_required: String,
    pub phone_invalid: String,
    /// `{min}` is replaced with the lower password bound.
    pub password_too_short: String,
    /// `{max}` is replaced with the upper password bound.
    pub password_too_long: String,
    pub password_needs_digit: String,
    pub passwords_mismatch: String,
    /// Generic over-length message; `{max}` is replaced with the bound.
    pub too_long: String,
    pub labels: Labels,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            first_name_required: "שם פרטי נדרש".into(),
            last_name_required: "שם משפחה נדרש".into(),
            email_required: "נדרש מייל תקין".into(),
            phone_invalid: "נדרש טלפון תקין".into(),
            password_too_short: "סיסמא צריכה להכיל לפחות {min} תווים".into(),
            password_too_long: "מקסימום {max} תווים".into(),
            password_needs_digit: "סיסמא צריכה להכיל לפחות מספר אחד".into(),
            passwords_mismatch: "סיסמא לא תואמת".into(),
            too_long: "String must contain at most {max} character(s)".into(),
            labels: Labels::default(),
        }
    }
}

impl Messages {
    /// Parse a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, SignupError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Over-length message for a bound of `max` characters.
    pub fn too_long(&self, max: usize) -> String {
        self.too_long.replace("{max}", &max.to_string())
    }

    /// Too-short password message for a bound of `min` characters.
    pub fn password_too_short(&self, min: usize) -> String {
        self.password_too_short.replace("{min}", &min.to_string())
    }

    /// Too-long password message for a bound of `max` characters.
    pub fn password_too_long(&self, max: usize) -> String {
        self.password_too_long.replace("{max}", &max.to_string())
    }

    /// Label of a field.
    pub fn label(&self, field: Field) -> &str {
        let labels = &self.labels;
        match field {
            Field::FirstName => &labels.first_name,
            Field::LastName => &labels.last_name,
            Field::Email => &labels.email,
            Field::Phone => &labels.phone,
            Field::Password => &labels.password,
            Field::ConfirmPassword => &labels.confirm_password,
        }
    }
}

/// Field and control labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub submit: String,
    pub show_password: String,
    pub hide_password: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            first_name: "שם פרטי".into(),
            last_name: "שם משפחה".into(),
            email: "כתובת מייל".into(),
            phone: "מספר טלפון".into(),
            password: "סיסמא".into(),
            confirm_password: "אישור סיסמא".into(),
            submit: "צור משתמש".into(),
            show_password: "הראה סיסמא".into(),
            hide_password: "הסתר סיסמא".into(),
        }
    }
}
