//! Collected form values.

use std::fmt;

use formkit::FormRecord;
use serde::{Deserialize, Serialize};

use crate::field::Field;

/// The values collected by the registration form.
///
/// Plain text only; nothing is derived or normalized.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one field, builder style.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value.into());
        self
    }
}

impl FormRecord for FormValues {
    type Key = Field;

    fn keys() -> &'static [Field] {
        &Field::ALL
    }

    fn get(&self, key: Field) -> &str {
        match key {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    fn set(&mut self, key: Field, value: String) {
        let slot = match key {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value;
    }

    fn dependents(key: Field) -> &'static [Field] {
        match key {
            Field::Password => &[Field::ConfirmPassword],
            _ => &[],
        }
    }
}

// Passwords never end up in logs.
impl fmt::Debug for FormValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormValues")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_sets_each_slot() {
        let values = FormValues::new()
            .with(Field::FirstName, "a")
            .with(Field::ConfirmPassword, "b");
        assert_eq!(values.get(Field::FirstName), "a");
        assert_eq!(values.confirm_password, "b");
        assert_eq!(values.get(Field::Password), "");
    }

    #[test]
    fn test_serializes_camel_case_keys() {
        let values = FormValues::new().with(Field::ConfirmPassword, "x");
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json["confirmPassword"], "x");
        assert_eq!(json["firstName"], "");
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let values = FormValues::new().with(Field::Password, "secret1");
        let debug = format!("{:?}", values);
        assert!(!debug.contains("secret1"));
        assert!(debug.contains("<redacted>"));
    }
}
