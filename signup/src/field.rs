//! Field keys of the registration form.

use std::fmt;
use std::str::FromStr;

use formkit::FormError;
use formkit::field::InputKind;
use serde::{Deserialize, Serialize};

/// One of the six value slots of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields, in validation order.
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// The camelCase key used in serialized records.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    /// Input kind before any visibility toggle is applied.
    pub fn input_kind(self) -> InputKind {
        match self {
            Field::FirstName | Field::LastName => InputKind::Text,
            Field::Email => InputKind::Email,
            Field::Phone => InputKind::Phone,
            Field::Password | Field::ConfirmPassword => InputKind::Password,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::unknown_field(s))
    }
}
