//! Registration rules.
//!
//! | field           | rules, in order                                  |
//! |-----------------|--------------------------------------------------|
//! | firstName       | at most 10 chars, at least 2 chars               |
//! | lastName        | at most 10 chars, at least 2 chars               |
//! | email           | not empty (no format check unless strict)        |
//! | phone           | `05`, digit, optional `-`, seven digits          |
//! | password        | at least 2 chars, at most 8 chars, has a digit   |
//! | confirmPassword | not empty, then must equal password              |
//!
//! The password match is a record-level rule: it sees both values and its
//! message replaces any other confirmPassword message.

use std::sync::LazyLock;

use formkit::FormError;
use formkit::validation::{Schema, ValidationResult};
use log::debug;
use regex::Regex;

use crate::config::SignupConfig;
use crate::error::SignupError;
use crate::field::Field;
use crate::values::FormValues;

static DEFAULT_SCHEMA: LazyLock<Schema<FormValues>> = LazyLock::new(|| {
    build_schema(&SignupConfig::default()).expect("default registration schema is valid")
});

/// Build the registration schema for `config`.
pub fn build_schema(config: &SignupConfig) -> Result<Schema<FormValues>, SignupError> {
    let m = &config.messages;
    let (name_min, name_max) = (*config.name_length.start(), *config.name_length.end());
    let (password_min, password_max) = (
        *config.password_length.start(),
        *config.password_length.end(),
    );
    let phone = Regex::new(&config.phone_pattern).map_err(FormError::from)?;

    let mut schema = Schema::<FormValues>::new()
        .field(Field::FirstName)
        .max_length(name_max, m.too_long(name_max))
        .min_length(name_min, &m.first_name_required)
        .field(Field::LastName)
        .max_length(name_max, m.too_long(name_max))
        .min_length(name_min, &m.last_name_required)
        .field(Field::Email)
        .min_length(1, &m.email_required);
    if config.strict_email {
        schema = schema.email(&m.email_required);
    }

    let schema = schema
        .field(Field::Phone)
        .pattern(phone, &m.phone_invalid)
        .field(Field::Password)
        .min_length(password_min, m.password_too_short(password_min))
        .max_length(password_max, m.password_too_long(password_max))
        .any_char(|c| c.is_ascii_digit(), &m.password_needs_digit)
        .field(Field::ConfirmPassword)
        .min_length(1, &m.passwords_mismatch)
        .refine(
            Field::ConfirmPassword,
            |v: &FormValues| v.password == v.confirm_password,
            &m.passwords_mismatch,
        );

    debug!("built registration schema: {:?}", schema);
    Ok(schema)
}

/// The default registration schema.
pub fn default_schema() -> &'static Schema<FormValues> {
    &DEFAULT_SCHEMA
}

/// Validate `values` against the default rules.
pub fn validate(values: &FormValues) -> ValidationResult<Field> {
    DEFAULT_SCHEMA.validate(values)
}
