//! Schema builder for the fluent validation API.

use std::fmt;
use std::sync::Arc;

use log::trace;
use regex::Regex;

use super::result::{FieldError, ValidationResult};
use crate::record::FormRecord;

/// Type alias for single-field rule predicates.
type Check = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Type alias for record-level refinement predicates.
type RecordCheck<R> = Arc<dyn Fn(&R) -> bool + Send + Sync>;

/// A predicate and the message reported when it fails.
#[derive(Clone)]
struct Rule {
    check: Check,
    message: String,
}

/// Ordered rules for one field.
#[derive(Clone)]
struct FieldEntry<K> {
    key: K,
    rules: Vec<Rule>,
}

/// A rule over the whole record whose failure lands on one field.
#[derive(Clone)]
struct Refinement<R: FormRecord> {
    field: R::Key,
    check: RecordCheck<R>,
    message: String,
}

/// Declarative rule set for a [`FormRecord`].
///
/// Field rules run in declaration order and stop at the first failure, so
/// each field reports exactly one message. Refinements run afterwards against
/// the whole record; a failing refinement overwrites whatever message its
/// target field already had.
///
/// # Example
///
/// ```ignore
/// let schema = Schema::new()
///     .field(Key::Name)
///         .min_length(2, "Name is required")
///     .field(Key::Confirm)
///         .required("Confirm your password")
///     .refine(Key::Confirm, |r: &Record| r.password == r.confirm, "Passwords differ")
///     .build();
///
/// let result = schema.validate(&record);
/// ```
#[derive(Clone)]
pub struct Schema<R: FormRecord> {
    fields: Vec<FieldEntry<R::Key>>,
    refinements: Vec<Refinement<R>>,
}

impl<R: FormRecord> Schema<R> {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            refinements: Vec::new(),
        }
    }

    /// Start adding rules for a field.
    ///
    /// Declaring the same field twice appends to its existing rules.
    pub fn field(self, key: R::Key) -> FieldBuilder<R> {
        FieldBuilder {
            schema: self,
            key,
            rules: Vec::new(),
        }
    }

    /// Add a record-level rule reported on `field` when it fails.
    pub fn refine<F>(mut self, field: R::Key, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        self.refinements.push(Refinement {
            field,
            check: Arc::new(f),
            message: msg.into(),
        });
        self
    }

    /// Run one validation pass over `record`.
    ///
    /// Pure: the schema holds no state between passes.
    pub fn validate(&self, record: &R) -> ValidationResult<R::Key> {
        let mut errors: Vec<FieldError<R::Key>> = Vec::new();

        for entry in &self.fields {
            let value = record.get(entry.key);
            if let Some(rule) = entry.rules.iter().find(|rule| !(rule.check)(value)) {
                errors.push(FieldError::new(entry.key, rule.message.clone()));
            }
        }

        for refinement in &self.refinements {
            if (refinement.check)(record) {
                continue;
            }
            match errors.iter_mut().find(|e| e.field == refinement.field) {
                Some(existing) => existing.message.clone_from(&refinement.message),
                None => errors.push(FieldError::new(
                    refinement.field,
                    refinement.message.clone(),
                )),
            }
        }

        errors.sort_by_key(|e| R::keys().iter().position(|k| *k == e.field));
        trace!("validation pass finished with {} error(s)", errors.len());
        ValidationResult::from_errors(errors)
    }

    /// Number of fields carrying at least one rule.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl<R: FormRecord> Default for Schema<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: FormRecord> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<_> = self
            .fields
            .iter()
            .map(|entry| (entry.key, entry.rules.len()))
            .collect();
        f.debug_struct("Schema")
            .field("fields", &fields)
            .field("refinements", &self.refinements.len())
            .finish()
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder<R: FormRecord> {
    schema: Schema<R>,
    key: R::Key,
    rules: Vec<Rule>,
}

impl<R: FormRecord> FieldBuilder<R> {
    /// Add a custom validation rule.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule {
            check: Arc::new(f),
            message: msg.into(),
        });
        self
    }

    /// Continue to the next field.
    pub fn field(self, key: R::Key) -> FieldBuilder<R> {
        self.finalize().field(key)
    }

    /// Finish this field and add a record-level rule.
    pub fn refine<F>(self, field: R::Key, f: F, msg: impl Into<String>) -> Schema<R>
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        self.finalize().refine(field, f, msg)
    }

    /// Finish building the schema.
    pub fn build(self) -> Schema<R> {
        self.finalize()
    }

    fn finalize(self) -> Schema<R> {
        let mut schema = self.schema;
        match schema.fields.iter_mut().find(|entry| entry.key == self.key) {
            Some(entry) => entry.rules.extend(self.rules),
            None => schema.fields.push(FieldEntry {
                key: self.key,
                rules: self.rules,
            }),
        }
        schema
    }

    // -------------------------------------------------------------------------
    // Built-in rules
    // -------------------------------------------------------------------------

    /// Require the field to contain something other than whitespace.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() >= min, msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() <= max, msg)
    }

    /// Require the value to match a regex.
    pub fn pattern(self, re: Regex, msg: impl Into<String>) -> Self {
        self.rule(move |v| re.is_match(v), msg)
    }

    /// Require a syntactically valid email address.
    ///
    /// Empty values pass; combine with [`required`](Self::required) or
    /// [`min_length`](Self::min_length) to reject them.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(
            |v| v.is_empty() || email_address::EmailAddress::is_valid(v),
            msg,
        )
    }

    /// Require at least one character matching `pred`.
    pub fn any_char<P>(self, pred: P, msg: impl Into<String>) -> Self
    where
        P: Fn(char) -> bool + Send + Sync + 'static,
    {
        self.rule(move |v| v.chars().any(&pred), msg)
    }

    /// Require the value to contain a substring.
    pub fn contains(self, substr: impl Into<String>, msg: impl Into<String>) -> Self {
        let substr = substr.into();
        self.rule(move |v| v.contains(&substr), msg)
    }
}
