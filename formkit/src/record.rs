//! Record trait for the values a form collects.

use std::fmt;
use std::hash::Hash;

/// A flat record of text fields addressed by a key type.
///
/// The record is the single source of truth for field values. Validation
/// always runs against a whole record, so cross-field rules can see every
/// value at once.
pub trait FormRecord: Clone + Default + PartialEq {
    /// Identifier naming one value slot.
    type Key: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// Every key, in form order.
    fn keys() -> &'static [Self::Key];

    /// Get the current text of a field.
    fn get(&self, key: Self::Key) -> &str;

    /// Replace the text of a field.
    fn set(&mut self, key: Self::Key, value: String);

    /// Keys whose validity depends on `key`.
    ///
    /// Used when a single field is re-validated after an edit, so that
    /// dependent fields refresh too.
    fn dependents(_key: Self::Key) -> &'static [Self::Key] {
        &[]
    }
}
