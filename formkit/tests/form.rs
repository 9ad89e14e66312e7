mod common;

use common::{Key, Login, login, schema};
use formkit::prelude::*;

#[test]
fn test_new_form_starts_clean() {
    let form = Form::new(schema());
    assert_eq!(form.values(), &Login::default());
    assert_eq!(form.phase(), SubmitPhase::Editing);
    assert!(!form.is_dirty());
    assert!(!form.is_submitted());
    assert!(form.errors().is_valid());
}

#[test]
fn test_set_field_tracks_dirty() {
    let mut form = Form::new(schema());
    form.set_field(Key::Username, "ada");
    assert_eq!(form.value(Key::Username), "ada");
    assert_eq!(form.dirty_fields(), vec![Key::Username]);

    // Back to the default value is no longer dirty.
    form.set_field(Key::Username, "");
    assert!(!form.is_dirty());
}

#[test]
fn test_defaults_drive_dirty_tracking() {
    let mut form = Form::with_defaults(schema(), login("ada", "", ""));
    assert_eq!(form.value(Key::Username), "ada");

    form.set_field(Key::Username, "ada");
    assert!(!form.is_dirty());
}

#[test]
fn test_on_submit_mode_does_not_validate_edits() {
    let mut form = Form::new(schema());
    form.set_field(Key::Username, "a");
    form.blur(Key::Username);
    assert!(form.error(Key::Username).is_none());
    assert_eq!(form.touched_fields(), vec![Key::Username]);
}

#[test]
fn test_on_change_mode_validates_edited_field_only() {
    let mut form = Form::new(schema()).mode(ValidationMode::OnChange);
    form.set_field(Key::Username, "a");
    assert_eq!(form.error(Key::Username), Some("username too short"));
    assert!(form.error(Key::Password).is_none());

    form.set_field(Key::Username, "ada");
    assert!(form.error(Key::Username).is_none());
}

#[test]
fn test_on_blur_mode() {
    let mut form = Form::new(schema()).mode(ValidationMode::OnBlur);
    form.set_field(Key::Username, "a");
    assert!(form.error(Key::Username).is_none());

    form.blur(Key::Username);
    assert_eq!(form.error(Key::Username), Some("username too short"));
}

#[test]
fn test_on_touched_mode() {
    let mut form = Form::new(schema()).mode(ValidationMode::OnTouched);
    form.set_field(Key::Username, "a");
    assert!(form.error(Key::Username).is_none());

    form.blur(Key::Username);
    assert!(form.error(Key::Username).is_some());

    form.set_field(Key::Username, "ada");
    assert!(form.error(Key::Username).is_none());
}

#[test]
fn test_invalid_submit_attaches_errors_and_skips_handler() {
    let mut form = Form::new(schema());
    let mut calls = 0;

    let outcome = form.submit(&mut |_: &Login| calls += 1);

    assert_eq!(calls, 0);
    assert!(!outcome.is_submitted());
    let errors = outcome.errors().unwrap();
    assert_eq!(errors.error(Key::Username), Some("username required"));
    assert_eq!(form.error(Key::Username), Some("username required"));
    assert_eq!(form.touched_fields().len(), 3);
    assert_eq!(form.submit_count(), 1);
    assert!(!form.is_submit_successful());
    assert_eq!(form.phase(), SubmitPhase::Editing);
}

#[test]
fn test_valid_submit_calls_handler_once_with_values() {
    let mut form = Form::new(schema());
    form.set_field(Key::Username, "ada");
    form.set_field(Key::Password, "pass1");
    form.set_field(Key::Repeat, "pass1");

    let mut received = Vec::new();
    let outcome = form.submit(&mut |values: &Login| received.push(values.clone()));

    assert_eq!(received, vec![login("ada", "pass1", "pass1")]);
    assert_eq!(outcome, SubmitOutcome::Submitted(login("ada", "pass1", "pass1")));
    assert!(form.is_submit_successful());
    // Values are kept after a successful submit.
    assert_eq!(form.value(Key::Username), "ada");
}

#[test]
fn test_resubmit_clears_fixed_errors() {
    let mut form = Form::new(schema()).revalidate_mode(RevalidateMode::OnSubmit);
    form.set_field(Key::Password, "pass1");
    form.set_field(Key::Repeat, "pass1");
    form.submit(&mut |_: &Login| {});
    assert!(form.error(Key::Username).is_some());

    form.set_field(Key::Username, "ada");
    // Still shown until the next submit.
    assert!(form.error(Key::Username).is_some());

    let outcome = form.submit(&mut |_: &Login| {});
    assert!(outcome.is_submitted());
    assert!(form.errors().is_valid());
    assert_eq!(form.submit_count(), 2);
}

#[test]
fn test_revalidates_on_change_after_submit() {
    let mut form = Form::new(schema());
    form.submit(&mut |_: &Login| {});
    assert!(form.error(Key::Username).is_some());

    form.set_field(Key::Username, "ada");
    assert!(form.error(Key::Username).is_none());
}

#[test]
fn test_dependent_field_refreshes_after_submit() {
    let mut form = Form::new(schema());
    form.set_field(Key::Password, "pass1");
    form.set_field(Key::Repeat, "pass2");
    form.submit(&mut |_: &Login| {});
    assert_eq!(form.error(Key::Repeat), Some("passwords differ"));

    form.set_field(Key::Password, "pass2");
    assert!(form.error(Key::Repeat).is_none());
}

#[test]
fn test_dependent_field_untouched_stays_quiet() {
    let mut form = Form::new(schema()).mode(ValidationMode::OnChange);
    form.set_field(Key::Password, "pass1");
    assert!(form.error(Key::Repeat).is_none());
}

#[test]
fn test_reset_restores_defaults() {
    let mut form = Form::new(schema()).error_display(ErrorDisplay::Inline);
    form.set_field(Key::Username, "a");
    form.submit(&mut |_: &Login| {});

    form.reset();

    assert_eq!(form.values(), &Login::default());
    assert!(form.errors().is_valid());
    assert!(form.touched_fields().is_empty());
    assert_eq!(form.submit_count(), 0);
    assert_eq!(
        form.field(Key::Username).map(FieldState::error_display),
        Some(ErrorDisplay::Inline)
    );
}

#[test]
fn test_validate_does_not_touch_displayed_errors() {
    let form = Form::new(schema());
    assert!(form.validate().is_invalid());
    assert!(form.errors().is_valid());
}

struct Recorder {
    valid: usize,
    invalid: usize,
}

impl SubmitHandler<Login> for Recorder {
    fn on_valid_submit(&mut self, _values: &Login) {
        self.valid += 1;
    }

    fn on_invalid_submit(&mut self, _result: &ValidationResult<Key>) {
        self.invalid += 1;
    }
}

#[test]
fn test_handler_sees_both_paths() {
    let mut form = Form::new(schema());
    let mut recorder = Recorder { valid: 0, invalid: 0 };

    form.submit(&mut recorder);
    form.set_field(Key::Username, "ada");
    form.set_field(Key::Password, "pass1");
    form.set_field(Key::Repeat, "pass1");
    form.submit(&mut recorder);

    assert_eq!(recorder.invalid, 1);
    assert_eq!(recorder.valid, 1);
}
