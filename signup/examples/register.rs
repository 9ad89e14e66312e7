//! Registration Example
//!
//! Drives the signup form the way a UI would: a first submit with a name
//! that is too short, a correction, then a successful submit. Handler output
//! goes to `register.log`.

use std::fs::File;

use log::LevelFilter;
use signup::prelude::*;
use simplelog::{Config, WriteLogger};

fn print_errors(form: &SignupForm) {
    for view in form.views() {
        if let Some(error) = &view.error {
            println!("  {} ({}): {}", view.label, view.field, error);
        }
    }
}

fn main() {
    // Initialize file logging
    if let Ok(log_file) = File::create("register.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let mut form = SignupForm::new();
    let mut handler = LogSubmitHandler::new();

    form.set_field(Field::FirstName, "ד");
    form.set_field(Field::LastName, "לוי");
    form.set_field(Field::Email, "a@b.com");
    form.set_field(Field::Phone, "050-1234567");
    form.set_field(Field::Password, "abc1");
    form.set_field(Field::ConfirmPassword, "abc1");

    if let SubmitOutcome::Rejected(_) = form.submit(&mut handler) {
        println!("Rejected:");
        print_errors(&form);
    }

    form.set_field(Field::FirstName, "דנה");
    form.toggle_password_visibility();
    println!("{}: {}", form.label(Field::Password), form.display_value(Field::Password));

    match form.submit(&mut handler) {
        SubmitOutcome::Submitted(values) => println!("Submitted: {:?}", values),
        SubmitOutcome::Rejected(_) => print_errors(&form),
    }
}
