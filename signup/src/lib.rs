//! Registration form: first name, last name, phone, email and a password pair.
//!
//! [`SignupForm`] tracks the values, validates them with the registration
//! rules and passes valid submissions to a [`SubmitHandler`]. Rendering is
//! left to the host; [`SignupForm::view`] exposes what a renderer needs.
//!
//! [`SubmitHandler`]: formkit::submit::SubmitHandler

pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod handler;
pub mod messages;
pub mod schema;
pub mod values;
pub mod view;

pub use config::SignupConfig;
pub use error::SignupError;
pub use field::Field;
pub use form::SignupForm;
pub use handler::LogSubmitHandler;
pub use messages::{Labels, Messages};
pub use schema::{build_schema, validate};
pub use values::FormValues;
pub use view::FieldView;

pub mod prelude {
    pub use crate::{
        Field, FieldView, FormValues, LogSubmitHandler, Messages, SignupConfig, SignupError,
        SignupForm, validate,
    };
    pub use formkit::prelude::*;
}
