//! Declarative validation for form records.
//!
//! A [`Schema`] is an ordered list of rules per field plus record-level
//! refinements. Running it is pure: the same record always yields the same
//! [`ValidationResult`].
//!
//! # Example
//!
//! ```ignore
//! use formkit::validation::Schema;
//!
//! let schema = Schema::<Login>::new()
//!     .field(LoginField::Username)
//!         .required("Username is required")
//!         .min_length(3, "Username must be at least 3 characters")
//!     .field(LoginField::Password)
//!         .min_length(8, "Password is too short")
//!     .field(LoginField::Repeat)
//!         .required("Repeat the password")
//!     .refine(LoginField::Repeat, |l: &Login| l.password == l.repeat, "Passwords differ")
//!     .build();
//!
//! let result = schema.validate(&login);
//! if result.is_valid() {
//!     // Proceed with form submission
//! }
//! ```

mod error_display;
mod result;
mod schema;

pub use error_display::ErrorDisplay;
pub use result::{FieldError, ValidationResult};
pub use schema::{FieldBuilder, Schema};
