//! The registration form component.

use formkit::Form;
use formkit::field::InputKind;
use formkit::submit::{SubmitHandler, SubmitOutcome};
use formkit::toggle::Toggle;
use formkit::validation::ValidationResult;
use log::debug;

use crate::config::SignupConfig;
use crate::error::SignupError;
use crate::field::Field;
use crate::messages::Messages;
use crate::schema::{build_schema, default_schema};
use crate::values::FormValues;
use crate::view::FieldView;

/// Character used by [`SignupForm::display_value`] for hidden passwords.
pub const MASK_CHAR: char = '•';

/// Registration form state.
///
/// Owns the values, the per-field errors and the password visibility flag.
/// Every handler is synchronous and takes `&mut self`.
///
/// # Example
///
/// ```ignore
/// let mut form = SignupForm::new();
/// form.set_field(Field::FirstName, "דנה");
/// // ...
/// match form.submit(&mut LogSubmitHandler::new()) {
///     SubmitOutcome::Submitted(values) => { /* handed off */ }
///     SubmitOutcome::Rejected(_) => { /* errors shown via form.view() */ }
/// }
/// ```
#[derive(Debug)]
pub struct SignupForm {
    form: Form<FormValues>,
    password_visibility: Toggle,
    messages: Messages,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupForm {
    /// Create a form with the default rules and messages.
    pub fn new() -> Self {
        Self::assemble(default_schema().clone(), SignupConfig::default())
    }

    /// Create a form from a custom configuration.
    pub fn with_config(config: SignupConfig) -> Result<Self, SignupError> {
        let schema = build_schema(&config)?;
        Ok(Self::assemble(schema, config))
    }

    fn assemble(schema: formkit::validation::Schema<FormValues>, config: SignupConfig) -> Self {
        let form = Form::new(schema)
            .mode(config.mode)
            .revalidate_mode(config.revalidate_mode)
            .error_display(config.error_display);
        let labels = &config.messages.labels;
        let password_visibility = Toggle::new(&labels.hide_password, &labels.show_password);

        Self {
            form,
            password_visibility,
            messages: config.messages,
        }
    }

    /// The underlying generic form, for bookkeeping queries.
    pub fn form(&self) -> &Form<FormValues> {
        &self.form
    }

    // -------------------------------------------------------------------------
    // Values
    // -------------------------------------------------------------------------

    /// Store a new value. Any text is accepted.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Store a new value addressed by its camelCase key.
    pub fn set_field_by_key(
        &mut self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<(), SignupError> {
        let field: Field = key.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Mark a field as having lost focus.
    pub fn blur(&mut self, field: Field) {
        self.form.blur(field);
    }

    pub fn values(&self) -> &FormValues {
        self.form.values()
    }

    pub fn value(&self, field: Field) -> &str {
        self.form.value(field)
    }

    /// Clear every value and error. The password visibility is kept.
    pub fn reset(&mut self) {
        self.form.reset();
    }

    // -------------------------------------------------------------------------
    // Validation & submission
    // -------------------------------------------------------------------------

    /// Validate the current values without changing what is displayed.
    pub fn validate(&self) -> ValidationResult<Field> {
        self.form.validate()
    }

    /// Error currently shown on a field.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.form.error(field)
    }

    /// Errors currently shown.
    pub fn errors(&self) -> ValidationResult<Field> {
        self.form.errors()
    }

    /// Run a submit attempt; see [`Form::submit`].
    pub fn submit<H>(&mut self, handler: &mut H) -> SubmitOutcome<FormValues>
    where
        H: SubmitHandler<FormValues> + ?Sized,
    {
        self.form.submit(handler)
    }

    // -------------------------------------------------------------------------
    // Password visibility
    // -------------------------------------------------------------------------

    /// Show or hide the password, returning whether it is now visible.
    pub fn toggle_password_visibility(&mut self) -> bool {
        let visible = self.password_visibility.toggle();
        debug!("password visible: {visible}");
        visible
    }

    pub fn is_password_visible(&self) -> bool {
        self.password_visibility.is_on()
    }

    /// Label of the visibility control for its current state.
    pub fn toggle_label(&self) -> &str {
        self.password_visibility.label()
    }

    /// How a field's input should be rendered right now.
    ///
    /// Only the password field follows the visibility toggle; the
    /// confirmation stays obscured.
    pub fn input_kind(&self, field: Field) -> InputKind {
        match field {
            Field::Password if self.is_password_visible() => InputKind::Text,
            _ => field.input_kind(),
        }
    }

    /// The value as it should appear on screen, masked when obscured.
    pub fn display_value(&self, field: Field) -> String {
        let value = self.value(field);
        if self.input_kind(field).is_masked() {
            MASK_CHAR.to_string().repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }

    // -------------------------------------------------------------------------
    // Rendering surface
    // -------------------------------------------------------------------------

    pub fn label(&self, field: Field) -> &str {
        self.messages.label(field)
    }

    pub fn submit_label(&self) -> &str {
        &self.messages.labels.submit
    }

    /// Snapshot of one field for display.
    pub fn view(&self, field: Field) -> FieldView {
        FieldView {
            field,
            label: self.label(field).to_string(),
            value: self.value(field).to_string(),
            error: self.error(field).map(str::to_owned),
            input_kind: self.input_kind(field),
            error_display: self
                .form
                .field(field)
                .map(|state| state.error_display())
                .unwrap_or_default(),
        }
    }

    /// Snapshots of every field, in form order.
    pub fn views(&self) -> Vec<FieldView> {
        Field::ALL.into_iter().map(|field| self.view(field)).collect()
    }
}
