//! Default submit handler.

use formkit::submit::SubmitHandler;
use formkit::validation::ValidationResult;
use log::{debug, info};

use crate::field::Field;
use crate::values::FormValues;

/// Logs each valid submission.
///
/// Stands in for a real backend call: the record is written to the log and
/// nothing else happens.
#[derive(Debug, Default)]
pub struct LogSubmitHandler {
    submissions: usize,
}

impl LogSubmitHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of valid submissions seen.
    pub fn submissions(&self) -> usize {
        self.submissions
    }
}

impl SubmitHandler<FormValues> for LogSubmitHandler {
    fn on_valid_submit(&mut self, values: &FormValues) {
        self.submissions += 1;
        info!("registration submitted: {:?}", values);
    }

    fn on_invalid_submit(&mut self, result: &ValidationResult<Field>) {
        let fields: Vec<_> = result.errors().iter().map(|e| e.field.as_str()).collect();
        debug!("registration rejected, invalid fields: {}", fields.join(", "));
    }
}
