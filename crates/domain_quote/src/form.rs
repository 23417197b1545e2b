//! Quote form state
//!
//! Holds the values being edited and the errors from the last submit.
//! Toggling a coverage flag always resets that section's amounts, so a
//! section that is switched off never keeps stale figures around.

use tracing::{debug, warn};

use crate::error::QuoteError;
use crate::record::{CoverageSection, QuoteRecord};
use crate::validation::{FieldErrors, QuoteValidator};
use crate::values::{FieldValue, FormValues};

/// Editable state of one quote form
#[derive(Debug, Clone, Default)]
pub struct QuoteForm {
    values: FormValues,
    errors: FieldErrors,
}

impl QuoteForm {
    /// Creates an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form pre-filled with values
    pub fn with_values(values: FormValues) -> Self {
        Self {
            values,
            errors: FieldErrors::new(),
        }
    }

    /// Returns the current values
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Returns the errors from the last submit
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Reads the current value of a field
    pub fn watch(&self, path: &str) -> Option<&FieldValue> {
        self.values.get(path)
    }

    /// Sets a text field
    pub fn set_text(&mut self, path: &str, value: impl Into<String>) {
        self.values.set(path, FieldValue::Text(value.into()));
    }

    /// Sets a boolean field
    pub fn set_flag(&mut self, path: &str, value: bool) {
        self.values.set(path, value);
    }

    /// Returns true if a coverage section is switched on
    pub fn is_coverage_active(&self, section: CoverageSection) -> bool {
        self.values.flag(&section.flag_path()).unwrap_or(false)
    }

    /// Switches a coverage section on or off
    ///
    /// Clears the section's errors and resets its three amounts to empty,
    /// whatever they held before.
    pub fn set_coverage_active(&mut self, section: CoverageSection, active: bool) {
        self.values.set(section.flag_path(), active);
        self.values.remove(&section.path("active"));
        self.errors.clear_prefix(section.key());

        for path in section.amount_paths() {
            self.values.set(path, FieldValue::Text(String::new()));
        }

        debug!(section = section.key(), active, "Coverage section toggled");
    }

    /// Validates the current values
    ///
    /// On failure the field errors are kept on the form for display and
    /// returned; on success any previous errors are cleared.
    pub fn submit(&mut self) -> Result<QuoteRecord, QuoteError> {
        match QuoteValidator::validate(&self.values) {
            Ok(record) => {
                self.errors = FieldErrors::new();
                Ok(record)
            }
            Err(errors) => {
                warn!(error_count = errors.len(), fields = ?errors.paths(), "Quote form has errors");
                self.errors = errors.clone();
                Err(QuoteError::Validation(errors))
            }
        }
    }

    /// Clears all values and errors
    pub fn reset(&mut self) {
        self.values = FormValues::new();
        self.errors = FieldErrors::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_on_resets_amounts() {
        let mut form = QuoteForm::new();
        form.set_text("complete.full_amount", "$100");

        form.set_coverage_active(CoverageSection::Complete, true);

        assert!(form.is_coverage_active(CoverageSection::Complete));
        assert_eq!(form.values().text("complete.full_amount"), Some(""));
    }

    #[test]
    fn test_submit_keeps_errors() {
        let mut form = QuoteForm::new();
        let result = form.submit();

        assert!(matches!(result, Err(QuoteError::Validation(_))));
        assert!(form.errors().contains("fullname"));
        assert!(!form.errors().contains("has_renters"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = QuoteForm::new();
        form.set_text("fullname", "Jane");
        let _ = form.submit();
        form.reset();

        assert!(form.values().is_empty());
        assert!(form.errors().is_empty());
    }
}
