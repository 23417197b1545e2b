//! Test Data Builders
//!
//! Provides a builder for form values with valid defaults, so tests only
//! spell out the fields they care about.

use domain_quote::{CoverageSection, FieldValue, FormValues};

use crate::fixtures::FormFixtures;

/// Builder for quote form values
#[derive(Debug, Clone)]
pub struct FormValuesBuilder {
    values: FormValues,
}

impl Default for FormValuesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FormValuesBuilder {
    /// Creates a builder that starts from a valid quote with no coverage
    pub fn new() -> Self {
        Self {
            values: FormFixtures::no_coverage(),
        }
    }

    /// Creates a builder with no fields at all
    pub fn empty() -> Self {
        Self {
            values: FormValues::new(),
        }
    }

    /// Sets a text field
    pub fn with_text(mut self, path: &str, value: impl Into<String>) -> Self {
        self.values.set(path, FieldValue::Text(value.into()));
        self
    }

    /// Sets a boolean field
    pub fn with_flag(mut self, path: &str, value: bool) -> Self {
        self.values.set(path, value);
        self
    }

    /// Sets an arbitrary field value
    pub fn with_value(mut self, path: &str, value: FieldValue) -> Self {
        self.values.set(path, value);
        self
    }

    /// Removes a field
    pub fn without(mut self, path: &str) -> Self {
        self.values.remove(path);
        self
    }

    /// Sets the customer name
    pub fn with_fullname(self, name: impl Into<String>) -> Self {
        self.with_text("fullname", name)
    }

    /// Sets the company id
    pub fn with_company(self, id: impl Into<String>) -> Self {
        self.with_text("company", id)
    }

    /// Switches a coverage section on with the given amounts
    pub fn with_coverage(
        self,
        section: CoverageSection,
        full_amount: &str,
        down_payment: &str,
        installments: &str,
    ) -> Self {
        let [full, down, monthly] = section.amount_paths();
        self.with_flag(&section.flag_path(), true)
            .with_text(&full, full_amount)
            .with_text(&down, down_payment)
            .with_text(&monthly, installments)
    }

    /// Switches a coverage section on without any amounts
    pub fn with_coverage_flag(self, section: CoverageSection, active: bool) -> Self {
        self.with_flag(&section.flag_path(), active)
    }

    /// Builds the form values
    pub fn build(self) -> FormValues {
        self.values
    }
}
