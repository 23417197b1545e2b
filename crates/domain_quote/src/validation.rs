//! Quote validation rules
//!
//! This module checks raw form values against the quote schema and builds a
//! [`QuoteRecord`] when every rule passes.
//!
//! # Validation Rules
//!
//! ## Scalar Fields
//! - `fullname`, `quote`, `company`, `language`: at least 2 characters
//! - `installments`: at least 1 character
//! - `term_duration_in_months`, `fee_amount`, `franchise_amount`,
//!   `medical_insurance_amount`, `property_damage_insurance_amount`: required
//!
//! ## Flags
//! - `has_renters`, `is_car_financed`, `is_rental_car`: default to `false`
//!
//! ## Coverage Sections
//! - Flag at `<section>.is_active` (`<section>.active` accepted as an alias)
//! - Flag true: `full_amount`, `down_payment`, `installments` required and non-empty
//! - A scalar where a section object belongs is rejected
//! - Flag false or absent: amounts ignored
//!
//! No cross-field rules are applied; a down payment larger than the full
//! amount is accepted.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::{Coverage, CoverageAmounts, CoverageSection, QuoteRecord};
use crate::values::{FieldValue, FormValues};

const REQUIRED: &str = "Required";
const INVALID_DISCRIMINATOR: &str = "Invalid discriminator value. Expected true | false";

/// Field-level validation errors, keyed by field path
///
/// Each path holds a single message: the first rule it broke.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Creates an empty error set
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error for a path, keeping any earlier message
    pub fn add(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.entry(path.into()).or_insert_with(|| message.into());
    }

    /// Returns the message for a path
    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    /// Returns true if the path has an error
    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    /// Iterates over (path, message) pairs in path order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(path, message)| (path.as_str(), message.as_str()))
    }

    /// Returns all paths with errors
    pub fn paths(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// Removes errors at `prefix` and every path nested under it
    pub fn clear_prefix(&mut self, prefix: &str) {
        let nested = format!("{}.", prefix);
        self.0
            .retain(|path, _| path != prefix && !path.starts_with(&nested));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|(path, message)| format!("{}: {}", path, message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// Validator for quote submissions
///
/// Stateless: every call sees only the values it is given.
///
/// # Examples
///
/// ```rust
/// use domain_quote::{FormValues, QuoteValidator};
///
/// let values: FormValues = [("fullname", "J")].into_iter().collect();
/// let errors = QuoteValidator::validate(&values).unwrap_err();
///
/// assert_eq!(
///     errors.get("fullname"),
///     Some("Fullname must be at least 2 characters.")
/// );
/// assert_eq!(errors.get("fee_amount"), Some("Required"));
/// ```
pub struct QuoteValidator;

impl QuoteValidator {
    /// Validates raw form values
    ///
    /// # Arguments
    ///
    /// * `values` - The raw form values, keyed by field path
    ///
    /// # Returns
    ///
    /// The validated `QuoteRecord`, or every field error found
    pub fn validate(values: &FormValues) -> Result<QuoteRecord, FieldErrors> {
        let mut errors = FieldErrors::new();

        let fullname = Self::text_min(
            values,
            "fullname",
            2,
            "Fullname must be at least 2 characters.",
            &mut errors,
        );
        let quote = Self::text_min(
            values,
            "quote",
            2,
            "Quote must be at least 2 characters.",
            &mut errors,
        );
        let company = Self::text_min(
            values,
            "company",
            2,
            "Company must be at least 2 characters.",
            &mut errors,
        );
        let installments = Self::text_min(
            values,
            "installments",
            1,
            "Installments must be at least 1 character.",
            &mut errors,
        );
        let language = Self::text_min(
            values,
            "language",
            2,
            "Language must be at least 2 characters.",
            &mut errors,
        );

        let complete = Self::coverage(values, CoverageSection::Complete, &mut errors);
        let third_party_coverage = Self::coverage(values, CoverageSection::ThirdParty, &mut errors);

        let fee_amount = Self::text(values, "fee_amount", &mut errors);
        let has_renters = Self::flag(values, "has_renters", &mut errors);
        let is_car_financed = Self::flag(values, "is_car_financed", &mut errors);
        let franchise_amount = Self::text(values, "franchise_amount", &mut errors);
        let medical_insurance_amount = Self::text(values, "medical_insurance_amount", &mut errors);
        let property_damage_insurance_amount =
            Self::text(values, "property_damage_insurance_amount", &mut errors);
        let is_rental_car = Self::flag(values, "is_rental_car", &mut errors);
        let term_duration_in_months = Self::text(values, "term_duration_in_months", &mut errors);

        // Every None above has already recorded an error.
        let (
            Some(fullname),
            Some(quote),
            Some(company),
            Some(language),
            Some(installments),
            Some(term_duration_in_months),
            Some(fee_amount),
            Some(franchise_amount),
            Some(medical_insurance_amount),
            Some(property_damage_insurance_amount),
        ) = (
            fullname,
            quote,
            company,
            language,
            installments,
            term_duration_in_months,
            fee_amount,
            franchise_amount,
            medical_insurance_amount,
            property_damage_insurance_amount,
        )
        else {
            return Err(errors);
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(QuoteRecord {
            fullname,
            quote,
            company,
            language,
            installments,
            term_duration_in_months,
            fee_amount,
            complete,
            third_party_coverage,
            has_renters,
            is_car_financed,
            is_rental_car,
            franchise_amount,
            medical_insurance_amount,
            property_damage_insurance_amount,
        })
    }

    /// Reads a required text field
    fn text(values: &FormValues, path: &str, errors: &mut FieldErrors) -> Option<String> {
        match values.get(path) {
            None => {
                errors.add(path, REQUIRED);
                None
            }
            Some(FieldValue::Text(text)) => Some(text.clone()),
            Some(other) => {
                errors.add(path, format!("Expected string, received {}", other.kind()));
                None
            }
        }
    }

    /// Reads a required text field with a minimum character count
    fn text_min(
        values: &FormValues,
        path: &str,
        min_chars: usize,
        message: &str,
        errors: &mut FieldErrors,
    ) -> Option<String> {
        let text = Self::text(values, path, errors)?;
        if text.chars().count() < min_chars {
            errors.add(path, message);
            return None;
        }
        Some(text)
    }

    /// Reads a boolean field, defaulting to false when absent
    fn flag(values: &FormValues, path: &str, errors: &mut FieldErrors) -> bool {
        match values.get(path) {
            None => false,
            Some(FieldValue::Flag(flag)) => *flag,
            Some(other) => {
                errors.add(path, format!("Expected boolean, received {}", other.kind()));
                false
            }
        }
    }

    /// Selects and validates the variant of a coverage section
    fn coverage(values: &FormValues, section: CoverageSection, errors: &mut FieldErrors) -> Coverage {
        if let Some(value) = values.get(section.key()) {
            errors.add(section.key(), format!("Expected object, received {}", value.kind()));
            return Coverage::Inactive;
        }

        let mut flag_path = section.flag_path();
        let mut flag = values.get(&flag_path);
        if flag.is_none() {
            flag_path = section.path("active");
            flag = values.get(&flag_path);
        }

        match flag {
            None | Some(FieldValue::Flag(false)) => Coverage::Inactive,
            Some(FieldValue::Flag(true)) => {
                let [full_amount, down_payment, installments] =
                    section.amount_paths().map(|path| Self::amount(values, &path, errors));

                match (full_amount, down_payment, installments) {
                    (Some(full_amount), Some(down_payment), Some(installments)) => {
                        Coverage::Active(CoverageAmounts {
                            full_amount,
                            down_payment,
                            installments,
                        })
                    }
                    _ => Coverage::Inactive,
                }
            }
            Some(_) => {
                errors.add(flag_path, INVALID_DISCRIMINATOR);
                Coverage::Inactive
            }
        }
    }

    /// Reads an amount of an active coverage section; empty counts as missing
    fn amount(values: &FormValues, path: &str, errors: &mut FieldErrors) -> Option<String> {
        let text = Self::text(values, path, errors)?;
        if text.is_empty() {
            errors.add(path, REQUIRED);
            return None;
        }
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_values() -> FormValues {
        FormValues::from_json(&json!({
            "fullname": "Jane Doe",
            "quote": "Auto Insurance",
            "company": "id-3",
            "language": "id-1",
            "installments": "6",
            "term_duration_in_months": "12",
            "fee_amount": "$50",
            "franchise_amount": "id-2",
            "medical_insurance_amount": "id-1",
            "property_damage_insurance_amount": "id-3",
        }))
        .unwrap()
    }

    #[test]
    fn test_valid_values_without_coverage() {
        let record = QuoteValidator::validate(&valid_values()).unwrap();
        assert_eq!(record.complete, Coverage::Inactive);
        assert_eq!(record.third_party_coverage, Coverage::Inactive);
        assert!(!record.has_renters);
        assert!(!record.is_car_financed);
        assert!(!record.is_rental_car);
    }

    #[test]
    fn test_short_fullname() {
        let mut values = valid_values();
        values.set("fullname", "J");
        let errors = QuoteValidator::validate(&values).unwrap_err();
        assert_eq!(errors.get("fullname"), Some("Fullname must be at least 2 characters."));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_missing_field_is_required() {
        let mut values = valid_values();
        values.remove("term_duration_in_months");
        let errors = QuoteValidator::validate(&values).unwrap_err();
        assert_eq!(errors.get("term_duration_in_months"), Some("Required"));
    }

    #[test]
    fn test_plain_text_fields_accept_empty_string() {
        let mut values = valid_values();
        values.set("fee_amount", "");
        assert!(QuoteValidator::validate(&values).is_ok());
    }

    #[test]
    fn test_active_coverage_empty_amount() {
        let mut values = valid_values();
        values.set("complete.is_active", true);
        values.set("complete.full_amount", "$900");
        values.set("complete.down_payment", "");
        values.set("complete.installments", "$75");
        let errors = QuoteValidator::validate(&values).unwrap_err();
        assert_eq!(errors.paths(), vec!["complete.down_payment"]);
    }

    #[test]
    fn test_active_alias_selects_variant() {
        let mut values = valid_values();
        values.set("third_party_coverage.active", true);
        let errors = QuoteValidator::validate(&values).unwrap_err();
        assert!(errors.contains("third_party_coverage.full_amount"));
    }

    #[test]
    fn test_invalid_discriminator() {
        let mut values = valid_values();
        values.set("complete.is_active", "yes");
        let errors = QuoteValidator::validate(&values).unwrap_err();
        assert_eq!(errors.get("complete.is_active"), Some(INVALID_DISCRIMINATOR));
    }

    #[test]
    fn test_flag_with_wrong_type() {
        let mut values = valid_values();
        values.set("has_renters", "true");
        let errors = QuoteValidator::validate(&values).unwrap_err();
        assert_eq!(errors.get("has_renters"), Some("Expected boolean, received string"));
    }

    #[test]
    fn test_clear_prefix() {
        let mut errors = FieldErrors::new();
        errors.add("complete", "x");
        errors.add("complete.full_amount", "Required");
        errors.add("completeness", "y");
        errors.clear_prefix("complete");
        assert_eq!(errors.paths(), vec!["completeness"]);
    }

    #[test]
    fn test_first_message_wins() {
        let mut errors = FieldErrors::new();
        errors.add("fullname", "first");
        errors.add("fullname", "second");
        assert_eq!(errors.get("fullname"), Some("first"));
    }
}
