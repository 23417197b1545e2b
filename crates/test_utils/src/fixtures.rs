//! Pre-built Test Fixtures
//!
//! Provides ready-to-use form input and records for the quote scenarios used
//! across the test suite. These fixtures are consistent and predictable.

use chrono::{DateTime, TimeZone, Utc};
use domain_quote::{Coverage, CoverageAmounts, FormValues, QuoteRecord};
use serde_json::{json, Value};

/// Fixture for raw form input
pub struct FormFixtures;

impl FormFixtures {
    /// Jane Doe's quote as submitted by the form, with third party coverage
    pub fn jane_doe_json() -> Value {
        json!({
            "fullname": "Jane Doe",
            "quote": "Auto Insurance",
            "company": "id-3",
            "language": "id-1",
            "installments": "6",
            "term_duration_in_months": "12",
            "fee_amount": "$50",
            "complete": { "is_active": false },
            "third_party_coverage": {
                "is_active": true,
                "full_amount": "$800",
                "down_payment": "$100",
                "installments": "$66.67",
            },
            "has_renters": true,
            "is_car_financed": false,
            "is_rental_car": false,
            "franchise_amount": "id-2",
            "medical_insurance_amount": "id-1",
            "property_damage_insurance_amount": "id-3",
        })
    }

    /// Jane Doe's quote as flattened form values
    pub fn jane_doe() -> FormValues {
        FormValues::from_json(&Self::jane_doe_json()).unwrap()
    }

    /// A quote with both coverage sections switched off
    pub fn no_coverage_json() -> Value {
        json!({
            "fullname": "John Smith",
            "quote": "Basic Auto",
            "company": "id-1",
            "language": "id-2",
            "installments": "3",
            "term_duration_in_months": "6",
            "fee_amount": "$25",
            "complete": { "is_active": false },
            "third_party_coverage": { "is_active": false },
            "franchise_amount": "id-1",
            "medical_insurance_amount": "id-1",
            "property_damage_insurance_amount": "id-1",
        })
    }

    /// A quote with both coverage sections switched off
    pub fn no_coverage() -> FormValues {
        FormValues::from_json(&Self::no_coverage_json()).unwrap()
    }

    /// A quote with every field missing
    pub fn empty() -> FormValues {
        FormValues::new()
    }
}

/// Fixture for validated records
pub struct RecordFixtures;

impl RecordFixtures {
    /// The record Jane Doe's form validates into
    pub fn jane_doe() -> QuoteRecord {
        QuoteRecord {
            fullname: "Jane Doe".to_string(),
            quote: "Auto Insurance".to_string(),
            company: "id-3".to_string(),
            language: "id-1".to_string(),
            installments: "6".to_string(),
            term_duration_in_months: "12".to_string(),
            fee_amount: "$50".to_string(),
            complete: Coverage::Inactive,
            third_party_coverage: Coverage::Active(CoverageAmounts {
                full_amount: "$800".to_string(),
                down_payment: "$100".to_string(),
                installments: "$66.67".to_string(),
            }),
            has_renters: true,
            is_car_financed: false,
            is_rental_car: false,
            franchise_amount: "id-2".to_string(),
            medical_insurance_amount: "id-1".to_string(),
            property_damage_insurance_amount: "id-3".to_string(),
        }
    }

    /// A record with both coverage sections active
    pub fn full_coverage() -> QuoteRecord {
        QuoteRecord {
            complete: Coverage::Active(CoverageAmounts {
                full_amount: "$1,200".to_string(),
                down_payment: "$200".to_string(),
                installments: "$100".to_string(),
            }),
            is_car_financed: true,
            is_rental_car: true,
            ..Self::jane_doe()
        }
    }

    /// A record whose coded fields are not in any lookup table
    pub fn unknown_ids() -> QuoteRecord {
        QuoteRecord {
            company: "id-99".to_string(),
            franchise_amount: "id-42".to_string(),
            medical_insurance_amount: "custom".to_string(),
            property_damage_insurance_amount: "id-0".to_string(),
            ..Self::jane_doe()
        }
    }
}

/// Fixture for timestamps
pub struct TimeFixtures;

impl TimeFixtures {
    /// Render time used in layout tests (March 5, 2024, 14:30 UTC)
    pub fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap()
    }

    /// A later render time for idempotence checks
    pub fn later() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 28, 9, 0, 0).unwrap()
    }
}
