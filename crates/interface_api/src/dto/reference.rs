//! Reference data DTOs

use core_kernel::{LookupTable, ReferenceData};
use serde::Serialize;

/// One option of a select field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Options of one lookup table
#[derive(Debug, Serialize)]
pub struct LookupTableResponse {
    pub name: String,
    pub options: Vec<SelectOption>,
}

impl From<LookupTable> for LookupTableResponse {
    fn from(table: LookupTable) -> Self {
        Self {
            name: table.name().to_string(),
            options: options(table),
        }
    }
}

/// Every select field of the quote form
#[derive(Debug, Serialize)]
pub struct ReferenceDataResponse {
    pub version: String,
    pub companies: Vec<SelectOption>,
    pub languages: Vec<SelectOption>,
    pub installments: Vec<SelectOption>,
    pub term_durations: Vec<SelectOption>,
    pub franchise_amounts: Vec<SelectOption>,
    pub medical_insurance_amounts: Vec<SelectOption>,
    pub property_damage_amounts: Vec<SelectOption>,
}

impl From<&ReferenceData> for ReferenceDataResponse {
    fn from(reference: &ReferenceData) -> Self {
        Self {
            version: reference.version.to_string(),
            companies: options(reference.companies),
            languages: options(reference.languages),
            installments: options(reference.installment_options),
            term_durations: options(reference.term_options),
            franchise_amounts: options(reference.franchise_amounts),
            medical_insurance_amounts: options(reference.medical_insurance_amounts),
            property_damage_amounts: options(reference.property_damage_amounts),
        }
    }
}

fn options(table: LookupTable) -> Vec<SelectOption> {
    table
        .entries()
        .iter()
        .map(|entry| SelectOption {
            value: entry.id.to_string(),
            label: entry.label.to_string(),
        })
        .collect()
}
