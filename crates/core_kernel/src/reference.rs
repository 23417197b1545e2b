//! Reference data for the quote form
//!
//! Coded ids (`"id-3"`) travel through the form in place of display values.
//! The tables here resolve them back to labels. They are fixed at compile
//! time and handed to consumers by value, so nothing can mutate them at
//! runtime.
//!
//! Changing any entry changes rendered output: bump
//! [`REFERENCE_DATA_VERSION`] together with the table.

use serde::Serialize;

use crate::error::CoreError;

/// Version of the tables below
pub const REFERENCE_DATA_VERSION: &str = "2025.1";

/// A single id -> label pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LookupEntry {
    pub id: &'static str,
    pub label: &'static str,
}

impl LookupEntry {
    const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// A named, read-only lookup table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LookupTable {
    name: &'static str,
    entries: &'static [LookupEntry],
}

impl LookupTable {
    /// Creates a table over static entries
    pub const fn new(name: &'static str, entries: &'static [LookupEntry]) -> Self {
        Self { name, entries }
    }

    /// Returns the table name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns all entries in declaration order
    pub fn entries(&self) -> &'static [LookupEntry] {
        self.entries
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the label for an id
    pub fn get(&self, id: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.label)
    }

    /// Resolves an id to its label, falling back to the id itself
    ///
    /// An unknown id is not an error: the raw id is displayed instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use core_kernel::ReferenceData;
    ///
    /// let companies = ReferenceData::standard().companies;
    /// assert_eq!(companies.label("id-3"), "Progressive");
    /// assert_eq!(companies.label("id-99"), "id-99");
    /// ```
    pub fn label<'a>(&self, id: &'a str) -> &'a str {
        self.get(id).unwrap_or(id)
    }

    /// Returns true if the id is present in the table
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

static COMPANIES: [LookupEntry; 6] = [
    LookupEntry::new("id-1", "Bristol West"),
    LookupEntry::new("id-2", "National General"),
    LookupEntry::new("id-3", "Progressive"),
    LookupEntry::new("id-4", "State Farm"),
    LookupEntry::new("id-5", "Travelers"),
    LookupEntry::new("id-6", "USAA"),
];

static FRANCHISE_AMOUNTS: [LookupEntry; 3] = [
    LookupEntry::new("id-1", "$500"),
    LookupEntry::new("id-2", "$1,000"),
    LookupEntry::new("id-3", "$1,500"),
];

static MEDICAL_INSURANCE_AMOUNTS: [LookupEntry; 3] = [
    LookupEntry::new("id-1", "$5,000"),
    LookupEntry::new("id-2", "$10,000"),
    LookupEntry::new("id-3", "$25,000"),
];

static PROPERTY_DAMAGE_AMOUNTS: [LookupEntry; 3] = [
    LookupEntry::new("id-1", "$10,000"),
    LookupEntry::new("id-2", "$25,000"),
    LookupEntry::new("id-3", "$50,000"),
];

static LANGUAGES: [LookupEntry; 3] = [
    LookupEntry::new("id-1", "English"),
    LookupEntry::new("id-2", "Spanish"),
    LookupEntry::new("id-3", "Portuguese"),
];

static INSTALLMENT_OPTIONS: [LookupEntry; 4] = [
    LookupEntry::new("3", "3"),
    LookupEntry::new("6", "6"),
    LookupEntry::new("9", "9"),
    LookupEntry::new("12", "12"),
];

static TERM_OPTIONS: [LookupEntry; 2] = [
    LookupEntry::new("6", "6"),
    LookupEntry::new("12", "12"),
];

/// The full set of lookup tables used by the quote form and renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceData {
    pub version: &'static str,
    pub companies: LookupTable,
    pub franchise_amounts: LookupTable,
    pub medical_insurance_amounts: LookupTable,
    pub property_damage_amounts: LookupTable,
    pub languages: LookupTable,
    pub installment_options: LookupTable,
    pub term_options: LookupTable,
}

impl ReferenceData {
    /// Returns the standard tables
    pub const fn standard() -> Self {
        Self {
            version: REFERENCE_DATA_VERSION,
            companies: LookupTable::new("companies", &COMPANIES),
            franchise_amounts: LookupTable::new("franchise_amounts", &FRANCHISE_AMOUNTS),
            medical_insurance_amounts: LookupTable::new(
                "medical_insurance_amounts",
                &MEDICAL_INSURANCE_AMOUNTS,
            ),
            property_damage_amounts: LookupTable::new(
                "property_damage_amounts",
                &PROPERTY_DAMAGE_AMOUNTS,
            ),
            languages: LookupTable::new("languages", &LANGUAGES),
            installment_options: LookupTable::new("installment_options", &INSTALLMENT_OPTIONS),
            term_options: LookupTable::new("term_options", &TERM_OPTIONS),
        }
    }

    /// Returns every table
    pub fn tables(&self) -> [LookupTable; 7] {
        [
            self.companies,
            self.franchise_amounts,
            self.medical_insurance_amounts,
            self.property_damage_amounts,
            self.languages,
            self.installment_options,
            self.term_options,
        ]
    }

    /// Finds a table by name
    pub fn table(&self, name: &str) -> Result<LookupTable, CoreError> {
        self.tables()
            .into_iter()
            .find(|table| table.name() == name)
            .ok_or_else(|| CoreError::not_found(format!("lookup table '{}'", name)))
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::standard()
    }
}
