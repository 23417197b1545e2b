//! The validated quote record
//!
//! A [`QuoteRecord`] only ever comes out of validation. It is built from
//! form input, rendered once and dropped; nothing here is persisted.

use serde::{Deserialize, Serialize};

/// The three amounts required by an active coverage section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageAmounts {
    /// Full coverage amount
    pub full_amount: String,
    /// Down payment
    pub down_payment: String,
    /// Installment (monthly payment) amount
    pub installments: String,
}

/// An optional coverage section, switched on by its own flag
///
/// On the wire this is `{"is_active": true, "full_amount": .., ..}` or
/// `{"is_active": false}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "CoverageRepr", try_from = "CoverageRepr")]
pub enum Coverage {
    Active(CoverageAmounts),
    #[default]
    Inactive,
}

impl Coverage {
    /// Returns true if the section is switched on
    pub fn is_active(&self) -> bool {
        matches!(self, Coverage::Active(_))
    }

    /// Returns the amounts of an active section
    pub fn amounts(&self) -> Option<&CoverageAmounts> {
        match self {
            Coverage::Active(amounts) => Some(amounts),
            Coverage::Inactive => None,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct CoverageRepr {
    is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    full_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    down_payment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    installments: Option<String>,
}

impl From<Coverage> for CoverageRepr {
    fn from(coverage: Coverage) -> Self {
        match coverage {
            Coverage::Active(amounts) => CoverageRepr {
                is_active: true,
                full_amount: Some(amounts.full_amount),
                down_payment: Some(amounts.down_payment),
                installments: Some(amounts.installments),
            },
            Coverage::Inactive => CoverageRepr {
                is_active: false,
                full_amount: None,
                down_payment: None,
                installments: None,
            },
        }
    }
}

impl TryFrom<CoverageRepr> for Coverage {
    type Error = String;

    fn try_from(repr: CoverageRepr) -> Result<Self, Self::Error> {
        if !repr.is_active {
            return Ok(Coverage::Inactive);
        }
        match (repr.full_amount, repr.down_payment, repr.installments) {
            (Some(full_amount), Some(down_payment), Some(installments)) => {
                Ok(Coverage::Active(CoverageAmounts {
                    full_amount,
                    down_payment,
                    installments,
                }))
            }
            _ => Err("active coverage requires full_amount, down_payment and installments".to_string()),
        }
    }
}

/// Identifies one of the two coverage sections of a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageSection {
    Complete,
    ThirdParty,
}

impl CoverageSection {
    /// Amount fields carried by every section, in display order
    pub const AMOUNT_FIELDS: [&'static str; 3] = ["full_amount", "down_payment", "installments"];

    /// Both sections in display order
    pub const ALL: [CoverageSection; 2] = [CoverageSection::Complete, CoverageSection::ThirdParty];

    /// Returns the field path prefix of the section
    pub fn key(&self) -> &'static str {
        match self {
            CoverageSection::Complete => "complete",
            CoverageSection::ThirdParty => "third_party_coverage",
        }
    }

    /// Returns the section heading
    pub fn title(&self) -> &'static str {
        match self {
            CoverageSection::Complete => "Complete Coverage",
            CoverageSection::ThirdParty => "Third Party Coverage",
        }
    }

    /// Returns the path of a field inside the section
    pub fn path(&self, field: &str) -> String {
        format!("{}.{}", self.key(), field)
    }

    /// Returns the path of the activation flag
    pub fn flag_path(&self) -> String {
        self.path("is_active")
    }

    /// Returns the paths of the three amount fields
    pub fn amount_paths(&self) -> [String; 3] {
        Self::AMOUNT_FIELDS.map(|field| self.path(field))
    }
}

/// A validated insurance quote submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Name of the person requesting the quote
    pub fullname: String,
    /// Quote title
    pub quote: String,
    /// Insurance company id
    pub company: String,
    /// Quote language id
    pub language: String,
    /// Number of installments
    pub installments: String,
    /// Term duration in months
    pub term_duration_in_months: String,
    /// Formatted fee amount
    pub fee_amount: String,
    pub complete: Coverage,
    pub third_party_coverage: Coverage,
    pub has_renters: bool,
    pub is_car_financed: bool,
    pub is_rental_car: bool,
    /// Franchise tier id
    pub franchise_amount: String,
    /// Medical insurance tier id
    pub medical_insurance_amount: String,
    /// Property damage tier id
    pub property_damage_insurance_amount: String,
}

impl QuoteRecord {
    /// Returns the coverage for a section
    pub fn coverage(&self, section: CoverageSection) -> &Coverage {
        match section {
            CoverageSection::Complete => &self.complete,
            CoverageSection::ThirdParty => &self.third_party_coverage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_coverage_is_inactive() {
        assert_eq!(Coverage::default(), Coverage::Inactive);
    }

    fn amounts() -> CoverageAmounts {
        CoverageAmounts {
            full_amount: "$800".to_string(),
            down_payment: "$100".to_string(),
            installments: "$66.67".to_string(),
        }
    }

    #[test]
    fn test_active_coverage_serializes_with_flag() {
        let json = serde_json::to_value(Coverage::Active(amounts())).unwrap();
        assert_eq!(
            json,
            json!({
                "is_active": true,
                "full_amount": "$800",
                "down_payment": "$100",
                "installments": "$66.67",
            })
        );
    }

    #[test]
    fn test_inactive_coverage_serializes_flag_only() {
        let json = serde_json::to_value(Coverage::Inactive).unwrap();
        assert_eq!(json, json!({ "is_active": false }));
    }

    #[test]
    fn test_inactive_coverage_drops_stale_amounts() {
        let coverage: Coverage =
            serde_json::from_value(json!({ "is_active": false, "full_amount": "$1" })).unwrap();
        assert_eq!(coverage, Coverage::Inactive);
    }

    #[test]
    fn test_active_coverage_requires_amounts() {
        let result: Result<Coverage, _> =
            serde_json::from_value(json!({ "is_active": true, "full_amount": "$1" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_section_paths() {
        assert_eq!(CoverageSection::Complete.flag_path(), "complete.is_active");
        assert_eq!(
            CoverageSection::ThirdParty.amount_paths(),
            [
                "third_party_coverage.full_amount".to_string(),
                "third_party_coverage.down_payment".to_string(),
                "third_party_coverage.installments".to_string(),
            ]
        );
    }
}
