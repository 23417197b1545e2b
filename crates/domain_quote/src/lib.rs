//! Quote Domain
//!
//! This crate turns raw form input into a validated [`QuoteRecord`].
//!
//! # Coverage Sections
//!
//! A quote carries two optional coverage sections, "complete" and
//! "third party". Each one is switched on by its own flag:
//!
//! - **Active**: full amount, down payment and installments are required
//! - **Inactive**: the amounts are ignored and never reach the record
//!
//! The flag alone selects the variant; the amounts are never inspected to
//! guess it.
//!
//! # Example
//!
//! ```rust
//! use domain_quote::{FormValues, QuoteValidator};
//!
//! let values = FormValues::from_json(&serde_json::json!({
//!     "fullname": "Jane Doe",
//!     "quote": "Auto Insurance",
//!     "company": "id-3",
//!     "language": "id-1",
//!     "installments": "6",
//!     "term_duration_in_months": "12",
//!     "fee_amount": "$50",
//!     "complete": { "is_active": false },
//!     "third_party_coverage": { "is_active": false },
//!     "franchise_amount": "id-2",
//!     "medical_insurance_amount": "id-1",
//!     "property_damage_insurance_amount": "id-3",
//! }))
//! .unwrap();
//!
//! let record = QuoteValidator::validate(&values).unwrap();
//! assert!(!record.complete.is_active());
//! assert!(!record.has_renters);
//! ```

pub mod values;
pub mod record;
pub mod validation;
pub mod form;
pub mod notification;
pub mod error;

pub use values::{FieldValue, FormValues};
pub use record::{Coverage, CoverageAmounts, CoverageSection, QuoteRecord};
pub use validation::{FieldErrors, QuoteValidator};
pub use form::QuoteForm;
pub use notification::{Notification, NotificationKind, Notifier, TracingNotifier};
pub use error::QuoteError;
