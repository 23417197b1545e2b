//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating form input that passes
//! validation, along with the odd coded id that no table knows about.

use core_kernel::LookupTable;
use domain_quote::{CoverageAmounts, CoverageSection, FormValues};
use proptest::prelude::*;

use crate::builders::FormValuesBuilder;

/// Strategy for text of at least `min` characters
pub fn text_strategy(min: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[A-Za-z0-9 $.,'-]{{{},24}}", min))
        .expect("valid regex")
}

/// Strategy for customer names
pub fn fullname_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,10}( [A-Z][a-z]{1,12})?"
}

/// Strategy for currency amounts as the form formats them
pub fn currency_text_strategy() -> impl Strategy<Value = String> {
    (1u32..1_000_000u32, 0u32..100u32).prop_map(|(dollars, cents)| {
        if cents == 0 {
            format!("${}", dollars)
        } else {
            format!("${}.{:02}", dollars, cents)
        }
    })
}

/// Strategy for coverage amounts
pub fn coverage_amounts_strategy() -> impl Strategy<Value = CoverageAmounts> {
    (
        currency_text_strategy(),
        currency_text_strategy(),
        currency_text_strategy(),
    )
        .prop_map(|(full_amount, down_payment, installments)| CoverageAmounts {
            full_amount,
            down_payment,
            installments,
        })
}

/// Strategy for an id from a lookup table
pub fn table_id_strategy(table: LookupTable) -> impl Strategy<Value = String> {
    proptest::sample::select(table.entries().to_vec()).prop_map(|entry| entry.id.to_string())
}

/// Strategy for ids that are never in the standard tables
pub fn unknown_id_strategy() -> impl Strategy<Value = String> {
    (100u32..10_000u32).prop_map(|n| format!("id-{}", n))
}

/// Strategy for form values that always validate
pub fn valid_form_strategy() -> impl Strategy<Value = FormValues> {
    let reference = core_kernel::ReferenceData::standard();
    (
        fullname_strategy(),
        text_strategy(2),
        table_id_strategy(reference.companies),
        table_id_strategy(reference.installment_options),
        proptest::option::of(coverage_amounts_strategy()),
        proptest::option::of(coverage_amounts_strategy()),
        any::<[bool; 3]>(),
    )
        .prop_map(
            |(fullname, quote, company, installments, complete, third_party, flags)| {
                let mut builder = FormValuesBuilder::new()
                    .with_fullname(fullname)
                    .with_text("quote", quote)
                    .with_company(company)
                    .with_text("installments", installments)
                    .with_flag("has_renters", flags[0])
                    .with_flag("is_car_financed", flags[1])
                    .with_flag("is_rental_car", flags[2]);
                for (section, amounts) in [
                    (CoverageSection::Complete, complete),
                    (CoverageSection::ThirdParty, third_party),
                ] {
                    if let Some(a) = amounts {
                        builder = builder.with_coverage(
                            section,
                            &a.full_amount,
                            &a.down_payment,
                            &a.installments,
                        );
                    }
                }
                builder.build()
            },
        )
}
