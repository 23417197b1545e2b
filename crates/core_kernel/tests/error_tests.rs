//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::ReferenceData;

#[test]
fn test_core_error_not_found() {
    let error = CoreError::not_found("lookup table 'colors'");

    match error {
        CoreError::NotFound(msg) => assert_eq!(msg, "lookup table 'colors'"),
    }
}

#[test]
fn test_core_error_display() {
    let error = CoreError::not_found("Test error");
    let display = format!("{}", error);

    assert_eq!(display, "Not found: Test error");
}

#[test]
fn test_unknown_table_reports_name() {
    let error = ReferenceData::standard().table("colors").unwrap_err();

    assert!(error.to_string().contains("colors"));
}
