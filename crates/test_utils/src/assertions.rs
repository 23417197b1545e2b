//! Custom Test Assertions
//!
//! Provides assertion helpers for validation errors and rendered images
//! that give more meaningful failure messages than plain `assert!`.

use domain_quote::FieldErrors;
use image::{DynamicImage, Rgba};
use infra_render::QuoteLayout;

/// Asserts that a field carries exactly the expected error message
///
/// # Panics
///
/// Panics if the field has no error or a different message
pub fn assert_field_error(errors: &FieldErrors, path: &str, expected: &str) {
    match errors.get(path) {
        Some(message) => assert_eq!(
            message, expected,
            "Unexpected message for '{}': got '{}', expected '{}'",
            path, message, expected
        ),
        None => panic!(
            "Expected an error for '{}', found errors only for {:?}",
            path,
            errors.paths()
        ),
    }
}

/// Asserts that the errors cover exactly the given paths
pub fn assert_error_paths(errors: &FieldErrors, expected: &[&str]) {
    let mut expected = expected.to_vec();
    expected.sort_unstable();
    assert_eq!(
        errors.paths(),
        expected,
        "Error paths differ: got {:?}, expected {:?}",
        errors.paths(),
        expected
    );
}

/// Asserts that a layout contains a line reading exactly `text`
pub fn assert_has_line(layout: &QuoteLayout, text: &str) {
    assert!(
        layout.contains_line(text),
        "Expected line '{}' in layout:\n{}",
        text,
        layout.text_lines().join("\n")
    );
}

/// Asserts that no layout line starts with `prefix`
pub fn assert_no_line_starting_with(layout: &QuoteLayout, prefix: &str) {
    let found: Vec<String> = layout
        .text_lines()
        .into_iter()
        .filter(|line| line.starts_with(prefix))
        .collect();
    assert!(
        found.is_empty(),
        "Expected no line starting with '{}', found {:?}",
        prefix,
        found
    );
}

/// Decodes PNG bytes, asserting they form a valid image of the given size
///
/// # Panics
///
/// Panics if the bytes do not decode as PNG or the size differs
pub fn assert_png(bytes: &[u8], width: u32, height: u32) -> DynamicImage {
    let image = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .unwrap_or_else(|e| panic!("Bytes are not a valid PNG: {}", e));
    assert_eq!(
        (image.width(), image.height()),
        (width, height),
        "Unexpected image size"
    );
    image
}

/// Asserts that a decoded image has a pixel of the given color
pub fn assert_has_pixel(image: &DynamicImage, color: Rgba<u8>) {
    let rgba = image.to_rgba8();
    assert!(
        rgba.pixels().any(|p| *p == color),
        "Expected at least one pixel of color {:?}",
        color
    );
}
