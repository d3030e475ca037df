//! Custom Test Assertions
//!
//! Assertion helpers for validation results that print every reported
//! error when they fail.

use serde_json::Value;

use domain_validation::ValidationErrors;

fn describe(errors: &ValidationErrors) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Asserts that `field` was reported with exactly `message` among its errors
///
/// # Panics
///
/// Panics if no error on `field` carries the message
pub fn assert_field_error(errors: &ValidationErrors, field: &str, message: &str) {
    assert!(
        errors.for_field(field).contains(&message),
        "Expected error {:?} on {}, got: {}",
        message,
        field,
        describe(errors)
    );
}

/// Asserts that nothing was reported for `field`
pub fn assert_no_field_error(errors: &ValidationErrors, field: &str) {
    assert!(
        !errors.has_field(field),
        "Expected no error on {}, got: {}",
        field,
        describe(errors)
    );
}

/// Asserts the exact ordered list of failing field paths
pub fn assert_error_fields(errors: &ValidationErrors, expected: &[&str]) {
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, expected, "Unexpected error fields: {}", describe(errors));
}

/// Asserts an API error body lists `message` for `field` in its details
pub fn assert_error_body_has_field(body: &Value, field: &str, message: &str) {
    let found = body["details"]
        .as_array()
        .map(|details| {
            details
                .iter()
                .any(|d| d["field"] == field && d["message"] == message)
        })
        .unwrap_or(false);
    assert!(found, "Expected {field}: {message:?} in error body {body}");
}
