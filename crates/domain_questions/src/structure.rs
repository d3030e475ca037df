//! Structural checks for question configuration documents
//!
//! Documents are checked as raw JSON before decoding so that a broken
//! deployment is reported with a precise message rather than a generic
//! decode failure.

use serde_json::Value;
use std::collections::HashSet;

use domain_policy::ProductType;

use crate::error::QuestionError;
use crate::model::ProductQuestionSet;

const REQUIRED_QUESTION_FIELDS: [&str; 3] = ["key", "displayText", "type"];

/// Present, a string, and not empty
fn has_text(object: &Value, field: &str) -> bool {
    object
        .get(field)
        .and_then(Value::as_str)
        .is_some_and(|text| !text.is_empty())
}

/// Checks the top-level shape and every question's mandatory fields
pub fn check_structure(document: &Value) -> Result<(), QuestionError> {
    let questions = match document.get("questions").and_then(Value::as_array) {
        Some(questions) if has_text(document, "productType") && has_text(document, "version") => {
            questions
        }
        _ => return Err(QuestionError::invalid("Invalid question configuration structure")),
    };

    let mut seen = HashSet::new();
    for (index, question) in questions.iter().enumerate() {
        if !REQUIRED_QUESTION_FIELDS.iter().all(|field| has_text(question, field)) {
            return Err(QuestionError::invalid(format!(
                "Invalid question at index {index}: missing required fields"
            )));
        }
        if let Some(key) = question.get("key").and_then(Value::as_str) {
            if !seen.insert(key) {
                return Err(QuestionError::invalid(format!(
                    "Duplicate question key \"{key}\" at index {index}"
                )));
            }
        }
    }

    Ok(())
}

/// Checks and decodes a document fetched for `expected`
pub fn parse_question_set(
    document: &Value,
    expected: ProductType,
) -> Result<ProductQuestionSet, QuestionError> {
    check_structure(document)?;

    let question_set: ProductQuestionSet = serde_json::from_value(document.clone())
        .map_err(|e| QuestionError::invalid(format!("Invalid question configuration: {e}")))?;

    if question_set.product_type != expected {
        return Err(QuestionError::invalid(format!(
            "Question configuration for {expected} declares product type {}",
            question_set.product_type
        )));
    }

    Ok(question_set)
}
