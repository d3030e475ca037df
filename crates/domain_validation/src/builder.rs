//! Schema builder
//!
//! Composes a product's answer schema from its question configuration. The
//! configuration decides which answer fields are collected and whether each
//! is required; the base schema decides how each field is validated. A
//! question whose key has no base field cannot be validated and is left out.

use tracing::warn;

use domain_questions::ProductQuestionSet;

use crate::schema::{ObjectSchema, Presence};

/// Builds the answer schema for a question set
///
/// Fields appear in question order. A required question keeps the base
/// field's presence; an optional one is validated only when answered.
/// Unmatched keys are logged and skipped.
pub fn build_product_answers_schema(
    question_set: &ProductQuestionSet,
    base_schema: &ObjectSchema,
) -> ObjectSchema {
    question_set
        .questions
        .iter()
        .fold(ObjectSchema::new(), |schema, question| {
            match base_schema.field(&question.key) {
                Some(base_field) => {
                    let field = if question.is_required {
                        base_field.clone()
                    } else {
                        base_field.with_presence(Presence::Optional)
                    };
                    schema.with_field(field)
                }
                None => {
                    warn!(
                        key = %question.key,
                        product_type = %question_set.product_type,
                        "No base schema field for question; it will not be validated"
                    );
                    schema
                }
            }
        })
}

/// Question keys with no base schema field, in question order
pub fn unmatched_question_keys<'a>(
    question_set: &'a ProductQuestionSet,
    base_schema: &ObjectSchema,
) -> Vec<&'a str> {
    question_set
        .keys()
        .filter(|key| base_schema.field(key).is_none())
        .collect()
}
