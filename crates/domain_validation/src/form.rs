//! Form validation orchestrator
//!
//! Validates a complete quote form payload section by section and turns the
//! normalised result into a [`CreatePolicyInput`] ready for the repository.
//!
//! # Sections
//!
//! | Path | Schema |
//! |---|---|
//! | `policyholder` | policyholder base schema |
//! | `property` | property base schema |
//! | `productAnswers` | answer schema of the selected product |
//!
//! Every section is validated even when an earlier one fails, so one pass
//! reports all problems. Errors are ordered by section, then by field.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use domain_policy::{CreatePolicyInput, ProductAnswers, ProductType};
use domain_questions::ProductQuestionSet;

use crate::builder::build_product_answers_schema;
use crate::schema::{FieldError, ObjectSchema, ValidationErrors};
use crate::schemas::{policyholder_schema, product_answers_schema, property_schema};

pub const POLICYHOLDER_SECTION: &str = "policyholder";
pub const PROPERTY_SECTION: &str = "property";
pub const PRODUCT_ANSWERS_SECTION: &str = "productAnswers";

/// Validates quote form payloads
///
/// # Examples
///
/// ```rust,ignore
/// use domain_validation::FormValidator;
/// use domain_policy::ProductType;
///
/// match FormValidator::validate(&payload, ProductType::Household) {
///     Ok(input) => repository.create(input).await?,
///     Err(errors) => for error in errors.iter() {
///         println!("{}: {}", error.field, error.message);
///     },
/// }
/// ```
pub struct FormValidator;

impl FormValidator {
    /// Validates a full form payload against the base schemas
    ///
    /// The answer schema is chosen by `product_type` alone; the question
    /// configuration plays no part here. A missing or `null` section is
    /// validated as an empty object, so each of its required fields is
    /// reported.
    pub fn validate(
        record: &Value,
        product_type: ProductType,
    ) -> Result<CreatePolicyInput, ValidationErrors> {
        let sections: [(&str, &ObjectSchema); 3] = [
            (POLICYHOLDER_SECTION, policyholder_schema()),
            (PROPERTY_SECTION, property_schema()),
            (PRODUCT_ANSWERS_SECTION, product_answers_schema(product_type)),
        ];

        let mut output = Map::new();
        let mut errors = Vec::new();

        for (section, schema) in sections {
            match schema.validate_at(&section_value(record, section), section) {
                Ok(validated) => {
                    output.insert(section.to_string(), Value::Object(validated));
                }
                Err(section_errors) => errors.extend(section_errors),
            }
        }

        if !errors.is_empty() {
            debug!(%product_type, errors = errors.len(), "Quote form failed validation");
            return Err(ValidationErrors::new(errors));
        }

        Ok(CreatePolicyInput {
            policyholder: decode_section(&mut output, POLICYHOLDER_SECTION)?,
            property: decode_section(&mut output, PROPERTY_SECTION)?,
            product_answers: match product_type {
                ProductType::Household => {
                    ProductAnswers::Household(decode_section(&mut output, PRODUCT_ANSWERS_SECTION)?)
                }
                ProductType::BuyToLet => {
                    ProductAnswers::BuyToLet(decode_section(&mut output, PRODUCT_ANSWERS_SECTION)?)
                }
            },
        })
    }

    /// Validates product answers against the schema built from a question set
    ///
    /// Only configured questions are checked, with each question's own
    /// required flag. Error paths are prefixed with `productAnswers`.
    pub fn validate_answers(
        question_set: &ProductQuestionSet,
        answers: &Value,
    ) -> Result<Map<String, Value>, ValidationErrors> {
        let base = product_answers_schema(question_set.product_type);
        let schema = build_product_answers_schema(question_set, base);
        let answers = if answers.is_null() {
            Value::Object(Map::new())
        } else {
            answers.clone()
        };
        schema.validate_at(&answers, PRODUCT_ANSWERS_SECTION)
    }
}

fn section_value(record: &Value, section: &str) -> Value {
    record
        .get(section)
        .filter(|v| !v.is_null())
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()))
}

/// Deserialises a validated section into its typed form
fn decode_section<T: DeserializeOwned>(
    output: &mut Map<String, Value>,
    section: &str,
) -> Result<T, ValidationErrors> {
    let value = output.remove(section).unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|e| {
        ValidationErrors::new(vec![FieldError::new(section, format!("Invalid {section}: {e}"))])
    })
}
