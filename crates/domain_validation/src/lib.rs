//! Quote Form Validation
//!
//! Validates quote form payloads against a fixed base schema per form
//! section, with the product answer schema optionally narrowed by the
//! product's question configuration.
//!
//! # Layers
//!
//! - **validators**: postcode and minimum-age business rules
//! - **schema**: field constraints and object schemas over JSON values
//! - **schemas**: the policyholder, property and product answer schemas
//! - **builder**: composes an answer schema from a question set
//! - **form**: validates whole payloads into a `CreatePolicyInput`

pub mod validators;
pub mod schema;
pub mod schemas;
pub mod builder;
pub mod form;

pub use validators::{
    format_postcode, is_minimum_age, is_minimum_age_on, normalize_postcode, validate_postcode,
    validate_postcode_value, MINIMUM_POLICYHOLDER_AGE,
};
pub use schema::{
    FieldConstraint, FieldError, FieldSchema, ObjectSchema, Presence, ValidationErrors, ValueKind,
};
pub use schemas::{
    buy_to_let_answers_schema, household_answers_schema, policyholder_schema,
    product_answers_schema, property_schema,
};
pub use builder::{build_product_answers_schema, unmatched_question_keys};
pub use form::FormValidator;
