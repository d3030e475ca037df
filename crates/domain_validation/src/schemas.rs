//! Base schemas
//!
//! The fixed validation rules for each section of the quote form. The
//! product answer schemas are the source of truth for every answer field a
//! question configuration may refer to.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use core_kernel::parse_calendar_date;
use domain_policy::{ProductType, PropertyType};

use crate::schema::{FieldConstraint, ObjectSchema};
use crate::validators::{format_postcode, is_minimum_age, validate_postcode_value, MINIMUM_POLICYHOLDER_AGE};

const NAME_MIN_LENGTH: usize = 2;
const NAME_MAX_LENGTH: usize = 50;
const ADDRESS_LINE_MAX_LENGTH: usize = 100;
const POSTCODE_MAX_LENGTH: usize = 8;

const MIN_BEDROOMS: f64 = 1.0;
const MAX_BEDROOMS: f64 = 6.0;
const EARLIEST_CONSTRUCTION_YEAR: f64 = 1700.0;
const LATEST_CONSTRUCTION_YEAR: f64 = 2000.0;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("name pattern compiles"));

static POLICYHOLDER: Lazy<ObjectSchema> = Lazy::new(|| {
    ObjectSchema::new()
        .required("firstName", person_name("First name"))
        .required("lastName", person_name("Last name"))
        .required("dateOfBirth", date_of_birth())
});

static PROPERTY: Lazy<ObjectSchema> = Lazy::new(|| {
    ObjectSchema::new()
        .required(
            "addressLine1",
            FieldConstraint::text("Address line 1 is required")
                .non_empty("Address line 1 is required")
                .max_length(ADDRESS_LINE_MAX_LENGTH, "Address line 1 must not exceed 100 characters"),
        )
        .optional("addressLine2", optional_address_line(2))
        .optional("addressLine3", optional_address_line(3))
        .required(
            "postcode",
            FieldConstraint::text("Postcode is required")
                .non_empty("Postcode is required")
                .max_length(POSTCODE_MAX_LENGTH, "Postcode must not exceed 8 characters")
                .refine("Invalid UK postcode format", validate_postcode_value)
                .transform(|v| Value::String(format_postcode(v.as_str().unwrap_or_default()))),
        )
});

static HOUSEHOLD_ANSWERS: Lazy<ObjectSchema> = Lazy::new(|| {
    ObjectSchema::new()
        .required("propertyType", property_type())
        .required("numberOfBedrooms", number_of_bedrooms())
        .required(
            "yearOfConstruction",
            FieldConstraint::number("Year of construction is required")
                .integer("Year must be a whole number")
                .min(EARLIEST_CONSTRUCTION_YEAR, "Year must be 1700 or later")
                .max(LATEST_CONSTRUCTION_YEAR, "Year must be 2000 or earlier"),
        )
});

static BUY_TO_LET_ANSWERS: Lazy<ObjectSchema> = Lazy::new(|| {
    ObjectSchema::new()
        .required("propertyType", property_type())
        .required("numberOfBedrooms", number_of_bedrooms())
        .required(
            "isPropertyLetToStudents",
            FieldConstraint::boolean("Please specify if property is let to students"),
        )
});

fn person_name(label: &str) -> FieldConstraint {
    FieldConstraint::text(format!("{label} is required"))
        .non_empty(format!("{label} is required"))
        .min_length(NAME_MIN_LENGTH, format!("{label} must be at least 2 characters"))
        .max_length(NAME_MAX_LENGTH, format!("{label} must not exceed 50 characters"))
        .pattern(
            NAME_PATTERN.clone(),
            format!("{label} can only contain letters, spaces, hyphens and apostrophes"),
        )
}

/// Stored as `YYYY-MM-DD` whatever accepted form it arrived in
fn date_of_birth() -> FieldConstraint {
    FieldConstraint::text("Date of birth is required")
        .non_empty("Date of birth is required")
        .refine_aborting("Invalid date format", |v| {
            v.as_str().is_some_and(|s| parse_calendar_date(s).is_ok())
        })
        .refine("Policyholder must be 18 or over", |v| {
            v.as_str()
                .is_some_and(|s| is_minimum_age(s, MINIMUM_POLICYHOLDER_AGE))
        })
        .transform(|v| {
            let parsed = v.as_str().map(parse_calendar_date);
            match parsed {
                Some(Ok(date)) => Value::String(date.format("%Y-%m-%d").to_string()),
                _ => v,
            }
        })
}

fn optional_address_line(line: u8) -> FieldConstraint {
    FieldConstraint::text(format!("Address line {line} must be text")).max_length(
        ADDRESS_LINE_MAX_LENGTH,
        format!("Address line {line} must not exceed 100 characters"),
    )
}

fn property_type() -> FieldConstraint {
    FieldConstraint::one_of(
        PropertyType::ALL.iter().map(PropertyType::as_str),
        "Property type is required",
    )
}

fn number_of_bedrooms() -> FieldConstraint {
    FieldConstraint::number("Number of bedrooms is required")
        .integer("Number of bedrooms must be a whole number")
        .min(MIN_BEDROOMS, "Must have at least 1 bedroom")
        .max(MAX_BEDROOMS, "Maximum 6 bedrooms allowed")
}

/// Policyholder personal details
pub fn policyholder_schema() -> &'static ObjectSchema {
    &POLICYHOLDER
}

/// Insured property address
pub fn property_schema() -> &'static ObjectSchema {
    &PROPERTY
}

pub fn household_answers_schema() -> &'static ObjectSchema {
    &HOUSEHOLD_ANSWERS
}

pub fn buy_to_let_answers_schema() -> &'static ObjectSchema {
    &BUY_TO_LET_ANSWERS
}

/// Answer schema for a product
pub fn product_answers_schema(product_type: ProductType) -> &'static ObjectSchema {
    match product_type {
        ProductType::Household => household_answers_schema(),
        ProductType::BuyToLet => buy_to_let_answers_schema(),
    }
}
