//! Business validators
//!
//! Rules the declarative schema primitives cannot express on their own:
//! UK postcode shape and the policyholder minimum age. All functions are
//! pure; the age check reads the current date unless one is supplied.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use core_kernel::{age_in_years, parse_calendar_date, today};

/// Minimum age of a policyholder, in whole years
pub const MINIMUM_POLICYHOLDER_AGE: u32 = 18;

const MIN_POSTCODE_LEN: usize = 5;
const MAX_POSTCODE_LEN: usize = 7;
const INWARD_CODE_LEN: usize = 3;

/// Outward code (area, district, optional sub-district letter) followed by
/// the inward code (sector digit, two unit letters), spaces removed
static POSTCODE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]{1,2}[0-9]{1,2}[A-Z]?[0-9][A-Z]{2}$").expect("postcode pattern compiles")
});

/// Strips all whitespace and upper-cases
pub fn normalize_postcode(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Returns true if the input is a UK postcode
///
/// Case and whitespace are ignored, so `sw1a1aa`, `SW1A 1AA` and
/// ` sw1a  1aa ` are all accepted. Absent and empty input is rejected.
pub fn validate_postcode(input: Option<&str>) -> bool {
    let Some(input) = input else {
        return false;
    };
    if input.is_empty() {
        return false;
    }

    let normalized = normalize_postcode(input);
    let len = normalized.chars().count();
    if !(MIN_POSTCODE_LEN..=MAX_POSTCODE_LEN).contains(&len) {
        return false;
    }

    POSTCODE_PATTERN.is_match(&normalized)
}

/// [`validate_postcode`] for a raw payload value; non-strings are rejected
pub fn validate_postcode_value(value: &Value) -> bool {
    validate_postcode(value.as_str())
}

/// Formats a postcode as `OUTWARD INWARD`
///
/// Whitespace is stripped and the result upper-cased before a single space
/// is inserted ahead of the last three characters. Input shorter than five
/// characters is returned normalised but without a space. The input is not
/// validated, and formatting an already formatted postcode returns it
/// unchanged.
pub fn format_postcode(input: &str) -> String {
    let normalized = normalize_postcode(input);
    let len = normalized.chars().count();
    if len < MIN_POSTCODE_LEN {
        return normalized;
    }

    let split = normalized
        .char_indices()
        .nth(len - INWARD_CODE_LEN)
        .map_or(normalized.len(), |(index, _)| index);
    let (outward, inward) = normalized.split_at(split);
    format!("{outward} {inward}")
}

/// Returns true if someone born on `date_of_birth` is at least
/// `minimum_age` today
///
/// Unparseable dates are rejected.
pub fn is_minimum_age(date_of_birth: &str, minimum_age: u32) -> bool {
    is_minimum_age_on(date_of_birth, minimum_age, today())
}

/// [`is_minimum_age`] evaluated on a fixed date
pub fn is_minimum_age_on(date_of_birth: &str, minimum_age: u32, on: NaiveDate) -> bool {
    match parse_calendar_date(date_of_birth) {
        Ok(born) => i64::from(age_in_years(born, on)) >= i64::from(minimum_age),
        Err(_) => false,
    }
}
