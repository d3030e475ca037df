//! Property-Based Test Generators
//!
//! Proptest strategies for quote form data that respects the form's rules.

use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;

use core_kernel::today;
use domain_policy::{ProductType, PropertyType};

pub fn product_type_strategy() -> impl Strategy<Value = ProductType> {
    prop::sample::select(ProductType::ALL.to_vec())
}

pub fn property_type_strategy() -> impl Strategy<Value = PropertyType> {
    prop::sample::select(PropertyType::ALL.to_vec())
}

/// Valid postcode as `(outward, inward)`, seven characters or fewer
pub fn postcode_parts_strategy() -> impl Strategy<Value = (String, String)> {
    ("[A-Z]{1,2}[0-9]{1,2}[A-Z]?", "[0-9][A-Z]{2}")
        .prop_filter("postcode longer than seven characters", |(outward, inward)| {
            outward.len() + inward.len() <= 7
        })
}

/// Valid postcode written with arbitrary case and spacing
pub fn messy_postcode_strategy() -> impl Strategy<Value = String> {
    (postcode_parts_strategy(), " {0,2}", " {1,3}", any::<bool>()).prop_map(
        |((outward, inward), lead, gap, lower)| {
            let text = format!("{lead}{outward}{gap}{inward}");
            if lower {
                text.to_lowercase()
            } else {
                text
            }
        },
    )
}

/// Person name drawn from the accepted character set
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,20}(-[A-Z][a-z]{1,10})?"
}

/// Date of birth of someone between 18 and 90 years old today
pub fn adult_date_of_birth_strategy() -> impl Strategy<Value = NaiveDate> {
    let today = today();
    (19i32..=90i32, 0i64..365i64).prop_map(move |(years, days)| {
        let anchor = NaiveDate::from_ymd_opt(today.year() - years, 1, 1).unwrap_or(today);
        anchor + Duration::days(days)
    })
}

/// Date of birth of someone under 18 today
pub fn minor_date_of_birth_strategy() -> impl Strategy<Value = NaiveDate> {
    let today = today();
    (0i64..(17 * 365)).prop_map(move |days| today - Duration::days(days))
}

pub fn bedrooms_strategy() -> impl Strategy<Value = u8> {
    1u8..=6u8
}

pub fn construction_year_strategy() -> impl Strategy<Value = u16> {
    1700u16..=2000u16
}
