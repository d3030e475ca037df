//! Calendar helpers
//!
//! Date parsing for form input and whole-year age arithmetic. Ages are
//! computed on calendar dates, never on elapsed seconds, so leap years and
//! month lengths do not skew the result.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid calendar date: {0:?}")]
    InvalidDate(String),
}

/// Returns today's date in UTC
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parses a calendar date from form input
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (the UTC calendar date is
/// kept) and naive `YYYY-MM-DDTHH:MM:SS` timestamps. Surrounding whitespace
/// is ignored. Impossible dates such as `2023-02-30` are rejected.
pub fn parse_calendar_date(input: &str) -> Result<NaiveDate, TemporalError> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.with_timezone(&Utc).date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(timestamp.date());
    }

    Err(TemporalError::InvalidDate(input.to_string()))
}

/// Computes age in whole years on the given date
///
/// The year difference is reduced by one when `on` falls before the birth
/// anniversary. Someone born on 29 February reaches the anniversary on
/// 1 March in non-leap years, because (2, 28) still precedes (2, 29).
/// Returns a negative value for birth dates after `on`.
pub fn age_in_years(date_of_birth: NaiveDate, on: NaiveDate) -> i32 {
    let mut age = on.year() - date_of_birth.year();

    if (on.month(), on.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }

    age
}
