//! Whole-string classifiers.
//!
//! Each predicate takes anything printable, checks its `Display` form
//! against a fully anchored pattern and never fails: malformed input is
//! simply `false`.

use crate::patterns::Patterns;
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt::Display;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `YYYY-MM-DD` naming a real calendar day.
pub fn is_date_str(value: impl Display) -> bool {
    let s = value.to_string();
    Patterns::global().date_shape.is_match(&s) && NaiveDate::parse_from_str(&s, DATE_FORMAT).is_ok()
}

/// `YYYY-MM-DD HH:MM:SS` naming a real calendar day and time of day.
pub fn is_datetime_str(value: impl Display) -> bool {
    let s = value.to_string();
    Patterns::global().datetime_shape.is_match(&s)
        && NaiveDateTime::parse_from_str(&s, DATETIME_FORMAT).is_ok()
}

/// Optionally signed, optionally comma-grouped, optional fraction. Thai
/// numerals count as digits.
pub fn is_number_str(value: impl Display) -> bool {
    Patterns::global().number_full.is_match(&value.to_string())
}

/// Only ASCII letters, ASCII digits and whitespace.
pub fn is_latin_str(value: impl Display) -> bool {
    Patterns::global().latin_full.is_match(&value.to_string())
}

/// Only Thai-block characters, ASCII digits and whitespace.
pub fn is_thai_str(value: impl Display) -> bool {
    Patterns::global().thai_full.is_match(&value.to_string())
}
