//! Parsing of the `--at` option that pins the magic clock.

use calc_core::ClockReading;
use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected MM-DDTHH:MM or YYYY-MM-DDTHH:MM, got '{0}'")]
pub struct ClockArgError(String);

const FULL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Leap year used to complete a date given without a year, so `02-29` is
/// accepted.
const FILLER_YEAR: &str = "2000";

/// Parses `YYYY-MM-DDTHH:MM` or the year-less `MM-DDTHH:MM`.
pub fn parse_clock_arg(value: &str) -> Result<ClockReading, ClockArgError> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, FULL_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(&format!("{FILLER_YEAR}-{value}"), FULL_FORMAT))
        .map(ClockReading::from)
        .map_err(|_| ClockArgError(value.to_string()))
}
