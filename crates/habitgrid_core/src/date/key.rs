//! Canonical day keys.
//!
//! # Responsibility
//! - Define `DateKey`, the `YYYY-MM-DD` identifier shared by completions and
//!   notes.
//! - Provide free-function helpers for callers holding plain `NaiveDate`s.
//!
//! # Invariants
//! - `DateKey` always wraps a real calendar day.
//! - Serialized form is exactly the canonical key string.

use chrono::{Local, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

static DATE_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date key regex"));

/// Errors raised by day-key and month helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateKeyError {
    /// Input is not a `YYYY-MM-DD` string naming a real calendar day.
    InvalidDateFormat(String),
    /// Month number outside `1..=12`.
    InvalidMonth { year: i32, month: u32 },
}

impl Display for DateKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateFormat(value) => {
                write!(f, "invalid date key `{value}`; expected YYYY-MM-DD")
            }
            Self::InvalidMonth { year, month } => {
                write!(f, "invalid month {month} for year {year}; expected 1..=12")
            }
        }
    }
}

impl Error for DateKeyError {}

/// Canonical calendar-day identifier.
///
/// Ordering follows the calendar, so sorted keys are chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Wraps a calendar date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the wrapped calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the key for the previous calendar day.
    pub fn pred(&self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }

    /// Returns the key for the next calendar day.
    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl From<DateKey> for NaiveDate {
    fn from(value: DateKey) -> Self {
        value.0
    }
}

impl FromStr for DateKey {
    type Err = DateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_date_key(s).map(Self)
    }
}

impl TryFrom<String> for DateKey {
    type Error = DateKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateKey> for String {
    fn from(value: DateKey) -> Self {
        value.to_string()
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

/// Formats a calendar date as its canonical `YYYY-MM-DD` key.
///
/// `NaiveDate` carries local calendar fields only, so there is no UTC shift.
pub fn to_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parses a canonical day key back into a calendar date.
///
/// # Errors
/// - `InvalidDateFormat` when `key` is not exactly `YYYY-MM-DD` or does not
///   name a real day (e.g. `2023-02-29`).
pub fn from_date_key(key: &str) -> Result<NaiveDate, DateKeyError> {
    if !DATE_KEY_RE.is_match(key) {
        return Err(DateKeyError::InvalidDateFormat(key.to_string()));
    }
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT)
        .map_err(|_| DateKeyError::InvalidDateFormat(key.to_string()))
}

/// Returns whether both dates normalize to the same day key.
pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    to_date_key(a) == to_date_key(b)
}

/// Returns whether `date` is the calendar day of `reference_now`.
pub fn is_today(date: NaiveDate, reference_now: NaiveDateTime) -> bool {
    is_same_day(date, reference_now.date())
}

/// Returns whether `date` falls strictly after the end of `reference_now`'s day.
pub fn is_future(date: NaiveDate, reference_now: NaiveDateTime) -> bool {
    date > reference_now.date()
}

/// Current wall-clock time in the local timezone.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Current calendar day in the local timezone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::{from_date_key, is_future, is_same_day, to_date_key, DateKey, DateKeyError};
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn to_date_key_zero_pads_fields() {
        assert_eq!(to_date_key(day(2024, 3, 7)), "2024-03-07");
    }

    #[test]
    fn from_date_key_rejects_loose_formats() {
        for input in ["2024-3-7", "2024/03/07", "20240307", " 2024-03-07", "2024-03-07T00:00"] {
            assert_eq!(
                from_date_key(input),
                Err(DateKeyError::InvalidDateFormat(input.to_string())),
                "input `{input}` should be rejected"
            );
        }
    }

    #[test]
    fn from_date_key_rejects_impossible_days() {
        assert!(from_date_key("2023-02-29").is_err());
        assert!(from_date_key("2024-13-01").is_err());
        assert_eq!(from_date_key("2024-02-29").unwrap(), day(2024, 2, 29));
    }

    #[test]
    fn is_future_compares_against_end_of_reference_day() {
        let late_evening = day(2024, 5, 10).and_hms_opt(23, 59, 59).unwrap();
        assert!(!is_future(day(2024, 5, 10), late_evening));
        assert!(is_future(day(2024, 5, 11), late_evening));
        assert!(!is_future(day(2024, 5, 9), late_evening));
    }

    #[test]
    fn is_same_day_ignores_nothing_but_the_day() {
        assert!(is_same_day(day(2024, 1, 1), day(2024, 1, 1)));
        assert!(!is_same_day(day(2024, 1, 1), day(2023, 1, 1)));
    }

    #[test]
    fn date_key_serializes_as_canonical_string() {
        let key = DateKey::new(day(2024, 12, 31));
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2024-12-31\"");

        let decoded: DateKey = serde_json::from_str("\"2024-12-31\"").unwrap();
        assert_eq!(decoded, key);
        assert!(serde_json::from_str::<DateKey>("\"12/31/2024\"").is_err());
    }
}
