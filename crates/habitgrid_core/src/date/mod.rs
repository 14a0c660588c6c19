//! Calendar-day normalization and month navigation.
//!
//! # Responsibility
//! - Map calendar dates to canonical `YYYY-MM-DD` day keys and back.
//! - Answer day-level questions (same day, today, future) against an explicit
//!   reference clock.
//! - Enumerate and navigate calendar months.
//!
//! # Invariants
//! - Day keys are formatted from local calendar fields, never via UTC.
//! - Parsing is strict: malformed keys fail with `InvalidDateFormat`.

pub mod key;
pub mod month;

pub use key::{
    from_date_key, is_future, is_same_day, is_today, local_now, local_today, to_date_key,
    DateKey, DateKeyError,
};
pub use month::{days_in_month, month_name, MonthCursor};
