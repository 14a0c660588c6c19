//! Calendar month enumeration and navigation.

use super::key::{local_today, DateKeyError};
use chrono::{Datelike, NaiveDate};
use std::fmt::{Display, Formatter};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns every calendar day of `month` (1-based) in ascending order.
///
/// Month length follows the proleptic Gregorian calendar, so February has
/// 29 days in leap years.
///
/// # Errors
/// - `InvalidMonth` when `month` is outside `1..=12` or `year` is out of range.
pub fn days_in_month(year: i32, month: u32) -> Result<Vec<NaiveDate>, DateKeyError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(DateKeyError::InvalidMonth { year, month })?;
    Ok(first
        .iter_days()
        .take_while(|day| day.month() == month)
        .collect())
}

/// English display name for a 1-based month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
}

/// A (year, month) position used for month-by-month navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    /// Creates a cursor, validating the month number.
    pub fn new(year: i32, month: u32) -> Result<Self, DateKeyError> {
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(DateKeyError::InvalidMonth { year, month });
        }
        Ok(Self { year, month })
    }

    /// Cursor for the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Cursor for the current local month.
    pub fn current() -> Self {
        Self::containing(local_today())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following month, rolling December over into January.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month, rolling January back into December.
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Every day of this month, ascending.
    pub fn days(&self) -> Vec<NaiveDate> {
        // Construction already validated the month.
        days_in_month(self.year, self.month).unwrap_or_default()
    }

    /// Returns whether `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Display label such as `February 2024`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl Display for MonthCursor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = month_name(self.month).unwrap_or("?");
        write!(f, "{name} {}", self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::{days_in_month, month_name, MonthCursor};
    use crate::date::DateKeyError;
    use chrono::NaiveDate;

    #[test]
    fn days_in_month_respects_leap_years() {
        assert_eq!(days_in_month(2024, 2).unwrap().len(), 29);
        assert_eq!(days_in_month(2023, 2).unwrap().len(), 28);
        assert_eq!(days_in_month(1900, 2).unwrap().len(), 28);
        assert_eq!(days_in_month(2000, 2).unwrap().len(), 29);
    }

    #[test]
    fn days_in_month_is_ascending_and_bounded() {
        let days = days_in_month(2024, 4).unwrap();
        assert_eq!(days.len(), 30);
        assert_eq!(days.first(), NaiveDate::from_ymd_opt(2024, 4, 1).as_ref());
        assert_eq!(days.last(), NaiveDate::from_ymd_opt(2024, 4, 30).as_ref());
        assert!(days.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn days_in_month_rejects_out_of_range_month() {
        assert_eq!(
            days_in_month(2024, 13),
            Err(DateKeyError::InvalidMonth {
                year: 2024,
                month: 13
            })
        );
        assert!(days_in_month(2024, 0).is_err());
    }

    #[test]
    fn cursor_wraps_across_year_boundaries() {
        let december = MonthCursor::new(2023, 12).unwrap();
        assert_eq!(december.next(), MonthCursor::new(2024, 1).unwrap());
        assert_eq!(december.next().previous(), december);

        let january = MonthCursor::new(2024, 1).unwrap();
        assert_eq!(january.previous(), december);
    }

    #[test]
    fn cursor_label_uses_month_name() {
        assert_eq!(MonthCursor::new(2024, 2).unwrap().label(), "February 2024");
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(12), Some("December"));
    }
}
