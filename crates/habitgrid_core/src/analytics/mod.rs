//! Streak and completion analytics.
//!
//! # Responsibility
//! - Derive per-habit streaks and completion rates from completion records.
//! - Aggregate per-habit results into month-level summaries.
//!
//! # Invariants
//! - Every function is pure over its explicit inputs; reference dates are
//!   parameters, never read from the clock inside calculations.
//! - `longest >= current` for every computed `StreakInfo`.

pub mod rate;
pub mod streak;
pub mod summary;

pub use rate::completion_rate;
pub use streak::{calculate_streak, calculate_streak_today, StreakInfo};
pub use summary::{summarize, summarize_month, HabitStats, MonthlySummary};

use crate::model::completion::CompletionRecord;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Distinct completed days for one habit, in ascending order.
pub(crate) fn completed_days(habit_id: &str, records: &[CompletionRecord]) -> BTreeSet<NaiveDate> {
    records
        .iter()
        .filter(|record| record.completed && record.habit_id == habit_id)
        .map(|record| record.date.date())
        .collect()
}
