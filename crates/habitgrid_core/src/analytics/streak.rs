//! Current and longest streak calculation.

use super::completed_days;
use crate::date::local_today;
use crate::model::completion::CompletionRecord;
use chrono::NaiveDate;
use serde::Serialize;

/// Streak lengths, in days, for one habit as of a reference date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreakInfo {
    /// Consecutive completed days ending on the reference day.
    pub current: u32,
    /// Longest run of consecutive completed days across all history.
    pub longest: u32,
}

/// Computes streaks for `habit_id` as of `reference`.
///
/// # Contract
/// - Current streak counts back from `reference` while each day is completed.
///   If `reference` itself is not completed the current streak is 0, even when
///   the previous day was.
/// - Longest streak scans distinct completed days ascending; a run continues
///   only when the next day is exactly one calendar day later.
/// - Duplicate records for the same day count once.
pub fn calculate_streak(
    habit_id: &str,
    records: &[CompletionRecord],
    reference: NaiveDate,
) -> StreakInfo {
    let days = completed_days(habit_id, records);
    if days.is_empty() {
        return StreakInfo::default();
    }

    let mut current = 0u32;
    let mut cursor = Some(reference);
    while let Some(day) = cursor {
        if !days.contains(&day) {
            break;
        }
        current += 1;
        cursor = day.pred_opt();
    }

    let mut longest = 0u32;
    let mut run = 0u32;
    let mut previous: Option<NaiveDate> = None;
    for &day in &days {
        run = match previous.and_then(|prev| prev.succ_opt()) {
            Some(expected) if expected == day => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }

    StreakInfo { current, longest }
}

/// Computes streaks for `habit_id` as of the local calendar day.
pub fn calculate_streak_today(habit_id: &str, records: &[CompletionRecord]) -> StreakInfo {
    calculate_streak(habit_id, records, local_today())
}
