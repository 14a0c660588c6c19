//! Month-level aggregation across habits.

use super::rate::completion_rate;
use super::streak::{calculate_streak, StreakInfo};
use crate::date::MonthCursor;
use crate::model::completion::CompletionRecord;
use crate::model::habit::Habit;
use chrono::NaiveDate;
use serde::Serialize;

/// Derived statistics for one habit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitStats {
    pub habit: Habit,
    /// Percentage in `[0, 100]`.
    pub completion_rate: f64,
    pub streak: StreakInfo,
}

/// Summary statistics across all habits for one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    /// Per-habit stats in habit order.
    pub habits: Vec<HabitStats>,
    /// Mean of per-habit completion rates; 0 when there are no habits.
    pub average_completion_rate: f64,
    /// Habits whose current streak is above zero.
    pub active_streak_count: usize,
    /// Maximum longest streak over all habits; 0 when there are no habits.
    pub best_streak_ever: u32,
}

/// Aggregates rates and streaks for every habit.
///
/// `total_days` is the period length used for completion rates; `reference`
/// anchors current streaks.
pub fn summarize(
    habits: &[Habit],
    records: &[CompletionRecord],
    total_days: u32,
    reference: NaiveDate,
) -> MonthlySummary {
    summarize_split(habits, records, records, total_days, reference)
}

/// Aggregates one calendar month.
///
/// Completion rates only count records dated inside `month`, over the month's
/// length. Streaks still see the full history so runs crossing the month
/// boundary keep their length.
pub fn summarize_month(
    habits: &[Habit],
    records: &[CompletionRecord],
    month: MonthCursor,
    reference: NaiveDate,
) -> MonthlySummary {
    let in_month: Vec<CompletionRecord> = records
        .iter()
        .filter(|record| month.contains(record.date.date()))
        .cloned()
        .collect();
    let total_days = u32::try_from(month.days().len()).unwrap_or(u32::MAX);
    summarize_split(habits, &in_month, records, total_days, reference)
}

fn summarize_split(
    habits: &[Habit],
    rate_records: &[CompletionRecord],
    streak_records: &[CompletionRecord],
    total_days: u32,
    reference: NaiveDate,
) -> MonthlySummary {
    let stats: Vec<HabitStats> = habits
        .iter()
        .map(|habit| HabitStats {
            habit: habit.clone(),
            completion_rate: completion_rate(&habit.id, rate_records, total_days),
            streak: calculate_streak(&habit.id, streak_records, reference),
        })
        .collect();

    let average_completion_rate = if stats.is_empty() {
        0.0
    } else {
        stats.iter().map(|item| item.completion_rate).sum::<f64>() / stats.len() as f64
    };
    let active_streak_count = stats.iter().filter(|item| item.streak.current > 0).count();
    let best_streak_ever = stats
        .iter()
        .map(|item| item.streak.longest)
        .max()
        .unwrap_or(0);

    MonthlySummary {
        habits: stats,
        average_completion_rate,
        active_streak_count,
        best_streak_ever,
    }
}
