//! Per-habit, per-day completion record.

use crate::date::DateKey;
use crate::model::habit::HabitId;
use serde::{Deserialize, Serialize};

/// Assertion that a habit was (or explicitly was not) done on one day.
///
/// # Invariants
/// - At most one record exists per `(habit_id, date)`; the completion index
///   enforces this on every write and on load.
/// - `completed = false` is a soft delete kept so re-toggling restores history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    pub habit_id: HabitId,
    pub date: DateKey,
    pub completed: bool,
}

impl CompletionRecord {
    pub fn new(habit_id: impl Into<HabitId>, date: DateKey, completed: bool) -> Self {
        Self {
            habit_id: habit_id.into(),
            date,
            completed,
        }
    }

    /// Returns whether this record belongs to `(habit_id, date)`.
    pub fn matches(&self, habit_id: &str, date: DateKey) -> bool {
        self.habit_id == habit_id && self.date == date
    }
}
