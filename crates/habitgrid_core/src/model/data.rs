//! The persisted application aggregate.

use crate::model::completion::CompletionRecord;
use crate::model::habit::Habit;
use crate::model::note::DayNote;
use serde::{Deserialize, Serialize};

/// Everything the tracker persists, stored as one JSON blob.
///
/// Owned by the service layer and replaced wholesale on each transition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitData {
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub completions: Vec<CompletionRecord>,
    #[serde(default)]
    pub notes: Vec<DayNote>,
}

impl HabitData {
    /// Starter aggregate used on first launch or when stored data is unusable.
    pub fn default_data() -> Self {
        Self {
            habits: default_habits(),
            completions: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Looks up a habit by id.
    pub fn habit(&self, habit_id: &str) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == habit_id)
    }
}

/// The fixed starter set of habits.
pub fn default_habits() -> Vec<Habit> {
    vec![
        Habit::new("1", "Exercise", "#ef4444", "💪"),
        Habit::new("2", "Read", "#3b82f6", "📚"),
        Habit::new("3", "Meditate", "#8b5cf6", "🧘"),
        Habit::new("4", "Water (8 glasses)", "#06b6d4", "💧"),
        Habit::new("5", "Sleep 8h", "#6366f1", "😴"),
    ]
}
