//! Habit definition.

use serde::{Deserialize, Serialize};

/// Stable identifier of a habit.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type HabitId = String;

/// A trackable recurring activity.
///
/// Habits are immutable once created; only the default starter set exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    /// Display name.
    pub name: String,
    /// CSS-style hex color used by front ends, e.g. `#ef4444`.
    pub color: String,
    /// Single emoji (or short glyph) shown next to the name.
    pub icon: String,
}

impl Habit {
    pub fn new(
        id: impl Into<HabitId>,
        name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
        }
    }
}
