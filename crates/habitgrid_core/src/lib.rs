//! Core domain logic for HabitGrid.
//! This crate is the single source of truth for tracking invariants.

pub mod analytics;
pub mod config;
pub mod date;
pub mod db;
pub mod index;
pub mod logging;
pub mod model;
pub mod notes;
pub mod service;
pub mod store;

pub use analytics::{
    calculate_streak, calculate_streak_today, completion_rate, summarize, summarize_month,
    HabitStats, MonthlySummary, StreakInfo,
};
pub use config::{Config, ConfigError};
pub use date::{
    days_in_month, from_date_key, is_future, is_same_day, is_today, local_now, local_today,
    month_name, to_date_key, DateKey, DateKeyError, MonthCursor,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::completion::CompletionRecord;
pub use model::data::{default_habits, HabitData};
pub use model::habit::{Habit, HabitId};
pub use model::note::DayNote;
pub use service::tracker_service::{TrackerError, TrackerService};
pub use store::{HabitStore, SqliteHabitStore, StoreError, StoreResult, STORAGE_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
