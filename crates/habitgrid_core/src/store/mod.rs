//! Persistence collaborator for the habit aggregate.
//!
//! # Responsibility
//! - Store the whole `HabitData` aggregate as one JSON blob under a fixed key.
//! - Recover from unreadable or malformed blobs by substituting defaults.
//!
//! # Invariants
//! - `load` never fails; it falls back to `HabitData::default_data()`.
//! - Loaded completions satisfy `(habit_id, date)` uniqueness.

pub mod habit_store;

pub use habit_store::{HabitStore, SqliteHabitStore, StoreError, StoreResult, STORAGE_KEY};
