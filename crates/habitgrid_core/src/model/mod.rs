//! Domain model for habits, daily completions and day notes.
//!
//! # Responsibility
//! - Define the records persisted in the single JSON aggregate.
//! - Keep the wire shape (`habitId`, `date`, `note`) stable for stored blobs.
//!
//! # Invariants
//! - Every completion and note is keyed by a canonical `DateKey`.
//! - Completion records are soft-deleted (`completed = false`), never removed.

pub mod completion;
pub mod data;
pub mod habit;
pub mod note;
