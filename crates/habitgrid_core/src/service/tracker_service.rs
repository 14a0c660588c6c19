//! Habit tracker use-case service.
//!
//! # Responsibility
//! - Own the in-memory `HabitData` aggregate for one session.
//! - Apply toggles and note edits as copy-on-write transitions.
//! - Persist after every transition and expose analytics over current state.
//!
//! # Invariants
//! - Readers never observe a partially updated aggregate.
//! - A failed save is logged and leaves in-memory state authoritative.
//! - Future days and unknown habits cannot be toggled.

use crate::analytics::{
    calculate_streak, completion_rate, summarize_month, MonthlySummary, StreakInfo,
};
use crate::date::{is_future, DateKey, MonthCursor};
use crate::index;
use crate::model::data::HabitData;
use crate::model::habit::Habit;
use crate::model::note::DayNote;
use crate::notes;
use crate::store::HabitStore;
use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected tracker transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// No habit with this id exists in the aggregate.
    UnknownHabit(String),
    /// The day lies after the reference clock's current day.
    FutureDate(DateKey),
}

impl Display for TrackerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownHabit(habit_id) => write!(f, "unknown habit: `{habit_id}`"),
            Self::FutureDate(date) => write!(f, "cannot toggle future date {date}"),
        }
    }
}

impl Error for TrackerError {}

/// Session facade over a `HabitStore`.
pub struct TrackerService<S: HabitStore> {
    store: S,
    data: HabitData,
}

impl<S: HabitStore> TrackerService<S> {
    /// Loads the aggregate from `store` (or its defaults) and starts a session.
    pub fn open(store: S) -> Self {
        let data = store.load();
        Self { store, data }
    }

    /// Current aggregate snapshot.
    pub fn data(&self) -> &HabitData {
        &self.data
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn habits(&self) -> &[Habit] {
        &self.data.habits
    }

    pub fn habit(&self, habit_id: &str) -> Option<&Habit> {
        self.data.habit(habit_id)
    }

    pub fn is_completed(&self, habit_id: &str, date: DateKey) -> bool {
        index::is_completed(habit_id, date, &self.data.completions)
    }

    /// Toggles completion of `habit_id` on `date` and persists the result.
    ///
    /// Returns the new completed flag.
    ///
    /// # Errors
    /// - `UnknownHabit` when `habit_id` is not in the aggregate.
    /// - `FutureDate` when `date` is after `now`'s calendar day.
    pub fn toggle_completion(
        &mut self,
        habit_id: &str,
        date: DateKey,
        now: NaiveDateTime,
    ) -> Result<bool, TrackerError> {
        if self.habit(habit_id).is_none() {
            return Err(TrackerError::UnknownHabit(habit_id.to_string()));
        }
        if is_future(date.date(), now) {
            return Err(TrackerError::FutureDate(date));
        }

        let completions = index::toggle(habit_id, date, &self.data.completions);
        let completed = index::is_completed(habit_id, date, &completions);
        self.commit(HabitData {
            completions,
            ..self.data.clone()
        });

        info!(
            "event=completion_toggle module=service status=ok habit_id={} date={} completed={}",
            habit_id, date, completed
        );
        Ok(completed)
    }

    /// Streaks for `habit_id` anchored at `reference`.
    pub fn streak(&self, habit_id: &str, reference: NaiveDate) -> StreakInfo {
        calculate_streak(habit_id, &self.data.completions, reference)
    }

    /// Completion rate of `habit_id` over a period of `total_days`.
    pub fn completion_rate(&self, habit_id: &str, total_days: u32) -> f64 {
        completion_rate(habit_id, &self.data.completions, total_days)
    }

    /// Aggregated statistics for `month`.
    ///
    /// Rates count completions inside `month` only; streaks use all history.
    pub fn monthly_summary(&self, month: MonthCursor, reference: NaiveDate) -> MonthlySummary {
        summarize_month(
            &self.data.habits,
            &self.data.completions,
            month,
            reference,
        )
    }

    /// Saves the note for `date`; blank text deletes it.
    pub fn save_note(&mut self, date: DateKey, text: &str) {
        let notes = notes::save_note(&self.data.notes, date, text);
        let deleted = notes::find_note(&notes, date).is_none();
        self.commit(HabitData {
            notes,
            ..self.data.clone()
        });
        info!(
            "event=note_save module=service status=ok date={} deleted={}",
            date, deleted
        );
    }

    /// Removes the note for `date`, if present.
    pub fn delete_note(&mut self, date: DateKey) {
        if self.note_for(date).is_none() {
            debug!("event=note_delete module=service status=noop date={date}");
            return;
        }
        let notes = notes::delete_note(&self.data.notes, date);
        self.commit(HabitData {
            notes,
            ..self.data.clone()
        });
        info!("event=note_delete module=service status=ok date={date}");
    }

    pub fn note_for(&self, date: DateKey) -> Option<&DayNote> {
        notes::find_note(&self.data.notes, date)
    }

    /// Notes dated inside `month`, ascending by date.
    pub fn notes_in_month(&self, month: MonthCursor) -> Vec<&DayNote> {
        let mut selected: Vec<&DayNote> = self
            .data
            .notes
            .iter()
            .filter(|note| month.contains(note.date.date()))
            .collect();
        selected.sort_by_key(|note| note.date);
        selected
    }

    fn commit(&mut self, next: HabitData) {
        self.data = next;
        if let Err(err) = self.store.save(&self.data) {
            error!(
                "event=state_persist module=service status=error in_memory=authoritative error={}",
                err
            );
        }
    }
}
