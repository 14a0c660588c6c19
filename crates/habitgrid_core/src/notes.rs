//! Day note collection operations.
//!
//! # Responsibility
//! - Upsert and delete day notes as pure transformations.
//!
//! # Invariants
//! - At most one note exists per date.
//! - Stored note text is trimmed and never empty; saving blank text deletes.

use crate::date::DateKey;
use crate::model::note::DayNote;

/// Returns the note stored for `date`, if any.
pub fn find_note(notes: &[DayNote], date: DateKey) -> Option<&DayNote> {
    notes.iter().find(|note| note.date == date)
}

/// Returns a new collection with `text` saved as the note for `date`.
///
/// An existing note is replaced in place; blank text removes the note.
pub fn save_note(notes: &[DayNote], date: DateKey, text: &str) -> Vec<DayNote> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return delete_note(notes, date);
    }

    let replacement = DayNote {
        date,
        note: trimmed.to_string(),
    };
    let mut next = notes.to_vec();
    match next.iter_mut().find(|note| note.date == date) {
        Some(existing) => *existing = replacement,
        None => next.push(replacement),
    }
    next
}

/// Returns a new collection without the note for `date`.
pub fn delete_note(notes: &[DayNote], date: DateKey) -> Vec<DayNote> {
    notes
        .iter()
        .filter(|note| note.date != date)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{delete_note, find_note, save_note};
    use crate::date::DateKey;

    fn key(raw: &str) -> DateKey {
        raw.parse().unwrap()
    }

    #[test]
    fn save_note_trims_and_upserts_in_place() {
        let notes = save_note(&[], key("2024-01-01"), "  first  ");
        let notes = save_note(&notes, key("2024-01-02"), "second");
        let notes = save_note(&notes, key("2024-01-01"), "rewritten");

        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].date, key("2024-01-01"));
        assert_eq!(notes[0].note, "rewritten");
        assert_eq!(
            find_note(&notes, key("2024-01-02")).map(|n| n.note.as_str()),
            Some("second")
        );
    }

    #[test]
    fn blank_text_deletes_existing_note() {
        let notes = save_note(&[], key("2024-01-01"), "keep me");
        let notes = save_note(&notes, key("2024-01-01"), " \n\t ");
        assert!(notes.is_empty());
    }

    #[test]
    fn delete_note_is_noop_for_missing_date() {
        let notes = save_note(&[], key("2024-01-01"), "keep me");
        assert_eq!(delete_note(&notes, key("2024-02-01")), notes);
    }
}
