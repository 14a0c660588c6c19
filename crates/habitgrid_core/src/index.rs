//! Completion index over the flat record list.
//!
//! # Responsibility
//! - Answer "was habit H completed on day D?" point queries.
//! - Produce toggled record collections without mutating the input.
//! - Enforce `(habit_id, date)` uniqueness for records read from storage.
//!
//! # Invariants
//! - `toggle` never creates a second record for an existing pair.
//! - Absent records and `completed = false` records both read as not completed.

use crate::date::DateKey;
use crate::model::completion::CompletionRecord;
use log::warn;
use std::collections::HashMap;

/// Returns the record stored for `(habit_id, date)`, if any.
///
/// Lets callers tell "never toggled" apart from "toggled off".
pub fn find_record<'a>(
    habit_id: &str,
    date: DateKey,
    records: &'a [CompletionRecord],
) -> Option<&'a CompletionRecord> {
    records.iter().find(|record| record.matches(habit_id, date))
}

/// Returns whether `habit_id` is marked completed on `date`.
///
/// Follows the `normalize_completions` policy on duplicate pairs: completed if
/// any matching record is completed.
pub fn is_completed(habit_id: &str, date: DateKey, records: &[CompletionRecord]) -> bool {
    records
        .iter()
        .any(|record| record.completed && record.matches(habit_id, date))
}

/// Returns a new collection with the `(habit_id, date)` completion toggled.
///
/// - Existing record: copied with `completed` inverted, in its original slot.
/// - No record: a new `completed = true` record is appended.
pub fn toggle(habit_id: &str, date: DateKey, records: &[CompletionRecord]) -> Vec<CompletionRecord> {
    let mut next = normalize_completions(records);
    match next.iter_mut().find(|record| record.matches(habit_id, date)) {
        Some(record) => record.completed = !record.completed,
        None => next.push(CompletionRecord::new(habit_id, date, true)),
    }
    next
}

/// Collapses duplicate `(habit_id, date)` records into one.
///
/// The survivor keeps the position of the first occurrence and is completed if
/// any duplicate was completed.
pub fn normalize_completions(records: &[CompletionRecord]) -> Vec<CompletionRecord> {
    let mut positions: HashMap<(&str, DateKey), usize> = HashMap::with_capacity(records.len());
    let mut normalized: Vec<CompletionRecord> = Vec::with_capacity(records.len());
    let mut collapsed = 0usize;

    for record in records {
        let key = (record.habit_id.as_str(), record.date);
        match positions.get(&key) {
            Some(&index) => {
                normalized[index].completed |= record.completed;
                collapsed += 1;
            }
            None => {
                positions.insert(key, normalized.len());
                normalized.push(record.clone());
            }
        }
    }

    if collapsed > 0 {
        warn!(
            "event=completions_normalize module=index status=collapsed duplicates={}",
            collapsed
        );
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::{find_record, is_completed, normalize_completions, toggle};
    use crate::date::DateKey;
    use crate::model::completion::CompletionRecord;

    fn key(raw: &str) -> DateKey {
        raw.parse().unwrap()
    }

    #[test]
    fn toggle_on_empty_appends_completed_record() {
        let records = toggle("1", key("2024-01-01"), &[]);
        assert_eq!(
            records,
            vec![CompletionRecord::new("1", key("2024-01-01"), true)]
        );
    }

    #[test]
    fn toggle_keeps_record_slot_when_flipping() {
        let original = vec![
            CompletionRecord::new("1", key("2024-01-01"), true),
            CompletionRecord::new("2", key("2024-01-01"), true),
        ];
        let toggled = toggle("1", key("2024-01-01"), &original);

        assert_eq!(toggled.len(), 2);
        assert_eq!(toggled[0].habit_id, "1");
        assert!(!toggled[0].completed);
        assert!(toggled[1].completed);
        assert!(original[0].completed, "input must stay untouched");
    }

    #[test]
    fn explicit_false_differs_from_absent_only_in_find_record() {
        let records = vec![CompletionRecord::new("1", key("2024-01-01"), false)];
        assert!(!is_completed("1", key("2024-01-01"), &records));
        assert!(!is_completed("1", key("2024-01-02"), &records));
        assert!(find_record("1", key("2024-01-01"), &records).is_some());
        assert!(find_record("1", key("2024-01-02"), &records).is_none());
    }

    #[test]
    fn is_completed_agrees_with_normalization_on_duplicates() {
        let records = vec![
            CompletionRecord::new("1", key("2024-01-01"), false),
            CompletionRecord::new("1", key("2024-01-01"), true),
        ];
        assert!(is_completed("1", key("2024-01-01"), &records));
        assert!(is_completed(
            "1",
            key("2024-01-01"),
            &normalize_completions(&records)
        ));
    }

    #[test]
    fn normalize_collapses_duplicates_preferring_completed() {
        let records = vec![
            CompletionRecord::new("1", key("2024-01-01"), false),
            CompletionRecord::new("2", key("2024-01-01"), true),
            CompletionRecord::new("1", key("2024-01-01"), true),
        ];
        let normalized = normalize_completions(&records);
        assert_eq!(
            normalized,
            vec![
                CompletionRecord::new("1", key("2024-01-01"), true),
                CompletionRecord::new("2", key("2024-01-01"), true),
            ]
        );
    }
}
