//! Plain-text rendering for CLI output.

use chrono::{Datelike, NaiveDateTime};
use habitgrid_core::index::is_completed;
use habitgrid_core::{is_future, DateKey, DayNote, Habit, HabitData, MonthCursor, MonthlySummary};
use std::fmt::Write;

pub fn habit_list(habits: &[Habit]) -> String {
    let mut out = String::new();
    for habit in habits {
        let _ = writeln!(out, "{:>3}  {} {}", habit.id, habit.icon, habit.name);
    }
    out
}

pub fn summary(month: MonthCursor, summary: &MonthlySummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{month} Habit Tracker");
    let _ = writeln!(
        out,
        "Overall progress: {}%  |  Active streaks: {} of {}  |  Best streak: {} days",
        summary.average_completion_rate.round(),
        summary.active_streak_count,
        summary.habits.len(),
        summary.best_streak_ever
    );
    for stats in &summary.habits {
        let _ = write!(
            out,
            "  {} {:<20} {:>4}%  longest {:>3}",
            stats.habit.icon,
            stats.habit.name,
            stats.completion_rate.round(),
            stats.streak.longest
        );
        if stats.streak.current > 0 {
            let _ = write!(out, "  streak {}", stats.streak.current);
        }
        out.push('\n');
    }
    out
}

/// One row per habit: `#` done, `.` not done, blank for future days.
pub fn grid(month: MonthCursor, data: &HabitData, now: NaiveDateTime) -> String {
    let days = month.days();
    let name_width = data
        .habits
        .iter()
        .map(|habit| habit.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = write!(out, "{:width$}  ", "", width = name_width);
    for day in &days {
        out.push(char::from_digit(day.day() % 10, 10).unwrap_or(' '));
    }
    out.push('\n');

    for habit in &data.habits {
        let _ = write!(out, "{:width$}  ", habit.name, width = name_width);
        for &day in &days {
            let cell = if is_future(day, now) {
                ' '
            } else if is_completed(&habit.id, DateKey::new(day), &data.completions) {
                '#'
            } else {
                '.'
            };
            out.push(cell);
        }
        out.push('\n');
    }
    out
}

pub fn notes(month: MonthCursor, notes: &[&DayNote]) -> String {
    if notes.is_empty() {
        return format!("No notes for {month}\n");
    }
    let mut out = String::new();
    for note in notes {
        let _ = writeln!(out, "{}  {}", note.date, note.note);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{grid, notes, summary};
    use chrono::NaiveDate;
    use habitgrid_core::{summarize, CompletionRecord, Habit, HabitData, MonthCursor};

    fn data() -> HabitData {
        HabitData {
            habits: vec![Habit::new("1", "Run", "#000000", "R")],
            completions: vec![CompletionRecord::new("1", "2024-02-02".parse().unwrap(), true)],
            notes: Vec::new(),
        }
    }

    #[test]
    fn grid_marks_done_missed_and_future_days() {
        let month = MonthCursor::new(2024, 2).unwrap();
        let now = NaiveDate::from_ymd_opt(2024, 2, 3)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let rendered = grid(month, &data(), now);
        let row = rendered.lines().nth(1).unwrap();
        assert!(row.starts_with("Run  .#."));
        assert_eq!(row.len(), "Run  ".len() + 29);
        assert!(row.ends_with(' '));
    }

    #[test]
    fn summary_lists_header_and_habits() {
        let month = MonthCursor::new(2024, 2).unwrap();
        let data = data();
        let reference = NaiveDate::from_ymd_opt(2024, 2, 2).unwrap();
        let stats = summarize(&data.habits, &data.completions, 29, reference);
        let rendered = summary(month, &stats);
        assert!(rendered.starts_with("February 2024 Habit Tracker\n"));
        assert!(rendered.contains("Active streaks: 1 of 1"));
        assert!(rendered.contains("streak 1"));
    }

    #[test]
    fn empty_notes_render_placeholder() {
        let month = MonthCursor::new(2024, 2).unwrap();
        assert_eq!(notes(month, &[]), "No notes for February 2024\n");
    }
}
