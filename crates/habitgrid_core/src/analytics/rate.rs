//! Completion rate over a caller-supplied period length.

use super::completed_days;
use crate::model::completion::CompletionRecord;
use log::warn;

/// Percentage of `total_days` on which `habit_id` was completed.
///
/// Counts distinct completed days. Returns 0 when `total_days` is 0 and clamps
/// the result to `[0, 100]`, logging a data-integrity warning on overflow.
pub fn completion_rate(habit_id: &str, records: &[CompletionRecord], total_days: u32) -> f64 {
    if total_days == 0 {
        return 0.0;
    }

    let completed = completed_days(habit_id, records).len();
    let rate = completed as f64 * 100.0 / f64::from(total_days);
    if rate > 100.0 {
        warn!(
            "event=completion_rate module=analytics status=clamped habit_id={} completed_days={} total_days={}",
            habit_id, completed, total_days
        );
        return 100.0;
    }
    rate
}

#[cfg(test)]
mod tests {
    use super::completion_rate;
    use crate::model::completion::CompletionRecord;

    fn record(raw: &str, completed: bool) -> CompletionRecord {
        CompletionRecord::new("1", raw.parse().unwrap(), completed)
    }

    #[test]
    fn zero_total_days_yields_zero() {
        assert_eq!(completion_rate("1", &[record("2024-01-01", true)], 0), 0.0);
    }

    #[test]
    fn explicit_false_records_are_not_counted() {
        let records = vec![record("2024-01-01", true), record("2024-01-02", false)];
        assert_eq!(completion_rate("1", &records, 4), 25.0);
    }

    #[test]
    fn overflow_is_clamped_to_one_hundred() {
        let records = vec![
            record("2024-01-01", true),
            record("2024-01-02", true),
            record("2024-01-03", true),
        ];
        assert_eq!(completion_rate("1", &records, 2), 100.0);
    }
}
