//! Completion progress snapshots.

use crate::types::{CompletionSet, ProgressSnapshot};

/// Compute a progress snapshot for a plan
///
/// `total_days` comes from the generated schedule's length; the caller
/// derives it once and reuses it. Day numbers outside `[1, total_days]` are
/// ignored rather than rejected: the completion store is externally owned
/// and may be transiently out of step with the plan it refers to.
pub fn progress(
    total_days: u32,
    current_day_number: u32,
    completed_days: &CompletionSet,
) -> ProgressSnapshot {
    let completed = completed_days
        .iter()
        .filter(|&&d| d >= 1 && d <= total_days)
        .count() as u32;

    let percentage = if total_days == 0 {
        0
    } else {
        let pct = (completed as f64 * 100.0 / total_days as f64).round() as u8;
        pct.min(100)
    };

    ProgressSnapshot {
        completed,
        total: total_days,
        percentage,
        current_day_number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completions(days: &[u32]) -> CompletionSet {
        days.iter().copied().collect()
    }

    #[test]
    fn test_empty_completions() {
        let snapshot = progress(100, 1, &CompletionSet::new());
        assert_eq!(snapshot.completed, 0);
        assert_eq!(snapshot.total, 100);
        assert_eq!(snapshot.percentage, 0);
        assert_eq!(snapshot.current_day_number, 1);
    }

    #[test]
    fn test_percentage_rounds() {
        assert_eq!(progress(3, 1, &completions(&[1])).percentage, 33);
        assert_eq!(progress(3, 2, &completions(&[1, 2])).percentage, 67);
    }

    #[test]
    fn test_complete_plan_is_one_hundred_percent() {
        let all: CompletionSet = (1..=50).collect();
        let snapshot = progress(50, 50, &all);
        assert_eq!(snapshot.completed, 50);
        assert_eq!(snapshot.percentage, 100);
    }

    #[test]
    fn test_out_of_range_days_are_ignored() {
        let snapshot = progress(10, 5, &completions(&[0, 1, 2, 11, 99]));
        assert_eq!(snapshot.completed, 2);
        assert_eq!(snapshot.percentage, 20);
    }

    #[test]
    fn test_zero_total_days() {
        let snapshot = progress(0, 0, &completions(&[1, 2, 3]));
        assert_eq!(snapshot.completed, 0);
        assert_eq!(snapshot.percentage, 0);
    }

    #[test]
    fn test_percentage_is_monotonic_in_completions() {
        let mut days = CompletionSet::new();
        let mut prev = 0;
        for d in 1..=37 {
            days.insert(d);
            let pct = progress(37, d, &days).percentage;
            assert!(pct >= prev);
            assert!(pct <= 100);
            prev = pct;
        }
        assert_eq!(prev, 100);
    }
}
