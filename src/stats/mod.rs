//! Diary statistics engine.
//!
//! A pure computation over the entries' `created_at` timestamps: no I/O, no
//! shared state, recomputed in full on every call. Timestamps are normalized
//! to UTC calendar days, duplicates within a day collapse, and the current
//! writing streak is counted back from today (or yesterday, which keeps a
//! streak alive when nothing has been written yet today).

pub mod aggregate;
pub mod calendar;
pub mod streak;

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::DiaryStats;
use calendar::NormalizedEntry;

/// Compute the full statistics object from raw `created_at` values.
///
/// `None` and unparsable values count toward `total_entries` but are
/// excluded from every date-based figure; they never abort the computation.
pub fn compute_stats<'a, I>(created_at: I, today: NaiveDate) -> DiaryStats
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut total_entries: usize = 0;
    let mut skipped: usize = 0;
    let mut normalized: Vec<NormalizedEntry<'a>> = Vec::new();

    for raw in created_at {
        total_entries += 1;
        match raw.map(calendar::normalize) {
            Some(Ok(entry)) => normalized.push(entry),
            Some(Err(err)) => {
                skipped += 1;
                tracing::debug!(error = %err, "skipping entry with unparsable created_at");
            }
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::warn!(
            skipped,
            total_entries,
            "entries without a usable created_at were excluded from date calculations"
        );
    }

    let days: BTreeSet<NaiveDate> = normalized.iter().map(|entry| entry.day).collect();
    let streak = streak::current_streak(&days, today);
    let activity = aggregate::summarize(&normalized);

    // The streak start is reported in the store's own representation: the
    // earliest entry written on that day.
    let current_streak_start = streak.start.and_then(|start_day| {
        normalized
            .iter()
            .filter(|entry| entry.day == start_day)
            .min_by_key(|entry| entry.at)
            .map(|entry| entry.raw)
    });

    DiaryStats {
        consecutive_days: streak.days as u64,
        total_days_with_entries: activity.distinct_days as u64,
        total_entries: total_entries as u64,
        latest_entry_date: activity.latest.map(str::to_owned),
        first_entry_date: activity.first.map(str::to_owned),
        current_streak_start: current_streak_start.map(str::to_owned),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TODAY: &str = "2026-08-04";

    fn today() -> NaiveDate {
        NaiveDate::parse_from_str(TODAY, "%Y-%m-%d").unwrap()
    }

    fn stats_for(stamps: &[&str]) -> DiaryStats {
        compute_stats(stamps.iter().copied().map(Some), today())
    }

    fn assert_invariants(stats: &DiaryStats) {
        assert!(stats.total_days_with_entries <= stats.total_entries);
        assert!(stats.consecutive_days <= stats.total_days_with_entries);
    }

    #[test]
    fn test_empty_input() {
        let stats = stats_for(&[]);
        assert_eq!(
            stats,
            DiaryStats {
                consecutive_days: 0,
                total_days_with_entries: 0,
                total_entries: 0,
                latest_entry_date: None,
                first_entry_date: None,
                current_streak_start: None,
            }
        );
    }

    #[test]
    fn test_single_entry_today() {
        let stats = stats_for(&["2026-08-04 09:00:00"]);
        assert_eq!(stats.consecutive_days, 1);
        assert_eq!(stats.total_days_with_entries, 1);
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.current_streak_start.as_deref(), Some("2026-08-04 09:00:00"));
        assert_invariants(&stats);
    }

    #[test]
    fn test_three_consecutive_days() {
        let stats = stats_for(&[
            "2026-08-02 21:00:00",
            "2026-08-03 08:00:00",
            "2026-08-04 07:00:00",
        ]);
        assert_eq!(stats.consecutive_days, 3);
        assert_eq!(stats.current_streak_start.as_deref(), Some("2026-08-02 21:00:00"));
        assert_invariants(&stats);
    }

    #[test]
    fn test_gap_restricts_streak_to_today() {
        let stats = stats_for(&["2026-08-01 10:00:00", "2026-08-04 10:00:00"]);
        assert_eq!(stats.consecutive_days, 1);
        assert_eq!(stats.total_days_with_entries, 2);
        assert_eq!(stats.current_streak_start.as_deref(), Some("2026-08-04 10:00:00"));
        assert_invariants(&stats);
    }

    #[test]
    fn test_stale_latest_entry_means_no_streak() {
        let stats = stats_for(&[
            "2026-07-30 10:00:00",
            "2026-07-31 10:00:00",
            "2026-08-01 10:00:00",
            "2026-08-02 10:00:00",
        ]);
        assert_eq!(stats.consecutive_days, 0);
        assert_eq!(stats.current_streak_start, None);
        assert_eq!(stats.total_days_with_entries, 4);
        assert_eq!(stats.latest_entry_date.as_deref(), Some("2026-08-02 10:00:00"));
        assert_invariants(&stats);
    }

    #[test]
    fn test_same_day_entries_collapse() {
        let stats = stats_for(&[
            "2026-08-04 08:00:00",
            "2026-08-04 12:30:00",
            "2026-08-04 22:00:00",
        ]);
        assert_eq!(stats.consecutive_days, 1);
        assert_eq!(stats.total_days_with_entries, 1);
        assert_eq!(stats.total_entries, 3);
        // Streak start is the day's earliest entry, latest is its newest.
        assert_eq!(stats.current_streak_start.as_deref(), Some("2026-08-04 08:00:00"));
        assert_eq!(stats.latest_entry_date.as_deref(), Some("2026-08-04 22:00:00"));
        assert_invariants(&stats);
    }

    #[test]
    fn test_retrieval_order_does_not_matter() {
        let shuffled = stats_for(&[
            "2026-08-03 08:00:00",
            "2026-08-01 10:00:00",
            "2026-08-04 07:00:00",
            "2026-08-02 21:00:00",
        ]);
        let sorted = stats_for(&[
            "2026-08-01 10:00:00",
            "2026-08-02 21:00:00",
            "2026-08-03 08:00:00",
            "2026-08-04 07:00:00",
        ]);
        assert_eq!(shuffled, sorted);
        assert_eq!(shuffled.consecutive_days, 4);
        assert_eq!(shuffled.first_entry_date.as_deref(), Some("2026-08-01 10:00:00"));
        assert_eq!(shuffled.latest_entry_date.as_deref(), Some("2026-08-04 07:00:00"));
    }

    #[test]
    fn test_malformed_rows_count_but_are_skipped() {
        let stats = compute_stats(
            [
                Some("2026-08-04 09:00:00"),
                Some("definitely not a date"),
                None,
            ],
            today(),
        );
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.total_days_with_entries, 1);
        assert_eq!(stats.consecutive_days, 1);
        assert_eq!(stats.latest_entry_date.as_deref(), Some("2026-08-04 09:00:00"));
        assert_invariants(&stats);
    }

    #[test]
    fn test_only_malformed_rows() {
        let stats = compute_stats([Some("garbage"), None], today());
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.total_days_with_entries, 0);
        assert_eq!(stats.consecutive_days, 0);
        assert_eq!(stats.latest_entry_date, None);
        assert_eq!(stats.first_entry_date, None);
        assert_eq!(stats.current_streak_start, None);
    }

    #[test]
    fn test_idempotent_over_same_snapshot() {
        let snapshot = &[
            "2026-08-02 21:00:00",
            "2026-08-03 08:00:00",
            "2026-08-04 07:00:00",
            "2026-08-04 19:00:00",
        ];
        assert_eq!(stats_for(snapshot), stats_for(snapshot));
    }
}
