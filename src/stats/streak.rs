use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

/// The current run of consecutive writing days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Streak {
    pub days: usize,
    pub start: Option<NaiveDate>,
}

impl Streak {
    const BROKEN: Streak = Streak {
        days: 0,
        start: None,
    };
}

/// Walk the distinct calendar days from the most recent backward and count
/// the current streak.
///
/// The streak only counts while it reaches the present: the most recent day
/// must be `today` or yesterday, otherwise a day has already been missed and
/// the result is zero no matter how long the historical run was. A post made
/// yesterday keeps the streak alive even when nothing has been written yet
/// today.
pub fn current_streak(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> Streak {
    let mut recent_first = days.iter().rev().copied();

    let Some(latest) = recent_first.next() else {
        return Streak::BROKEN;
    };

    let yesterday = today - Duration::days(1);
    if latest != today && latest != yesterday {
        return Streak::BROKEN;
    }

    let mut count = 1;
    let mut start = latest;
    for day in recent_first {
        // Distinct days in strict descending order: a gap other than exactly
        // one whole day ends the streak.
        if (start - day).num_days() != 1 {
            break;
        }
        count += 1;
        start = day;
    }

    Streak {
        days: count,
        start: Some(start),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn days(list: &[&str]) -> BTreeSet<NaiveDate> {
        list.iter().map(|s| day(s)).collect()
    }

    const TODAY: &str = "2026-08-04";

    #[test]
    fn test_no_days_no_streak() {
        let streak = current_streak(&BTreeSet::new(), day(TODAY));
        assert_eq!(streak, Streak { days: 0, start: None });
    }

    #[test]
    fn test_single_day_today() {
        let streak = current_streak(&days(&[TODAY]), day(TODAY));
        assert_eq!(streak.days, 1);
        assert_eq!(streak.start, Some(day(TODAY)));
    }

    #[test]
    fn test_three_consecutive_days() {
        let streak = current_streak(
            &days(&["2026-08-02", "2026-08-03", TODAY]),
            day(TODAY),
        );
        assert_eq!(streak.days, 3);
        assert_eq!(streak.start, Some(day("2026-08-02")));
    }

    #[test]
    fn test_yesterday_keeps_streak_alive() {
        // Nothing written today yet; the run ending yesterday still counts.
        let streak = current_streak(&days(&["2026-08-01", "2026-08-02", "2026-08-03"]), day(TODAY));
        assert_eq!(streak.days, 3);
        assert_eq!(streak.start, Some(day("2026-08-01")));
    }

    #[test]
    fn test_gap_ends_the_walk() {
        // Today plus an entry three days ago: only today is contiguous.
        let streak = current_streak(&days(&["2026-08-01", TODAY]), day(TODAY));
        assert_eq!(streak.days, 1);
        assert_eq!(streak.start, Some(day(TODAY)));
    }

    #[test]
    fn test_latest_two_days_ago_breaks_streak() {
        // A long historical run means nothing once a day has been missed.
        let streak = current_streak(
            &days(&["2026-07-30", "2026-07-31", "2026-08-01", "2026-08-02"]),
            day(TODAY),
        );
        assert_eq!(streak, Streak { days: 0, start: None });
    }

    #[test]
    fn test_streak_stops_at_first_gap_in_longer_history() {
        let streak = current_streak(
            &days(&["2026-07-28", "2026-07-29", "2026-08-02", "2026-08-03", TODAY]),
            day(TODAY),
        );
        assert_eq!(streak.days, 3);
        assert_eq!(streak.start, Some(day("2026-08-02")));
    }

    #[test]
    fn test_month_boundary() {
        let streak = current_streak(
            &days(&["2026-07-31", "2026-08-01"]),
            day("2026-08-01"),
        );
        assert_eq!(streak.days, 2);
        assert_eq!(streak.start, Some(day("2026-07-31")));
    }
}
