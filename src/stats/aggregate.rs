use std::collections::BTreeSet;

use super::calendar::NormalizedEntry;

/// Day-level activity summary over every parseable entry timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity<'a> {
    pub distinct_days: usize,
    pub latest: Option<&'a str>,
    pub first: Option<&'a str>,
}

/// Count distinct writing days and find the newest and oldest entries.
///
/// Min/max are computed explicitly from the parsed timestamps; the store's
/// retrieval order is never trusted. The returned strings are the store's
/// own `created_at` representations.
pub fn summarize<'a>(entries: &[NormalizedEntry<'a>]) -> Activity<'a> {
    let distinct_days = entries
        .iter()
        .map(|entry| entry.day)
        .collect::<BTreeSet<_>>()
        .len();

    let latest = entries.iter().max_by_key(|entry| entry.at).map(|entry| entry.raw);
    let first = entries.iter().min_by_key(|entry| entry.at).map(|entry| entry.raw);

    Activity {
        distinct_days,
        latest,
        first,
    }
}
