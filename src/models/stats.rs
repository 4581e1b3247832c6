use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Writing-streak and activity metrics derived from the full entry set.
///
/// Recomputed from scratch on every request; nothing here is persisted. The
/// date fields carry the store's raw `created_at` strings, not re-normalized
/// output. Invariants: `total_days_with_entries <= total_entries` and
/// `consecutive_days <= total_days_with_entries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DiaryStats {
    pub consecutive_days: u64,
    pub total_days_with_entries: u64,
    pub total_entries: u64,
    pub latest_entry_date: Option<String>,
    pub first_entry_date: Option<String>,
    pub current_streak_start: Option<String>,
}
