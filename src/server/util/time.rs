//! Time bucketing for daily usage counters.

use chrono::{DateTime, NaiveDate, Utc};

/// The calendar day a usage event is counted against.
///
/// Pinned to UTC: every deployment and every user shares the same rollover
/// moment, so a counter row's (account, feature, day) key is unambiguous.
pub fn usage_day(now: DateTime<Utc>) -> NaiveDate {
    now.date_naive()
}
