use chrono::{NaiveDateTime, TimeDelta, TimeZone, Utc};

// Pre-calculated Unix timestamp (in seconds) for 2024-09-02 00:00:00 UTC.
// Build numbers count whole days from this instant.
pub const EPOCH: i64 = 1_725_235_200;

/// Naive UTC instant `days`, `hours` and `minutes` after the epoch.
pub fn at(days: i64, hours: i64, minutes: i64) -> NaiveDateTime {
    Utc.timestamp_opt(EPOCH, 0).unwrap().naive_utc()
        + TimeDelta::days(days)
        + TimeDelta::hours(hours)
        + TimeDelta::minutes(minutes)
}
