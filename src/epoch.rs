use {
    crate::error::{BuildNumberError, BuildNumberResult},
    chrono::{DateTime, NaiveDateTime, TimeDelta},
};

/// Pre-calculated build number epoch.
///
/// 2024-09-02 00:00:00 UTC in seconds since Unix epoch
pub const EPOCH: i64 = 1_725_235_200;

/// Returns the build number epoch as a naive UTC date and time.
pub fn epoch() -> NaiveDateTime {
    NaiveDateTime::UNIX_EPOCH + TimeDelta::seconds(EPOCH)
}

/// Converts a Unix timestamp (in seconds) into a naive UTC epoch.
///
/// Useful when the build numbers of another product line are counted from a
/// different day.
pub fn epoch_from_unix(secs: i64) -> BuildNumberResult<NaiveDateTime> {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.naive_utc())
        .ok_or(BuildNumberError::OutOfRangeEpoch(secs))
}
