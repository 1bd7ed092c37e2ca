use {
    crate::error::{BuildNumberError, BuildNumberResult},
    chrono::{NaiveDateTime, TimeDelta, Timelike},
    std::{fmt, str::FromStr},
};

/// Time-derived build number.
///
/// A build number is the count of whole days elapsed since an epoch, followed
/// by the UTC hour of day as exactly two digits. Both parts are naive UTC
/// values: the caller is expected to strip any offset before computing.
///
/// Use [`compute()`](Self::compute()) to derive a build number from an
/// instant, or parse one back from its string form with [`str::parse`].
/// The string form splits unambiguously because the hour is fixed at two
/// digits: everything but the last two characters is the day count.
///
/// Ordering follows `(days, hour)`, which matches time order. The numeric
/// value returned by [`as_u64()`](Self::as_u64()) is monotonic too, but the
/// strings are not when compared lexically (`"923"` sorts after `"1000"`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BuildNumber {
    days: i64,
    hour: u32,
}

impl BuildNumber {
    /// Computes the build number of `now` relative to `epoch`.
    ///
    /// Day count is floored, so partial days never advance it. Instants before
    /// the epoch are not rejected and yield a negative day count.
    pub fn compute(now: NaiveDateTime, epoch: NaiveDateTime) -> Self {
        let days = floor_days(now - epoch);
        let hour = now.hour();
        log::debug!("{now} is {days} day(s) past {epoch}, hour {hour}");
        Self { days, hour }
    }

    /// Whole days elapsed since the epoch.
    pub fn days(&self) -> i64 {
        self.days
    }

    /// UTC hour of day, in `0..=23`.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Returns the decimal value of the build number.
    ///
    /// `None` for build numbers preceding the epoch, or too large for `u64`.
    pub fn as_u64(&self) -> Option<u64> {
        u64::try_from(self.days)
            .ok()?
            .checked_mul(100)?
            .checked_add(u64::from(self.hour))
    }
}

impl fmt::Display for BuildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.days, self.hour)
    }
}

impl FromStr for BuildNumber {
    type Err = BuildNumberError;

    fn from_str(s: &str) -> BuildNumberResult<Self> {
        let invalid = || BuildNumberError::InvalidBuildNumber(s.to_owned());

        if s.len() < 3 || !s.is_ascii() {
            return Err(invalid());
        }
        let (days, hour) = s.split_at(s.len() - 2);

        // Day count is plain decimal, optionally negative, without padding.
        let digits = days.strip_prefix('-').unwrap_or(days);
        if digits.is_empty()
            || !digits.bytes().all(|b| b.is_ascii_digit())
            || (digits.len() > 1 && digits.starts_with('0'))
            || days == "-0"
        {
            return Err(invalid());
        }
        if !hour.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let days = days.parse::<i64>().map_err(|_| invalid())?;
        let hour = hour.parse::<u32>().map_err(|_| invalid())?;
        if hour > 23 {
            return Err(invalid());
        }
        Ok(Self { days, hour })
    }
}

/// Formats the build number of `now`, counted from the default epoch.
///
/// `now` must already be normalized to UTC.
pub fn compute_build_number(now: NaiveDateTime) -> String {
    BuildNumber::compute(now, crate::epoch::epoch()).to_string()
}

/// Whole days in `delta`, rounded toward negative infinity.
fn floor_days(delta: TimeDelta) -> i64 {
    let days = delta.num_days();
    if delta < TimeDelta::days(days) {
        days - 1
    } else {
        days
    }
}
