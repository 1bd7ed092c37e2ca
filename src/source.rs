use {
    crate::epoch::epoch,
    chrono::{NaiveDateTime, Utc},
    parking_lot::RwLock,
};

/// Where a calculator reads "now" from.
pub trait TimeSource: Default {
    /// Current instant as naive UTC, offset already discarded.
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock of the host, read through `Utc::now()`.
#[derive(Default)]
pub struct UtcClock;

impl TimeSource for UtcClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// Clock that stays at whatever instant it was last given.
///
/// Starts at the build number epoch, so a fresh calculator over it yields
/// `000`.
pub struct ManualClock {
    now: RwLock<NaiveDateTime>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(epoch())
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.read()
    }
}

impl ManualClock {
    /// Stops the clock at `now`.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    /// Moves the clock, forwards or backwards, to `now`.
    pub fn set_now(&self, now: NaiveDateTime) {
        *self.now.write() = now;
    }
}
