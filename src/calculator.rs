use {
    crate::{
        build_number::BuildNumber,
        epoch::epoch,
        source::{TimeSource, UtcClock},
    },
    chrono::NaiveDateTime,
};

/// Build number calculator.
///
/// Reads the current instant from a [`TimeSource`] and counts days from a
/// fixed epoch. The epoch is set once, at construction, and never changes.
///
/// The default calculator uses the system clock and the compiled-in
/// [`EPOCH`](crate::epoch::EPOCH):
///
/// ```
/// use buildnum::BuildNumberCalculator;
///
/// let calculator = BuildNumberCalculator::default();
/// let build_number = calculator.build_number();
/// assert!(build_number.days() >= 0);
/// assert!(build_number.hour() < 24);
/// ```
pub struct BuildNumberCalculator<S = UtcClock> {
    source: S,
    epoch: NaiveDateTime,
}

impl Default for BuildNumberCalculator<UtcClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TimeSource> BuildNumberCalculator<S> {
    /// Creates a calculator counting from the compiled-in epoch.
    pub fn new() -> Self {
        Self::with_epoch(epoch())
    }

    /// Creates a calculator counting from the given naive UTC epoch.
    pub fn with_epoch(epoch: NaiveDateTime) -> Self {
        Self {
            source: S::default(),
            epoch,
        }
    }

    /// Reads the time source once and computes the build number.
    pub fn build_number(&self) -> BuildNumber {
        BuildNumber::compute(self.source.now(), self.epoch)
    }

    /// Epoch the calculator counts days from.
    pub fn epoch(&self) -> NaiveDateTime {
        self.epoch
    }

    /// Returns the time source.
    pub fn ts_provider(&self) -> &S {
        &self.source
    }
}
