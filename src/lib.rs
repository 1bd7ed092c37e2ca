//! Time-derived build numbers.
//!
//! A build number is the count of whole days since 2024-09-02 00:00:00 UTC
//! followed by the UTC hour of day as two digits, e.g. `30505` for day 305,
//! hour 5. It grows with time without a counter file or other stored state.
//!
//! ```
//! use {buildnum::{BuildNumberCalculator, ManualClock}, chrono::TimeDelta};
//!
//! let calculator = BuildNumberCalculator::<ManualClock>::new();
//! let epoch = calculator.epoch();
//!
//! calculator
//!     .ts_provider()
//!     .set_now(epoch + TimeDelta::days(305) + TimeDelta::minutes(330));
//! assert_eq!(calculator.build_number().to_string(), "30505");
//! ```

pub mod build_number;
pub mod calculator;
pub mod epoch;
pub mod error;
pub mod source;
pub mod version;

pub use {
    build_number::{BuildNumber, compute_build_number},
    calculator::BuildNumberCalculator,
    epoch::{EPOCH, epoch, epoch_from_unix},
    error::{BuildNumberError, BuildNumberResult},
    source::{ManualClock, TimeSource, UtcClock},
    version::Version,
};
