use std::{fmt, num::IntErrorKind};

/// Application version, as stamped by the build tools.
///
/// The build number is the decimal value of a
/// [`BuildNumber`](crate::BuildNumber), so builds of the same
/// `major.minor` line order by the time they were made.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Version {
    /// Major version number, bumped when backwards compatibility breaks.
    pub major: i64,
    /// Minor version number, bumped for backwards-compatible features.
    pub minor: i64,
    /// Time-derived build number.
    pub build_number: i64,
    /// Hash of the commit the build is based on.
    pub commit_hash: String,
    /// Branch the build is based on.
    pub branch: String,
    /// Release channel derived from the branch.
    pub channel: String,
}

impl Version {
    /// Creates a version from raw build-time strings.
    ///
    /// Numeric fields are read as signed decimal without trimming. Empty or
    /// malformed ones become `0`; out-of-range ones saturate.
    pub fn from_build_vars(
        major: &str,
        minor: &str,
        build_number: &str,
        commit_hash: &str,
        branch: &str,
        channel: &str,
    ) -> Self {
        Self {
            major: lenient_i64(major),
            minor: lenient_i64(minor),
            build_number: lenient_i64(build_number),
            commit_hash: commit_hash.to_owned(),
            branch: branch.to_owned(),
            channel: channel.to_owned(),
        }
    }

    /// Version of the running binary.
    ///
    /// Fields come from `BUILDNUM_*` environment variables set at compile
    /// time; unset ones are treated as empty.
    pub fn current() -> Self {
        Self::from_build_vars(
            option_env!("BUILDNUM_VERSION_MAJOR").unwrap_or_default(),
            option_env!("BUILDNUM_VERSION_MINOR").unwrap_or_default(),
            option_env!("BUILDNUM_BUILD_NUMBER").unwrap_or_default(),
            option_env!("BUILDNUM_COMMIT_HASH").unwrap_or_default(),
            option_env!("BUILDNUM_BRANCH").unwrap_or_default(),
            option_env!("BUILDNUM_CHANNEL").unwrap_or_default(),
        )
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{} commitHash:{} branch:{} channel:{}",
            self.major, self.minor, self.build_number, self.commit_hash, self.branch, self.channel
        )
    }
}

fn lenient_i64(val: &str) -> i64 {
    match val.parse::<i64>() {
        Ok(v) => v,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        },
    }
}
