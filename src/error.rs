/// Build number error type.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildNumberError {
    /// String does not have the `D[DD..]HH` shape.
    #[error("Invalid build number: {0:?}")]
    InvalidBuildNumber(String),

    /// Unix timestamp cannot be represented as a calendar date.
    #[error("Epoch is out of range: {0}")]
    OutOfRangeEpoch(i64),
}

/// Build number result type.
pub type BuildNumberResult<T> = Result<T, BuildNumberError>;
