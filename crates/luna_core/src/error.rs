//! Error types for ephemeris queries.

use thiserror::Error;

/// Errors from the ephemeris oracle.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Epoch outside the range the series are fitted for.
    #[error("epoch out of range: JD {jd}")]
    EpochOutOfRange { jd: f64 },
    /// Instant is NaN or infinite.
    #[error("invalid instant: {0}")]
    InvalidInstant(&'static str),
    /// Observer coordinates are not on the globe.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
}
