//! Error types for phase computation.

use luna_core::EphemerisError;
use thiserror::Error;

/// Errors from computing a moon observation.
///
/// Unavailable moonrise/moonset is not an error; see
/// [`EventTime::Unavailable`](crate::EventTime::Unavailable).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PhaseError {
    /// The ephemeris could not answer at all.
    #[error("ephemeris failure: {0}")]
    Oracle(#[from] EphemerisError),
    /// The ephemeris returned a value outside its documented range.
    #[error("invalid ephemeris reading: {0}")]
    InvalidReading(&'static str),
}
