//! Error types for calendar handling.

use thiserror::Error;

/// Errors from date parsing, validation, or offset handling.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day triple does not name a real Gregorian date.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Text could not be parsed as a date.
    #[error("date parse error: {0}")]
    Parse(String),
    /// UTC offset outside ±14 hours.
    #[error("UTC offset out of range: {minutes} min")]
    OffsetOutOfRange { minutes: i32 },
    /// Julian Date is not a finite number.
    #[error("non-finite Julian Date")]
    NonFiniteJd,
}
