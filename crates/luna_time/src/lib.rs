//! Calendar and time-scale helpers for the moon phase calculator.
//!
//! This crate provides:
//! - Validated Gregorian civil dates and fixed UTC offsets
//! - Julian Date ↔ calendar conversions
//! - UT → TT conversion through a Delta T model
//! - Greenwich and local mean sidereal time

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{CivilDate, LocalTime, UtcOffset};
pub use delta_t::{delta_t_seconds, ut_to_tt_jd};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, decimal_year, jd_to_calendar, jd_to_centuries,
};
pub use sidereal::{greenwich_sidereal_deg, local_sidereal_deg};
