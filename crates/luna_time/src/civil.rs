//! Civil (wall-clock) dates and fixed UTC offsets.
//!
//! The calculator works at day granularity: a [`CivilDate`] names a local
//! calendar day, a [`UtcOffset`] pins the local zone, and [`LocalTime`] is
//! what rise/set instants look like after conversion back to wall-clock
//! time.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// Largest accepted UTC offset magnitude (UTC+14, Line Islands).
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

const MINUTES_PER_DAY: f64 = 1440.0;

const MS_PER_DAY: i64 = 86_400_000;

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// A validated proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Create a date, rejecting impossible month/day combinations.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    /// Julian Date of 00:00 UT on this calendar day.
    pub fn jd_at_midnight_ut(self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64)
    }

    /// UT Julian Date of local midnight on this day in the given zone.
    pub fn local_midnight_jd_ut(self, offset: UtcOffset) -> f64 {
        self.jd_at_midnight_ut() - offset.as_days()
    }

    /// The date `days` later (or earlier, if negative).
    pub fn add_days(self, days: i64) -> Self {
        // noon avoids day-boundary rounding in the inverse conversion
        let jd = calendar_to_jd(self.year, self.month, self.day as f64 + 0.5) + days as f64;
        let (year, month, day) = jd_to_calendar(jd);
        Self {
            year,
            month,
            day: day.floor() as u32,
        }
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`. The year may carry a leading `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().rsplitn(3, '-').collect();
        if parts.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s}")));
        }
        let year: i32 = parts[2]
            .parse()
            .map_err(|e| TimeError::Parse(format!("year: {e}")))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|e| TimeError::Parse(format!("month: {e}")))?;
        let day: u32 = parts[0]
            .parse()
            .map_err(|e| TimeError::Parse(format!("day: {e}")))?;
        Self::new(year, month, day)
    }
}

/// A fixed offset from UTC, in whole minutes, east positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    /// UTC itself.
    pub const UTC: Self = Self { minutes: 0 };

    /// Korea Standard Time, UTC+09:00.
    pub const KST: Self = Self { minutes: 9 * 60 };

    /// Create an offset; must lie within ±14 hours.
    pub fn from_minutes(minutes: i32) -> Result<Self, TimeError> {
        if minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(TimeError::OffsetOutOfRange { minutes });
        }
        Ok(Self { minutes })
    }

    pub fn minutes(self) -> i32 {
        self.minutes
    }

    /// Offset as a fraction of a day.
    pub fn as_days(self) -> f64 {
        self.minutes as f64 / MINUTES_PER_DAY
    }
}

impl Display for UtcOffset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let abs = self.minutes.abs();
        write!(f, "UTC{sign}{:02}:{:02}", abs / 60, abs % 60)
    }
}

/// Local wall-clock time at minute resolution.
///
/// Seconds are truncated, matching a plain `HH:MM` display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct LocalTime {
    pub date: CivilDate,
    pub hour: u32,
    pub minute: u32,
}

impl LocalTime {
    /// Convert a UT Julian Date into local time for the given offset.
    pub fn from_jd_ut(jd_ut: f64, offset: UtcOffset) -> Result<Self, TimeError> {
        if !jd_ut.is_finite() {
            return Err(TimeError::NonFiniteJd);
        }
        // integer milliseconds since the civil day boundary keeps the
        // minute truncation stable against JD rounding noise
        let local_jd = jd_ut + offset.as_days();
        let total_ms = ((local_jd + 0.5) * MS_PER_DAY as f64).round() as i64;
        let day_number = total_ms.div_euclid(MS_PER_DAY);
        let ms_of_day = total_ms.rem_euclid(MS_PER_DAY);

        let (year, month, day_frac) = jd_to_calendar(day_number as f64);
        let date = CivilDate::new(year, month, day_frac.floor() as u32)?;
        let minutes = (ms_of_day / 60_000) as u32;
        Ok(Self {
            date,
            hour: minutes / 60,
            minute: minutes % 60,
        })
    }
}

impl Display for LocalTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
