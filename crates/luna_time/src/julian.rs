//! Julian Date ↔ Gregorian calendar conversion.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), chapter 7.
//! Proleptic Gregorian calendar in both directions, including dates
//! before the 1582 reform.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Date from a Gregorian calendar date with fractional day.
///
/// `day` may carry the time of day: 1.5 is noon on the 1st.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = y as f64;
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day + b - 1524.5
}

/// Proleptic Gregorian `(year, month, fractional day)` from a Julian Date.
///
/// Inverse of [`calendar_to_jd`] for every year the crate supports.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Decimal year (mid-month resolution) for a Julian Date.
///
/// This is the argument convention of the Delta T polynomials.
pub fn decimal_year(jd: f64) -> f64 {
    let (year, month, _) = jd_to_calendar(jd);
    year as f64 + (month as f64 - 0.5) / 12.0
}
