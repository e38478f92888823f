//! Delta T (TT − UT) from the Espenak–Meeus polynomial fits.
//!
//! Piecewise polynomials published with the NASA Five Millennium Canon of
//! Solar Eclipses. Only the 1900–2150 pieces are carried individually;
//! outside that span the long-term parabola is used, which is adequate
//! for the minute-level precision of rise/set times.

use crate::julian::{SECONDS_PER_DAY, decimal_year};

/// Delta T in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    if (1900.0..1920.0).contains(&year) {
        let t = year - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4)
    } else if (1920.0..1941.0).contains(&year) {
        let t = year - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
    } else if (1941.0..1961.0).contains(&year) {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if (1961.0..1986.0).contains(&year) {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if (1986.0..2005.0).contains(&year) {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if (2005.0..2050.0).contains(&year) {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t.powi(2)
    } else if (2050.0..2150.0).contains(&year) {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u.powi(2) - 0.5628 * (2150.0 - year)
    } else {
        long_term(year)
    }
}

fn long_term(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u.powi(2)
}

/// Convert a UT Julian Date to TT.
pub fn ut_to_tt_jd(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(decimal_year(jd_ut)) / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_t_2000() {
        let dt = delta_t_seconds(2000.0);
        assert!((dt - 63.86).abs() < 0.01, "dt(2000) = {dt}");
    }

    #[test]
    fn delta_t_2024_near_observed() {
        // observed ~69.2 s; the 2005 fit overshoots slightly
        let dt = delta_t_seconds(2024.5);
        assert!((60.0..80.0).contains(&dt), "dt(2024.5) = {dt}");
    }

    #[test]
    fn delta_t_1975() {
        assert!((delta_t_seconds(1975.0) - 45.45).abs() < 1e-9);
    }

    #[test]
    fn continuity_at_2050() {
        let before = delta_t_seconds(2049.999);
        let after = delta_t_seconds(2050.0);
        assert!((before - after).abs() < 1.0, "{before} vs {after}");
    }

    #[test]
    fn long_term_far_past() {
        // 1000 CE: -20 + 32 * (-8.2)^2 = 2131.68 s
        let dt = delta_t_seconds(1000.0);
        assert!((dt - 2131.68).abs() < 0.01, "dt(1000) = {dt}");
    }

    #[test]
    fn tt_ahead_of_ut() {
        let jd_ut = 2_460_000.5;
        let jd_tt = ut_to_tt_jd(jd_ut);
        let seconds = (jd_tt - jd_ut) * SECONDS_PER_DAY;
        assert!((60.0..80.0).contains(&seconds), "TT-UT = {seconds} s");
    }
}
