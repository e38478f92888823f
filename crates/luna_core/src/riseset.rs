//! Next moonrise/moonset search.
//!
//! The body's geometric altitude is sampled forward from the query instant
//! and compared against the standard altitude of its upper limb (refraction,
//! semidiameter and horizontal parallax). The first
//! sign change in the requested direction is refined by bisection.
//!
//! Source: Meeus, *Astronomical Algorithms*, chapter 15 (standard
//! altitudes h0).

use log::trace;
use luna_time::{jd_to_centuries, local_sidereal_deg, ut_to_tt_jd};

use crate::error::EphemerisError;
use crate::frames::{altitude_deg, ecliptic_to_equatorial, mean_obliquity_deg};
use crate::geo::GeoLocation;
use crate::moon::moon_position;
use crate::riseset_types::{HorizonCrossing, RiseSetResult};
use crate::Body;

/// How far ahead to look for the next crossing, in days.
///
/// A lunar day is ~24.8 h; two days also covers the slower lunar days at
/// high latitudes.
const SEARCH_WINDOW_DAYS: f64 = 2.0;

/// Altitude sampling step (10 minutes).
const SCAN_STEP_DAYS: f64 = 10.0 / 1440.0;

/// Maximum bisection steps when refining a crossing.
const MAX_ITERATIONS: usize = 50;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Equatorial Earth radius, km.
const EARTH_RADIUS_KM: f64 = 6378.14;

/// Equatorial coordinates `(ra_deg, dec_deg, distance_km)` of a body.
fn equatorial(body: Body, jd_ut: f64) -> (f64, f64, f64) {
    let jd_tt = ut_to_tt_jd(jd_ut);
    let pos = match body {
        Body::Moon => moon_position(jd_tt),
    };
    let eps = mean_obliquity_deg(jd_to_centuries(jd_tt));
    let (ra, dec) = ecliptic_to_equatorial(pos.lon_deg, pos.lat_deg, eps);
    (ra, dec, pos.distance_km)
}

/// Altitude at which the body's upper limb touches the visible horizon.
///
/// Moon: `h0 = 0.7275·π − 0.5667°`, π = horizontal parallax.
pub fn standard_altitude_deg(body: Body, distance_km: f64) -> f64 {
    match body {
        Body::Moon => {
            let parallax = (EARTH_RADIUS_KM / distance_km).asin().to_degrees();
            0.7275 * parallax - 0.5667
        }
    }
}

/// Body altitude above its standard altitude, degrees. Positive = "up".
pub fn altitude_above_horizon_deg(body: Body, jd_ut: f64, location: &GeoLocation) -> f64 {
    let (ra, dec, dist) = equatorial(body, jd_ut);
    let lst = local_sidereal_deg(jd_ut, location.longitude_deg);
    let hour_angle = lst - ra;
    altitude_deg(hour_angle, dec, location.latitude_deg) - standard_altitude_deg(body, dist)
}

/// Bisect a bracketed sign change of `f` on `[lo, hi]`.
fn refine_crossing(f: impl Fn(f64) -> f64, mut lo: f64, mut hi: f64, f_lo: f64) -> f64 {
    let lo_positive = f_lo > 0.0;
    for _ in 0..MAX_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        if (f(mid) > 0.0) == lo_positive {
            lo = mid;
        } else {
            hi = mid;
        }
        if hi - lo < CONVERGENCE_DAYS {
            break;
        }
    }
    0.5 * (lo + hi)
}

/// Find the next crossing of `body` in direction `crossing` after `jd_ut`.
///
/// # Returns
/// * `RiseSetResult::Event` with the crossing time in JD UT
/// * `RiseSetResult::NeverRises` if the body stays down for the whole window
/// * `RiseSetResult::NeverSets` if the body stays up for the whole window
/// * `RiseSetResult::NotFound` if only the opposite crossing occurs
pub fn next_rise_set(
    body: Body,
    crossing: HorizonCrossing,
    jd_ut: f64,
    location: &GeoLocation,
) -> Result<RiseSetResult, EphemerisError> {
    if !jd_ut.is_finite() {
        return Err(EphemerisError::InvalidInstant("rise/set instant is not finite"));
    }
    location.validate()?;

    let f = |jd: f64| altitude_above_horizon_deg(body, jd, location);
    let steps = (SEARCH_WINDOW_DAYS / SCAN_STEP_DAYS).ceil() as usize;

    let mut t0 = jd_ut;
    let mut f0 = f(t0);
    let mut seen_up = f0 > 0.0;
    let mut seen_down = !seen_up;

    for i in 1..=steps {
        let t1 = jd_ut + i as f64 * SCAN_STEP_DAYS;
        let f1 = f(t1);
        if f1 > 0.0 {
            seen_up = true;
        } else {
            seen_down = true;
        }

        let found = match crossing {
            HorizonCrossing::Rise => f0 <= 0.0 && f1 > 0.0,
            HorizonCrossing::Set => f0 > 0.0 && f1 <= 0.0,
        };
        if found {
            let jd = refine_crossing(f, t0, t1, f0);
            trace!("{} {:?} refined to JD {jd:.6}", body.name(), crossing);
            return Ok(RiseSetResult::Event {
                jd_ut: jd,
                crossing,
            });
        }

        t0 = t1;
        f0 = f1;
    }

    Ok(match (seen_up, seen_down) {
        (true, false) => RiseSetResult::NeverSets,
        (false, true) => RiseSetResult::NeverRises,
        _ => RiseSetResult::NotFound,
    })
}
