//! Closed-form Sun/Moon ephemeris.

use log::debug;
use luna_time::{decimal_year, jd_to_centuries, ut_to_tt_jd};

use crate::error::EphemerisError;
use crate::frames::nutation_longitude_deg;
use crate::geo::GeoLocation;
use crate::moon::moon_position;
use crate::riseset::next_rise_set;
use crate::riseset_types::{HorizonCrossing, RiseSetResult};
use crate::sun::{aberration_deg, sun_position};
use crate::{Body, EclipticPosition, Ephemeris, LuniSolarState};

/// Earliest supported year. ΔT and the truncated lunar series degrade
/// quickly outside this span.
pub const MIN_YEAR: f64 = -1000.0;
/// Latest supported year.
pub const MAX_YEAR: f64 = 3000.0;

/// [`Ephemeris`] backed by Meeus' low-precision solar theory and the
/// truncated ELP-2000/82 lunar series.
///
/// Geocentric: the observer location only matters for rise/set queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    fn check_instant(jd_ut: f64) -> Result<(), EphemerisError> {
        if !jd_ut.is_finite() {
            return Err(EphemerisError::InvalidInstant("Julian Date is not finite"));
        }
        let year = decimal_year(jd_ut);
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(EphemerisError::EpochOutOfRange { jd: jd_ut });
        }
        Ok(())
    }
}

/// Illuminated fraction of the lunar disk in percent (Meeus ch. 48).
///
/// Both positions are geocentric; `sun.distance_km` and
/// `moon.distance_km` set the Sun–Moon–Earth phase angle.
pub(crate) fn illumination_percent(sun: &EclipticPosition, moon: &EclipticPosition) -> f64 {
    let beta = moon.lat_deg.to_radians();
    let dlon = (moon.lon_deg - sun.lon_deg).to_radians();
    let psi = (beta.cos() * dlon.cos()).clamp(-1.0, 1.0).acos();
    let r = sun.distance_km;
    let delta = moon.distance_km;
    let phase_angle = (r * psi.sin()).atan2(delta - r * psi.cos());
    (50.0 * (1.0 + phase_angle.cos())).clamp(0.0, 100.0)
}

impl Ephemeris for AnalyticEphemeris {
    fn luni_solar(
        &self,
        jd_ut: f64,
        _location: &GeoLocation,
    ) -> Result<LuniSolarState, EphemerisError> {
        Self::check_instant(jd_ut)?;

        let jd_tt = ut_to_tt_jd(jd_ut);
        let dpsi = nutation_longitude_deg(jd_to_centuries(jd_tt));

        let mut sun = sun_position(jd_tt);
        sun.lon_deg = (sun.lon_deg + aberration_deg(sun.distance_km) + dpsi).rem_euclid(360.0);
        let mut moon = moon_position(jd_tt);
        moon.lon_deg = (moon.lon_deg + dpsi).rem_euclid(360.0);

        let illumination = illumination_percent(&sun, &moon);
        debug!(
            "JD {jd_ut:.5}: sun {:.4}°, moon {:.4}°, lit {illumination:.2}%",
            sun.lon_deg, moon.lon_deg
        );

        Ok(LuniSolarState {
            sun_lon_deg: sun.lon_deg,
            moon_lon_deg: moon.lon_deg,
            illumination_percent: illumination,
        })
    }

    fn next_rise_set(
        &self,
        body: Body,
        crossing: HorizonCrossing,
        jd_ut: f64,
        location: &GeoLocation,
    ) -> Result<RiseSetResult, EphemerisError> {
        Self::check_instant(jd_ut)?;
        next_rise_set(body, crossing, jd_ut, location)
    }
}
