//! Ephemeris oracle for the moon phase calculator.
//!
//! The calculator only needs two astronomical answers: where the Sun and
//! Moon are along the ecliptic (plus how much of the Moon is lit), and when
//! a body next crosses the horizon. [`Ephemeris`] is the narrow seam that
//! exposes exactly those two queries; [`AnalyticEphemeris`] answers them
//! from closed-form series so no kernel files are needed.

pub mod analytic;
pub mod error;
pub mod frames;
pub mod geo;
pub mod moon;
pub mod riseset;
pub mod riseset_types;
pub mod sun;

pub use analytic::AnalyticEphemeris;
pub use error::EphemerisError;
pub use geo::GeoLocation;
pub use riseset_types::{HorizonCrossing, RiseSetResult};

/// Bodies the oracle can answer rise/set queries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Body {
    Moon,
}

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Moon => "Moon",
        }
    }
}

/// Geocentric ecliptic position, mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    pub lon_deg: f64,
    pub lat_deg: f64,
    pub distance_km: f64,
}

/// Sun/Moon snapshot at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuniSolarState {
    /// Apparent ecliptic longitude of the Sun, degrees in [0, 360).
    pub sun_lon_deg: f64,
    /// Apparent ecliptic longitude of the Moon, degrees in [0, 360).
    pub moon_lon_deg: f64,
    /// Percent of the Moon's visible disk that is lit, [0, 100].
    pub illumination_percent: f64,
}

/// Astronomical capability used by the phase calculator.
///
/// Implementations must be deterministic: the same instant and location
/// always give the same answer. Unavailable rise/set events are reported
/// through [`RiseSetResult`], not as errors; `Err` is reserved for
/// failures that make the whole query meaningless.
pub trait Ephemeris: Send + Sync {
    /// Sun and Moon longitudes plus lunar illumination at a UT instant.
    fn luni_solar(
        &self,
        jd_ut: f64,
        location: &GeoLocation,
    ) -> Result<LuniSolarState, EphemerisError>;

    /// Next horizon crossing of `body` strictly after `jd_ut`.
    fn next_rise_set(
        &self,
        body: Body,
        crossing: HorizonCrossing,
        jd_ut: f64,
        location: &GeoLocation,
    ) -> Result<RiseSetResult, EphemerisError>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn luni_solar(
        &self,
        jd_ut: f64,
        location: &GeoLocation,
    ) -> Result<LuniSolarState, EphemerisError> {
        (**self).luni_solar(jd_ut, location)
    }

    fn next_rise_set(
        &self,
        body: Body,
        crossing: HorizonCrossing,
        jd_ut: f64,
        location: &GeoLocation,
    ) -> Result<RiseSetResult, EphemerisError> {
        (**self).next_rise_set(body, crossing, jd_ut, location)
    }
}
