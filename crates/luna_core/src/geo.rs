//! Observer location on Earth's surface.

use serde::Serialize;

use crate::error::EphemerisError;

/// Geographic location of the observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    pub const fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Check that the coordinates are finite and in range.
    pub fn validate(&self) -> Result<(), EphemerisError> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(EphemerisError::InvalidLocation(
                "latitude must be within [-90, 90]",
            ));
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(EphemerisError::InvalidLocation(
                "longitude must be within [-180, 180]",
            ));
        }
        if !self.altitude_m.is_finite() {
            return Err(EphemerisError::InvalidLocation("altitude must be finite"));
        }
        Ok(())
    }
}
