//! Sun–moon elongation.

use std::f64::consts::TAU;

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Moon longitude minus sun longitude, normalized to [0, 2π).
///
/// Degrees and the waxing flag are derived from the stored radians on
/// every call, so the three views can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PhaseAngle {
    radians: f64,
}

impl PhaseAngle {
    /// Wrap an arbitrary angle into [0, 2π). `None` for NaN or infinity.
    pub fn from_radians(radians: f64) -> Option<Self> {
        if !radians.is_finite() {
            return None;
        }
        let mut r = radians.rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        if r >= TAU {
            r = 0.0;
        }
        Some(Self { radians: r })
    }

    /// Elongation from ecliptic longitudes in degrees.
    pub fn from_longitudes_deg(moon_lon_deg: f64, sun_lon_deg: f64) -> Option<Self> {
        Self::from_radians((moon_lon_deg - sun_lon_deg).to_radians())
    }

    /// Angle in [0, 2π).
    pub fn radians(self) -> f64 {
        self.radians
    }

    /// Angle in degrees, for display.
    pub fn degrees(self) -> f64 {
        self.radians.to_degrees()
    }

    /// True while the moon moves from new toward full: degrees in [0, 180).
    pub fn is_waxing(self) -> bool {
        self.degrees() < 180.0
    }
}

impl Serialize for PhaseAngle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("PhaseAngle", 3)?;
        s.serialize_field("angle_radians", &self.radians())?;
        s.serialize_field("angle_degrees", &self.degrees())?;
        s.serialize_field("is_waxing", &self.is_waxing())?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn wraps_into_range() {
        let a = PhaseAngle::from_radians(-PI / 2.0).unwrap();
        assert!((a.radians() - 1.5 * PI).abs() < 1e-12);
        let b = PhaseAngle::from_radians(5.0 * PI).unwrap();
        assert!((b.radians() - PI).abs() < 1e-12);
    }

    #[test]
    fn tiny_negative_does_not_reach_tau() {
        let a = PhaseAngle::from_radians(-1e-300).unwrap();
        assert!(a.radians() < TAU);
        assert!(a.radians() >= 0.0);
    }

    #[test]
    fn rejects_non_finite() {
        assert!(PhaseAngle::from_radians(f64::NAN).is_none());
        assert!(PhaseAngle::from_radians(f64::INFINITY).is_none());
    }

    #[test]
    fn from_longitudes_wraps_across_zero() {
        // moon at 10°, sun at 350° → 20° past new moon
        let a = PhaseAngle::from_longitudes_deg(10.0, 350.0).unwrap();
        assert!((a.degrees() - 20.0).abs() < 1e-9, "deg = {}", a.degrees());
        assert!(a.is_waxing());
    }

    #[test]
    fn waxing_matches_degrees_everywhere() {
        for i in 0..3600 {
            let a = PhaseAngle::from_radians(i as f64 * TAU / 3600.0).unwrap();
            let d = a.degrees();
            assert_eq!(a.is_waxing(), (0.0..180.0).contains(&d), "deg = {d}");
        }
    }

    #[test]
    fn waxing_boundaries() {
        assert!(PhaseAngle::from_radians(0.0).unwrap().is_waxing());
        assert!(!PhaseAngle::from_radians(PI).unwrap().is_waxing());
        assert!(!PhaseAngle::from_radians(1.5 * PI).unwrap().is_waxing());
    }

    #[test]
    fn degrees_round_trip() {
        for r in [0.0, 0.1, 1.0, PI, 4.0, 6.2] {
            let a = PhaseAngle::from_radians(r).unwrap();
            assert!((a.degrees().to_radians() - r).abs() < 1e-12);
        }
    }
}
