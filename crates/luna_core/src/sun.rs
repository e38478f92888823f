//! Low-precision solar coordinates.
//!
//! Meeus, *Astronomical Algorithms*, chapter 25 ("lower accuracy"):
//! about 0.01° in longitude, ample for phase angles and rise/set times.

use luna_time::jd_to_centuries;

use crate::EclipticPosition;

/// Astronomical unit in km.
pub const AU_KM: f64 = 149_597_870.7;

/// Annual aberration in degrees at 1 AU (20.4898″).
const ABERRATION_DEG: f64 = 20.4898 / 3600.0;

/// Geometric (true) ecliptic position of the Sun at a TT Julian Date.
pub fn sun_position(jd_tt: f64) -> EclipticPosition {
    let t = jd_to_centuries(jd_tt);

    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    let true_lon = l0 + c;
    let v = m + c.to_radians();
    let r_au = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * v.cos());

    EclipticPosition {
        lon_deg: true_lon.rem_euclid(360.0),
        lat_deg: 0.0,
        distance_km: r_au * AU_KM,
    }
}

/// Aberration correction in longitude for a Sun at `distance_km`.
pub fn aberration_deg(distance_km: f64) -> f64 {
    -ABERRATION_DEG * AU_KM / distance_km
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992 October 13.0 TD: true ☉ = 199.90988°, R = 0.99766 AU
        let pos = sun_position(2_448_908.5);
        assert!((pos.lon_deg - 199.909_88).abs() < 0.001, "lon = {}", pos.lon_deg);
        let r_au = pos.distance_km / AU_KM;
        assert!((r_au - 0.997_66).abs() < 1e-4, "R = {r_au}");
    }

    #[test]
    fn longitude_in_range() {
        for i in 0..400 {
            let pos = sun_position(2_451_545.0 + i as f64 * 3.7);
            assert!((0.0..360.0).contains(&pos.lon_deg));
        }
    }

    #[test]
    fn aberration_at_one_au() {
        let a = aberration_deg(AU_KM);
        assert!((a + 0.005_69).abs() < 1e-4, "aberration = {a}");
    }
}
