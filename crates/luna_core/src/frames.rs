//! Ecliptic → equatorial → horizontal conversions.
//!
//! Source: Meeus, *Astronomical Algorithms*, chapters 13 and 22.

/// Mean obliquity of the ecliptic in degrees (Meeus eq. 22.2).
///
/// `t` is Julian centuries of TT since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    23.439_291_111 - 0.013_004_167 * t - 1.639e-7 * t * t + 5.036e-7 * t * t * t
}

/// Nutation in longitude, degrees, dominant 18.6-year term only.
///
/// `Δψ ≈ −17.20″ sin Ω`; good to about 1″, which is far below what a
/// phase diagram can show.
pub fn nutation_longitude_deg(t: f64) -> f64 {
    let omega = (125.044_52 - 1934.136_261 * t).to_radians();
    -17.20 / 3600.0 * omega.sin()
}

/// Ecliptic `(lon, lat)` to equatorial `(ra, dec)`, all in degrees.
///
/// RA is returned in [0, 360).
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let lon = lon_deg.to_radians();
    let lat = lat_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let ra = (lon.sin() * eps.cos() - lat.tan() * eps.sin()).atan2(lon.cos());
    let dec = (lat.sin() * eps.cos() + lat.cos() * eps.sin() * lon.sin()).asin();
    (ra.to_degrees().rem_euclid(360.0), dec.to_degrees())
}

/// Geometric altitude in degrees from hour angle, declination and latitude.
pub fn altitude_deg(hour_angle_deg: f64, dec_deg: f64, latitude_deg: f64) -> f64 {
    let h = hour_angle_deg.to_radians();
    let dec = dec_deg.to_radians();
    let phi = latitude_deg.to_radians();
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos())
        .clamp(-1.0, 1.0)
        .asin()
        .to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obliquity_j2000() {
        assert!((mean_obliquity_deg(0.0) - 23.439_291).abs() < 1e-6);
    }

    #[test]
    fn pollux_meeus_13a() {
        // Meeus example 13.a: λ=113.215630, β=6.684170, ε=23.4392911
        // → α=116.328942, δ=28.026183
        let (ra, dec) = ecliptic_to_equatorial(113.215_630, 6.684_170, 23.439_291_1);
        assert!((ra - 116.328_942).abs() < 1e-4, "ra = {ra}");
        assert!((dec - 28.026_183).abs() < 1e-4, "dec = {dec}");
    }

    #[test]
    fn equinox_point_maps_to_origin() {
        let (ra, dec) = ecliptic_to_equatorial(0.0, 0.0, 23.44);
        assert!(ra.abs() < 1e-12 || (ra - 360.0).abs() < 1e-12);
        assert!(dec.abs() < 1e-12);
    }

    #[test]
    fn transit_altitude() {
        // On the meridian: h = 90 - |φ - δ|
        let h = altitude_deg(0.0, 10.0, 37.5);
        assert!((h - 62.5).abs() < 1e-9, "h = {h}");
    }

    #[test]
    fn nutation_is_small() {
        for t in [-1.0, 0.0, 0.24, 1.0] {
            assert!(nutation_longitude_deg(t).abs() <= 17.20 / 3600.0 + 1e-12);
        }
    }
}
