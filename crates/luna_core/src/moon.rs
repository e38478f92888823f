//! Truncated ELP-2000/82 lunar series.
//!
//! Source: Meeus, *Astronomical Algorithms*, chapter 47, tables 47.A and
//! 47.B, keeping the largest terms. Longitude is good to roughly 0.01°,
//! distance to a few tens of km.

use luna_time::jd_to_centuries;

use crate::EclipticPosition;

/// Mean Earth–Moon distance used as the series base, km.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// One periodic term: multiples of (D, M, M', F) and its amplitude.
///
/// Amplitudes are in 1e-6 degrees (longitude, latitude) or 1e-3 km
/// (distance).
type Term = (i8, i8, i8, i8, f64);

#[rustfmt::skip]
const LONGITUDE_TERMS: [Term; 34] = [
    (0, 0, 1, 0, 6_288_774.0),
    (2, 0, -1, 0, 1_274_027.0),
    (2, 0, 0, 0, 658_314.0),
    (0, 0, 2, 0, 213_618.0),
    (0, 1, 0, 0, -185_116.0),
    (0, 0, 0, 2, -114_332.0),
    (2, 0, -2, 0, 58_793.0),
    (2, -1, -1, 0, 57_066.0),
    (2, 0, 1, 0, 53_322.0),
    (2, -1, 0, 0, 45_758.0),
    (0, 1, -1, 0, -40_923.0),
    (1, 0, 0, 0, -34_720.0),
    (0, 1, 1, 0, -30_383.0),
    (2, 0, 0, -2, 15_327.0),
    (0, 0, 1, 2, -12_528.0),
    (0, 0, 1, -2, 10_980.0),
    (4, 0, -1, 0, 10_675.0),
    (0, 0, 3, 0, 10_034.0),
    (4, 0, -2, 0, 8_548.0),
    (2, 1, -1, 0, -7_888.0),
    (2, 1, 0, 0, -6_766.0),
    (1, 0, -1, 0, -5_163.0),
    (1, 1, 0, 0, 4_987.0),
    (2, -1, 1, 0, 4_036.0),
    (2, 0, 2, 0, 3_994.0),
    (4, 0, 0, 0, 3_861.0),
    (2, 0, -3, 0, 3_665.0),
    (0, 1, -2, 0, -2_689.0),
    (2, 0, -1, 2, -2_602.0),
    (2, -1, -2, 0, 2_390.0),
    (1, 0, 1, 0, -2_348.0),
    (2, -2, 0, 0, 2_236.0),
    (0, 1, 2, 0, -2_120.0),
    (0, 2, 0, 0, -2_069.0),
];

#[rustfmt::skip]
const DISTANCE_TERMS: [Term; 31] = [
    (0, 0, 1, 0, -20_905_355.0),
    (2, 0, -1, 0, -3_699_111.0),
    (2, 0, 0, 0, -2_955_968.0),
    (0, 0, 2, 0, -569_925.0),
    (0, 1, 0, 0, 48_888.0),
    (0, 0, 0, 2, -3_149.0),
    (2, 0, -2, 0, 246_158.0),
    (2, -1, -1, 0, -152_138.0),
    (2, 0, 1, 0, -170_733.0),
    (2, -1, 0, 0, -204_586.0),
    (0, 1, -1, 0, -129_620.0),
    (1, 0, 0, 0, 108_743.0),
    (0, 1, 1, 0, 104_755.0),
    (2, 0, 0, -2, 10_321.0),
    (0, 0, 1, -2, 79_661.0),
    (4, 0, -1, 0, -34_782.0),
    (0, 0, 3, 0, -23_210.0),
    (4, 0, -2, 0, -21_636.0),
    (2, 1, -1, 0, 24_208.0),
    (2, 1, 0, 0, 30_824.0),
    (1, 0, -1, 0, -8_379.0),
    (1, 1, 0, 0, -16_675.0),
    (2, -1, 1, 0, -12_831.0),
    (2, 0, 2, 0, -10_445.0),
    (4, 0, 0, 0, -11_650.0),
    (2, 0, -3, 0, 14_403.0),
    (0, 1, -2, 0, -7_003.0),
    (2, -1, -2, 0, 10_056.0),
    (1, 0, 1, 0, 6_322.0),
    (2, -2, 0, 0, -9_884.0),
    (0, 1, 2, 0, 5_751.0),
];

#[rustfmt::skip]
const LATITUDE_TERMS: [Term; 30] = [
    (0, 0, 0, 1, 5_128_122.0),
    (0, 0, 1, 1, 280_602.0),
    (0, 0, 1, -1, 277_693.0),
    (2, 0, 0, -1, 173_237.0),
    (2, 0, -1, 1, 55_413.0),
    (2, 0, -1, -1, 46_271.0),
    (2, 0, 0, 1, 32_573.0),
    (0, 0, 2, 1, 17_198.0),
    (2, 0, 1, -1, 9_266.0),
    (0, 0, 2, -1, 8_822.0),
    (2, -1, 0, -1, 8_216.0),
    (2, 0, -2, -1, 4_324.0),
    (2, 0, 1, 1, 4_200.0),
    (2, 1, 0, -1, -3_359.0),
    (2, -1, -1, 1, 2_463.0),
    (2, -1, 0, 1, 2_211.0),
    (2, -1, -1, -1, 2_065.0),
    (0, 1, -1, -1, -1_870.0),
    (4, 0, -1, -1, 1_828.0),
    (0, 1, 0, 1, -1_794.0),
    (0, 0, 0, 3, -1_749.0),
    (0, 1, -1, 1, -1_565.0),
    (1, 0, 0, 1, -1_491.0),
    (0, 1, 1, 1, -1_475.0),
    (0, 1, 1, -1, -1_410.0),
    (0, 1, 0, -1, -1_344.0),
    (1, 0, 0, -1, -1_335.0),
    (0, 0, 3, 1, 1_107.0),
    (4, 0, 0, -1, 1_021.0),
    (4, 0, -1, 1, 833.0),
];

/// Fundamental arguments in radians: (L', D, M, M', F).
fn fundamental_arguments(t: f64) -> (f64, f64, f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;
    (
        lp.rem_euclid(360.0).to_radians(),
        d.rem_euclid(360.0).to_radians(),
        m.rem_euclid(360.0).to_radians(),
        mp.rem_euclid(360.0).to_radians(),
        f.rem_euclid(360.0).to_radians(),
    )
}

/// Sum a term table; terms involving the solar anomaly M are scaled by
/// the eccentricity factor E (E² when |M| = 2).
fn sum_terms(terms: &[Term], args: (f64, f64, f64, f64), e: f64, trig: fn(f64) -> f64) -> f64 {
    let (d, m, mp, f) = args;
    terms
        .iter()
        .map(|&(cd, cm, cmp, cf, amp)| {
            let arg = cd as f64 * d + cm as f64 * m + cmp as f64 * mp + cf as f64 * f;
            let scale = match cm.abs() {
                0 => 1.0,
                1 => e,
                _ => e * e,
            };
            amp * scale * trig(arg)
        })
        .sum()
}

/// Geometric ecliptic position of the Moon at a TT Julian Date.
///
/// Longitude is referred to the mean equinox of date; nutation is left
/// to the caller.
pub fn moon_position(jd_tt: f64) -> EclipticPosition {
    let t = jd_to_centuries(jd_tt);
    let (lp, d, m, mp, f) = fundamental_arguments(t);
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let a3 = (313.45 + 481_266.484 * t).to_radians();

    let args = (d, m, mp, f);
    let sum_l = sum_terms(&LONGITUDE_TERMS, args, e, f64::sin)
        + 3958.0 * a1.sin()
        + 1962.0 * (lp - f).sin()
        + 318.0 * a2.sin();
    let sum_b = sum_terms(&LATITUDE_TERMS, args, e, f64::sin) - 2235.0 * lp.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (lp - mp).sin()
        - 115.0 * (lp + mp).sin();
    let sum_r = sum_terms(&DISTANCE_TERMS, args, e, f64::cos);

    EclipticPosition {
        lon_deg: (lp.to_degrees() + sum_l / 1.0e6).rem_euclid(360.0),
        lat_deg: sum_b / 1.0e6,
        distance_km: MEAN_DISTANCE_KM + sum_r / 1.0e3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12, 0h TD: λ = 133.162655°, β = -3.229126°, Δ = 368409.7 km
        let pos = moon_position(2_448_724.5);
        assert!((pos.lon_deg - 133.162_655).abs() < 0.05, "lon = {}", pos.lon_deg);
        assert!((pos.lat_deg + 3.229_126).abs() < 0.05, "lat = {}", pos.lat_deg);
        assert!(
            (pos.distance_km - 368_409.7).abs() < 300.0,
            "distance = {}",
            pos.distance_km
        );
    }

    #[test]
    fn distance_within_orbit_bounds() {
        for i in 0..200 {
            let pos = moon_position(2_451_545.0 + i as f64 * 1.3);
            assert!(
                (355_000.0..=407_500.0).contains(&pos.distance_km),
                "distance {} out of bounds",
                pos.distance_km
            );
            assert!(pos.lat_deg.abs() < 5.4, "latitude {}", pos.lat_deg);
        }
    }

    #[test]
    fn moves_about_13_deg_per_day() {
        let a = moon_position(2_460_000.5).lon_deg;
        let b = moon_position(2_460_001.5).lon_deg;
        let daily = (b - a).rem_euclid(360.0);
        assert!((11.0..16.0).contains(&daily), "daily motion = {daily}");
    }
}
