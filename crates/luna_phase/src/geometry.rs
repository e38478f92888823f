//! 2-D shapes for drawing the moon.
//!
//! The lit region is a simplified terminator: the limb is a half circle on
//! the sunward side and the terminator is the same half circle squashed
//! horizontally by `cos`-offset `−r·(2p − 1)`. At 0 % the two curves
//! coincide, at 50 % the terminator is a straight line through the centre,
//! and at 100 % it becomes the opposite limb. The enclosed area is linear
//! in `p`: 0 at 0 %, `πr²` at 100 %.

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::Serialize;

use crate::angle::PhaseAngle;

/// Radius of the drawn lunar disk.
pub const DISK_RADIUS: f64 = 10.0;

/// Points sampled along each boundary curve.
pub const DEFAULT_SAMPLES: usize = 100;

/// Radius of the moon's drawn orbit around the planet.
pub const ORBIT_RADIUS: f64 = 2.5;

/// Distance of the star (sun) from the planet in the orbit diagram.
pub const STAR_DISTANCE: f64 = 5.0;

/// Drawing parameters shared by the polygon builders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeometrySettings {
    pub disk_radius: f64,
    pub samples: usize,
    pub orbit_radius: f64,
    pub star_distance: f64,
}

impl Default for GeometrySettings {
    fn default() -> Self {
        Self {
            disk_radius: DISK_RADIUS,
            samples: DEFAULT_SAMPLES,
            orbit_radius: ORBIT_RADIUS,
            star_distance: STAR_DISTANCE,
        }
    }
}

/// `n` evenly spaced values over `[start, end]`, both ends included.
fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let n = n.max(2);
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(move |i| {
        if i == n - 1 {
            end
        } else {
            start + step * i as f64
        }
    })
}

/// Closed polygon covering the sunlit part of a disk of `radius`.
///
/// Waxing moons are lit on the right (θ over `[−π/2, π/2]`), waning moons
/// on the left (θ over `[π/2, 3π/2]`). The result is the outer limb
/// followed by the terminator in reverse. Illumination is clamped to
/// [0, 100]; fewer than 2 samples are treated as 2.
pub fn build_lit_region_polygon(
    illumination: f64,
    is_waxing: bool,
    radius: f64,
    samples: usize,
) -> Vec<(f64, f64)> {
    let p = if illumination.is_nan() {
        0.0
    } else {
        (illumination / 100.0).clamp(0.0, 1.0)
    };
    let offset = -radius * (2.0 * p - 1.0);
    let (start, end) = if is_waxing {
        (-FRAC_PI_2, FRAC_PI_2)
    } else {
        (FRAC_PI_2, 3.0 * FRAC_PI_2)
    };

    let thetas: Vec<f64> = linspace(start, end, samples).collect();
    let mut polygon = Vec::with_capacity(thetas.len() * 2);
    polygon.extend(thetas.iter().map(|t| (radius * t.cos(), radius * t.sin())));
    polygon.extend(
        thetas
            .iter()
            .rev()
            .map(|t| (offset * t.cos(), radius * t.sin())),
    );
    polygon
}

/// Moon position on a circular orbit of `orbit_radius` around the origin.
pub fn build_orbit_position(angle_radians: f64, orbit_radius: f64) -> (f64, f64) {
    (
        orbit_radius * angle_radians.cos(),
        orbit_radius * angle_radians.sin(),
    )
}

/// Absolute area of a simple polygon (shoelace formula).
pub fn polygon_area(points: &[(f64, f64)]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let twice: f64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|((x0, y0), (x1, y1))| x0 * y1 - x1 * y0)
        .sum();
    0.5 * twice.abs()
}

/// Everything needed to draw the top-down orbit view: star on the +x axis,
/// planet at the origin, the moon's orbit ring, an arrow showing incoming
/// sunlight, and the moon itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitDiagram {
    pub star: (f64, f64),
    pub planet: (f64, f64),
    pub orbit_radius: f64,
    pub ring: Vec<(f64, f64)>,
    /// Tail and head of the sunlight arrow.
    pub sunlight: ((f64, f64), (f64, f64)),
    pub moon: (f64, f64),
}

impl OrbitDiagram {
    pub fn new(angle: PhaseAngle, settings: &GeometrySettings) -> Self {
        let r = settings.orbit_radius;
        let ring = linspace(0.0, TAU, settings.samples)
            .map(|t| build_orbit_position(t, r))
            .collect();
        // arrow runs from just inside the star to just outside the orbit
        let tail = settings.star_distance * 0.8;
        let head = r * 0.8;
        Self {
            star: (settings.star_distance, 0.0),
            planet: (0.0, 0.0),
            orbit_radius: r,
            ring,
            sunlight: ((tail, 0.0), (head, 0.0)),
            moon: build_orbit_position(angle.radians(), r),
        }
    }

    /// Rough bounding half-width for plotting.
    pub fn extent(&self) -> f64 {
        self.star.0.abs().max(self.orbit_radius) + 1.0
    }
}
