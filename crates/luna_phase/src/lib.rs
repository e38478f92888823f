//! Moon phase calculator.
//!
//! Turns a calendar date and a fixed observer into a [`MoonObservation`]:
//! illumination, sun–moon elongation, waxing flag, phase name and the next
//! moonrise/moonset in local time. Also builds the 2-D shapes a renderer
//! needs: the lit region of the disk and the moon's point on its orbit.

pub mod angle;
pub mod error;
pub mod geometry;
pub mod observation;
pub mod phase;

pub use angle::PhaseAngle;
pub use error::PhaseError;
pub use geometry::{
    DEFAULT_SAMPLES, DISK_RADIUS, GeometrySettings, ORBIT_RADIUS, OrbitDiagram, STAR_DISTANCE,
    build_lit_region_polygon, build_orbit_position, polygon_area,
};
pub use observation::{
    EventTime, MoonObservation, ObserverConfig, Unavailability, compute_observation,
    observations_for_range,
};
pub use phase::{MoonPhase, classify_phase};
