//! Types for moonrise/moonset (and sunrise/sunset) queries.

/// Direction of a horizon crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizonCrossing {
    /// Body climbs above the standard horizon altitude.
    Rise,
    /// Body sinks below the standard horizon altitude.
    Set,
}

/// Result of a next-rise / next-set search.
///
/// Only [`RiseSetResult::Event`] carries a time; every other variant means
/// the event is unavailable for this instant and location, which is a
/// normal outcome near the poles rather than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Crossing occurs at the given Julian Date (UT).
    Event {
        jd_ut: f64,
        crossing: HorizonCrossing,
    },
    /// Body stays below the horizon for the whole search window.
    NeverRises,
    /// Body stays above the horizon for the whole search window.
    NeverSets,
    /// Body crosses the horizon, but not in the requested direction,
    /// within the search window.
    NotFound,
}

impl RiseSetResult {
    /// Event time, if the crossing was found.
    pub fn jd_ut(self) -> Option<f64> {
        match self {
            Self::Event { jd_ut, .. } => Some(jd_ut),
            _ => None,
        }
    }
}
