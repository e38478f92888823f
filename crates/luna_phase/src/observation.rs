//! Per-date moon observations.

use std::fmt::{Display, Formatter};

use log::{debug, warn};
use luna_core::{Body, Ephemeris, GeoLocation, HorizonCrossing, RiseSetResult};
use luna_time::{CivilDate, LocalTime, UtcOffset};
use serde::Serialize;

use crate::angle::PhaseAngle;
use crate::error::PhaseError;
use crate::phase::{MoonPhase, classify_phase};

/// Where and in which civil time zone the moon is observed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObserverConfig {
    pub location: GeoLocation,
    pub utc_offset: UtcOffset,
}

impl ObserverConfig {
    pub const fn new(location: GeoLocation, utc_offset: UtcOffset) -> Self {
        Self {
            location,
            utc_offset,
        }
    }

    /// Seoul, Korea Standard Time.
    pub const fn seoul() -> Self {
        Self::new(GeoLocation::new(37.5665, 126.978, 0.0), UtcOffset::KST)
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self::seoul()
    }
}

/// Why a moonrise or moonset has no time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unavailability {
    /// Moon stays below the horizon through the search window.
    NeverRises,
    /// Moon stays above the horizon through the search window.
    NeverSets,
    /// No crossing in the requested direction within the search window.
    NotFound,
    /// A crossing was found but its instant has no local civil time.
    Unconvertible,
}

impl Unavailability {
    pub const fn describe(self) -> &'static str {
        match self {
            Self::NeverRises => "moon stays below the horizon",
            Self::NeverSets => "moon stays above the horizon",
            Self::NotFound => "no crossing in search window",
            Self::Unconvertible => "event instant has no local time",
        }
    }
}

/// Next moonrise or moonset in local civil time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventTime {
    At(LocalTime),
    Unavailable(Unavailability),
}

impl EventTime {
    pub fn local_time(&self) -> Option<LocalTime> {
        match self {
            Self::At(t) => Some(*t),
            Self::Unavailable(_) => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::At(_))
    }
}

impl Display for EventTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::At(t) => write!(f, "{t}"),
            Self::Unavailable(_) => f.write_str("--:--"),
        }
    }
}

/// Moon state for one date at one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoonObservation {
    date: CivilDate,
    jd_ut: f64,
    illumination: f64,
    #[serde(flatten)]
    angle: PhaseAngle,
    phase: MoonPhase,
    rise: EventTime,
    set: EventTime,
}

impl MoonObservation {
    /// Local date the observation was requested for.
    pub fn date(&self) -> CivilDate {
        self.date
    }

    /// Observation instant (local midnight) as a UT Julian Date.
    pub fn jd_ut(&self) -> f64 {
        self.jd_ut
    }

    /// Percent of the visible disk that is lit, [0, 100].
    pub fn illumination(&self) -> f64 {
        self.illumination
    }

    pub fn angle(&self) -> PhaseAngle {
        self.angle
    }

    pub fn angle_radians(&self) -> f64 {
        self.angle.radians()
    }

    pub fn angle_degrees(&self) -> f64 {
        self.angle.degrees()
    }

    pub fn is_waxing(&self) -> bool {
        self.angle.is_waxing()
    }

    pub fn phase(&self) -> MoonPhase {
        self.phase
    }

    pub fn rise(&self) -> EventTime {
        self.rise
    }

    pub fn set(&self) -> EventTime {
        self.set
    }
}

/// Local time of a rise/set result. Never fails: anything short of a
/// convertible event becomes [`EventTime::Unavailable`].
fn event_time(
    result: RiseSetResult,
    offset: UtcOffset,
    date: CivilDate,
    label: &str,
) -> EventTime {
    let reason = match result {
        RiseSetResult::Event { jd_ut, .. } => match LocalTime::from_jd_ut(jd_ut, offset) {
            Ok(t) => return EventTime::At(t),
            Err(e) => {
                debug!("{date}: {label} at JD {jd_ut} not convertible: {e}");
                Unavailability::Unconvertible
            }
        },
        RiseSetResult::NeverRises => Unavailability::NeverRises,
        RiseSetResult::NeverSets => Unavailability::NeverSets,
        RiseSetResult::NotFound => Unavailability::NotFound,
    };
    warn!("{date}: {label} unavailable ({})", reason.describe());
    EventTime::Unavailable(reason)
}

/// Compute the moon observation for `date` at local midnight.
///
/// Oracle failures abort with [`PhaseError::Oracle`]; an unavailable
/// moonrise or moonset does not, it is stored as
/// [`EventTime::Unavailable`].
pub fn compute_observation<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    date: CivilDate,
    config: &ObserverConfig,
) -> Result<MoonObservation, PhaseError> {
    let jd_ut = date.local_midnight_jd_ut(config.utc_offset);
    let state = ephemeris.luni_solar(jd_ut, &config.location)?;

    let illumination = state.illumination_percent;
    if !(0.0..=100.0).contains(&illumination) {
        return Err(PhaseError::InvalidReading("illumination outside [0, 100]"));
    }
    let angle = PhaseAngle::from_longitudes_deg(state.moon_lon_deg, state.sun_lon_deg)
        .ok_or(PhaseError::InvalidReading("non-finite longitude"))?;
    let phase = classify_phase(illumination, angle.is_waxing());

    let rise = ephemeris.next_rise_set(
        Body::Moon,
        HorizonCrossing::Rise,
        jd_ut,
        &config.location,
    )?;
    let set = ephemeris.next_rise_set(Body::Moon, HorizonCrossing::Set, jd_ut, &config.location)?;
    let rise = event_time(rise, config.utc_offset, date, "moonrise");
    let set = event_time(set, config.utc_offset, date, "moonset");

    debug!(
        "{date}: {phase} {illumination:.1}% at {:.2}°, rise {rise}, set {set}",
        angle.degrees()
    );

    Ok(MoonObservation {
        date,
        jd_ut,
        illumination,
        angle,
        phase,
        rise,
        set,
    })
}

/// One observation per consecutive date starting at `start`.
///
/// Stops at the first oracle failure.
pub fn observations_for_range<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    start: CivilDate,
    days: u32,
    config: &ObserverConfig,
) -> Result<Vec<MoonObservation>, PhaseError> {
    (0..i64::from(days))
        .map(|i| compute_observation(ephemeris, start.add_days(i), config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use luna_core::{EphemerisError, LuniSolarState};
    use luna_time::calendar_to_jd;

    struct MockOracle {
        sun_lon: f64,
        moon_lon: f64,
        illumination: f64,
        rise: RiseSetResult,
        set: RiseSetResult,
        fail: bool,
    }

    impl MockOracle {
        fn new(moon_lon: f64, illumination: f64) -> Self {
            Self {
                sun_lon: 0.0,
                moon_lon,
                illumination,
                rise: RiseSetResult::NotFound,
                set: RiseSetResult::NotFound,
                fail: false,
            }
        }
    }

    impl Ephemeris for MockOracle {
        fn luni_solar(
            &self,
            _jd_ut: f64,
            _location: &GeoLocation,
        ) -> Result<LuniSolarState, EphemerisError> {
            if self.fail {
                return Err(EphemerisError::EpochOutOfRange { jd: 0.0 });
            }
            Ok(LuniSolarState {
                sun_lon_deg: self.sun_lon,
                moon_lon_deg: self.moon_lon,
                illumination_percent: self.illumination,
            })
        }

        fn next_rise_set(
            &self,
            _body: Body,
            crossing: HorizonCrossing,
            _jd_ut: f64,
            _location: &GeoLocation,
        ) -> Result<RiseSetResult, EphemerisError> {
            Ok(match crossing {
                HorizonCrossing::Rise => self.rise,
                HorizonCrossing::Set => self.set,
            })
        }
    }

    fn date() -> CivilDate {
        CivilDate::new(2024, 1, 26).unwrap()
    }

    #[test]
    fn full_moon_from_oracle() {
        let oracle = MockOracle::new(180.0, 100.0);
        let obs = compute_observation(&oracle, date(), &ObserverConfig::seoul()).unwrap();
        assert_eq!(obs.phase(), MoonPhase::FullMoon);
        assert!(!obs.is_waxing());
        assert!((obs.angle_degrees() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn new_moon_regardless_of_angle() {
        for moon_lon in [0.0, 90.0, 200.0, 359.0] {
            let oracle = MockOracle::new(moon_lon, 0.0);
            let obs = compute_observation(&oracle, date(), &ObserverConfig::seoul()).unwrap();
            assert_eq!(obs.phase(), MoonPhase::NewMoon, "moon_lon = {moon_lon}");
        }
    }

    #[test]
    fn waning_when_past_opposition() {
        let mut oracle = MockOracle::new(250.0, 60.0);
        oracle.sun_lon = 10.0;
        let obs = compute_observation(&oracle, date(), &ObserverConfig::seoul()).unwrap();
        assert!((obs.angle_degrees() - 240.0).abs() < 1e-9);
        assert!(!obs.is_waxing());
        assert_eq!(obs.phase(), MoonPhase::WaningGibbous);
    }

    #[test]
    fn unavailable_events_display_placeholder() {
        let mut oracle = MockOracle::new(90.0, 50.0);
        oracle.rise = RiseSetResult::NeverRises;
        oracle.set = RiseSetResult::NeverSets;
        let obs = compute_observation(&oracle, date(), &ObserverConfig::seoul()).unwrap();
        assert_eq!(obs.rise(), EventTime::Unavailable(Unavailability::NeverRises));
        assert_eq!(obs.set(), EventTime::Unavailable(Unavailability::NeverSets));
        assert_eq!(obs.rise().to_string(), "--:--");
        assert_eq!(obs.set().to_string(), "--:--");
        assert_eq!(obs.phase(), MoonPhase::FirstQuarter);
    }

    #[test]
    fn event_converted_to_local_time() {
        let mut oracle = MockOracle::new(90.0, 50.0);
        // 2024-01-26 09:30 UT = 18:30 KST
        oracle.rise = RiseSetResult::Event {
            jd_ut: calendar_to_jd(2024, 1, 26.0 + 9.5 / 24.0),
            crossing: HorizonCrossing::Rise,
        };
        let obs = compute_observation(&oracle, date(), &ObserverConfig::seoul()).unwrap();
        let t = obs.rise().local_time().unwrap();
        assert_eq!((t.hour, t.minute), (18, 30));
        assert_eq!(obs.rise().to_string(), "18:30");
        assert!(!obs.set().is_available());
    }

    #[test]
    fn unconvertible_event_does_not_abort() {
        let mut oracle = MockOracle::new(90.0, 50.0);
        oracle.rise = RiseSetResult::Event {
            jd_ut: f64::NAN,
            crossing: HorizonCrossing::Rise,
        };
        let obs = compute_observation(&oracle, date(), &ObserverConfig::seoul()).unwrap();
        assert_eq!(obs.rise(), EventTime::Unavailable(Unavailability::Unconvertible));
        assert_eq!(obs.rise().to_string(), "--:--");
        assert_eq!(obs.phase(), MoonPhase::FirstQuarter);
    }

    #[test]
    fn observation_instant_is_local_midnight() {
        let oracle = MockOracle::new(90.0, 50.0);
        let obs = compute_observation(&oracle, date(), &ObserverConfig::seoul()).unwrap();
        let expected = calendar_to_jd(2024, 1, 25.0 + 15.0 / 24.0);
        assert!((obs.jd_ut() - expected).abs() < 1e-9);
        assert_eq!(obs.date(), date());
    }

    #[test]
    fn oracle_failure_propagates() {
        let mut oracle = MockOracle::new(90.0, 50.0);
        oracle.fail = true;
        let err = compute_observation(&oracle, date(), &ObserverConfig::seoul()).unwrap_err();
        assert!(matches!(err, PhaseError::Oracle(_)));
    }

    #[test]
    fn rejects_bad_readings() {
        let oracle = MockOracle::new(90.0, 120.0);
        let err = compute_observation(&oracle, date(), &ObserverConfig::seoul()).unwrap_err();
        assert!(matches!(err, PhaseError::InvalidReading(_)));
        let oracle = MockOracle::new(f64::NAN, 50.0);
        let err = compute_observation(&oracle, date(), &ObserverConfig::seoul()).unwrap_err();
        assert!(matches!(err, PhaseError::InvalidReading(_)));
    }

    #[test]
    fn range_yields_consecutive_dates() {
        let oracle = MockOracle::new(45.0, 20.0);
        let start = CivilDate::new(2024, 2, 27).unwrap();
        let obs = observations_for_range(&oracle, start, 4, &ObserverConfig::seoul()).unwrap();
        let dates: Vec<String> = obs.iter().map(|o| o.date().to_string()).collect();
        assert_eq!(dates, ["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01"]);
    }

    #[test]
    fn serializes_derived_angle_fields() {
        let oracle = MockOracle::new(180.0, 100.0);
        let obs = compute_observation(&oracle, date(), &ObserverConfig::seoul()).unwrap();
        let json = serde_json::to_value(&obs).unwrap();
        assert_eq!(json["phase"], "Full Moon");
        assert_eq!(json["is_waxing"], false);
        assert_eq!(json["rise"]["unavailable"], "not_found");
        assert!((json["angle_degrees"].as_f64().unwrap() - 180.0).abs() < 1e-9);
    }
}
