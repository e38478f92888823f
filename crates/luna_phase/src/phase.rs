//! Discrete phase names.

use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Below this illumination percent the moon is "new".
const NEW_MOON_MAX: f64 = 2.0;
/// Above this illumination percent the moon is "full".
const FULL_MOON_MIN: f64 = 98.0;
/// Crescent/quarter boundary, percent.
const CRESCENT_MAX: f64 = 45.0;
/// Quarter/gibbous boundary, percent.
const QUARTER_MAX: f64 = 55.0;

/// The eight traditional phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MoonPhase {
    #[serde(rename = "New Moon")]
    NewMoon,
    #[serde(rename = "Waxing Crescent")]
    WaxingCrescent,
    #[serde(rename = "First Quarter")]
    FirstQuarter,
    #[serde(rename = "Waxing Gibbous")]
    WaxingGibbous,
    #[serde(rename = "Full Moon")]
    FullMoon,
    #[serde(rename = "Waning Gibbous")]
    WaningGibbous,
    #[serde(rename = "Last Quarter")]
    LastQuarter,
    #[serde(rename = "Waning Crescent")]
    WaningCrescent,
}

impl MoonPhase {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// Korean name.
    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::NewMoon => "삭",
            Self::WaxingCrescent => "초승달",
            Self::FirstQuarter => "상현달",
            Self::WaxingGibbous => "차오르는 달",
            Self::FullMoon => "보름달",
            Self::WaningGibbous => "기우는 달",
            Self::LastQuarter => "하현달",
            Self::WaningCrescent => "그믐달",
        }
    }
}

impl Display for MoonPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Map illumination percent and waxing flag to a phase.
///
/// Rules are checked in order and the first match wins, so the new/full
/// checks take precedence over the waxing flag. All comparisons are
/// strict: exactly 2 % is a crescent and exactly 45 % is a quarter.
pub fn classify_phase(illumination: f64, is_waxing: bool) -> MoonPhase {
    if illumination < NEW_MOON_MAX {
        MoonPhase::NewMoon
    } else if illumination > FULL_MOON_MIN {
        MoonPhase::FullMoon
    } else if is_waxing {
        if illumination < CRESCENT_MAX {
            MoonPhase::WaxingCrescent
        } else if illumination < QUARTER_MAX {
            MoonPhase::FirstQuarter
        } else {
            MoonPhase::WaxingGibbous
        }
    } else if illumination < CRESCENT_MAX {
        MoonPhase::WaningCrescent
    } else if illumination < QUARTER_MAX {
        MoonPhase::LastQuarter
    } else {
        MoonPhase::WaningGibbous
    }
}
