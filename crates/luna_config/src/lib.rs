//! JSON configuration for the moon phase calculator.
//!
//! Every field is optional in the file; missing values fall back to the
//! Seoul observer (UTC+09:00) and the standard drawing geometry.

pub mod error;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use luna_core::GeoLocation;
use luna_phase::{
    DEFAULT_SAMPLES, DISK_RADIUS, GeometrySettings, ORBIT_RADIUS, ObserverConfig, STAR_DISTANCE,
};
use luna_time::UtcOffset;
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "LUNA_CONFIG";

/// Observer section of the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObserverSection {
    /// Display name of the location.
    pub name: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
    /// Fixed civil time offset from UTC, minutes east.
    pub utc_offset_minutes: i32,
}

impl Default for ObserverSection {
    fn default() -> Self {
        Self {
            name: "Seoul".to_string(),
            latitude_deg: 37.5665,
            longitude_deg: 126.978,
            altitude_m: 0.0,
            utc_offset_minutes: 9 * 60,
        }
    }
}

/// Geometry section of the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeometrySection {
    pub disk_radius: f64,
    pub samples: usize,
    pub orbit_radius: f64,
    pub star_distance: f64,
}

impl Default for GeometrySection {
    fn default() -> Self {
        Self {
            disk_radius: DISK_RADIUS,
            samples: DEFAULT_SAMPLES,
            orbit_radius: ORBIT_RADIUS,
            star_distance: STAR_DISTANCE,
        }
    }
}

/// Whole config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LunaConfig {
    pub observer: ObserverSection,
    pub geometry: GeometrySection,
}

impl LunaConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Self::from_json(&text)
    }

    /// Resolve the active configuration.
    ///
    /// Lookup order: `explicit` path, then `$LUNA_CONFIG`, then
    /// `<config dir>/luna/config.json` if it exists, then defaults. An
    /// explicitly named file that cannot be read is an error; a missing
    /// default file is not.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if let Some(path) = env::var_os(CONFIG_ENV_VAR) {
            return Self::load(Path::new(&path));
        }
        Self::load_or_default(default_path())
    }

    /// Load the per-user file when present. Its absence is the normal case
    /// and only logs at debug level; a platform without a config directory
    /// warns.
    fn load_or_default(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.is_file() => Self::load(&path),
            Some(path) => {
                debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                warn!("no user config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let o = &self.observer;
        if !o.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&o.latitude_deg) {
            return Err(ConfigError::Invalid("observer.latitude_deg must be within [-90, 90]"));
        }
        if !o.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&o.longitude_deg) {
            return Err(ConfigError::Invalid(
                "observer.longitude_deg must be within [-180, 180]",
            ));
        }
        if !o.altitude_m.is_finite() {
            return Err(ConfigError::Invalid("observer.altitude_m must be finite"));
        }
        if UtcOffset::from_minutes(o.utc_offset_minutes).is_err() {
            return Err(ConfigError::Invalid(
                "observer.utc_offset_minutes must be within ±840",
            ));
        }

        let g = &self.geometry;
        if g.samples < 2 {
            return Err(ConfigError::Invalid("geometry.samples must be at least 2"));
        }
        for (value, msg) in [
            (g.disk_radius, "geometry.disk_radius must be positive"),
            (g.orbit_radius, "geometry.orbit_radius must be positive"),
            (g.star_distance, "geometry.star_distance must be positive"),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(msg));
            }
        }
        Ok(())
    }

    /// Observer location and time zone.
    pub fn observer_config(&self) -> Result<ObserverConfig, ConfigError> {
        let o = &self.observer;
        let location = GeoLocation::new(o.latitude_deg, o.longitude_deg, o.altitude_m);
        let offset = UtcOffset::from_minutes(o.utc_offset_minutes)?;
        Ok(ObserverConfig::new(location, offset))
    }

    /// Drawing parameters.
    pub fn geometry_settings(&self) -> GeometrySettings {
        let g = &self.geometry;
        GeometrySettings {
            disk_radius: g.disk_radius,
            samples: g.samples,
            orbit_radius: g.orbit_radius,
            star_distance: g.star_distance,
        }
    }
}

/// `<config dir>/luna/config.json`, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("luna").join("config.json"))
}
