//! Error types for configuration loading.

use std::path::PathBuf;

use luna_time::TimeError;
use thiserror::Error;

/// Errors from reading or validating a config file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File could not be read.
    #[error("cannot read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// File is not valid config JSON.
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
    /// Time zone conversion failed.
    #[error(transparent)]
    Time(#[from] TimeError),
}
