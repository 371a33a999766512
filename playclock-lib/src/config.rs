//! Construction-time settings for a playback clock.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ClockError;

const DEFAULT_AUDIO_RATE: f64 = 1.0;
const DEFAULT_VOLUME: f64 = 1.0;
const DEFAULT_FRAME_INTERVAL_MS: f64 = 16.0;

/// Serialized clock configuration.
///
/// Missing fields fall back to their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Initial playback rate multiplier.
    pub audio_rate: f64,
    /// Initial volume in `[0, 1]`.
    pub default_volume: f64,
    /// Frame interval a host driver should use when pacing ticks.
    pub frame_interval_ms: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            audio_rate: DEFAULT_AUDIO_RATE,
            default_volume: DEFAULT_VOLUME,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

impl ClockConfig {
    /// Check every field, returning the first violation.
    ///
    /// Negative audio rates pass; whether reverse playback makes sense is up
    /// to the host.
    ///
    /// # Errors
    /// Returns [`ClockError::InvalidArgument`] naming the offending field.
    pub fn validate(&self) -> Result<(), ClockError> {
        if !self.audio_rate.is_finite() || self.audio_rate == 0.0 {
            return Err(ClockError::InvalidArgument(format!(
                "audio_rate must be finite and non-zero, got {}",
                self.audio_rate
            )));
        }

        if !(0.0..=1.0).contains(&self.default_volume) {
            return Err(ClockError::InvalidArgument(format!(
                "default_volume must be within [0, 1], got {}",
                self.default_volume
            )));
        }

        if !self.frame_interval_ms.is_finite() || self.frame_interval_ms <= 0.0 {
            return Err(ClockError::InvalidArgument(format!(
                "frame_interval_ms must be greater than zero, got {}",
                self.frame_interval_ms
            )));
        }

        Ok(())
    }

    /// Parse and validate a config from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ClockError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ClockError> {
        let reader = BufReader::new(File::open(path)?);
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}
