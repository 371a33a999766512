use log::{debug, warn};
use serde::Serialize;

use crate::error::ClockError;
use crate::events::EventSink;
use crate::peaks::WaveformSummary;

use super::{ClockState, PlaybackClock};

const DEFAULT_PLAYBACK_RATE: f64 = 1.0;

/// Snapshot of clock state for UI consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockSnapshot {
    pub time: f64,
    pub duration: f64,
    pub percent: f64,
    pub volume: f64,
    pub playback_rate: f64,
    pub state: ClockState,
}

impl<S: EventSink> PlaybackClock<S> {
    pub fn get_playback_rate(&self) -> f64 {
        self.playback_rate
    }

    /// Change the playback rate.
    ///
    /// A zero or NaN rate is replaced by 1. Negative rates pass through
    /// unchanged.
    ///
    /// While playing, the change runs a pause and play cycle: `pause`,
    /// `audioprocess` and `play` are published and any scheduled pause is
    /// dropped. The new session stays anchored at the latest clock sample so
    /// the next tick continues from it at the new rate.
    pub fn set_playback_rate(&mut self, rate: f64) {
        let rate = if rate == 0.0 || rate.is_nan() {
            DEFAULT_PLAYBACK_RATE
        } else {
            rate
        };

        if self.state == ClockState::Playing {
            let sample = self.clock_time;
            self.pause();
            self.playback_rate = rate;
            self.play(None, None);
            self.clock_time = sample;
            self.last_play = sample;
        } else {
            self.playback_rate = rate;
        }
        debug!("playback rate set to {}", rate);
    }

    /// Strict variant of [`set_playback_rate`](Self::set_playback_rate).
    ///
    /// # Errors
    /// Returns [`ClockError::InvalidArgument`] unless `rate` is finite and
    /// greater than zero.
    pub fn try_set_playback_rate(&mut self, rate: f64) -> Result<(), ClockError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ClockError::InvalidArgument(format!(
                "playback rate must be finite and positive, got {}",
                rate
            )));
        }
        self.set_playback_rate(rate);
        Ok(())
    }

    pub fn get_volume(&self) -> f64 {
        self.volume
    }

    /// Set the volume, clamped to `[0, 1]`. NaN is ignored.
    ///
    /// Volume has no effect on timing; it is kept for the host.
    pub fn set_volume(&mut self, value: f64) {
        if value.is_nan() {
            warn!("ignoring NaN volume");
            return;
        }
        self.volume = value.clamp(0.0, 1.0);
    }

    /// Stored peaks, returned as loaded.
    ///
    /// The range arguments are accepted for interface symmetry with peak
    /// providers that resample; this clock never recomputes peaks.
    pub fn get_peaks(&self, _length: usize, _first: usize, _last: usize) -> &WaveformSummary {
        &self.peaks
    }

    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            time: self.position(),
            duration: self.duration,
            percent: self.get_played_percents(),
            volume: self.volume,
            playback_rate: self.playback_rate,
            state: self.state,
        }
    }
}
