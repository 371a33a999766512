//! Tick-driven playback clock for a single loaded clip.
//!
//! The clock does not talk to an audio device. A host delivers frame
//! timestamps through [`PlaybackClock::on_tick`] and the clock reconciles
//! them with the clip position, publishing transport events as it goes.

mod settings;
mod tick;
mod transport;

#[cfg(test)]
mod test_support;

use log::debug;
use serde::Serialize;

use crate::config::ClockConfig;
use crate::error::ClockError;
use crate::events::{ClockEvent, EventBus, EventSink, SubscriptionId};
use crate::peaks::WaveformSummary;

pub use settings::ClockSnapshot;

/// Transport state of the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockState {
    Paused,
    Playing,
    Finished,
}

/// Playback position tracker driven by an external clock signal.
///
/// All positions are clip-relative seconds. `last_play` and `clock_time` are
/// clock-source seconds and stay `None` until the first tick of a playing
/// session anchors them.
pub struct PlaybackClock<S: EventSink = EventBus> {
    state: ClockState,
    start_position: f64,
    last_play: Option<f64>,
    clock_time: Option<f64>,
    playback_rate: f64,
    volume: f64,
    scheduled_pause: Option<f64>,
    duration: f64,
    peaks: WaveformSummary,
    sink: S,
}

impl PlaybackClock<EventBus> {
    /// Create a clock publishing to its own [`EventBus`].
    ///
    /// # Errors
    /// Returns [`ClockError::InvalidArgument`] if `config` does not validate.
    pub fn new(config: ClockConfig) -> Result<Self, ClockError> {
        Self::with_sink(config, EventBus::new())
    }

    /// Attach a callback receiving every transport event.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&ClockEvent) + Send + 'static,
    ) -> SubscriptionId {
        self.sink.subscribe(callback)
    }

    /// Detach one subscriber. Returns false if it was not attached.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.sink.unsubscribe(id)
    }
}

impl Default for PlaybackClock<EventBus> {
    fn default() -> Self {
        Self::from_parts(ClockConfig::default(), EventBus::new())
    }
}

impl<S: EventSink> PlaybackClock<S> {
    /// Create a clock publishing to the given sink.
    ///
    /// # Errors
    /// Returns [`ClockError::InvalidArgument`] if `config` does not validate.
    pub fn with_sink(config: ClockConfig, sink: S) -> Result<Self, ClockError> {
        config.validate()?;
        Ok(Self::from_parts(config, sink))
    }

    fn from_parts(config: ClockConfig, sink: S) -> Self {
        Self {
            state: ClockState::Paused,
            start_position: 0.0,
            last_play: None,
            clock_time: None,
            playback_rate: config.audio_rate,
            volume: config.default_volume,
            scheduled_pause: None,
            duration: 0.0,
            peaks: WaveformSummary::empty(),
            sink,
        }
    }

    /// Load a clip: store its peaks and duration, rewind and stop.
    ///
    /// Loading does not publish anything. A session that was playing is
    /// dropped without a `pause` event.
    pub fn load(&mut self, peaks: WaveformSummary, duration: f64) {
        self.set_peaks(peaks, duration);
        self.start_position = 0.0;
        self.scheduled_pause = None;
        self.last_play = None;
        self.clock_time = None;
        self.state = ClockState::Paused;
        debug!("loaded clip of {:.3}s", self.duration);
    }

    /// Replace the stored peaks and duration without touching transport state.
    pub fn set_peaks(&mut self, peaks: WaveformSummary, duration: f64) {
        self.peaks = peaks;
        self.duration = if duration.is_finite() {
            duration.max(0.0)
        } else {
            0.0
        };
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == ClockState::Playing
    }

    /// True whenever the clock is not playing, finished included.
    pub fn is_paused(&self) -> bool {
        self.state != ClockState::Playing
    }

    pub fn is_finished(&self) -> bool {
        self.state == ClockState::Finished
    }

    pub fn get_duration(&self) -> f64 {
        self.duration
    }

    /// Boundary at which the current session will auto-pause, if any.
    pub fn scheduled_pause(&self) -> Option<f64> {
        self.scheduled_pause
    }

    /// Borrow the event sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutably borrow the event sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn emit(&mut self, event: ClockEvent) {
        self.sink.publish(&event);
    }
}

impl<S: EventSink> std::fmt::Debug for PlaybackClock<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackClock")
            .field("state", &self.state)
            .field("start_position", &self.start_position)
            .field("last_play", &self.last_play)
            .field("clock_time", &self.clock_time)
            .field("playback_rate", &self.playback_rate)
            .field("volume", &self.volume)
            .field("scheduled_pause", &self.scheduled_pause)
            .field("duration", &self.duration)
            .finish()
    }
}
