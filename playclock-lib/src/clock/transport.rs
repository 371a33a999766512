//! Transport operations for `PlaybackClock`.
//!
//! Methods here move the clock between paused, playing and finished, and
//! publish the matching events. None of them block. Only the `try_` variant
//! fails; the others normalize out-of-range input.

use log::debug;

use crate::error::ClockError;
use crate::events::{ClockEvent, EventSink};

use super::{ClockState, PlaybackClock};

impl<S: EventSink> PlaybackClock<S> {
    /// Start playback.
    ///
    /// # Arguments
    ///
    /// * `start` - Position to start from, resolved like [`seek_to`](Self::seek_to).
    /// * `end` - Optional position at which the session auto-pauses.
    pub fn play(&mut self, start: Option<f64>, end: Option<f64>) {
        self.seek_to(start);
        self.scheduled_pause = end.filter(|boundary| !boundary.is_nan());
        self.state = ClockState::Playing;
        self.last_play = None;
        self.clock_time = None;
        debug!(
            "playing from {:.3}s (scheduled pause: {:?})",
            self.start_position, self.scheduled_pause
        );
        self.emit(ClockEvent::Play);
    }

    /// Pause playback, folding the played time into the held position.
    ///
    /// Always publishes `pause` followed by an `audioprocess` carrying the
    /// frozen position, even when the clock was not playing.
    pub fn pause(&mut self) {
        if self.state == ClockState::Playing {
            self.start_position = self.position().clamp(0.0, self.duration);
            self.state = ClockState::Paused;
            self.last_play = None;
            debug!("paused at {:.3}s", self.start_position);
        }
        self.scheduled_pause = None;

        self.emit(ClockEvent::Pause);
        let time = self.position();
        self.emit(ClockEvent::AudioProcess { time });
    }

    /// Move the playback position.
    ///
    /// This is the lenient path: an explicit position outside `[0, duration]`
    /// is silently clamped into it and NaN is treated as no position. Use
    /// [`try_seek_to`](Self::try_seek_to) to get an error instead.
    ///
    /// Without a position the current one is kept (clamped the same way),
    /// wrapping to 0 once it has reached the end so that playing a finished
    /// clip again restarts it. A finished clock is revived into the paused
    /// state. The scheduled pause is left untouched.
    pub fn seek_to(&mut self, start: Option<f64>) {
        let position = match start.filter(|position| !position.is_nan()) {
            Some(position) => position.clamp(0.0, self.duration),
            None => {
                let current = self.position().clamp(0.0, self.duration);
                if current >= self.duration {
                    0.0
                } else {
                    current
                }
            }
        };

        self.start_position = position;
        self.last_play = self.clock_time;
        if self.state == ClockState::Finished {
            self.state = ClockState::Paused;
        }
    }

    /// Strict variant of [`seek_to`](Self::seek_to).
    ///
    /// # Errors
    /// Returns [`ClockError::InvalidArgument`] if `position` is not finite or
    /// lies outside `[0, duration]`.
    pub fn try_seek_to(&mut self, position: f64) -> Result<(), ClockError> {
        if !position.is_finite() || position < 0.0 || position > self.duration {
            return Err(ClockError::InvalidArgument(format!(
                "seek position {} is outside [0, {}]",
                position, self.duration
            )));
        }
        self.seek_to(Some(position));
        Ok(())
    }

    /// Force a final pause and detach every subscriber.
    ///
    /// Nothing is published after this returns.
    pub fn destroy(&mut self) {
        self.pause();
        self.sink.detach_all();
        debug!("clock destroyed");
    }
}
