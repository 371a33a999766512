//! Clock-sample reconciliation: current time, played percentage and the
//! per-tick transition into pause or finish.

use log::{debug, trace, warn};

use crate::events::{ClockEvent, EventSink};

use super::{ClockState, PlaybackClock};

impl<S: EventSink> PlaybackClock<S> {
    /// Current clip position in seconds.
    ///
    /// Returns `None` while playing until the first tick of the session has
    /// anchored the clock; there is no definitive position before that.
    pub fn current_time(&self) -> Option<f64> {
        match self.state {
            ClockState::Paused => Some(self.start_position),
            ClockState::Finished => Some(self.duration),
            ClockState::Playing => match (self.last_play, self.clock_time) {
                (Some(anchor), Some(now)) => {
                    Some(self.start_position + (now - anchor) * self.playback_rate)
                }
                _ => None,
            },
        }
    }

    /// Best known position: [`current_time`](Self::current_time), or the
    /// session's start position while it is still unanchored.
    pub fn position(&self) -> f64 {
        self.current_time().unwrap_or(self.start_position)
    }

    /// Fraction of the clip played, in `[0, 1]`.
    pub fn get_played_percents(&self) -> f64 {
        if self.state == ClockState::Finished {
            return 1.0;
        }
        if self.duration <= 0.0 {
            return 0.0;
        }
        (self.position() / self.duration).clamp(0.0, 1.0)
    }

    /// Deliver a clock sample.
    ///
    /// # Arguments
    ///
    /// * `timestamp_ms` - Milliseconds since the clock source's origin.
    ///
    /// # Returns
    ///
    /// `true` while the clock still wants ticks. Once this returns `false`
    /// the host should stop delivering until the next `play`.
    pub fn on_tick(&mut self, timestamp_ms: f64) -> bool {
        if self.state != ClockState::Playing {
            trace!("tick at {:.1}ms ignored while {:?}", timestamp_ms, self.state);
            return false;
        }
        if !timestamp_ms.is_finite() {
            warn!("ignoring non-finite clock sample");
            return true;
        }

        let mut now = timestamp_ms / 1000.0;
        if let Some(previous) = self.clock_time {
            if now < previous {
                warn!(
                    "clock sample {:.3}s is older than {:.3}s, holding previous sample",
                    now, previous
                );
                now = previous;
            }
        }
        self.clock_time = Some(now);
        let anchor = *self.last_play.get_or_insert(now);
        let current = self.start_position + (now - anchor) * self.playback_rate;
        trace!("tick {:.3}s -> {:.3}s", now, current);

        if current >= self.duration {
            self.finish();
            false
        } else if self
            .scheduled_pause
            .is_some_and(|boundary| current >= boundary)
        {
            debug!("scheduled pause reached at {:.3}s", current);
            self.pause();
            false
        } else {
            self.emit(ClockEvent::AudioProcess { time: current });
            true
        }
    }

    fn finish(&mut self) {
        self.pause();
        self.state = ClockState::Finished;
        self.start_position = self.duration;
        debug!("finished at {:.3}s", self.duration);
        self.emit(ClockEvent::Finish);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::peaks::WaveformSummary;

    #[test]
    fn first_tick_anchors_without_elapsed_time() {
        let mut clock = loaded(4.0);
        clock.play(Some(1.0), None);
        assert!(clock.on_tick(987_654.0));
        assert_eq!(clock.current_time(), Some(1.0));
    }

    #[test]
    fn two_second_session() {
        let mut clock = loaded(4.0);
        clock.play(None, None);
        assert!(clock.on_tick(0.0));
        assert!(clock.on_tick(2000.0));

        assert_close(clock.current_time().unwrap(), 2.0);
        assert!(clock.is_playing());
        match clock.sink().events.last() {
            Some(ClockEvent::AudioProcess { time }) => assert_close(*time, 2.0),
            other => panic!("expected audioprocess, got {:?}", other),
        }
    }

    #[test]
    fn monotonic_ticks_never_rewind() {
        let mut clock = loaded(60.0);
        clock.play(None, None);
        let mut last = 0.0;
        for timestamp in [0.0, 16.0, 16.0, 40.0, 41.5, 100.0, 333.0, 334.0] {
            clock.on_tick(timestamp);
            let current = clock.current_time().unwrap();
            assert!(current >= last, "{} < {}", current, last);
            last = current;
        }
    }

    #[test]
    fn stale_sample_holds_previous_time() {
        let mut clock = loaded(10.0);
        clock.play(None, None);
        clock.on_tick(1000.0);
        clock.on_tick(3000.0);
        clock.on_tick(2000.0);
        assert_close(clock.current_time().unwrap(), 2.0);

        clock.on_tick(4000.0);
        assert_close(clock.current_time().unwrap(), 3.0);
    }

    #[test]
    fn missing_samples_only_change_granularity() {
        let mut clock = loaded(10.0);
        clock.play(None, None);
        clock.on_tick(500.0);
        clock.on_tick(4500.0);
        assert_close(clock.current_time().unwrap(), 4.0);
    }

    #[test]
    fn non_finite_sample_is_skipped() {
        let mut clock = loaded(10.0);
        clock.play(None, None);
        clock.on_tick(0.0);
        assert!(clock.on_tick(f64::NAN));
        clock.on_tick(1000.0);
        assert_close(clock.current_time().unwrap(), 1.0);
    }

    #[test]
    fn finishes_exactly_once_at_duration() {
        let mut clock = loaded(10.0);
        clock.play(Some(9.5), None);
        assert!(clock.on_tick(0.0));
        assert!(clock.on_tick(400.0));
        assert!(!clock.on_tick(600.0));

        assert!(clock.is_finished());
        assert_eq!(clock.get_played_percents(), 1.0);
        assert_eq!(clock.current_time(), Some(10.0));
        assert!(!clock.on_tick(700.0));
        assert!(!clock.on_tick(5000.0));

        let finishes = names(&clock)
            .into_iter()
            .filter(|name| *name == "finish")
            .count();
        assert_eq!(finishes, 1);
        assert_eq!(
            &clock.sink().events[clock.sink().events.len() - 3..],
            &[
                ClockEvent::Pause,
                ClockEvent::AudioProcess { time: 10.0 },
                ClockEvent::Finish
            ]
        );
    }

    #[test]
    fn scheduled_pause_fires_without_finish() {
        let mut clock = loaded(10.0);
        clock.play(Some(0.0), Some(5.0));
        clock.on_tick(0.0);
        assert!(clock.on_tick(4900.0));
        assert!(!clock.on_tick(5000.0));

        assert_eq!(clock.state(), ClockState::Paused);
        assert_eq!(clock.scheduled_pause(), None);
        assert_close(clock.current_time().unwrap(), 5.0);
        let events = names(&clock);
        assert!(events.contains(&"pause"));
        assert!(!events.contains(&"finish"));
    }

    #[test]
    fn scheduled_pause_fires_once_per_play() {
        let mut clock = loaded(10.0);
        clock.play(Some(0.0), Some(2.0));
        clock.on_tick(0.0);
        clock.on_tick(2500.0);
        assert!(clock.is_paused());

        clock.play(None, None);
        clock.on_tick(10_000.0);
        assert!(clock.on_tick(11_000.0));
        assert!(clock.is_playing());
        assert_close(clock.current_time().unwrap(), 3.5);
    }

    #[test]
    fn duration_wins_over_scheduled_pause() {
        let mut clock = loaded(3.0);
        clock.play(Some(0.0), Some(3.0));
        clock.on_tick(0.0);
        clock.on_tick(3000.0);
        assert!(clock.is_finished());
        assert!(names(&clock).contains(&"finish"));
    }

    #[test]
    fn ticks_are_ignored_unless_playing() {
        let mut clock = loaded(4.0);
        assert!(!clock.on_tick(0.0));
        assert!(!clock.on_tick(1000.0));
        assert_eq!(clock.current_time(), Some(0.0));
        assert!(clock.sink().events.is_empty());
    }

    #[test]
    fn played_percents() {
        let mut clock = loaded(0.0);
        assert_eq!(clock.get_played_percents(), 0.0);

        clock.load(WaveformSummary::empty(), 8.0);
        clock.seek_to(Some(2.0));
        assert_eq!(clock.get_played_percents(), 0.25);

        clock.play(None, None);
        assert_eq!(clock.get_played_percents(), 0.25);
        clock.on_tick(0.0);
        clock.on_tick(2000.0);
        assert_close(clock.get_played_percents(), 0.5);
    }

    #[test]
    fn empty_clip_finishes_on_first_tick() {
        let mut clock = loaded(0.0);
        clock.play(None, None);
        assert!(!clock.on_tick(0.0));
        assert!(clock.is_finished());
    }
}
