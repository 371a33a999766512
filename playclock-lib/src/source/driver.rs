use log::debug;

use crate::clock::PlaybackClock;
use crate::events::EventSink;

use super::ClockSource;

/// Host-side loop delivering clock-source frames to a playback clock.
///
/// The driver decides when to tick; the clock only tells it, through
/// [`PlaybackClock::is_playing`] and the return value of `on_tick`, whether
/// it still wants ticks.
#[derive(Debug)]
pub struct TickDriver<C: ClockSource> {
    source: C,
    delivered: u64,
}

impl<C: ClockSource> TickDriver<C> {
    pub fn new(source: C) -> Self {
        Self {
            source,
            delivered: 0,
        }
    }

    pub fn source(&self) -> &C {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut C {
        &mut self.source
    }

    /// Total ticks delivered over the driver's lifetime.
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    /// Deliver a single frame if the clock is playing.
    ///
    /// Returns whether the clock wants further ticks.
    pub fn step<S: EventSink>(&mut self, clock: &mut PlaybackClock<S>) -> bool {
        if !clock.is_playing() {
            return false;
        }
        let timestamp = self.source.next_frame();
        self.delivered += 1;
        clock.on_tick(timestamp)
    }

    /// Deliver frames until the clock leaves the playing state.
    ///
    /// Returns the number of ticks delivered by this call.
    pub fn run<S: EventSink>(&mut self, clock: &mut PlaybackClock<S>) -> usize {
        self.run_for(clock, usize::MAX)
    }

    /// Like [`run`](Self::run), but stops after `max_ticks` ticks.
    pub fn run_for<S: EventSink>(
        &mut self,
        clock: &mut PlaybackClock<S>,
        max_ticks: usize,
    ) -> usize {
        let mut ticks = 0;
        while ticks < max_ticks && clock.is_playing() {
            ticks += 1;
            if !self.step(clock) {
                break;
            }
        }
        debug!(
            "delivered {} ticks, clock is {:?} at {:.3}s",
            ticks,
            clock.state(),
            clock.position()
        );
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ClockState;
    use crate::config::ClockConfig;
    use crate::events::ClockEvent;
    use crate::peaks::WaveformSummary;
    use crate::source::SteppedClock;
    use std::sync::{Arc, Mutex};

    fn clock(duration: f64) -> PlaybackClock {
        let mut clock = PlaybackClock::new(ClockConfig::default()).expect("clock");
        clock.load(WaveformSummary::empty(), duration);
        clock
    }

    #[test]
    fn runs_until_finish() {
        let mut clock = clock(1.0);
        let finished = Arc::new(Mutex::new(0));
        let counter = finished.clone();
        clock.subscribe(move |event| {
            if *event == ClockEvent::Finish {
                *counter.lock().unwrap() += 1;
            }
        });

        clock.play(None, None);
        let mut driver = TickDriver::new(SteppedClock::new(0.0, 100.0));
        let ticks = driver.run(&mut clock);

        assert_eq!(ticks, 11);
        assert_eq!(clock.state(), ClockState::Finished);
        assert_eq!(*finished.lock().unwrap(), 1);
        assert_eq!(driver.run(&mut clock), 0);
    }

    #[test]
    fn stops_at_scheduled_pause() {
        let mut clock = clock(1.0);
        clock.play(Some(0.0), Some(0.5));
        let mut driver = TickDriver::new(SteppedClock::new(0.0, 100.0));

        assert_eq!(driver.run(&mut clock), 6);
        assert_eq!(clock.state(), ClockState::Paused);
        assert_eq!(clock.current_time(), Some(0.5));
    }

    #[test]
    fn run_for_bounds_the_loop() {
        let mut clock = clock(10.0);
        clock.play(None, None);
        let mut driver = TickDriver::new(SteppedClock::new(0.0, 100.0));

        assert_eq!(driver.run_for(&mut clock, 5), 5);
        assert!(clock.is_playing());
        assert_eq!(clock.current_time(), Some(0.4));
        assert_eq!(driver.delivered(), 5);
    }

    #[test]
    fn does_nothing_while_paused() {
        let mut clock = clock(10.0);
        let mut driver = TickDriver::new(SteppedClock::new(0.0, 100.0));

        assert!(!driver.step(&mut clock));
        assert_eq!(driver.run(&mut clock), 0);
        assert_eq!(driver.source().peek(), 0.0);
    }

    #[test]
    fn dropped_frames_keep_time_accurate() {
        let mut clock = clock(10.0);
        clock.play(None, None);
        let mut driver = TickDriver::new(SteppedClock::new(0.0, 100.0));

        driver.run_for(&mut clock, 2);
        driver.source_mut().skip(900.0);
        driver.run_for(&mut clock, 1);

        assert_eq!(clock.current_time(), Some(1.1));
    }
}
