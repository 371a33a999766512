//! Shared fixtures for clock tests.

use crate::config::ClockConfig;
use crate::events::{ClockEvent, EventSink};
use crate::peaks::{PeakWindow, WaveformSummary};

use super::PlaybackClock;

/// Sink that records every event until it is detached.
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub events: Vec<ClockEvent>,
    pub detached: bool,
}

impl EventSink for RecordingSink {
    fn publish(&mut self, event: &ClockEvent) {
        if !self.detached {
            self.events.push(*event);
        }
    }

    fn detach_all(&mut self) {
        self.detached = true;
    }
}

pub(crate) fn recording_clock() -> PlaybackClock<RecordingSink> {
    PlaybackClock::with_sink(ClockConfig::default(), RecordingSink::default()).expect("clock")
}

pub(crate) fn loaded(duration: f64) -> PlaybackClock<RecordingSink> {
    let mut clock = recording_clock();
    clock.load(WaveformSummary::empty(), duration);
    clock
}

pub(crate) fn sample_peaks() -> WaveformSummary {
    WaveformSummary::new(vec![vec![
        PeakWindow { max: 0.5, min: -0.5 },
        PeakWindow {
            max: 0.25,
            min: -0.75,
        },
    ]])
}

/// Event names in publish order.
pub(crate) fn names(clock: &PlaybackClock<RecordingSink>) -> Vec<&'static str> {
    clock.sink().events.iter().map(|event| event.name()).collect()
}

/// Forget what has been recorded so far.
pub(crate) fn clear(clock: &mut PlaybackClock<RecordingSink>) {
    clock.sink_mut().events.clear();
}

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
