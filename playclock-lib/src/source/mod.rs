//! Clock sources and the host-side loop that feeds their samples to a clock.
//!
//! The clock never schedules itself. A [`TickDriver`] asks a [`ClockSource`]
//! for frame timestamps and keeps delivering them for as long as the clock
//! reports that it is playing.

mod driver;
mod frame;

pub use driver::TickDriver;
pub use frame::FrameClock;

/// Provider of frame timestamps.
pub trait ClockSource {
    /// Wait for the next frame and return its timestamp in milliseconds since
    /// the source's origin. Successive values never decrease.
    fn next_frame(&mut self) -> f64;
}

/// Simulated source that advances by a fixed step without sleeping.
#[derive(Debug, Clone)]
pub struct SteppedClock {
    now_ms: f64,
    step_ms: f64,
}

impl SteppedClock {
    /// Create a source whose first frame is `start_ms`.
    pub fn new(start_ms: f64, step_ms: f64) -> Self {
        Self {
            now_ms: start_ms,
            step_ms: step_ms.max(0.0),
        }
    }

    /// Jump ahead without producing frames, as if frames were dropped.
    pub fn skip(&mut self, ms: f64) {
        self.now_ms += ms.max(0.0);
    }

    /// Timestamp the next frame will carry.
    pub fn peek(&self) -> f64 {
        self.now_ms
    }
}

impl ClockSource for SteppedClock {
    fn next_frame(&mut self) -> f64 {
        let timestamp = self.now_ms;
        self.now_ms += self.step_ms;
        timestamp
    }
}
