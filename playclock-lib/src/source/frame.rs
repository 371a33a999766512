use std::thread;
use std::time::{Duration, Instant};

use crate::config::ClockConfig;

use super::ClockSource;

/// Real-time source pacing frames at a fixed interval.
///
/// Timestamps are measured from the moment the source was created. A caller
/// that falls behind gets the current time on its next call instead of a
/// burst of catch-up frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    origin: Instant,
    interval: Duration,
    frames: u64,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            origin: Instant::now(),
            interval,
            frames: 0,
        }
    }

    /// Create a source paced by `config.frame_interval_ms`.
    pub fn from_config(config: &ClockConfig) -> Self {
        Self::new(Duration::from_secs_f64(config.frame_interval_ms / 1000.0))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Milliseconds since the source was created.
    pub fn elapsed_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

impl ClockSource for FrameClock {
    fn next_frame(&mut self) -> f64 {
        self.frames += 1;
        let target = self.interval.mul_f64(self.frames as f64);
        let elapsed = self.origin.elapsed();

        if target > elapsed {
            thread::sleep(target - elapsed);
        } else if !self.interval.is_zero() {
            self.frames = (elapsed.as_secs_f64() / self.interval.as_secs_f64()) as u64;
        }

        self.elapsed_ms()
    }
}
