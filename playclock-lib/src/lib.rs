//! # Playclock Library
//!
//! A playback-position clock for audio clips. Instead of driving an audio
//! device it follows an external, irregular frame clock, reconciling those
//! samples with a clip-relative position across rate changes, seeks and
//! scheduled pauses, and publishes `play`, `pause`, `audioprocess` and
//! `finish` events.

pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod peaks;
pub mod source;

pub use clock::{ClockSnapshot, ClockState, PlaybackClock};
pub use config::ClockConfig;
pub use error::ClockError;
pub use events::{ClockEvent, EventBus, EventSink, SubscriptionId};
pub use peaks::{PeakWindow, WaveformSummary};
pub use source::{ClockSource, FrameClock, SteppedClock, TickDriver};
