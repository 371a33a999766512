use clap::ArgMatches;
use log::{info, warn};
use playclock_lib::{
    ClockConfig, ClockError, ClockEvent, FrameClock, PlaybackClock, SteppedClock, TickDriver,
    WaveformSummary,
};

use crate::controls;

/// Load the clip, play it through the clock and print what happens.
///
/// Returns the process exit code.
pub fn run(args: &ArgMatches) -> Result<i32, ClockError> {
    info!("Starting playclock");

    let mut config = match args.get_one::<String>("config") {
        Some(path) => ClockConfig::from_json_file(path)?,
        None => ClockConfig::default(),
    };
    if let Some(frame_ms) = args.get_one::<f64>("frame-ms") {
        config.frame_interval_ms = *frame_ms;
    }

    let duration = *args
        .get_one::<f64>("duration")
        .ok_or_else(|| ClockError::InvalidArgument("missing --duration".to_string()))?;
    let peaks = match args.get_one::<String>("peaks") {
        Some(path) => WaveformSummary::from_json_file(path)?,
        None => WaveformSummary::empty(),
    };

    let mut clock = PlaybackClock::new(config.clone())?;
    clock.load(peaks, duration);
    // The driver only stops once the position reaches the end, so reverse or
    // stalled rates are refused here.
    let rate = args
        .get_one::<f64>("rate")
        .copied()
        .unwrap_or(config.audio_rate);
    clock.try_set_playback_rate(rate)?;
    if let Some(volume) = args.get_one::<f64>("volume") {
        clock.set_volume(*volume);
    }
    info!(
        "loaded {:.3}s clip with {} peak windows",
        clock.get_duration(),
        clock.get_peaks(0, 0, 0).len()
    );

    let json = args.get_flag("json");
    let progress = args.get_flag("progress");
    let printer = clock.subscribe(move |event| {
        if !progress && matches!(event, ClockEvent::AudioProcess { .. }) {
            return;
        }
        if json {
            match serde_json::to_string(event) {
                Ok(line) => println!("{}", line),
                Err(err) => warn!("failed to encode event: {}", err),
            }
        } else {
            println!("{}", controls::event_text(event));
        }
    });

    let start = args.get_one::<f64>("start").copied();
    let end = args.get_one::<f64>("end").copied();
    let max_ticks = args
        .get_one::<usize>("max-ticks")
        .copied()
        .unwrap_or(usize::MAX);

    clock.play(start, end);
    let ticks = if args.get_flag("realtime") {
        TickDriver::new(FrameClock::from_config(&config)).run_for(&mut clock, max_ticks)
    } else {
        TickDriver::new(SteppedClock::new(0.0, config.frame_interval_ms))
            .run_for(&mut clock, max_ticks)
    };
    info!("clock stopped after {} ticks", ticks);

    let snapshot = clock.snapshot();
    clock.unsubscribe(printer);
    clock.destroy();

    if json {
        println!("{}", serde_json::to_string(&snapshot)?);
    } else {
        println!("{}", controls::status_text(&snapshot));
    }

    Ok(0)
}
