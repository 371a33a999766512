//! CLI argument definitions for `playclock`.

use clap::{value_parser, Arg, ArgAction, Command};

/// Build the CLI argument parser.
pub fn build_cli() -> Command {
    Command::new("playclock")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Adam Howard <adam.thomas.howard@gmail.com>")
        .about("Drive a playback clock over a clip and print its transport events")
        .arg_required_else_help(true)
        .arg(
            Arg::new("duration")
                .long("duration")
                .short('d')
                .value_name("SECONDS")
                .required(true)
                .value_parser(value_parser!(f64))
                .help("Total duration of the clip in seconds"),
        )
        .arg(
            Arg::new("peaks")
                .long("peaks")
                .short('p')
                .value_name("PATH")
                .help("JSON file with the clip's waveform peaks"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("JSON clock configuration (audio_rate, default_volume, frame_interval_ms)"),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .short('s')
                .value_name("SECONDS")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64))
                .help("Position to start playing from"),
        )
        .arg(
            Arg::new("end")
                .long("end")
                .short('e')
                .value_name("SECONDS")
                .value_parser(value_parser!(f64))
                .help("Pause automatically once this position is reached"),
        )
        .arg(
            Arg::new("rate")
                .long("rate")
                .short('r')
                .value_name("RATE")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64))
                .help("Positive playback rate multiplier (overrides the config file)"),
        )
        .arg(
            Arg::new("volume")
                .long("volume")
                .value_name("VOLUME")
                .value_parser(value_parser!(f64))
                .help("Volume between 0.0 and 1.0 (overrides the config file)"),
        )
        .arg(
            Arg::new("frame-ms")
                .long("frame-ms")
                .value_name("MS")
                .value_parser(value_parser!(f64))
                .help("Frame interval in milliseconds (overrides the config file)"),
        )
        .arg(
            Arg::new("max-ticks")
                .long("max-ticks")
                .value_name("COUNT")
                .value_parser(value_parser!(usize))
                .help("Stop driving the clock after this many ticks"),
        )
        .arg(
            Arg::new("realtime")
                .long("realtime")
                .action(ArgAction::SetTrue)
                .help("Pace ticks against the wall clock instead of simulating them"),
        )
        .arg(
            Arg::new("progress")
                .long("progress")
                .action(ArgAction::SetTrue)
                .help("Print every audioprocess event"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print events and the final status as JSON lines"),
        )
}
