//! # Playclock
//!
//! A command-line host for the playback clock: loads a clip description,
//! drives the clock with a frame source and prints its transport events.

use log::error;

mod cli;
mod controls;
mod logging;
mod runner;

fn main() {
    logging::init();
    let args = cli::args::build_cli().get_matches();

    let code = match runner::run(&args) {
        Ok(code) => code,
        Err(err) => {
            error!("{}", err.to_string().to_lowercase());
            1
        }
    };

    std::process::exit(code)
}
