use playclock_lib::{ClockEvent, ClockSnapshot, ClockState};

/// Human-readable line for a transport event.
pub fn event_text(event: &ClockEvent) -> String {
    match event {
        ClockEvent::AudioProcess { time } => {
            format!("{} {}", event.name(), format_time(time * 1000.0))
        }
        _ => event.name().to_string(),
    }
}

/// One-line status summary for a clock snapshot.
pub fn status_text(snapshot: &ClockSnapshot) -> String {
    let state = match snapshot.state {
        ClockState::Playing => "▶ Playing",
        ClockState::Paused => "⏸ Paused",
        ClockState::Finished => "■ Finished",
    };
    format!(
        "{}   {} / {}   ({:>5.1}%)   rate {:.2}x   volume {:.2}",
        state,
        format_time(snapshot.time * 1000.0),
        format_time(snapshot.duration * 1000.0),
        snapshot.percent * 100.0,
        snapshot.playback_rate,
        snapshot.volume
    )
}

fn format_time(time: f64) -> String {
    let millis = time.max(0.0).round() as u64;
    let seconds = millis / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;

    format!(
        "{:02}:{:02}:{:02}.{:03}",
        hours,
        minutes % 60,
        seconds % 60,
        millis % 1000
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_milliseconds() {
        assert_eq!(format_time(0.0), "00:00:00.000");
        assert_eq!(format_time(61_250.0), "00:01:01.250");
        assert_eq!(format_time(3_725_004.4), "01:02:05.004");
        assert_eq!(format_time(-5.0), "00:00:00.000");
    }

    #[test]
    fn event_lines() {
        assert_eq!(event_text(&ClockEvent::Play), "play");
        assert_eq!(
            event_text(&ClockEvent::AudioProcess { time: 1.5 }),
            "audioprocess 00:00:01.500"
        );
    }

    #[test]
    fn status_line_shows_position_and_percent() {
        let snapshot = ClockSnapshot {
            time: 5.0,
            duration: 10.0,
            percent: 0.5,
            volume: 1.0,
            playback_rate: 1.0,
            state: ClockState::Paused,
        };
        let text = status_text(&snapshot);
        assert!(text.starts_with("⏸ Paused"));
        assert!(text.contains("00:00:05.000 / 00:00:10.000"));
        assert!(text.contains("( 50.0%)"));
    }
}
