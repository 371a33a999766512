use std::fmt::{Display, Formatter};

/// Error type for clock construction, config/peaks loading and strict setters.
///
/// Transport operations never return this; they normalize bad input instead.
#[derive(Debug)]
pub enum ClockError {
    InvalidArgument(String),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl Display for ClockError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(err) => write!(f, "invalid argument: {}", err),
            Self::Io(err) => write!(f, "io error: {}", err),
            Self::Json(err) => write!(f, "json error: {}", err),
        }
    }
}

impl std::error::Error for ClockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(_) => None,
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ClockError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ClockError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
