//! Waveform summary data stored alongside a clip.
//!
//! The clock never interprets peaks. They are loaded once, kept verbatim and
//! handed back to whoever draws the waveform.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ClockError;

/// A single peak window with maximum and minimum sample amplitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakWindow {
    pub max: f32,
    pub min: f32,
}

/// Pre-computed per-channel amplitude summary for a clip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveformSummary {
    pub channels: Vec<Vec<PeakWindow>>,
}

impl WaveformSummary {
    /// Build a summary from per-channel peak windows.
    pub fn new(channels: Vec<Vec<PeakWindow>>) -> Self {
        Self { channels }
    }

    /// Empty summary, used when a clip is loaded without peaks.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Return true when no channel carries any peak window.
    pub fn is_empty(&self) -> bool {
        self.channels.iter().all(|channel| channel.is_empty())
    }

    /// Number of peak windows in the longest channel.
    pub fn len(&self) -> usize {
        self.channels
            .iter()
            .map(|channel| channel.len())
            .max()
            .unwrap_or(0)
    }

    /// Parse a summary from a JSON document.
    ///
    /// Accepts either `{"channels": [[{"max": .., "min": ..}, ..], ..]}` or a
    /// bare array of channels.
    ///
    /// # Errors
    /// Returns [`ClockError::Json`] if the document matches neither shape.
    pub fn from_json_str(json: &str) -> Result<Self, ClockError> {
        let document: SummaryDocument = serde_json::from_str(json)?;
        Ok(document.into())
    }

    /// Read a summary from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or does not parse.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ClockError> {
        let reader = BufReader::new(File::open(path)?);
        let document: SummaryDocument = serde_json::from_reader(reader)?;
        Ok(document.into())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SummaryDocument {
    Flat(Vec<Vec<PeakWindow>>),
    Nested(WaveformSummary),
}

impl From<SummaryDocument> for WaveformSummary {
    fn from(document: SummaryDocument) -> Self {
        match document {
            SummaryDocument::Nested(summary) => summary,
            SummaryDocument::Flat(channels) => WaveformSummary::new(channels),
        }
    }
}
