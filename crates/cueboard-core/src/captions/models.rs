//! Caption Data Models

use serde::{Deserialize, Serialize};

use crate::{CaptionId, TimeSec};

/// A single timed caption cue
///
/// Cues are constructed by the parser and owned by the sync engine
/// afterwards; they live until a new parse replaces the whole sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caption {
    /// Sequential identifier assigned in commit order, starting at 1
    pub id: CaptionId,
    /// Start time in seconds
    pub start_sec: TimeSec,
    /// End time in seconds
    pub end_sec: TimeSec,
    /// Caption text (may contain line breaks)
    pub text: String,
    /// Whether the playback position currently falls inside this cue.
    /// A derived projection recomputed on every clock update, never
    /// authoritative.
    #[serde(default)]
    pub active: bool,
}

impl Caption {
    /// Creates a new caption with the given timing and text
    pub fn new(id: CaptionId, start_sec: TimeSec, end_sec: TimeSec, text: &str) -> Self {
        Self {
            id,
            start_sec,
            end_sec,
            text: text.to_string(),
            active: false,
        }
    }

    /// Returns the duration of this caption in seconds
    pub fn duration(&self) -> TimeSec {
        self.end_sec - self.start_sec
    }

    /// Returns true if the given time falls inside this cue's interval.
    ///
    /// Inclusive on both ends: adjacent cues sharing a boundary instant
    /// both contain it, and sequence order decides which one is shown.
    pub fn contains(&self, time_sec: TimeSec) -> bool {
        time_sec >= self.start_sec && time_sec <= self.end_sec
    }
}

// =============================================================================
// Tests
// =============================================================================
