//! Cueboard Error Definitions
//!
//! Defines error types used throughout the project.

use thiserror::Error;

use super::TimeSec;

/// Core engine error types
#[derive(Error, Debug)]
pub enum CoreError {
    /// Timecode token does not match the `HH:MM:SS,mmm` shape.
    #[error("Invalid timecode: {0}")]
    InvalidTimecode(String),

    /// Cue end does not come after its start (strict parsing only).
    #[error("Invalid time range: {0}~{1} seconds")]
    InvalidTimeRange(TimeSec, TimeSec),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Core engine result type
pub type CoreResult<T> = Result<T, CoreError>;
