//! SRT Timecode Conversion
//!
//! Converts between `HH:MM:SS,mmm` timecode strings and floating seconds.

use crate::{CoreError, CoreResult, TimeSec};

/// Parses an SRT timecode (e.g. `00:01:02,500`) into seconds.
///
/// Only the token shape is enforced: three colon-separated clock fields and
/// a comma-separated millisecond field, each an unsigned integer. Field
/// ranges are not validated, so `00:99:00,000` is accepted and evaluates
/// arithmetically to 5940 seconds.
pub fn parse_timecode(text: &str) -> CoreResult<TimeSec> {
    let ts = text.trim();

    let (clock, millis) = ts
        .rsplit_once(',')
        .ok_or_else(|| CoreError::InvalidTimecode(ts.to_string()))?;

    let mut fields = clock.split(':');
    let (Some(h), Some(m), Some(s), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(CoreError::InvalidTimecode(ts.to_string()));
    };

    let field = |raw: &str| -> CoreResult<u64> {
        raw.trim()
            .parse()
            .map_err(|_| CoreError::InvalidTimecode(ts.to_string()))
    };

    let hours = field(h)?;
    let minutes = field(m)?;
    let seconds = field(s)?;
    let ms = field(millis)?;

    Ok(hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds as f64 + ms as f64 / 1000.0)
}

/// Formats seconds as an SRT timecode (`00:00:00,000`), milliseconds
/// rounded.
pub fn format_timecode(seconds: TimeSec) -> String {
    let total_ms = (seconds * 1000.0).round() as u64;
    let ms = total_ms % 1000;
    let total_secs = total_ms / 1000;
    let secs = total_secs % 60;
    let total_mins = total_secs / 60;
    let mins = total_mins % 60;
    let hours = total_mins / 60;

    format!("{:02}:{:02}:{:02},{:03}", hours, mins, secs, ms)
}

// =============================================================================
// Tests
// =============================================================================
