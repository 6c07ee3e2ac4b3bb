//! SRT Parsing and Serialization
//!
//! Parses SubRip block format into an ordered caption sequence and back.
//!
//! # SRT Format
//!
//! ```text
//! 1
//! 00:00:01,000 --> 00:00:04,000
//! First caption text
//!
//! 2
//! 00:00:05,500 --> 00:00:08,000
//! Second caption text
//! with multiple lines
//! ```
//!
//! Blocks are separated by one or more blank lines. The leading sequence
//! index is optional and always discarded: ids are reassigned in commit
//! order. A block whose text is empty after trimming (a time range with no
//! text, or a truncated trailing block) is dropped silently.

use std::path::Path;

use tracing::warn;

use super::timecode::{format_timecode, parse_timecode};
use super::Caption;
use crate::{CaptionId, CoreError, CoreResult, TimeSec};

// =============================================================================
// Parse Policy
// =============================================================================

/// How to treat malformed cue blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Abort the whole parse on the first malformed block.
    Strict,
    /// Skip malformed blocks with a warning and keep going.
    #[default]
    Lenient,
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses SRT content into an ordered caption sequence.
///
/// Cues keep the order they appear in the source, which is not necessarily
/// sorted by start time. Ids are assigned sequentially starting at 1, in
/// commit order.
pub fn parse_srt(content: &str, policy: ParsePolicy) -> CoreResult<Vec<Caption>> {
    let mut captions = Vec::new();
    let mut next_id: CaptionId = 1;

    for block in split_blocks(content) {
        match parse_block(&block) {
            Ok(Some((start_sec, end_sec, text))) => {
                if start_sec >= end_sec {
                    if policy == ParsePolicy::Strict {
                        return Err(CoreError::InvalidTimeRange(start_sec, end_sec));
                    }
                    // Lenient keeps the cue as read: source order is
                    // preserved even for malformed input.
                    warn!(start_sec, end_sec, "cue range does not advance");
                }
                captions.push(Caption::new(next_id, start_sec, end_sec, &text));
                next_id += 1;
            }
            // No time range, or no text: dropped by policy, not an error.
            Ok(None) => {}
            Err(err) => {
                if policy == ParsePolicy::Strict {
                    return Err(err);
                }
                warn!(%err, "skipping malformed cue block");
            }
        }
    }

    Ok(captions)
}

/// Groups source lines into blocks separated by blank lines.
fn split_blocks(content: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    // End of input terminates the final block without a trailing blank line.
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

/// Parses one block into `(start, end, text)`.
///
/// Returns `Ok(None)` for blocks that should be dropped: no time-range line
/// found, or no text after it.
fn parse_block(lines: &[&str]) -> CoreResult<Option<(TimeSec, TimeSec, String)>> {
    let mut range: Option<(TimeSec, TimeSec)> = None;
    let mut text_lines: Vec<&str> = Vec::new();

    for line in lines {
        if range.is_none() {
            // Lines before the time range are the source-provided sequence
            // index, which is not trusted; anything until `-->` is skipped.
            if line.contains("-->") {
                range = Some(parse_time_range(line)?);
            }
        } else {
            // The slots are consumed strictly in order: once the range is
            // captured, every remaining line is text, `-->` included.
            text_lines.push(line.trim());
        }
    }

    let Some((start_sec, end_sec)) = range else {
        return Ok(None);
    };

    let text = text_lines.join("\n");
    if text.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some((start_sec, end_sec, text)))
}

/// Parses a time-range line (`00:00:01,000 --> 00:00:04,000`).
fn parse_time_range(line: &str) -> CoreResult<(TimeSec, TimeSec)> {
    let (start, end) = line
        .split_once("-->")
        .ok_or_else(|| CoreError::InvalidTimecode(line.trim().to_string()))?;
    Ok((parse_timecode(start)?, parse_timecode(end)?))
}

// =============================================================================
// Serialization
// =============================================================================

/// Exports captions back to SRT format.
///
/// The natural dual of [`parse_srt`]: sequence numbers are regenerated from
/// position, and `parse_srt(export_srt(c))` reproduces the same
/// start/end/text triples.
pub fn export_srt(captions: &[Caption]) -> String {
    let mut output = String::new();

    for (index, caption) in captions.iter().enumerate() {
        output.push_str(&format!("{}\n", index + 1));
        output.push_str(&format!(
            "{} --> {}\n",
            format_timecode(caption.start_sec),
            format_timecode(caption.end_sec)
        ));
        output.push_str(&caption.text);
        output.push_str("\n\n");
    }

    output.trim_end().to_string()
}

// =============================================================================
// File Helpers
// =============================================================================

/// Reads and parses an SRT file.
pub fn load_srt<P: AsRef<Path>>(path: P, policy: ParsePolicy) -> CoreResult<Vec<Caption>> {
    let content = std::fs::read_to_string(path)?;
    parse_srt(&content, policy)
}

/// Serializes captions and writes them to an SRT file, replacing any
/// existing content.
pub fn save_srt<P: AsRef<Path>>(path: P, captions: &[Caption]) -> CoreResult<()> {
    let mut content = export_srt(captions);
    content.push('\n');
    std::fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Parsing Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_parse_srt_basic() {
        let srt = r#"1
00:00:01,000 --> 00:00:04,000
Hello World

2
00:00:05,500 --> 00:00:08,000
Second caption
"#;

        let captions = parse_srt(srt, ParsePolicy::Lenient).unwrap();
        assert_eq!(captions.len(), 2);

        assert_eq!(captions[0].id, 1);
        assert_eq!(captions[0].start_sec, 1.0);
        assert_eq!(captions[0].end_sec, 4.0);
        assert_eq!(captions[0].text, "Hello World");

        assert_eq!(captions[1].id, 2);
        assert_eq!(captions[1].start_sec, 5.5);
        assert_eq!(captions[1].text, "Second caption");
    }

    #[test]
    fn test_parse_srt_multiline_text_is_trimmed_per_line() {
        let srt = "1\n00:00:00,000 --> 00:00:05,000\n  Line one  \nLine two\t\n";

        let captions = parse_srt(srt, ParsePolicy::Lenient).unwrap();
        assert_eq!(captions.len(), 1);
        assert_eq!(captions[0].text, "Line one\nLine two");
    }

    #[test]
    fn test_parse_srt_missing_index_line() {
        let srt = "00:00:01,000 --> 00:00:02,000\nNo index here\n";

        let captions = parse_srt(srt, ParsePolicy::Lenient).unwrap();
        assert_eq!(captions.len(), 1);
        assert_eq!(captions[0].text, "No index here");
    }

    #[test]
    fn test_parse_srt_ids_ignore_source_index() {
        // Source numbering is wild; ids are reassigned in commit order.
        let srt = r#"47
00:00:01,000 --> 00:00:02,000
First

3
00:00:03,000 --> 00:00:04,000
Second
"#;

        let captions = parse_srt(srt, ParsePolicy::Lenient).unwrap();
        assert_eq!(captions[0].id, 1);
        assert_eq!(captions[1].id, 2);
    }

    #[test]
    fn test_parse_srt_drops_block_without_text() {
        let srt = r#"1
00:00:01,000 --> 00:00:02,000
Kept

2
00:00:03,000 --> 00:00:04,000
"#;

        let captions = parse_srt(srt, ParsePolicy::Lenient).unwrap();
        assert_eq!(captions.len(), 1);
        assert_eq!(captions[0].text, "Kept");
    }

    #[test]
    fn test_parse_srt_final_block_without_trailing_blank_line() {
        let srt = "1\n00:00:01,000 --> 00:00:02,000\nLast words";

        let captions = parse_srt(srt, ParsePolicy::Lenient).unwrap();
        assert_eq!(captions.len(), 1);
        assert_eq!(captions[0].text, "Last words");
    }

    #[test]
    fn test_parse_srt_arrow_inside_text_stays_text() {
        let srt = "1\n00:00:01,000 --> 00:00:02,000\nA --> B\n";

        let captions = parse_srt(srt, ParsePolicy::Lenient).unwrap();
        assert_eq!(captions.len(), 1);
        assert_eq!(captions[0].text, "A --> B");
    }

    #[test]
    fn test_parse_srt_empty_input() {
        assert!(parse_srt("", ParsePolicy::Lenient).unwrap().is_empty());
        assert!(parse_srt("\n\n  \n", ParsePolicy::Strict).unwrap().is_empty());
    }

    // -------------------------------------------------------------------------
    // Policy Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_lenient_skips_malformed_timecode_block() {
        let srt = r#"1
00:00:bad --> 00:00:04,000
Broken

2
00:00:05,000 --> 00:00:06,000
Fine
"#;

        let captions = parse_srt(srt, ParsePolicy::Lenient).unwrap();
        assert_eq!(captions.len(), 1);
        assert_eq!(captions[0].text, "Fine");
        // The survivor still gets id 1: ids count committed cues only.
        assert_eq!(captions[0].id, 1);
    }

    #[test]
    fn test_strict_aborts_on_malformed_timecode() {
        let srt = "1\n00:00:bad --> 00:00:04,000\nBroken\n";

        let err = parse_srt(srt, ParsePolicy::Strict).unwrap_err();
        assert!(matches!(err, CoreError::InvalidTimecode(_)));
    }

    #[test]
    fn test_strict_rejects_inverted_range() {
        let srt = "1\n00:00:04,000 --> 00:00:01,000\nBackwards\n";

        let err = parse_srt(srt, ParsePolicy::Strict).unwrap_err();
        match err {
            CoreError::InvalidTimeRange(start, end) => {
                assert_eq!(start, 4.0);
                assert_eq!(end, 1.0);
            }
            other => panic!("expected InvalidTimeRange, got {other:?}"),
        }
    }

    #[test]
    fn test_lenient_preserves_inverted_range_as_read() {
        let srt = "1\n00:00:04,000 --> 00:00:01,000\nBackwards\n";

        let captions = parse_srt(srt, ParsePolicy::Lenient).unwrap();
        assert_eq!(captions.len(), 1);
        assert_eq!(captions[0].start_sec, 4.0);
        assert_eq!(captions[0].end_sec, 1.0);
    }

    #[test]
    fn test_strict_parse_guarantees_start_before_end() {
        let srt = r#"1
00:00:05,000 --> 00:00:08,000
Out of order but well formed

2
00:00:01,000 --> 00:00:02,000
Earlier cue listed later
"#;

        let captions = parse_srt(srt, ParsePolicy::Strict).unwrap();
        assert!(captions.iter().all(|c| c.start_sec < c.end_sec));
        // Source order is kept even though starts are unsorted.
        assert_eq!(captions[0].start_sec, 5.0);
        assert_eq!(captions[1].start_sec, 1.0);
    }

    // -------------------------------------------------------------------------
    // Serialization Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_export_srt() {
        let captions = vec![
            Caption::new(1, 1.0, 4.0, "Hello World"),
            Caption::new(2, 5.5, 8.0, "Second caption"),
        ];

        let srt = export_srt(&captions);
        assert!(srt.contains("00:00:01,000 --> 00:00:04,000"));
        assert!(srt.contains("Hello World"));
        assert!(srt.contains("00:00:05,500 --> 00:00:08,000"));
    }

    #[test]
    fn test_srt_roundtrip() {
        let original = vec![
            Caption::new(1, 1.0, 4.0, "First caption"),
            Caption::new(2, 5.5, 8.5, "Second\nMultiline"),
        ];

        let parsed = parse_srt(&export_srt(&original), ParsePolicy::Strict).unwrap();

        assert_eq!(parsed.len(), original.len());
        for (a, b) in parsed.iter().zip(&original) {
            assert_eq!(a.start_sec, b.start_sec);
            assert_eq!(a.end_sec, b.end_sec);
            assert_eq!(a.text, b.text);
        }
    }

    // -------------------------------------------------------------------------
    // File Helper Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cues.srt");

        let captions = vec![
            Caption::new(1, 0.0, 2.0, "On disk"),
            Caption::new(2, 3.0, 4.0, "And back"),
        ];

        save_srt(&path, &captions).unwrap();
        let loaded = load_srt(&path, ParsePolicy::Strict).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].text, "On disk");
        assert_eq!(loaded[1].text, "And back");
    }

    #[test]
    fn test_load_srt_missing_file() {
        let err = load_srt("/nonexistent/cues.srt", ParsePolicy::Lenient).unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
