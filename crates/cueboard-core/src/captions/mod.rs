//! Caption System Module
//!
//! Provides subtitle parsing and serialization for Cueboard:
//! - Caption data model
//! - `HH:MM:SS,mmm` timecode grammar
//! - SRT block parsing and export, with strict and lenient policies
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    Caption System                         │
//! ├──────────────────────────────────────────────────────────┤
//! │  models.rs    - Caption record and interval test          │
//! │  timecode.rs  - timecode string ⇄ seconds conversion      │
//! │  formats.rs   - SRT parsing, export, file helpers         │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use cueboard_core::captions::{parse_srt, export_srt, ParsePolicy};
//!
//! let raw = std::fs::read_to_string("subtitles.srt")?;
//! let captions = parse_srt(&raw, ParsePolicy::Lenient)?;
//! let normalized = export_srt(&captions);
//! ```

mod formats;
mod models;
mod timecode;

pub use formats::{export_srt, load_srt, parse_srt, save_srt, ParsePolicy};
pub use models::Caption;
pub use timecode::{format_timecode, parse_timecode};
