//! Playback Synchronization Module
//!
//! Keeps the caption sequence in step with an externally driven playback
//! clock and exposes the seek capability used by timeline collaborators.

mod engine;
mod player;

pub use engine::CaptionSyncEngine;
pub use player::PlayableMedia;
