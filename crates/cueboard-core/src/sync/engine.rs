//! Caption Sync Engine
//!
//! Owns the parsed caption sequence and keeps the active-caption projection
//! in step with the playback clock.

use tracing::debug;

use super::PlayableMedia;
use crate::captions::Caption;
use crate::{CaptionId, TimeSec};

/// Playback-synchronized owner of the caption sequence.
///
/// The `active` flags are a derived projection: they are recomputed from
/// scratch on every clock update rather than patched incrementally, which
/// makes [`on_time_update`](Self::on_time_update) idempotent for a fixed
/// time value regardless of call order.
#[derive(Debug, Default)]
pub struct CaptionSyncEngine {
    captions: Vec<Caption>,
    /// Index of the first active caption after the latest clock update.
    active_index: Option<usize>,
}

impl CaptionSyncEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole caption sequence.
    ///
    /// A fresh parse supersedes any previous sequence; active state resets
    /// until the next clock update.
    pub fn load(&mut self, mut captions: Vec<Caption>) {
        for caption in &mut captions {
            caption.active = false;
        }
        debug!(count = captions.len(), "loading caption sequence");
        self.captions = captions;
        self.active_index = None;
    }

    /// Recomputes the active projection for the given playback position.
    ///
    /// Every cue is tested independently against its inclusive-inclusive
    /// interval, so overlapping cues are all marked active; the visible
    /// text is the first active cue in sequence order.
    pub fn on_time_update(&mut self, current_time: TimeSec) {
        self.active_index = None;
        for (index, caption) in self.captions.iter_mut().enumerate() {
            caption.active = caption.contains(current_time);
            if caption.active && self.active_index.is_none() {
                self.active_index = Some(index);
            }
        }
    }

    /// The caption currently shown, if any.
    pub fn active_caption(&self) -> Option<&Caption> {
        self.active_index.map(|index| &self.captions[index])
    }

    /// The visible caption text: the first active cue's text, or the empty
    /// string when no cue covers the playback position.
    pub fn active_text(&self) -> &str {
        self.active_caption().map(|c| c.text.as_str()).unwrap_or("")
    }

    /// Replaces the text of the caption with the given id.
    ///
    /// Timing and active state are untouched. Unknown ids are a silent
    /// no-op.
    pub fn update_text(&mut self, id: CaptionId, new_text: impl Into<String>) {
        match self.captions.iter_mut().find(|c| c.id == id) {
            Some(caption) => {
                caption.text = new_text.into();
                debug!(id, "caption text updated");
            }
            None => debug!(id, "ignoring text update for unknown caption"),
        }
    }

    /// Finds a caption by id.
    pub fn lookup(&self, id: CaptionId) -> Option<&Caption> {
        self.captions.iter().find(|c| c.id == id)
    }

    /// The playback position a seek request for this caption should target.
    pub fn seek_target(&self, id: CaptionId) -> Option<TimeSec> {
        self.lookup(id).map(|c| c.start_sec)
    }

    /// Requests `current_time := caption.start` on the media collaborator,
    /// as issued by the timeline/list renderer when an entry is selected.
    ///
    /// Returns the target time, or `None` (and no seek) for unknown ids.
    pub fn seek_to_caption(
        &self,
        media: &mut dyn PlayableMedia,
        id: CaptionId,
    ) -> Option<TimeSec> {
        let target = self.seek_target(id)?;
        media.seek(target);
        Some(target)
    }

    /// Read access to the full sequence, for the timeline/list renderer.
    pub fn captions(&self) -> &[Caption] {
        &self.captions
    }

    pub fn len(&self) -> usize {
        self.captions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captions.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
