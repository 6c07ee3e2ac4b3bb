//! Playable Media Seam
//!
//! Transport and decoding live outside this crate. The host hands the sync
//! engine a handle to its media element through this trait; the engine
//! never stores or owns it.

use crate::TimeSec;

/// Host-implemented handle to the playing media element.
pub trait PlayableMedia {
    /// Current playback position in seconds.
    fn current_time(&self) -> TimeSec;

    /// Total media duration in seconds.
    fn duration(&self) -> TimeSec;

    /// Requests a jump of the playback position.
    fn seek(&mut self, time_sec: TimeSec);

    /// Sets the output volume, in `[0.0, 1.0]`.
    fn set_volume(&mut self, volume: f32);
}
