//! Media Handle
//!
//! The capability a rendering layer exposes for one playable clip.

use crate::{MediaError, ReadyState};

/// Notifications emitted by a media element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Duration and dimensions are known
    LoadedMetadata,
    /// The frame at the current position is available
    LoadedData,
    /// Playback began (paused -> playing)
    Play,
    /// Playback paused
    Pause,
    /// Playback reached the end unassisted
    Ended,
}

/// Opaque playable media the carousel controls
///
/// `play` may be refused (autoplay policy); `pause` never fails.
pub trait MediaHandle {
    /// Request playback
    fn play(&mut self) -> Result<(), MediaError>;

    /// Request pause
    fn pause(&mut self);

    fn set_muted(&mut self, muted: bool);

    /// Current playback position in seconds
    fn current_time(&self) -> f64;

    /// Native ready state
    fn ready_state(&self) -> ReadyState;

    fn is_paused(&self) -> bool;
}
