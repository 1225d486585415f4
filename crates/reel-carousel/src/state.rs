//! Carousel State Machine
//!
//! The single authoritative record of which clip is active and what the
//! viewer intends. Mutated only through [`CarouselState::apply`].

use crate::{ControlButton, TransitionError};

/// Events that may move the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// First viewport entry
    ViewportEntered,
    /// Natural end of clip `index`
    ClipEnded { index: usize },
    /// Replay from the start (only once the last clip ended)
    Reset,
    TogglePlay,
    /// Manual jump to a clip
    JumpTo(usize),
    /// The active clip's media reported it began playing
    PlaybackStarted,
    /// The active clip's media refused to play
    PlaybackRejected,
}

/// Outcome of an accepted trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub trigger: Trigger,
    pub from_index: usize,
    pub to_index: usize,
    /// The active clip was (re)selected; its progress animator must be recreated
    pub reactivate: bool,
}

impl Transition {
    pub fn index_changed(&self) -> bool {
        self.from_index != self.to_index
    }
}

/// Carousel state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    active_index: usize,
    clip_count: usize,
    has_entered_viewport: bool,
    is_last_clip_reached: bool,
    is_playing: bool,
    reached_end_pulse: bool,
}

impl CarouselState {
    /// Initial state for `clip_count` clips (at least one)
    pub fn new(clip_count: usize) -> Self {
        Self {
            active_index: 0,
            clip_count: clip_count.max(1),
            has_entered_viewport: false,
            is_last_clip_reached: false,
            is_playing: false,
            reached_end_pulse: false,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn clip_count(&self) -> usize {
        self.clip_count
    }

    pub fn last_index(&self) -> usize {
        self.clip_count - 1
    }

    pub fn has_entered_viewport(&self) -> bool {
        self.has_entered_viewport
    }

    pub fn is_last_clip_reached(&self) -> bool {
        self.is_last_clip_reached
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Set by the most recent transition if it was a natural end
    pub fn reached_end_pulse(&self) -> bool {
        self.reached_end_pulse
    }

    /// Button mode; replay and play/pause are mutually exclusive
    pub fn control(&self) -> ControlButton {
        if self.is_last_clip_reached {
            ControlButton::Replay
        } else if self.is_playing {
            ControlButton::Pause
        } else {
            ControlButton::Play
        }
    }

    /// Apply a trigger. Rejected triggers leave the state untouched.
    pub fn apply(&mut self, trigger: Trigger) -> Result<Transition, TransitionError> {
        let from_index = self.active_index;
        let mut reactivate = false;

        match trigger {
            Trigger::ViewportEntered => {
                if self.has_entered_viewport {
                    return Err(TransitionError::AlreadyEntered);
                }
                self.has_entered_viewport = true;
                self.is_playing = true;
            }
            Trigger::ClipEnded { index } => {
                if index != self.active_index {
                    return Err(TransitionError::StaleClip {
                        index,
                        active: self.active_index,
                    });
                }
                if index < self.last_index() {
                    self.active_index = index + 1;
                    reactivate = true;
                } else {
                    self.is_last_clip_reached = true;
                }
            }
            Trigger::Reset => {
                if !self.is_last_clip_reached {
                    return Err(TransitionError::ResetUnavailable);
                }
                self.active_index = 0;
                self.is_last_clip_reached = false;
                self.is_playing = true;
                reactivate = true;
            }
            Trigger::TogglePlay => {
                if !self.has_entered_viewport {
                    return Err(TransitionError::NotEntered);
                }
                if self.is_last_clip_reached {
                    return Err(TransitionError::ReplayMode);
                }
                self.is_playing = !self.is_playing;
            }
            Trigger::JumpTo(index) => {
                if index >= self.clip_count {
                    return Err(TransitionError::IndexOutOfRange {
                        index,
                        len: self.clip_count,
                    });
                }
                if index == self.active_index {
                    return Err(TransitionError::AlreadyActive(index));
                }
                self.active_index = index;
                // Only a natural end sets the terminal flag
                self.is_last_clip_reached = false;
                self.has_entered_viewport = true;
                self.is_playing = true;
                reactivate = true;
            }
            Trigger::PlaybackStarted => {
                if !self.is_last_clip_reached {
                    self.is_playing = true;
                }
            }
            Trigger::PlaybackRejected => {
                self.is_playing = false;
            }
        }

        self.reached_end_pulse = matches!(trigger, Trigger::ClipEnded { .. });
        debug_assert!(!self.is_last_clip_reached || self.active_index == self.last_index());

        Ok(Transition {
            trigger,
            from_index,
            to_index: self.active_index,
            reactivate,
        })
    }
}
