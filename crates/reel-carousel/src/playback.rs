//! Playback orchestration
//!
//! Pure decision of what the active clip's media element should be told,
//! re-evaluated whenever any of its inputs change.

/// Everything the play/pause decision depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaybackInputs {
    pub has_entered_viewport: bool,
    pub active_index: usize,
    pub is_playing: bool,
    pub is_last_clip_reached: bool,
    pub active_ready: bool,
}

/// Request for the active clip's media element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    /// Carousel not on screen yet
    Idle,
    /// Replay offered; leave the ended clip alone
    Hold,
    /// Play muted
    Play { index: usize },
    Pause { index: usize },
}

impl PlaybackInputs {
    pub fn plan(&self) -> PlaybackCommand {
        if !self.has_entered_viewport {
            return PlaybackCommand::Idle;
        }
        if self.is_last_clip_reached {
            return PlaybackCommand::Hold;
        }

        let index = self.active_index;
        if self.is_playing && self.active_ready {
            PlaybackCommand::Play { index }
        } else {
            // Pausing is always safe, including while still buffering
            PlaybackCommand::Pause { index }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> PlaybackInputs {
        PlaybackInputs {
            has_entered_viewport: true,
            active_index: 1,
            is_playing: true,
            is_last_clip_reached: false,
            active_ready: true,
        }
    }

    #[test]
    fn test_idle_before_entry() {
        let i = PlaybackInputs { has_entered_viewport: false, ..inputs() };
        assert_eq!(i.plan(), PlaybackCommand::Idle);
    }

    #[test]
    fn test_play_when_ready() {
        assert_eq!(inputs().plan(), PlaybackCommand::Play { index: 1 });
    }

    #[test]
    fn test_pause_when_not_ready_or_paused() {
        let not_ready = PlaybackInputs { active_ready: false, ..inputs() };
        assert_eq!(not_ready.plan(), PlaybackCommand::Pause { index: 1 });

        let paused = PlaybackInputs { is_playing: false, ..inputs() };
        assert_eq!(paused.plan(), PlaybackCommand::Pause { index: 1 });
    }

    #[test]
    fn test_hold_in_replay_mode() {
        let i = PlaybackInputs { is_last_clip_reached: true, ..inputs() };
        assert_eq!(i.plan(), PlaybackCommand::Hold);
    }
}
