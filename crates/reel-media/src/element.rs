//! Video Element
//!
//! In-memory video element following HTML media element semantics.
//! Time only moves when the host calls [`VideoElement::advance`].

use crate::{MediaError, MediaEvent, MediaHandle};

/// Network state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NetworkState {
    #[default]
    Empty = 0,
    Idle = 1,
    Loading = 2,
    NoSource = 3,
}

/// Ready state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReadyState {
    #[default]
    HaveNothing = 0,
    HaveMetadata = 1,
    HaveCurrentData = 2,
    HaveFutureData = 3,
    HaveEnoughData = 4,
}

impl ReadyState {
    /// Enough data buffered to start playback without stalling
    pub fn has_current_data(self) -> bool {
        self >= Self::HaveCurrentData
    }
}

/// Preload hint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PreloadHint {
    None,
    #[default]
    Metadata,
    Auto,
}

/// Autoplay policy applied to programmatic `play()`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AutoplayPolicy {
    #[default]
    Allowed,
    /// Only muted playback may start without a user gesture
    MutedOnly,
    Blocked,
}

/// Video element
#[derive(Debug)]
pub struct VideoElement {
    // Source
    pub src: String,

    // State
    pub network_state: NetworkState,
    pub ready_state: ReadyState,

    // Playback
    pub current_time: f64,
    pub duration: f64,
    pub paused: bool,
    pub ended: bool,
    pub muted: bool,
    pub playback_rate: f64,

    pub plays_inline: bool,
    pub preload: PreloadHint,
    pub autoplay_policy: AutoplayPolicy,

    pending_events: Vec<MediaEvent>,
}

impl VideoElement {
    pub fn new(src: &str, duration: f64) -> Self {
        Self {
            src: src.to_string(),
            network_state: NetworkState::Empty,
            ready_state: ReadyState::HaveNothing,
            current_time: 0.0,
            duration,
            paused: true,
            ended: false,
            muted: false,
            playback_rate: 1.0,
            plays_inline: false,
            preload: PreloadHint::Metadata,
            autoplay_policy: AutoplayPolicy::Allowed,
            pending_events: Vec::new(),
        }
    }

    /// Set the autoplay policy
    pub fn with_autoplay_policy(mut self, policy: AutoplayPolicy) -> Self {
        self.autoplay_policy = policy;
        self
    }

    /// Load media. With `preload = none` nothing is fetched until playback.
    pub fn load(&mut self) {
        self.network_state = if self.src.is_empty() {
            NetworkState::NoSource
        } else if self.preload == PreloadHint::None {
            NetworkState::Idle
        } else {
            NetworkState::Loading
        };
        self.ready_state = ReadyState::HaveNothing;
        self.current_time = 0.0;
        self.paused = true;
        self.ended = false;
    }

    /// Report buffering progress, queueing the matching notifications
    pub fn set_ready_state(&mut self, state: ReadyState) {
        let previous = self.ready_state;
        self.ready_state = state;

        if previous < ReadyState::HaveMetadata && state >= ReadyState::HaveMetadata {
            self.pending_events.push(MediaEvent::LoadedMetadata);
        }
        if previous < ReadyState::HaveCurrentData && state >= ReadyState::HaveCurrentData {
            self.pending_events.push(MediaEvent::LoadedData);
        }
        if state == ReadyState::HaveEnoughData {
            self.network_state = NetworkState::Idle;
        }
    }

    /// Advance the playback clock by `dt` seconds
    pub fn advance(&mut self, dt: f64) {
        if self.paused || !self.ready_state.has_current_data() {
            return;
        }

        self.current_time += dt * self.playback_rate;
        if self.current_time >= self.duration {
            self.current_time = self.duration;
            self.paused = true;
            self.ended = true;
            self.pending_events.push(MediaEvent::Ended);
        }
    }

    /// Seek to time
    pub fn seek(&mut self, time: f64) {
        self.current_time = time.clamp(0.0, self.duration);
        self.ended = false;
    }

    /// Take queued notifications
    pub fn take_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending_events.is_empty()
    }
}

impl MediaHandle for VideoElement {
    fn play(&mut self) -> Result<(), MediaError> {
        match self.autoplay_policy {
            AutoplayPolicy::Blocked => {
                tracing::debug!(src = %self.src, "play refused, autoplay blocked");
                return Err(MediaError::NotAllowed("autoplay blocked".into()));
            }
            AutoplayPolicy::MutedOnly if !self.muted => {
                tracing::debug!(src = %self.src, "play refused, element not muted");
                return Err(MediaError::NotAllowed("unmuted autoplay".into()));
            }
            _ => {}
        }
        if self.network_state == NetworkState::NoSource {
            return Err(MediaError::Aborted("no source".into()));
        }

        // Playing an ended element restarts it
        if self.ended {
            self.current_time = 0.0;
            self.ended = false;
        }
        if self.paused {
            self.paused = false;
            self.pending_events.push(MediaEvent::Play);
        }
        Ok(())
    }

    fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.pending_events.push(MediaEvent::Pause);
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}
