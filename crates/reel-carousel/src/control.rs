//! Control button
//!
//! The single play/pause/replay button next to the indicator row.

/// Button mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlButton {
    Play,
    Pause,
    Replay,
}

impl ControlButton {
    /// Icon edge length in logical pixels
    pub const ICON_SIZE: u32 = 20;

    /// Icon asset path
    pub fn icon(self) -> &'static str {
        match self {
            Self::Play => "/assets/images/play.svg",
            Self::Pause => "/assets/images/pause.svg",
            Self::Replay => "/assets/images/replay.svg",
        }
    }

    /// Alt text for the icon
    pub fn alt(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Replay => "replay",
        }
    }
}
