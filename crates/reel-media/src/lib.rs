//! Reel Media
//!
//! Media playback primitives for the reel carousel.
//!
//! Features:
//! - `MediaHandle` capability the carousel drives clips through
//! - Ready/network state and media notifications
//! - In-memory `VideoElement` with HTML media semantics

pub mod element;
pub mod handle;

pub use element::{AutoplayPolicy, NetworkState, PreloadHint, ReadyState, VideoElement};
pub use handle::{MediaEvent, MediaHandle};

/// Media error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    /// Programmatic playback refused (autoplay policy)
    #[error("Not allowed: {0}")]
    NotAllowed(String),

    #[error("Aborted: {0}")]
    Aborted(String),
}
