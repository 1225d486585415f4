//! Rendering surface
//!
//! Capabilities the carousel needs from whatever renders it. Handles are
//! looked up by clip index at the moment they are used; a missing handle
//! (not mounted yet) makes the operation a no-op for that cycle.

use reel_media::MediaHandle;

use crate::{Color, ControlButton, Length};

/// One indicator segment: an idle-colored track with an overlaid fill, and
/// the dot that widens into a bar while its clip plays.
pub trait IndicatorHandle {
    fn set_fill_width(&mut self, width: Length);
    fn set_fill_color(&mut self, color: Color);
    fn set_dot_width(&mut self, width: Length);
}

/// Everything the carousel renders through
pub trait CarouselSurface {
    /// Media element for clip `index`
    fn media(&mut self, index: usize) -> Option<&mut dyn MediaHandle>;

    /// Indicator segment for clip `index`
    fn indicator(&mut self, index: usize) -> Option<&mut dyn IndicatorHandle>;

    /// Horizontal offset of the clip strip in percent of one clip
    fn set_track_offset(&mut self, x_percent: f32);

    /// Show the control button in `mode`
    fn set_control(&mut self, mode: ControlButton);

    /// Viewport width in logical pixels
    fn viewport_width(&self) -> f32;
}
