//! Carousel Configuration

use std::path::Path;

use reel_anim::TimingFunction;
use serde::Deserialize;

use crate::{Color, Length, Result};

/// Carousel configuration options
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Viewports narrower than this use `narrow_dot_width` (px)
    pub narrow_breakpoint: f32,

    /// Viewports narrower than this use `medium_dot_width` (px)
    pub medium_breakpoint: f32,

    pub narrow_dot_width: Length,
    pub medium_dot_width: Length,
    pub wide_dot_width: Length,

    /// Dot width when the segment is idle or its clip has completed
    pub collapsed_dot_width: Length,

    pub idle_color: Color,
    pub active_color: Color,

    /// Track slide duration (seconds)
    pub slide_duration: f64,
    pub slide_timing: TimingFunction,

    /// Fraction of viewport height the carousel top must reach to start playback
    pub viewport_start: f32,

    /// Mute before every play request (autoplay policies)
    pub mute_on_play: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint: 760.0,
            medium_breakpoint: 1200.0,
            narrow_dot_width: Length::Vw(10.0),
            medium_dot_width: Length::Vw(10.0),
            wide_dot_width: Length::Vw(4.0),
            collapsed_dot_width: Length::Px(12.0),
            idle_color: Color::rgb(0xaf, 0xaf, 0xaf),
            active_color: Color::WHITE,
            slide_duration: 2.0,
            slide_timing: TimingFunction::Power2InOut,
            viewport_start: 0.8,
            mute_on_play: true,
        }
    }
}

impl CarouselConfig {
    /// Parse a (possibly partial) JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a configuration file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Width of the dot while its clip is in progress
    pub fn expanded_dot_width(&self, viewport_width: f32) -> Length {
        if viewport_width < self.narrow_breakpoint {
            self.narrow_dot_width
        } else if viewport_width < self.medium_breakpoint {
            self.medium_dot_width
        } else {
            self.wide_dot_width
        }
    }
}
