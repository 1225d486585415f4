//! Indicator Row
//!
//! One clickable segment per clip. Activating a segment requests a manual
//! jump; everything but the active segment is kept idle.

use crate::{CarouselConfig, CarouselSurface, IndicatorHandle, Length};

/// User input on a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorInput<'a> {
    Click,
    /// Key pressed while the segment has focus
    Key(&'a str),
}

impl IndicatorInput<'_> {
    /// Enter and Space activate like a click
    pub fn activates(&self) -> bool {
        match self {
            Self::Click => true,
            Self::Key(key) => matches!(*key, "Enter" | " " | "Space" | "Spacebar"),
        }
    }
}

/// Indicator row for `len` clips
#[derive(Debug, Clone, Copy)]
pub struct IndicatorRow {
    len: usize,
}

impl IndicatorRow {
    pub fn new(len: usize) -> Self {
        Self { len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Accessible label for segment `index`
    pub fn label(index: usize) -> String {
        format!("Go to video {}", index + 1)
    }

    /// Jump target requested by `input` on segment `index`, if any
    pub fn activation(&self, index: usize, input: IndicatorInput<'_>) -> Option<usize> {
        (index < self.len && input.activates()).then_some(index)
    }

    /// Put one segment into its idle style
    pub fn reset_segment<S: CarouselSurface + ?Sized>(surface: &mut S, index: usize, config: &CarouselConfig) {
        match surface.indicator(index) {
            Some(handle) => apply_idle(handle, config),
            None => tracing::trace!(index, "indicator not mounted"),
        }
    }

    /// Put every segment into its idle style
    pub fn reset_all<S: CarouselSurface + ?Sized>(&self, surface: &mut S, config: &CarouselConfig) {
        for index in 0..self.len {
            Self::reset_segment(surface, index, config);
        }
    }
}

/// Idle: empty fill in the idle shade, collapsed dot
pub fn apply_idle(handle: &mut dyn IndicatorHandle, config: &CarouselConfig) {
    handle.set_dot_width(config.collapsed_dot_width);
    handle.set_fill_width(Length::Percent(0.0));
    handle.set_fill_color(config.idle_color);
}
