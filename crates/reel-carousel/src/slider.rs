//! Track Slider
//!
//! Slides the strip of clips so the active one is centered.

use reel_anim::{TimingFunction, Tween};

/// Horizontal offset of the clip strip, in percent of one clip width
#[derive(Debug, Clone)]
pub struct TrackSlider {
    tween: Tween,
    index: usize,
}

impl TrackSlider {
    pub fn new(duration: f64, timing: TimingFunction) -> Self {
        Self {
            tween: Tween::at_rest(0.0, duration, timing),
            index: 0,
        }
    }

    /// Offset that centers clip `index`
    pub fn offset_for(index: usize) -> f32 {
        -100.0 * index as f32
    }

    /// Start sliding towards clip `index` from the current offset
    pub fn slide_to(&mut self, index: usize) {
        self.index = index;
        self.tween.retarget(Self::offset_for(index));
        tracing::debug!(index, target = self.tween.target(), "track slide");
    }

    /// Advance the slide; returns the offset to apply while moving
    pub fn update(&mut self, now: f64) -> Option<f32> {
        self.tween.update(now)
    }

    pub fn offset(&self) -> f32 {
        self.tween.value()
    }

    pub fn target_index(&self) -> usize {
        self.index
    }

    pub fn is_sliding(&self) -> bool {
        self.tween.is_running()
    }
}
