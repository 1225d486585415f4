//! Viewport Trigger
//!
//! One-shot notification when an element scrolls into view.

/// Layout rect in logical pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DOMRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl DOMRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn top(&self) -> f32 {
        self.y
    }
}

/// Fires once when the target's top edge reaches a line drawn at
/// `start_fraction` of the viewport height ("top 80%").
#[derive(Debug, Clone)]
pub struct ViewportTrigger {
    start_fraction: f32,
    fired: bool,
}

impl ViewportTrigger {
    pub fn new(start_fraction: f32) -> Self {
        Self {
            start_fraction: start_fraction.clamp(0.0, 1.0),
            fired: false,
        }
    }

    /// Check the target against the viewport. Returns `true` exactly once.
    pub fn check(&mut self, target: DOMRect, viewport: DOMRect) -> bool {
        if self.fired {
            return false;
        }

        let line = viewport.top() + viewport.height * self.start_fraction;
        if target.top() <= line {
            self.fired = true;
            tracing::debug!(top = target.top(), line, "viewport trigger fired");
            return true;
        }
        false
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn start_fraction(&self) -> f32 {
        self.start_fraction
    }
}

impl Default for ViewportTrigger {
    fn default() -> Self {
        Self::new(0.8)
    }
}
