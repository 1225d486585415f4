//! Tweens
//!
//! Interpolate one numeric property over a duration with an easing curve.

use crate::TimingFunction;

/// Tween playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TweenState {
    #[default]
    Idle,
    Running,
    Finished,
}

/// Numeric tween
///
/// The clock starts on the first [`Tween::update`] after creation or retargeting.
#[derive(Debug, Clone)]
pub struct Tween {
    from: f32,
    to: f32,
    /// Duration in seconds
    duration: f64,
    timing: TimingFunction,
    start_time: Option<f64>,
    state: TweenState,
    value: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f64, timing: TimingFunction) -> Self {
        Self {
            from,
            to,
            duration,
            timing,
            start_time: None,
            state: TweenState::Running,
            value: from,
        }
    }

    /// A tween resting at `value`
    pub fn at_rest(value: f32, duration: f64, timing: TimingFunction) -> Self {
        Self {
            from: value,
            to: value,
            duration,
            timing,
            start_time: None,
            state: TweenState::Idle,
            value,
        }
    }

    /// Restart towards a new target from wherever the value currently is
    pub fn retarget(&mut self, to: f32) {
        self.from = self.value;
        self.to = to;
        self.start_time = None;
        self.state = TweenState::Running;
    }

    /// Advance to `now` (seconds). Returns the new value while running.
    pub fn update(&mut self, now: f64) -> Option<f32> {
        if self.state != TweenState::Running {
            return None;
        }

        let start = *self.start_time.get_or_insert(now);
        let progress = if self.duration > 0.0 {
            ((now - start) / self.duration).clamp(0.0, 1.0) as f32
        } else {
            1.0
        };

        if progress >= 1.0 {
            self.value = self.to;
            self.state = TweenState::Finished;
        } else {
            let eased = self.timing.evaluate(progress);
            self.value = self.from + (self.to - self.from) * eased;
        }
        Some(self.value)
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn state(&self) -> TweenState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TweenState::Running
    }
}
