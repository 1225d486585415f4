//! Progress Animator
//!
//! Maps the active clip's playback clock to a 0-100 percent and drives its
//! indicator segment. One animator exists per activation of a clip.

use crate::{CarouselConfig, IndicatorHandle, Length};
use crate::indicator::apply_idle;

/// Whole percent of `duration` elapsed at `current_time`, rounded up
pub fn progress_percent(current_time: f64, duration: f64) -> u8 {
    if duration <= 0.0 {
        return 100;
    }
    (current_time * 100.0 / duration).clamp(0.0, 100.0).ceil() as u8
}

#[derive(Debug, Clone)]
pub struct ProgressAnimator {
    index: usize,
    duration: f64,
    last_percent: u8,
    expanded: bool,
    completed: bool,
}

impl ProgressAnimator {
    pub fn new(index: usize, duration: f64) -> Self {
        Self {
            index,
            duration,
            last_percent: 0,
            expanded: false,
            completed: false,
        }
    }

    /// Clip this animator belongs to
    pub fn index(&self) -> usize {
        self.index
    }

    /// Last percent written to the indicator
    pub fn percent(&self) -> u8 {
        self.last_percent
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Start over from 0%, whatever was shown before
    pub fn restart(&mut self, indicator: Option<&mut dyn IndicatorHandle>, config: &CarouselConfig) {
        self.last_percent = 0;
        self.expanded = false;
        self.completed = false;
        if let Some(handle) = indicator {
            apply_idle(handle, config);
        }
    }

    /// Apply one playback-clock sample. Returns the new percent when the
    /// indicator was updated.
    ///
    /// Completion styling only happens while `playing`.
    pub fn sample(
        &mut self,
        current_time: f64,
        playing: bool,
        viewport_width: f32,
        indicator: Option<&mut dyn IndicatorHandle>,
        config: &CarouselConfig,
    ) -> Option<u8> {
        let percent = progress_percent(current_time, self.duration);
        if percent == self.last_percent {
            return None;
        }
        let Some(handle) = indicator else {
            tracing::trace!(index = self.index, "indicator not mounted, sample skipped");
            return None;
        };

        self.last_percent = percent;
        if !self.expanded {
            handle.set_dot_width(config.expanded_dot_width(viewport_width));
            self.expanded = true;
        }
        handle.set_fill_width(Length::Percent(f32::from(percent)));
        handle.set_fill_color(config.active_color);

        if percent == 100 && playing && !self.completed {
            handle.set_dot_width(config.collapsed_dot_width);
            handle.set_fill_color(config.idle_color);
            self.completed = true;
            tracing::debug!(index = self.index, "progress complete");
        }

        tracing::trace!(index = self.index, percent, "progress");
        Some(percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, IndicatorVisual};

    fn config() -> CarouselConfig {
        CarouselConfig::default()
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0.0, 5.0), 0);
        assert_eq!(progress_percent(0.001, 5.0), 1);
        assert_eq!(progress_percent(2.0, 5.0), 40);
        assert_eq!(progress_percent(5.0, 5.0), 100);
        assert_eq!(progress_percent(9.0, 5.0), 100);
        assert_eq!(progress_percent(-1.0, 5.0), 0);
    }

    #[test]
    fn test_first_change_expands_dot() {
        let config = config();
        let mut visual = IndicatorVisual::default();
        let mut animator = ProgressAnimator::new(0, 10.0);

        assert_eq!(animator.sample(0.0, true, 1500.0, Some(&mut visual), &config), None);
        assert_eq!(visual.dot_width, Length::Px(12.0));

        assert_eq!(animator.sample(1.0, true, 1500.0, Some(&mut visual), &config), Some(10));
        assert_eq!(visual.dot_width, Length::Vw(4.0));
        assert_eq!(visual.fill_width, Length::Percent(10.0));
        assert_eq!(visual.fill_color, Color::WHITE);
    }

    #[test]
    fn test_unchanged_percent_not_rewritten() {
        let config = config();
        let mut visual = IndicatorVisual::default();
        let mut animator = ProgressAnimator::new(0, 100.0);
        animator.sample(10.0, true, 800.0, Some(&mut visual), &config);
        let writes = visual.writes;
        assert_eq!(animator.sample(9.95, true, 800.0, Some(&mut visual), &config), None);
        assert_eq!(visual.writes, writes);
    }

    #[test]
    fn test_completion_visual() {
        let config = config();
        let mut visual = IndicatorVisual::default();
        let mut animator = ProgressAnimator::new(1, 5.0);
        animator.sample(2.5, true, 700.0, Some(&mut visual), &config);
        assert_eq!(visual.dot_width, Length::Vw(10.0));

        assert_eq!(animator.sample(5.0, true, 700.0, Some(&mut visual), &config), Some(100));
        assert!(animator.is_completed());
        assert_eq!(visual.fill_width, Length::Percent(100.0));
        assert_eq!(visual.dot_width, Length::Px(12.0));
        assert_eq!(visual.fill_color, config.idle_color);
    }

    #[test]
    fn test_no_completion_when_paused() {
        let config = config();
        let mut visual = IndicatorVisual::default();
        let mut animator = ProgressAnimator::new(0, 5.0);
        animator.sample(5.0, false, 700.0, Some(&mut visual), &config);
        assert!(!animator.is_completed());
        assert_eq!(visual.fill_color, Color::WHITE);
    }

    #[test]
    fn test_missing_indicator_retries() {
        let config = config();
        let mut animator = ProgressAnimator::new(0, 10.0);
        assert_eq!(animator.sample(3.0, true, 800.0, None, &config), None);
        assert_eq!(animator.percent(), 0);

        let mut visual = IndicatorVisual::default();
        assert_eq!(animator.sample(3.0, true, 800.0, Some(&mut visual), &config), Some(30));
    }

    #[test]
    fn test_restart() {
        let config = config();
        let mut visual = IndicatorVisual::default();
        let mut animator = ProgressAnimator::new(0, 5.0);
        animator.sample(5.0, true, 800.0, Some(&mut visual), &config);
        assert_eq!(animator.percent(), 100);

        animator.restart(Some(&mut visual), &config);
        assert_eq!(animator.percent(), 0);
        assert!(!animator.is_completed());
        assert_eq!(visual.fill_width, Length::Percent(0.0));
    }
}
