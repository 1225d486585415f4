//! Timing functions
//!
//! Easing curves mapping linear progress to eased progress.

use serde::Deserialize;

/// Easing/timing function for animations
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimingFunction {
    /// Linear interpolation
    #[default]
    Linear,
    /// Ease-in-out (CSS)
    EaseInOut,
    /// Quadratic ease-in-out
    Power2InOut,
    /// Cubic bezier curve
    CubicBezier(f32, f32, f32, f32),
}

impl TimingFunction {
    /// Evaluate the timing function at progress t (0.0 to 1.0)
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::Power2InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::CubicBezier(x1, y1, x2, y2) => cubic_bezier(*x1, *y1, *x2, *y2, t),
        }
    }
}

/// Cubic bezier evaluation
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    // Newton-Raphson method to find t for x, then evaluate y
    let mut guess = t;
    for _ in 0..8 {
        let x = bezier_sample(x1, x2, guess);
        let dx = bezier_derivative(x1, x2, guess);
        if dx.abs() < 1e-6 {
            break;
        }
        guess -= (x - t) / dx;
        guess = guess.clamp(0.0, 1.0);
    }
    bezier_sample(y1, y2, guess)
}

fn bezier_sample(p1: f32, p2: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    3.0 * mt2 * t * p1 + 3.0 * mt * t2 * p2 + t3
}

fn bezier_derivative(p1: f32, p2: f32, t: f32) -> f32 {
    let t2 = t * t;
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t2 * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for timing in [
            TimingFunction::Linear,
            TimingFunction::EaseInOut,
            TimingFunction::Power2InOut,
            TimingFunction::CubicBezier(0.25, 0.1, 0.25, 1.0),
        ] {
            assert!(timing.evaluate(0.0).abs() < 1e-3, "{timing:?}");
            assert!((timing.evaluate(1.0) - 1.0).abs() < 1e-3, "{timing:?}");
        }
    }

    #[test]
    fn test_power2_in_out_symmetry() {
        let timing = TimingFunction::Power2InOut;
        assert!((timing.evaluate(0.5) - 0.5).abs() < 1e-6);
        assert!((timing.evaluate(0.25) - 0.125).abs() < 1e-6);
        assert!((timing.evaluate(0.75) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn test_ease_in_out_slow_edges() {
        let timing = TimingFunction::EaseInOut;
        assert!(timing.evaluate(0.1) < 0.1);
        assert!(timing.evaluate(0.9) > 0.9);
    }

    #[test]
    fn test_clamps_input() {
        assert_eq!(TimingFunction::Linear.evaluate(-1.0), 0.0);
        assert_eq!(TimingFunction::Linear.evaluate(2.0), 1.0);
    }

    #[test]
    fn test_deserialize() {
        let timing: TimingFunction = serde_json::from_str("\"power2-in-out\"").unwrap();
        assert_eq!(timing, TimingFunction::Power2InOut);
    }
}
