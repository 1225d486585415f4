//! Reel Animation
//!
//! Small animation toolkit the carousel drives its visuals with.
//!
//! # Features
//! - Timing functions (CSS curves plus power2 in-out)
//! - Numeric tweens with retargeting
//! - Shared per-frame ticker
//! - One-shot viewport entry trigger

pub mod ticker;
pub mod timing;
pub mod tween;
pub mod viewport;

pub use ticker::{Frame, Ticker, TickerId};
pub use timing::TimingFunction;
pub use tween::{Tween, TweenState};
pub use viewport::{DOMRect, ViewportTrigger};
