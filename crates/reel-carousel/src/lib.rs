//! Reel Carousel
//!
//! Synchronized multi-video carousel controller.
//!
//! Drives sequential autoplay of a catalog of clips, keeps a segmented
//! progress indicator in step with playback time, and lets the user jump to
//! any clip. The rendering layer is reached only through the
//! [`CarouselSurface`] capability, so hosts (and tests) can substitute their
//! own media and indicator handles.
//!
//! # Example
//! ```rust,ignore
//! use reel_carousel::{Carousel, CarouselConfig, HeadlessSurface, SlideCatalog};
//!
//! let catalog = SlideCatalog::from_json(json)?;
//! let surface = HeadlessSurface::new(&catalog, 1280.0);
//! let mut carousel = Carousel::new(catalog, CarouselConfig::default(), surface);
//! carousel.enter_viewport();
//! carousel.step(now, dt);
//! ```

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod control;
pub mod error;
pub mod headless;
pub mod indicator;
pub mod playback;
pub mod progress;
pub mod readiness;
pub mod slider;
pub mod state;
pub mod style;
pub mod surface;

pub use carousel::Carousel;
pub use catalog::{SlideCatalog, SlideDescriptor};
pub use config::CarouselConfig;
pub use control::ControlButton;
pub use error::{CarouselError, CatalogError, Result, TransitionError};
pub use headless::{HeadlessSurface, IndicatorVisual};
pub use indicator::{IndicatorInput, IndicatorRow};
pub use playback::{PlaybackCommand, PlaybackInputs};
pub use progress::ProgressAnimator;
pub use readiness::ReadinessTracker;
pub use slider::TrackSlider;
pub use state::{CarouselState, Transition, Trigger};
pub use style::{Color, Length};
pub use surface::{CarouselSurface, IndicatorHandle};

// Re-export the primitives hosts need to implement a surface
pub use reel_anim::DOMRect;
pub use reel_media::{MediaError, MediaEvent, MediaHandle, ReadyState};
