//! Headless surface
//!
//! In-memory rendering surface backed by [`VideoElement`]s. Used by the page
//! host and by tests to drive a carousel without a real renderer.

use reel_media::{AutoplayPolicy, MediaEvent, MediaHandle, PreloadHint, ReadyState, VideoElement};

use crate::{
    Carousel, CarouselConfig, CarouselSurface, Color, ControlButton, IndicatorHandle, Length, SlideCatalog,
};

/// Upper bound on event drain rounds per step
const MAX_EVENT_ROUNDS: usize = 8;

/// Last style written to one indicator segment
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorVisual {
    pub fill_width: Length,
    pub fill_color: Color,
    pub dot_width: Length,
    /// Number of style writes received
    pub writes: usize,
}

impl IndicatorVisual {
    /// Idle segment as styled by `config`
    pub fn idle(config: &CarouselConfig) -> Self {
        Self {
            fill_width: Length::Percent(0.0),
            fill_color: config.idle_color,
            dot_width: config.collapsed_dot_width,
            writes: 0,
        }
    }
}

impl Default for IndicatorVisual {
    fn default() -> Self {
        Self::idle(&CarouselConfig::default())
    }
}

impl IndicatorHandle for IndicatorVisual {
    fn set_fill_width(&mut self, width: Length) {
        self.fill_width = width;
        self.writes += 1;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
        self.writes += 1;
    }

    fn set_dot_width(&mut self, width: Length) {
        self.dot_width = width;
        self.writes += 1;
    }
}

/// Headless surface with one video and one indicator per clip
#[derive(Debug)]
pub struct HeadlessSurface {
    videos: Vec<Option<VideoElement>>,
    indicators: Vec<Option<IndicatorVisual>>,
    track_offset: f32,
    control: Option<ControlButton>,
    viewport_width: f32,
}

impl HeadlessSurface {
    /// Mount an element and a segment for every clip in `catalog`
    pub fn new(catalog: &SlideCatalog, viewport_width: f32) -> Self {
        let videos = catalog
            .iter()
            .map(|slide| {
                let mut video = VideoElement::new(&slide.video_source, slide.duration_seconds);
                video.plays_inline = true;
                video.preload = PreloadHint::Auto;
                video.load();
                Some(video)
            })
            .collect();

        Self {
            videos,
            indicators: vec![Some(IndicatorVisual::default()); catalog.len()],
            track_offset: 0.0,
            control: None,
            viewport_width,
        }
    }

    /// Apply `policy` to every mounted video
    pub fn with_autoplay_policy(mut self, policy: AutoplayPolicy) -> Self {
        for video in self.videos.iter_mut().flatten() {
            video.autoplay_policy = policy;
        }
        self
    }

    pub fn video(&self, index: usize) -> Option<&VideoElement> {
        self.videos.get(index)?.as_ref()
    }

    pub fn video_mut(&mut self, index: usize) -> Option<&mut VideoElement> {
        self.videos.get_mut(index)?.as_mut()
    }

    pub fn visual(&self, index: usize) -> Option<&IndicatorVisual> {
        self.indicators.get(index)?.as_ref()
    }

    /// Unmount clip `index`'s video element
    pub fn detach_video(&mut self, index: usize) -> Option<VideoElement> {
        self.videos.get_mut(index)?.take()
    }

    /// Mount `video` as clip `index`'s element
    pub fn attach_video(&mut self, index: usize, video: VideoElement) {
        if let Some(slot) = self.videos.get_mut(index) {
            *slot = Some(video);
        }
    }

    /// Unmount clip `index`'s indicator segment
    pub fn detach_indicator(&mut self, index: usize) -> Option<IndicatorVisual> {
        self.indicators.get_mut(index)?.take()
    }

    pub fn attach_indicator(&mut self, index: usize, visual: IndicatorVisual) {
        if let Some(slot) = self.indicators.get_mut(index) {
            *slot = Some(visual);
        }
    }

    /// Report buffering progress for clip `index`
    pub fn buffer(&mut self, index: usize, state: ReadyState) {
        if let Some(video) = self.video_mut(index) {
            video.set_ready_state(state);
        }
    }

    pub fn buffer_all(&mut self, state: ReadyState) {
        for video in self.videos.iter_mut().flatten() {
            video.set_ready_state(state);
        }
    }

    /// Advance every playing clip by `dt` seconds and collect notifications
    pub fn advance(&mut self, dt: f64) -> Vec<(usize, MediaEvent)> {
        for video in self.videos.iter_mut().flatten() {
            video.advance(dt);
        }
        self.drain_events()
    }

    /// Take queued notifications from every clip, in clip order
    pub fn drain_events(&mut self) -> Vec<(usize, MediaEvent)> {
        let mut events = Vec::new();
        for (index, video) in self.videos.iter_mut().enumerate() {
            if let Some(video) = video {
                events.extend(video.take_events().into_iter().map(|event| (index, event)));
            }
        }
        events
    }

    /// Indices of clips whose element is currently playing
    pub fn playing(&self) -> Vec<usize> {
        self.videos
            .iter()
            .enumerate()
            .filter_map(|(index, video)| video.as_ref().filter(|v| !v.paused).map(|_| index))
            .collect()
    }

    pub fn is_any_playing(&self) -> bool {
        self.videos.iter().flatten().any(|v| !v.paused)
    }

    pub fn track_offset(&self) -> f32 {
        self.track_offset
    }

    /// Mode the control button was last rendered in
    pub fn control_button(&self) -> Option<ControlButton> {
        self.control
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }
}

impl CarouselSurface for HeadlessSurface {
    fn media(&mut self, index: usize) -> Option<&mut dyn MediaHandle> {
        self.video_mut(index).map(|video| video as &mut dyn MediaHandle)
    }

    fn indicator(&mut self, index: usize) -> Option<&mut dyn IndicatorHandle> {
        self.indicators
            .get_mut(index)?
            .as_mut()
            .map(|visual| visual as &mut dyn IndicatorHandle)
    }

    fn set_track_offset(&mut self, x_percent: f32) {
        self.track_offset = x_percent;
    }

    fn set_control(&mut self, mode: ControlButton) {
        self.control = Some(mode);
    }

    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }
}

impl Carousel<HeadlessSurface> {
    /// Deliver pending media notifications without advancing time
    pub fn flush_events(&mut self) {
        for _ in 0..MAX_EVENT_ROUNDS {
            let events = self.surface_mut().drain_events();
            if events.is_empty() {
                return;
            }
            for (index, event) in events {
                self.on_media_event(index, event);
            }
        }
    }

    /// One host frame: advance media by `dt`, deliver notifications, then tick at `now`
    pub fn step(&mut self, now: f64, dt: f64) {
        self.flush_events();
        let events = self.surface_mut().advance(dt);
        for (index, event) in events {
            self.on_media_event(index, event);
        }
        self.flush_events();
        self.tick(now);
    }
}
