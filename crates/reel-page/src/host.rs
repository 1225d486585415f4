//! Headless page host
//!
//! Hosts one carousel on a simulated page: scrolls it into view, buffers the
//! clips in an arbitrary order, replays the reel a number of times and applies
//! scheduled indicator clicks. Frames are either run back to back or paced in
//! real time on a smol timer.

use std::time::Duration;

use reel_carousel::{
    Carousel, CarouselConfig, ControlButton, DOMRect, HeadlessSurface, IndicatorInput, IndicatorRow,
    ReadyState, SlideCatalog,
};
use reel_media::AutoplayPolicy;
use smol::stream::StreamExt;

/// Page layout (logical px)
const VIEWPORT_HEIGHT: f32 = 900.0;
const CAROUSEL_TOP: f32 = 1400.0;
const CAROUSEL_HEIGHT: f32 = 640.0;
const SCROLL_SPEED: f32 = 450.0;

/// Delay between two clips reporting buffered data
const BUFFER_INTERVAL: f64 = 0.35;

/// Extra simulated time allowed beyond the reel's own length
const GRACE_SECONDS: f64 = 30.0;

#[derive(Debug, Clone)]
pub struct PageOptions {
    pub realtime: bool,
    pub fps: u32,
    /// Replays after the first pass
    pub loops: u32,
    pub viewport_width: f32,
    pub block_autoplay: bool,
    /// Indicator clicks as (time in seconds, clip index)
    pub jumps: Vec<(f64, usize)>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            realtime: false,
            fps: 60,
            loops: 1,
            viewport_width: 1280.0,
            block_autoplay: false,
            jumps: Vec::new(),
        }
    }
}

/// Totals reported when the page closes
#[derive(Debug, Clone, Default)]
pub struct PageSummary {
    pub frames: u64,
    pub elapsed: f64,
    pub clips_started: usize,
    pub replays: u32,
    pub finished: bool,
    /// The page refused programmatic playback and the reel was left paused
    pub refused: bool,
}

pub struct HeadlessPage {
    carousel: Carousel<HeadlessSurface>,
    options: PageOptions,
    dt: f64,
    now: f64,
    max_time: f64,
    scroll_y: f32,
    buffer_order: Vec<usize>,
    pending_jumps: Vec<(f64, usize)>,
    active: Option<usize>,
    summary: PageSummary,
}

impl HeadlessPage {
    pub fn new(catalog: SlideCatalog, config: CarouselConfig, options: PageOptions) -> Self {
        let mut surface = HeadlessSurface::new(&catalog, options.viewport_width);
        if options.block_autoplay {
            surface = surface.with_autoplay_policy(AutoplayPolicy::Blocked);
        }

        // Later clips finish buffering first
        let buffer_order = (0..catalog.len()).collect();
        let max_time = catalog.total_duration() * f64::from(options.loops + 1) + GRACE_SECONDS;
        let dt = 1.0 / f64::from(options.fps.max(1));

        let mut pending_jumps = options.jumps.clone();
        pending_jumps.sort_by(|a, b| b.0.total_cmp(&a.0));

        tracing::info!(
            clips = catalog.len(),
            total = catalog.total_duration(),
            fps = options.fps,
            "page loaded"
        );

        Self {
            carousel: Carousel::new(catalog, config, surface),
            options,
            dt,
            now: 0.0,
            max_time,
            scroll_y: 0.0,
            buffer_order,
            pending_jumps,
            active: None,
            summary: PageSummary::default(),
        }
    }

    /// Run every frame back to back
    pub fn run(mut self) -> PageSummary {
        while self.frame() {}
        self.finish()
    }

    /// Run frames paced by the wall clock
    pub fn run_realtime(mut self) -> PageSummary {
        let period = Duration::from_secs_f64(self.dt);
        smol::block_on(async {
            let mut timer = smol::Timer::interval(period);
            while timer.next().await.is_some() {
                if !self.frame() {
                    break;
                }
            }
        });
        self.finish()
    }

    /// Advance the page by one frame. Returns `false` once the page is done.
    pub fn frame(&mut self) -> bool {
        self.now += self.dt;
        self.summary.frames += 1;

        self.scroll();
        self.buffer();
        self.apply_jumps();
        self.carousel.step(self.now, self.dt);
        self.track_active();

        if self.carousel.state().is_last_clip_reached() {
            if self.summary.replays >= self.options.loops {
                self.summary.finished = true;
                return false;
            }
            self.summary.replays += 1;
            tracing::info!(replay = self.summary.replays, "replay pressed");
            self.carousel.press_control();
        }

        if self.blocked() {
            // Nothing will start without a user gesture; the reel stays paused
            tracing::warn!(index = self.carousel.state().active_index(), "playback refused, reel left paused");
            self.summary.refused = true;
            return false;
        }
        if self.now >= self.max_time {
            tracing::warn!(elapsed = self.now, "time limit reached");
            return false;
        }
        true
    }

    fn scroll(&mut self) {
        if self.carousel.state().has_entered_viewport() {
            return;
        }
        self.scroll_y += SCROLL_SPEED * self.dt as f32;

        let viewport = DOMRect::new(0.0, 0.0, self.options.viewport_width, VIEWPORT_HEIGHT);
        let target = DOMRect::new(
            0.0,
            CAROUSEL_TOP - self.scroll_y,
            self.options.viewport_width,
            CAROUSEL_HEIGHT,
        );
        self.carousel.observe_viewport(target, viewport);
    }

    fn buffer(&mut self) {
        let due = (self.now / BUFFER_INTERVAL) as usize;
        let total = self.carousel.catalog().len();
        let done = total - self.buffer_order.len();
        if due <= done {
            return;
        }
        if let Some(index) = self.buffer_order.pop() {
            tracing::debug!(index, at = self.now, "clip buffered");
            self.carousel.surface_mut().buffer(index, ReadyState::HaveEnoughData);
        }
    }

    fn apply_jumps(&mut self) {
        while self.pending_jumps.last().is_some_and(|(at, _)| *at <= self.now) {
            let Some((_, index)) = self.pending_jumps.pop() else {
                break;
            };
            tracing::info!(index, label = %IndicatorRow::label(index), "indicator clicked");
            self.carousel.on_indicator_input(index, IndicatorInput::Click);
        }
    }

    /// Count a clip each time its element starts playing
    fn track_active(&mut self) {
        let current = self.carousel.surface().playing().first().copied();
        if let Some(index) = current.filter(|_| current != self.active) {
            self.summary.clips_started += 1;
            let slide = self.carousel.catalog().get(index);
            tracing::info!(
                index,
                video = slide.map_or("", |s| s.video_source.as_str()),
                caption = ?slide.map(|s| &s.caption_lines),
                "clip playing"
            );
        }
        self.active = current;
    }

    fn blocked(&self) -> bool {
        let state = self.carousel.state();
        self.options.block_autoplay
            && state.has_entered_viewport()
            && !state.is_playing()
            && self.carousel.control() == ControlButton::Play
    }

    fn finish(mut self) -> PageSummary {
        self.summary.elapsed = self.now;
        tracing::info!(
            frames = self.summary.frames,
            elapsed = %format!("{:.2}s", self.summary.elapsed),
            clips = self.summary.clips_started,
            replays = self.summary.replays,
            finished = self.summary.finished,
            refused = self.summary.refused,
            ready = self.carousel.readiness().ready_count(),
            "page closed"
        );
        self.summary
    }
}
