//! Carousel controller
//!
//! Owns the state machine and routes every input (viewport, media
//! notifications, frames, user controls) through it, then brings the
//! surface in line: track offset, indicator visuals, control button and the
//! active clip's play/pause request.

use reel_anim::{DOMRect, Frame, Ticker, TickerId, ViewportTrigger};
use reel_media::{MediaEvent, ReadyState};

use crate::indicator::IndicatorRow;
use crate::playback::{PlaybackCommand, PlaybackInputs};
use crate::{
    CarouselConfig, CarouselState, CarouselSurface, ControlButton, IndicatorInput, ProgressAnimator,
    ReadinessTracker, SlideCatalog, TrackSlider, Transition, Trigger,
};

/// Upper bound on play/pause re-planning after a single input
const MAX_PLAN_PASSES: usize = 4;

/// Synchronized multi-video carousel
pub struct Carousel<S: CarouselSurface> {
    catalog: SlideCatalog,
    config: CarouselConfig,
    state: CarouselState,
    readiness: ReadinessTracker,
    animator: ProgressAnimator,
    slider: TrackSlider,
    indicators: IndicatorRow,
    ticker: Ticker<usize>,
    subscription: Option<(TickerId, usize)>,
    trigger: ViewportTrigger,
    last_inputs: Option<PlaybackInputs>,
    control: ControlButton,
    surface: S,
}

impl<S: CarouselSurface> Carousel<S> {
    /// Create a carousel showing clip 0, idle until it enters the viewport
    pub fn new(catalog: SlideCatalog, config: CarouselConfig, surface: S) -> Self {
        let state = CarouselState::new(catalog.len());
        let animator = ProgressAnimator::new(0, catalog.duration(0).unwrap_or_default());
        let slider = TrackSlider::new(config.slide_duration, config.slide_timing);
        let indicators = IndicatorRow::new(catalog.len());
        let trigger = ViewportTrigger::new(config.viewport_start);
        let control = state.control();

        let mut carousel = Self {
            catalog,
            config,
            state,
            readiness: ReadinessTracker::new(),
            animator,
            slider,
            indicators,
            ticker: Ticker::new(),
            subscription: None,
            trigger,
            last_inputs: None,
            control,
            surface,
        };

        carousel.surface.set_track_offset(TrackSlider::offset_for(0));
        carousel.surface.set_control(control);
        carousel.indicators.reset_all(&mut carousel.surface, &carousel.config);
        carousel
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn catalog(&self) -> &SlideCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn readiness(&self) -> &ReadinessTracker {
        &self.readiness
    }

    pub fn indicators(&self) -> &IndicatorRow {
        &self.indicators
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Current control button mode
    pub fn control(&self) -> ControlButton {
        self.control
    }

    /// Percent last shown for the active clip
    pub fn progress_percent(&self) -> u8 {
        self.animator.percent()
    }

    /// Current strip offset (percent of one clip)
    pub fn track_offset(&self) -> f32 {
        self.slider.offset()
    }

    /// Whether the frame ticker is currently sampling the active clip
    pub fn is_ticking(&self) -> bool {
        self.subscription.is_some()
    }

    // ---- inputs ----

    /// Feed the carousel's layout; starts playback the first time it is in view
    pub fn observe_viewport(&mut self, target: DOMRect, viewport: DOMRect) {
        if self.trigger.check(target, viewport) {
            self.enter_viewport();
        }
    }

    /// The carousel became visible
    pub fn enter_viewport(&mut self) {
        self.dispatch(Trigger::ViewportEntered);
    }

    /// Notification from clip `index`'s media element
    pub fn on_media_event(&mut self, index: usize, event: MediaEvent) {
        match event {
            MediaEvent::LoadedMetadata | MediaEvent::LoadedData => {
                if self.readiness.mark_ready(index) {
                    self.orchestrate();
                }
            }
            MediaEvent::Play => {
                // Delivered late: the element may have been paused since
                let still_playing = self.surface.media(index).is_some_and(|media| !media.is_paused());
                if index == self.state.active_index() && still_playing {
                    self.dispatch(Trigger::PlaybackStarted);
                }
            }
            MediaEvent::Pause => {
                tracing::trace!(index, "media paused");
            }
            MediaEvent::Ended => {
                if index != self.state.active_index() {
                    tracing::debug!(index, active = self.state.active_index(), "stale end ignored");
                    return;
                }
                // The finishing clip shows its final sample before moving on
                self.sample_active();
                self.dispatch(Trigger::ClipEnded { index });
            }
        }
    }

    /// Press the control button in whatever mode it is showing
    pub fn press_control(&mut self) {
        match self.control {
            ControlButton::Replay => self.replay(),
            ControlButton::Play | ControlButton::Pause => self.toggle_play(),
        }
    }

    pub fn toggle_play(&mut self) {
        self.dispatch(Trigger::TogglePlay);
    }

    /// Start over from clip 0 after the last clip ended
    pub fn replay(&mut self) {
        self.dispatch(Trigger::Reset);
    }

    /// Manual jump to clip `index`
    pub fn jump_to(&mut self, index: usize) {
        let from = self.state.active_index();
        let transition = match self.state.apply(Trigger::JumpTo(index)) {
            Ok(transition) => transition,
            Err(err) => {
                tracing::debug!(%err, "jump ignored");
                return;
            }
        };

        if let Some(media) = self.surface.media(from) {
            media.pause();
        }
        self.indicators.reset_all(&mut self.surface, &self.config);
        self.after_transition(transition);
    }

    /// Click or key press on indicator segment `index`
    pub fn on_indicator_input(&mut self, index: usize, input: IndicatorInput<'_>) {
        if let Some(target) = self.indicators.activation(index, input) {
            self.jump_to(target);
        }
    }

    /// One frame of the host's render loop at `now` seconds
    pub fn tick(&mut self, now: f64) {
        if let Some(offset) = self.slider.update(now) {
            self.surface.set_track_offset(offset);
        }

        for frame in self.ticker.tick() {
            self.apply_frame(&frame);
        }
    }

    // ---- internals ----

    fn dispatch(&mut self, trigger: Trigger) {
        match self.state.apply(trigger) {
            Ok(transition) => self.after_transition(transition),
            Err(err) => tracing::debug!(?trigger, %err, "transition rejected"),
        }
    }

    fn after_transition(&mut self, transition: Transition) {
        tracing::debug!(
            trigger = ?transition.trigger,
            from = transition.from_index,
            to = transition.to_index,
            playing = self.state.is_playing(),
            last = self.state.is_last_clip_reached(),
            "transition"
        );

        if transition.reactivate {
            self.activate(transition);
        }
        self.refresh_control();
        self.sync_ticker();
        self.orchestrate();
    }

    /// Set up the newly active clip's animator and slide the track to it
    fn activate(&mut self, transition: Transition) {
        let index = transition.to_index;
        if transition.index_changed() {
            IndicatorRow::reset_segment(&mut self.surface, transition.from_index, &self.config);
            self.slider.slide_to(index);
        }

        let duration = self.catalog.duration(index).unwrap_or_default();
        self.animator = ProgressAnimator::new(index, duration);
        if index == 0 {
            // Clip 0 may still show a completed bar from an earlier pass. Only
            // the bar restarts: the element is not seeked, so a clip 0 left
            // mid-play resumes from its own current time on the next sample.
            self.animator.restart(self.surface.indicator(0), &self.config);
        }
    }

    fn refresh_control(&mut self) {
        let control = self.state.control();
        if control != self.control {
            self.control = control;
            self.surface.set_control(control);
        }
    }

    /// Subscribe the active clip to frames only while it should be sampled
    fn sync_ticker(&mut self) {
        let wanted = (self.state.has_entered_viewport()
            && self.state.is_playing()
            && !self.state.is_last_clip_reached())
        .then_some(self.state.active_index());

        let current = self.subscription.map(|(_, index)| index);
        if current == wanted {
            return;
        }

        if let Some((id, index)) = self.subscription.take() {
            self.ticker.unsubscribe(id);
            tracing::debug!(index, "ticker stopped");
        }
        if let Some(index) = wanted {
            let id = self.ticker.subscribe(index);
            self.subscription = Some((id, index));
            tracing::debug!(index, "ticker started");
        }
    }

    /// Apply one frame, discarding it if its clip is no longer the one being sampled
    fn apply_frame(&mut self, frame: &Frame<usize>) {
        let current = self.subscription.is_some_and(|(id, index)| id == frame.id && index == frame.token);
        if !current || frame.token != self.state.active_index() || !self.state.is_playing() {
            tracing::trace!(clip = frame.token, "stale frame discarded");
            return;
        }
        self.sample_active();
    }

    fn sample_active(&mut self) {
        let index = self.state.active_index();
        if self.animator.index() != index {
            return;
        }
        let Some(current_time) = self.surface.media(index).map(|media| media.current_time()) else {
            tracing::trace!(index, "media not mounted, sample skipped");
            return;
        };

        let playing = self.state.is_playing();
        let viewport_width = self.surface.viewport_width();
        self.animator.sample(
            current_time,
            playing,
            viewport_width,
            self.surface.indicator(index),
            &self.config,
        );
    }

    fn playback_inputs(&mut self) -> PlaybackInputs {
        let index = self.state.active_index();
        let native = self
            .surface
            .media(index)
            .map_or(ReadyState::HaveNothing, |media| media.ready_state());

        PlaybackInputs {
            has_entered_viewport: self.state.has_entered_viewport(),
            active_index: index,
            is_playing: self.state.is_playing(),
            is_last_clip_reached: self.state.is_last_clip_reached(),
            active_ready: self.readiness.observe(index, native),
        }
    }

    /// Re-plan the active clip's play/pause request if any input changed
    fn orchestrate(&mut self) {
        for _ in 0..MAX_PLAN_PASSES {
            let inputs = self.playback_inputs();
            if self.last_inputs == Some(inputs) {
                return;
            }
            self.last_inputs = Some(inputs);

            match inputs.plan() {
                PlaybackCommand::Idle | PlaybackCommand::Hold => return,
                PlaybackCommand::Pause { index } => {
                    if let Some(media) = self.surface.media(index) {
                        media.pause();
                    }
                    return;
                }
                PlaybackCommand::Play { index } => {
                    let Some(media) = self.surface.media(index) else {
                        tracing::warn!(index, "media not mounted, play deferred");
                        return;
                    };
                    if self.config.mute_on_play {
                        media.set_muted(true);
                    }
                    match media.play() {
                        Ok(()) => return,
                        Err(err) => {
                            tracing::warn!(index, %err, "play rejected, pausing");
                            if let Ok(transition) = self.state.apply(Trigger::PlaybackRejected) {
                                tracing::debug!(trigger = ?transition.trigger, "transition");
                            }
                            self.refresh_control();
                            self.sync_ticker();
                        }
                    }
                }
            }
        }
    }
}

impl<S: CarouselSurface + std::fmt::Debug> std::fmt::Debug for Carousel<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("state", &self.state)
            .field("readiness", &self.readiness)
            .field("animator", &self.animator)
            .field("control", &self.control)
            .field("surface", &self.surface)
            .finish_non_exhaustive()
    }
}
