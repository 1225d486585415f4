//! Edge case tests for reel-carousel
//!
//! Late or out-of-order notifications, missing handles, refused playback and
//! inputs that arrive in states where they mean nothing.

use reel_carousel::{
    Carousel, CarouselConfig, CarouselError, CatalogError, ControlButton, DOMRect, HeadlessSurface,
    IndicatorInput, Length, MediaEvent, ReadyState, SlideCatalog, SlideDescriptor,
};
use reel_media::{AutoplayPolicy, VideoElement};

fn catalog(durations: &[f64]) -> SlideCatalog {
    let slides = durations
        .iter()
        .enumerate()
        .map(|(i, d)| SlideDescriptor::new(i as u32 + 1, format!("clip{i}.mp4"), *d))
        .collect();
    SlideCatalog::new(slides).unwrap()
}

fn build(durations: &[f64], setup: impl FnOnce(&mut HeadlessSurface)) -> Carousel<HeadlessSurface> {
    build_with(durations, CarouselConfig::default(), setup)
}

fn build_with(
    durations: &[f64],
    config: CarouselConfig,
    setup: impl FnOnce(&mut HeadlessSurface),
) -> Carousel<HeadlessSurface> {
    let catalog = catalog(durations);
    let mut surface = HeadlessSurface::new(&catalog, 1280.0);
    setup(&mut surface);
    Carousel::new(catalog, config, surface)
}

fn buffered(durations: &[f64]) -> Carousel<HeadlessSurface> {
    build(durations, |s| s.buffer_all(ReadyState::HaveEnoughData))
}

// ============================================================================
// CATALOG
// ============================================================================

#[test]
fn test_catalog_rejects_empty() {
    assert_eq!(SlideCatalog::new(Vec::new()).unwrap_err(), CatalogError::Empty);
}

#[test]
fn test_catalog_rejects_bad_duration() {
    for duration in [0.0, -3.0, f64::NAN, f64::INFINITY] {
        let err = SlideCatalog::new(vec![SlideDescriptor::new(7, "a.mp4", duration)]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidDuration { id: 7, .. }));
    }
}

#[test]
fn test_catalog_json_errors() {
    assert!(matches!(SlideCatalog::from_json("[]"), Err(CarouselError::Catalog(CatalogError::Empty))));
    assert!(matches!(SlideCatalog::from_json("{"), Err(CarouselError::Serialization(_))));
}

#[test]
fn test_single_clip_catalog() {
    let mut c = buffered(&[1.0]);
    c.enter_viewport();
    let mut now = 0.0;
    while !c.state().is_last_clip_reached() && now < 5.0 {
        now += 0.1;
        c.step(now, 0.1);
    }
    assert!(c.state().is_last_clip_reached());
    assert_eq!(c.control(), ControlButton::Replay);

    c.press_control();
    assert_eq!(c.state().active_index(), 0);
    assert!(c.state().is_playing());
    assert_eq!(c.surface().visual(0).unwrap().fill_width, Length::Percent(0.0));
}

// ============================================================================
// READINESS
// ============================================================================

#[test]
fn test_readiness_out_of_order() {
    let mut c = build(&[5.0, 5.0, 5.0], |_| {});
    c.enter_viewport();
    assert!(!c.surface().is_any_playing());

    c.surface_mut().buffer(2, ReadyState::HaveEnoughData);
    c.surface_mut().buffer(1, ReadyState::HaveMetadata);
    c.flush_events();
    assert!(!c.surface().is_any_playing());
    assert_eq!(c.readiness().iter().collect::<Vec<_>>(), vec![1, 2]);

    c.surface_mut().buffer(0, ReadyState::HaveCurrentData);
    c.flush_events();
    assert_eq!(c.surface().playing(), vec![0]);
}

#[test]
fn test_readiness_survives_reload() {
    let mut c = buffered(&[5.0, 5.0]);
    c.enter_viewport();
    c.flush_events();
    assert!(c.readiness().is_ready(0, ReadyState::HaveNothing));

    c.surface_mut().video_mut(0).unwrap().load();
    c.toggle_play();
    c.toggle_play();
    assert!(c.readiness().is_ready(0, ReadyState::HaveNothing));
    assert_eq!(c.surface().playing(), vec![0]);
}

#[test]
fn test_ready_before_entry_does_not_play() {
    let mut c = buffered(&[5.0]);
    c.flush_events();
    assert_eq!(c.readiness().ready_count(), 1);
    assert!(!c.surface().is_any_playing());
}

// ============================================================================
// LATE NOTIFICATIONS
// ============================================================================

#[test]
fn test_stale_end_ignored() {
    let mut c = buffered(&[5.0, 5.0, 5.0]);
    c.enter_viewport();
    c.jump_to(2);

    c.on_media_event(0, MediaEvent::Ended);
    assert_eq!(c.state().active_index(), 2);
    assert!(!c.state().is_last_clip_reached());
}

#[test]
fn test_late_play_after_pause_ignored() {
    let mut c = buffered(&[5.0, 5.0]);
    c.enter_viewport();
    c.toggle_play();
    assert!(!c.state().is_playing());

    // Play notification from the earlier request arrives after the pause
    c.flush_events();
    assert!(!c.state().is_playing());
    assert!(!c.surface().is_any_playing());
}

#[test]
fn test_play_from_inactive_clip_ignored() {
    let mut c = buffered(&[5.0, 5.0]);
    c.enter_viewport();
    c.toggle_play();

    c.surface_mut().video_mut(1).unwrap().paused = false;
    c.on_media_event(1, MediaEvent::Play);
    assert!(!c.state().is_playing());
}

// ============================================================================
// MISSING HANDLES
// ============================================================================

#[test]
fn test_missing_media_is_noop() {
    let mut c = build(&[1.0, 5.0], |s| {
        s.detach_video(1);
        s.buffer_all(ReadyState::HaveEnoughData);
    });
    c.enter_viewport();
    let mut now = 0.0;
    while c.state().active_index() == 0 && now < 3.0 {
        now += 0.1;
        c.step(now, 0.1);
    }
    assert_eq!(c.state().active_index(), 1);
    assert!(c.state().is_playing());
    assert!(!c.surface().is_any_playing());

    // Element mounts late and reports ready
    let mut video = VideoElement::new("clip1.mp4", 5.0);
    video.load();
    video.set_ready_state(ReadyState::HaveEnoughData);
    c.surface_mut().attach_video(1, video);
    c.flush_events();
    assert_eq!(c.surface().playing(), vec![1]);
}

#[test]
fn test_missing_indicator_is_noop() {
    let mut c = build(&[5.0, 5.0], |s| {
        s.detach_indicator(0);
        s.buffer_all(ReadyState::HaveEnoughData);
    });
    c.enter_viewport();
    c.step(0.1, 0.1);
    c.step(1.0, 0.9);
    assert_eq!(c.progress_percent(), 0);
    assert!(c.surface().visual(0).is_none());

    c.jump_to(1);
    c.step(1.1, 0.1);
    assert!(c.progress_percent() > 0);
}

// ============================================================================
// AUTOPLAY POLICY
// ============================================================================

#[test]
fn test_muted_only_policy_plays_when_muting() {
    let mut c = build(&[5.0], |s| {
        s.video_mut(0).unwrap().autoplay_policy = AutoplayPolicy::MutedOnly;
        s.buffer_all(ReadyState::HaveEnoughData);
    });
    c.enter_viewport();
    assert!(c.state().is_playing());
    assert!(c.surface().video(0).unwrap().muted);
}

#[test]
fn test_muted_only_policy_rejects_unmuted() {
    let config = CarouselConfig { mute_on_play: false, ..CarouselConfig::default() };
    let mut c = build_with(&[5.0], config, |s| {
        s.video_mut(0).unwrap().autoplay_policy = AutoplayPolicy::MutedOnly;
        s.buffer_all(ReadyState::HaveEnoughData);
    });
    c.enter_viewport();
    assert!(!c.state().is_playing());
    assert_eq!(c.control(), ControlButton::Play);
    assert!(!c.is_ticking());
}

// ============================================================================
// INPUTS WITH NO EFFECT
// ============================================================================

#[test]
fn test_toggle_before_entry_ignored() {
    let mut c = buffered(&[5.0]);
    c.toggle_play();
    assert!(!c.state().is_playing());
    assert!(!c.state().has_entered_viewport());
}

#[test]
fn test_jump_before_entry_starts_playback() {
    let mut c = buffered(&[5.0, 5.0]);
    c.jump_to(1);
    assert!(c.state().has_entered_viewport());
    assert_eq!(c.surface().playing(), vec![1]);

    // Scrolling into view later does nothing more
    c.observe_viewport(DOMRect::new(0.0, 0.0, 100.0, 100.0), DOMRect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(c.state().active_index(), 1);
}

#[test]
fn test_jump_to_active_or_out_of_range() {
    let mut c = buffered(&[5.0, 5.0]);
    c.enter_viewport();
    c.jump_to(0);
    c.jump_to(9);
    assert_eq!(c.state().active_index(), 0);
    assert_eq!(c.surface().playing(), vec![0]);
}

#[test]
fn test_indicator_ignores_other_keys() {
    let mut c = buffered(&[5.0, 5.0]);
    c.enter_viewport();
    c.on_indicator_input(1, IndicatorInput::Key("a"));
    assert_eq!(c.state().active_index(), 0);
    c.on_indicator_input(1, IndicatorInput::Key(" "));
    assert_eq!(c.state().active_index(), 1);
}

#[test]
fn test_toggle_in_replay_mode_ignored() {
    let mut c = buffered(&[0.5]);
    c.enter_viewport();
    c.step(0.1, 0.1);
    c.step(1.0, 0.9);
    assert!(c.state().is_last_clip_reached());

    c.toggle_play();
    assert!(c.state().is_last_clip_reached());
    assert_eq!(c.control(), ControlButton::Replay);
}

#[test]
fn test_viewport_already_scrolled_past() {
    let mut c = buffered(&[5.0]);
    c.observe_viewport(DOMRect::new(0.0, -400.0, 1280.0, 600.0), DOMRect::new(0.0, 0.0, 1280.0, 800.0));
    assert!(c.state().has_entered_viewport());
}

// ============================================================================
// LAYOUT
// ============================================================================

#[test]
fn test_narrow_viewport_dot_width() {
    let mut c = build(&[10.0], |s| {
        s.set_viewport_width(600.0);
        s.buffer_all(ReadyState::HaveEnoughData);
    });
    c.enter_viewport();
    c.step(0.5, 0.5);
    assert_eq!(c.surface().visual(0).unwrap().dot_width, Length::Vw(10.0));
}

#[test]
fn test_custom_slide_config() {
    let config = CarouselConfig::from_json(r#"{"slide_duration": 0.5, "slide_timing": "linear"}"#).unwrap();
    let mut c = build_with(&[5.0, 5.0], config, |s| s.buffer_all(ReadyState::HaveEnoughData));
    c.enter_viewport();
    c.jump_to(1);
    c.tick(0.0);
    c.tick(0.25);
    assert_eq!(c.surface().track_offset(), -50.0);
    c.tick(0.5);
    assert_eq!(c.surface().track_offset(), -100.0);
}
