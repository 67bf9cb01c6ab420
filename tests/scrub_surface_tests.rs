use approx::assert_relative_eq;
use timeline_dial::api::{TimelineEngine, TimelineEngineConfig};
use timeline_dial::core::UnitBounds;
use timeline_dial::interaction::{ScrollBehavior, ScrubMode, TimelineKey};
use timeline_dial::render::NullRenderer;

const CONTAINER_PX: f64 = 400.0;

/// Scroll offset centering the tick for `year` on the default ruler.
fn centered_scroll(year: i32) -> f64 {
    let index = f64::from(year + 200);
    index * 40.0 + 16.0 - CONTAINER_PX / 2.0
}

fn settled_engine() -> TimelineEngine<NullRenderer> {
    let mut engine = TimelineEngine::new(NullRenderer::default(), TimelineEngineConfig::default())
        .expect("engine init");
    engine
        .set_surface_metrics(CONTAINER_PX, None)
        .expect("valid metrics");
    engine.on_host_scroll(centered_scroll(120));
    engine
}

#[test]
fn tap_below_threshold_does_not_snap() {
    let mut engine = settled_engine();
    assert!(engine.pointer_down(1, 500.0));
    assert_eq!(engine.scrub_mode(), ScrubMode::Dragging);

    assert!(!engine.pointer_move(1, 505.0));
    assert!(!engine.pointer_up(1));
    assert_eq!(engine.scrub_mode(), ScrubMode::Idle);
    assert_eq!(engine.capture_owner(), None);
    assert_eq!(engine.focus_year(), 120);

    // A tap leaves no click suppression behind.
    assert!(engine.click_unit(330));
    assert_eq!(engine.focus_year(), 130);
}

#[test]
fn drag_commits_live_and_snaps_on_release() {
    let mut engine = settled_engine();
    engine.pointer_down(1, 500.0);

    assert!(engine.pointer_move(1, 420.0));
    assert_eq!(engine.focus_year(), 122);
    let live = engine.take_scroll_request().expect("provisional scroll");
    assert_eq!(live.behavior, ScrollBehavior::Instant);
    assert_relative_eq!(live.left_px, centered_scroll(120) + 80.0);

    assert!(engine.pointer_up(1));
    assert_eq!(engine.focus_year(), 122);
    let snap = engine.take_scroll_request().expect("snap scroll");
    assert_eq!(snap.behavior, ScrollBehavior::Smooth);
    assert_eq!(snap.unit_index, 322);
    assert_relative_eq!(snap.left_px, centered_scroll(122));
}

#[test]
fn trailing_click_after_drag_is_suppressed_once() {
    let mut engine = settled_engine();
    engine.pointer_down(3, 500.0);
    engine.pointer_move(3, 400.0);
    assert!(!engine.click_unit(10), "mid-drag click");
    engine.pointer_up(3);

    let focus = engine.focus_year();
    assert!(!engine.click_unit(10), "trailing click");
    assert_eq!(engine.focus_year(), focus);

    assert!(engine.click_unit(10));
    assert_eq!(engine.focus_year(), -190);
}

#[test]
fn cancel_and_leave_release_capture_and_snap() {
    let mut engine = settled_engine();
    engine.pointer_down(1, 500.0);
    engine.pointer_move(1, 300.0);
    assert!(engine.pointer_cancel(1));
    assert_eq!(engine.capture_owner(), None);
    assert_eq!(engine.focus_year(), 125);

    engine.pointer_down(2, 500.0);
    engine.pointer_move(2, 540.0);
    assert!(engine.pointer_leave(2));
    assert_eq!(engine.scrub_mode(), ScrubMode::Idle);
    assert_eq!(engine.focus_year(), 124);
}

#[test]
fn second_pointer_is_ignored_while_captured() {
    let mut engine = settled_engine();
    assert!(engine.pointer_down(1, 500.0));
    assert!(!engine.pointer_down(2, 100.0));
    assert!(!engine.pointer_move(2, 0.0));
    assert!(!engine.pointer_up(2));
    assert_eq!(engine.capture_owner(), Some(1));
    assert_eq!(engine.focus_year(), 120);
}

#[test]
fn provisional_scroll_is_clamped_to_range() {
    let mut engine = settled_engine();
    engine.pointer_down(1, 0.0);
    engine.pointer_move(1, 1.0e6);
    assert_relative_eq!(engine.scroll_left_px(), 0.0);
    assert_eq!(engine.focus_year(), -195);

    engine.pointer_move(1, -1.0e6);
    assert_relative_eq!(engine.scroll_left_px(), engine.max_scroll_px());
    assert_eq!(engine.focus_year(), 195);
    engine.pointer_up(1);
}

#[test]
fn arrow_keys_nudge_and_are_ignored_while_dragging() {
    let mut engine = settled_engine();
    assert!(engine.key_down(TimelineKey::ArrowRight));
    assert_eq!(engine.focus_year(), 121);
    let request = engine.take_scroll_request().expect("centering");
    assert_eq!(request.behavior, ScrollBehavior::Smooth);

    engine.pointer_down(1, 500.0);
    assert!(!engine.key_down(TimelineKey::ArrowLeft));
    assert_eq!(engine.focus_year(), 121);
    engine.pointer_up(1);

    assert!(engine.key_down(TimelineKey::ArrowLeft));
    assert_eq!(engine.focus_year(), 120);
    assert!(!engine.key_down(TimelineKey::Other));
}

#[test]
fn arrow_keys_stop_at_bounds() {
    let config = TimelineEngineConfig::new(0, 3).with_initial_focus_year(3);
    let mut engine = TimelineEngine::new(NullRenderer::default(), config).expect("engine init");
    assert_eq!(engine.focus_year(), 3);
    engine.key_down(TimelineKey::ArrowRight);
    assert_eq!(engine.focus_year(), 3);
}

#[test]
fn measured_units_drive_centering_and_snapping() {
    let config = TimelineEngineConfig::new(0, 4).with_initial_focus_year(0);
    let mut engine = TimelineEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_surface_metrics(100.0, Some(340.0))
        .expect("valid metrics");
    for index in 0..5 {
        let left = index as f64 * 70.0;
        engine
            .measure_unit(index, UnitBounds::new(left, 60.0))
            .expect("in range");
    }
    assert!(engine.measure_unit(5, UnitBounds::new(0.0, 60.0)).is_err());
    assert!(engine.measure_unit(0, UnitBounds::new(f64::NAN, 60.0)).is_err());

    engine.scroll_unit_into_view(2, ScrollBehavior::Instant);
    let request = engine.take_scroll_request().expect("centering");
    assert_relative_eq!(request.left_px, 120.0);
    assert_relative_eq!(engine.max_scroll_px(), 240.0);

    engine.scroll_unit_into_view(4, ScrollBehavior::Instant);
    let request = engine.take_scroll_request().expect("centering");
    assert_relative_eq!(request.left_px, 240.0);

    engine.on_host_scroll(0.0);
    engine.pointer_down(1, 200.0);
    engine.pointer_move(1, 100.0);
    assert_eq!(engine.focus_year(), 2);
    engine.pointer_up(1);
}

#[test]
fn newer_scroll_request_supersedes_pending_one() {
    let mut engine = settled_engine();
    engine.set_focus_year(10);
    engine.set_focus_year(20);
    let request = engine.take_scroll_request().expect("pending");
    assert_eq!(request.unit_index, 220);
    assert!(engine.take_scroll_request().is_none());
}

#[test]
fn invalid_surface_metrics_are_rejected() {
    let mut engine = settled_engine();
    assert!(engine.set_surface_metrics(-1.0, None).is_err());
    assert!(engine.set_surface_metrics(400.0, Some(f64::INFINITY)).is_err());
    engine.on_host_scroll(f64::NAN);
    assert_relative_eq!(engine.scroll_left_px(), centered_scroll(120));
}

#[test]
fn first_metrics_center_initial_focus_without_host_scroll() {
    let config = TimelineEngineConfig::new(-200, 200).with_initial_focus_year(120);
    let mut engine = TimelineEngine::new(NullRenderer::default(), config).expect("engine init");
    assert!(engine.take_scroll_request().is_none());

    engine
        .set_surface_metrics(1_280.0, None)
        .expect("valid metrics");
    let request = engine.take_scroll_request().expect("initial centering");
    assert_eq!(request.behavior, ScrollBehavior::Instant);
    assert_eq!(request.unit_index, 320);
    assert_relative_eq!(request.left_px, 12_176.0);
    assert_relative_eq!(engine.scroll_left_px(), 12_176.0);

    // Same metrics again: nothing to recenter.
    engine
        .set_surface_metrics(1_280.0, None)
        .expect("valid metrics");
    assert!(engine.take_scroll_request().is_none());

    engine.pointer_down(1, 640.0);
    assert!(!engine.pointer_move(1, 632.0));
    assert_eq!(engine.focus_year(), 120);
    assert!(engine.pointer_move(1, 600.0));
    assert_eq!(engine.focus_year(), 121);
    engine.pointer_up(1);
}

#[test]
fn layout_changes_recenter_focus() {
    let mut engine = settled_engine();
    engine.take_scroll_request();

    engine.set_era_step(50);
    let request = engine.take_scroll_request().expect("recenter after regeneration");
    assert_eq!(request.behavior, ScrollBehavior::Instant);
    assert_relative_eq!(request.left_px, centered_scroll(120));

    engine
        .set_geometry(timeline_dial::core::ScrubGeometry::rail())
        .expect("valid geometry");
    let request = engine.take_scroll_request().expect("recenter after geometry");
    assert_eq!(request.unit_index, 320);
    assert_relative_eq!(request.left_px, 320.0 * 108.0 + 46.0 - CONTAINER_PX / 2.0);
    assert_relative_eq!(engine.scroll_left_px(), request.left_px);
}

#[test]
fn metrics_change_mid_drag_does_not_fight_gesture() {
    let mut engine = settled_engine();
    engine.take_scroll_request();
    engine.pointer_down(1, 500.0);
    engine
        .set_surface_metrics(600.0, None)
        .expect("valid metrics");
    assert!(engine.take_scroll_request().is_none());
    engine.pointer_up(1);
}
