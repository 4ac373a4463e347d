use super::*;

const EPS: f64 = 1e-12;

#[test]
fn ticks_advance_time_while_playing() {
    let mut c = Controller::new();
    for _ in 0..10 {
        c.apply(ControlEvent::Tick);
    }
    assert!((c.time() - 0.1).abs() < EPS);
    assert_eq!(c.view(), None);
}

#[test]
fn paused_ignores_ticks() {
    let mut c = Controller::new();
    c.apply(ControlEvent::TogglePlay);
    assert_eq!(c.playback(), Playback::Paused);
    c.tick();
    assert_eq!(c.time(), 0.0);
    c.apply(ControlEvent::SetPlaying(true));
    c.tick();
    assert!((c.time() - TIME_STEP).abs() < EPS);
}

#[test]
fn time_scale_is_clamped_and_zero_freezes() {
    let mut c = Controller::new();
    c.set_time_scale(10.0);
    assert_eq!(c.time_scale(), 3.0);
    c.tick();
    assert!((c.time() - 0.03).abs() < EPS);

    c.set_time_scale(-1.0);
    assert_eq!(c.time_scale(), 0.0);
    c.tick();
    assert!((c.time() - 0.03).abs() < EPS);
    assert_eq!(c.playback(), Playback::Playing);

    c.set_time_scale(f64::NAN);
    assert_eq!(c.time_scale(), 0.0);
}

#[test]
fn entering_3d_resets_view_and_auto_spins() {
    let mut c = Controller::new();
    assert_eq!(c.snapshot().view, ViewState::INITIAL);
    c.apply(ControlEvent::Set3d(true));
    assert_eq!(c.view(), Some(ViewState::RESET_3D));

    c.set_time_scale(2.0);
    c.tick();
    let view = c.view().unwrap();
    assert!((view.spin_y - 0.01).abs() < EPS);
    assert_eq!(view.tilt_x, 0.3);
}

#[test]
fn drag_rotates_view_and_suspends_auto_spin() {
    let mut c = Controller::new();
    c.set_3d(true);
    c.apply(ControlEvent::Grab(Point::new(10.0, 10.0)));
    c.apply(ControlEvent::Drag(Point::new(30.0, 5.0)));
    let view = c.view().unwrap();
    assert!((view.spin_y - 0.2).abs() < EPS);
    assert!((view.tilt_x - (0.3 - 0.05)).abs() < EPS);

    // deltas are measured from the last pointer position
    c.drag_to(Point::new(40.0, 5.0));
    assert!((c.view().unwrap().spin_y - 0.3).abs() < EPS);

    c.tick();
    assert!((c.view().unwrap().spin_y - 0.3).abs() < EPS);
    assert!((c.time() - TIME_STEP).abs() < EPS);

    c.apply(ControlEvent::Release);
    c.tick();
    assert!((c.view().unwrap().spin_y - (0.3 + AUTO_SPIN_STEP)).abs() < EPS);
}

#[test]
fn pointer_events_are_ignored_in_2d() {
    let mut c = Controller::new();
    c.grab(Point::new(0.0, 0.0));
    assert!(!c.is_dragging());
    c.drag_to(Point::new(100.0, 100.0));
    assert_eq!(c.snapshot().view, ViewState::INITIAL);
}

#[test]
fn leaving_3d_cancels_drag() {
    let mut c = Controller::new();
    c.set_3d(true);
    c.grab(Point::new(0.0, 0.0));
    c.set_3d(false);
    assert!(!c.is_dragging());
    assert_eq!(c.view(), None);

    // re-entering resets again
    c.set_3d(true);
    assert_eq!(c.view(), Some(ViewState::RESET_3D));
}

#[test]
fn teardown_returns_final_state() {
    let mut c = Controller::new();
    c.set_3d(true);
    c.tick();
    let snap = c.teardown();
    assert!(snap.three_d);
    assert!((snap.time - TIME_STEP).abs() < EPS);
    assert!(!snap.dragging);
}
