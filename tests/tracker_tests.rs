// Host-side tests for press/drag/click disambiguation.

use spotlight_core::*;

fn tracker() -> PointerTracker {
    PointerTracker::new(DRAG_THRESHOLD_SQ)
}

#[test]
fn press_aims_and_waits_for_resolution() {
    let mut t = tracker();
    assert_eq!(t.phase(), TrackerPhase::Idle);

    let tr = t.press(PointerInput::new(1, 100.0, 100.0));
    assert_eq!(tr.target, Some(Position::new(100.0, 100.0)));
    assert!(tr.effects.is_empty());
    assert_eq!(t.phase(), TrackerPhase::PendingPress);
    assert_eq!(t.session().pointer, Some(PointerId(1)));
    assert_eq!(t.session().origin, Position::new(100.0, 100.0));
}

#[test]
fn small_moves_never_start_a_drag() {
    let mut t = tracker();
    t.press(PointerInput::new(1, 100.0, 100.0));

    // dx=4, dy=2 -> 20, which is not above the threshold
    let tr = t.motion(PointerInput::new(1, 104.0, 102.0));
    assert!(tr.effects.is_empty());
    assert_eq!(tr.target, None);
    assert!(!t.is_dragging());

    let tr = t.motion(PointerInput::new(1, 96.0, 98.0));
    assert!(tr.target.is_none());
    assert_eq!(t.phase(), TrackerPhase::PendingPress);
}

#[test]
fn crossing_threshold_starts_drag_exactly_once() {
    let mut t = tracker();
    t.press(PointerInput::new(7, 100.0, 100.0));

    // dx=4, dy=3 -> 25
    let tr = t.motion(PointerInput::new(7, 104.0, 103.0));
    assert_eq!(
        tr.effects.as_slice(),
        &[Effect::SetDragging(true), Effect::CapturePointer(PointerId(7))]
    );
    assert_eq!(tr.target, Some(Position::new(104.0, 103.0)));
    assert_eq!(t.phase(), TrackerPhase::Dragging);

    let tr = t.motion(PointerInput::new(7, 300.0, 200.0));
    assert!(tr.effects.is_empty());
    assert_eq!(tr.target, Some(Position::new(300.0, 200.0)));

    // Moving back inside the threshold keeps dragging
    let tr = t.motion(PointerInput::new(7, 100.0, 100.0));
    assert!(tr.effects.is_empty());
    assert!(t.is_dragging());
}

#[test]
fn moves_without_press_are_ignored() {
    let mut t = tracker();
    let tr = t.motion(PointerInput::new(1, 500.0, 500.0));
    assert!(tr.target.is_none());
    assert!(tr.effects.is_empty());
    assert_eq!(t.phase(), TrackerPhase::Idle);
}

#[test]
fn second_pointer_is_ignored_while_first_drags() {
    let mut t = tracker();
    t.press(PointerInput::new(1, 100.0, 100.0));
    t.motion(PointerInput::new(1, 140.0, 140.0));
    assert!(t.is_dragging());

    let tr = t.press(PointerInput::new(2, 400.0, 400.0));
    assert!(tr.target.is_none());
    assert!(tr.effects.is_empty());
    assert_eq!(t.session().pointer, Some(PointerId(1)));

    let tr = t.motion(PointerInput::new(2, 800.0, 800.0));
    assert!(tr.target.is_none());
    assert!(tr.effects.is_empty());

    let tr = t.release(PointerId(1), PointerEnd::Up);
    assert_eq!(tr.effects.as_slice(), &[Effect::SetDragging(false)]);
    assert_eq!(t.phase(), TrackerPhase::Idle);

    let tr = t.press(PointerInput::new(2, 400.0, 400.0));
    assert_eq!(tr.target, Some(Position::new(400.0, 400.0)));
}

#[test]
fn new_contact_supersedes_unresolved_press() {
    let mut t = tracker();
    t.press(PointerInput::new(1, 100.0, 100.0));

    // Pointer 1 never reports its release
    let tr = t.press(PointerInput::new(2, 500.0, 500.0));
    assert_eq!(tr.target, Some(Position::new(500.0, 500.0)));
    assert_eq!(t.session().pointer, Some(PointerId(2)));
    assert_eq!(t.phase(), TrackerPhase::PendingPress);

    let tr = t.motion(PointerInput::new(1, 900.0, 900.0));
    assert!(tr.effects.is_empty());
    let tr = t.motion(PointerInput::new(2, 560.0, 560.0));
    assert_eq!(
        tr.effects.as_slice(),
        &[Effect::SetDragging(true), Effect::CapturePointer(PointerId(2))]
    );
}

#[test]
fn end_from_any_pointer_resets_session() {
    for end in [PointerEnd::Up, PointerEnd::Cancel, PointerEnd::LostCapture] {
        let mut t = tracker();
        t.press(PointerInput::new(1, 100.0, 100.0));
        t.motion(PointerInput::new(1, 150.0, 150.0));

        let tr = t.release(PointerId(2), end);
        assert_eq!(tr.effects.as_slice(), &[Effect::SetDragging(false)]);
        assert_eq!(*t.session(), DragSession::default());

        let tr = t.press(PointerInput::new(2, 500.0, 500.0));
        assert_eq!(tr.target, Some(Position::new(500.0, 500.0)));
        assert_eq!(t.session().pointer, Some(PointerId(2)));
    }
}

#[test]
fn repeated_press_mid_drag_restarts_session() {
    let mut t = tracker();
    t.press(PointerInput::new(4, 100.0, 100.0));
    t.motion(PointerInput::new(4, 200.0, 200.0));
    assert!(t.is_dragging());

    let tr = t.press(PointerInput::new(4, 300.0, 300.0));
    assert_eq!(tr.effects.as_slice(), &[Effect::SetDragging(false)]);
    assert_eq!(tr.target, Some(Position::new(300.0, 300.0)));
    assert_eq!(t.phase(), TrackerPhase::PendingPress);
    assert_eq!(t.session().origin, Position::new(300.0, 300.0));
}

#[test]
fn every_end_kind_returns_to_idle() {
    for end in [PointerEnd::Up, PointerEnd::Cancel, PointerEnd::LostCapture] {
        let mut t = tracker();
        t.press(PointerInput::new(3, 10.0, 10.0));
        t.motion(PointerInput::new(3, 60.0, 60.0));
        assert!(t.is_dragging());

        let tr = t.release(PointerId(3), end);
        assert_eq!(tr.effects.as_slice(), &[Effect::SetDragging(false)]);
        assert_eq!(*t.session(), DragSession::default());
        assert_eq!(t.phase(), TrackerPhase::Idle);
    }
}

#[test]
fn release_when_idle_still_clears_indicator() {
    let mut t = tracker();
    let tr = t.release(PointerId(9), PointerEnd::LostCapture);
    assert_eq!(tr.effects.as_slice(), &[Effect::SetDragging(false)]);
    assert_eq!(t.phase(), TrackerPhase::Idle);
}

#[test]
fn presses_on_toggle_never_track() {
    let mut t = tracker();
    let tr = t.press(PointerInput::new(1, 20.0, 20.0).on_toggle());
    assert!(tr.target.is_none());
    assert_eq!(t.phase(), TrackerPhase::Idle);

    let tr = t.motion(PointerInput::new(1, 200.0, 200.0));
    assert!(tr.effects.is_empty());
    assert!(!t.is_dragging());
}
