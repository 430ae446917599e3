//! End-to-end gesture sequences against a fitted floor plan.

use planpin_core::PointerEvent;
use planpin_placement::{GestureIntent, GestureState};

use crate::common::{approx, fitted_session, unit_session};

#[test]
fn test_fitted_hold_at_centre_places_centre_pin() {
    let mut session = fitted_session();
    assert!(approx(session.viewport().scale(), 0.5 * 0.95));

    session.handle(&PointerEvent::down(1, 400.0, 300.0, 0));
    session.handle(&PointerEvent::tick(1000));

    let pin = session.pin().expect("hold should place a pin");
    assert!(approx(pin.norm_x, 0.5));
    assert!(approx(pin.norm_y, 0.5));
    assert_eq!(session.state(), GestureState::Idle);
}

#[test]
fn test_tap_then_hold_places_one_pin_at_second_origin() {
    let mut session = unit_session();

    session.handle(&PointerEvent::down(1, 100.0, 100.0, 0));
    session.handle(&PointerEvent::moved(1, 104.0, 103.0, 150));
    session.handle(&PointerEvent::up(1));
    session.handle(&PointerEvent::tick(1200));
    assert!(session.pin().is_none(), "a short tap must not place a pin");

    session.handle(&PointerEvent::down(1, 600.0, 450.0, 1250));
    session.handle(&PointerEvent::moved(1, 603.0, 452.0, 1600));
    let intents = session.handle(&PointerEvent::tick(2250));

    let placed: Vec<_> = intents
        .iter()
        .filter(|i| matches!(i, GestureIntent::PinPlaced(_)))
        .collect();
    assert_eq!(placed.len(), 1);

    let pin = session.pin().unwrap();
    assert!(approx(pin.norm_x, 0.75));
    assert!(approx(pin.norm_y, 0.75));
}

#[test]
fn test_move_of_exactly_threshold_pans() {
    let mut session = unit_session();
    session.handle(&PointerEvent::down(1, 100.0, 100.0, 0));
    session.handle(&PointerEvent::moved(1, 109.9, 100.0, 10));
    assert_eq!(session.state(), GestureState::Pressing);

    session.handle(&PointerEvent::moved(1, 110.0, 100.0, 20));
    assert_eq!(session.state(), GestureState::Panning);
}

#[test]
fn test_drag_past_threshold_pans_and_never_places() {
    let mut session = unit_session();

    session.handle(&PointerEvent::down(1, 100.0, 100.0, 0));
    session.handle(&PointerEvent::moved(1, 100.0, 115.0, 200));
    assert_eq!(session.state(), GestureState::Panning);

    session.handle(&PointerEvent::moved(1, 100.0, 140.0, 900));
    session.handle(&PointerEvent::tick(3000));
    session.handle(&PointerEvent::up(1));

    assert!(session.pin().is_none());
    assert!(approx(session.viewport().pan_y(), 40.0));
    assert!(approx(session.viewport().pan_x(), 0.0));
}

#[test]
fn test_release_after_hold_leaves_pin() {
    let mut session = unit_session();
    session.handle(&PointerEvent::down(1, 200.0, 300.0, 0));
    session.handle(&PointerEvent::moved(1, 201.0, 300.0, 1000));
    assert!(session.pin().is_some());

    // The finger is still down but the gesture is over.
    session.handle(&PointerEvent::moved(1, 300.0, 300.0, 1100));
    session.handle(&PointerEvent::up(1));
    let pin = session.pin().unwrap();
    assert!(approx(pin.norm_x, 0.25));
    assert_eq!(session.viewport().pan_x(), 0.0);
}

#[test]
fn test_mouse_and_touch_are_indistinguishable() {
    let run = |id| {
        let mut session = unit_session();
        session.handle(&PointerEvent::down(id, 320.0, 240.0, 10));
        session.handle(&PointerEvent::tick(1010));
        session.pin()
    };
    assert_eq!(run(0), run(17));
}

#[test]
fn test_state_changes_are_reported() {
    let mut session = unit_session();
    let intents = session.handle(&PointerEvent::down(1, 10.0, 10.0, 0));
    assert!(intents.contains(&GestureIntent::StateChanged {
        from: GestureState::Idle,
        to: GestureState::Pressing
    }));

    let intents = session.handle(&PointerEvent::cancel(1));
    assert!(intents.contains(&GestureIntent::StateChanged {
        from: GestureState::Pressing,
        to: GestureState::Idle
    }));
}
