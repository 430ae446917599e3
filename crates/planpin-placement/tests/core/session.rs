use planpin_core::{PlacementError, PointerEvent, Size};
use planpin_placement::{GestureState, PinPlacement, PlacementSession};
use planpin_settings::Config;

use crate::common::{approx, fitted_session};

#[test]
fn test_hold_then_confirm() {
    let mut session = fitted_session();
    session.handle_all(&[
        PointerEvent::down(1, 400.0, 300.0, 0),
        PointerEvent::moved(1, 402.0, 301.0, 400),
        PointerEvent::tick(1000),
        PointerEvent::up(1),
    ]);

    let placement = session.confirm(1234).unwrap();
    assert_eq!(placement.floor_plan_id, 1234);
    assert!(approx(placement.norm_x, 0.5));
    assert!(approx(placement.norm_y, 0.5));
}

#[test]
fn test_confirm_error_message() {
    let session = fitted_session();
    let err = session.confirm(1).unwrap_err();
    assert_eq!(err, PlacementError::MissingPinOnConfirm);
    assert!(!err.is_absorbed());
    assert!(err.to_string().starts_with("No pin placed"));
}

#[test]
fn test_clear_then_confirm_fails() {
    let mut session = fitted_session();
    session.restore_pin(0.3, 0.3).unwrap();
    assert!(session.clear_pin().is_some());
    assert!(session.confirm(1).is_err());
}

#[test]
fn test_new_document_abandons_gesture() {
    let mut session = fitted_session();
    session.handle(&PointerEvent::down(1, 100.0, 100.0, 0));
    assert_eq!(session.state(), GestureState::Pressing);

    session.set_document_size(Size::new(400.0, 300.0));
    assert_eq!(session.state(), GestureState::Idle);
    session.handle(&PointerEvent::tick(2000));
    assert!(session.pin().is_none());
}

#[test]
fn test_unusable_document_size_keeps_gesture() {
    let mut session = fitted_session();
    session.handle(&PointerEvent::down(1, 400.0, 300.0, 0));

    session.set_document_size(Size::new(0.0, 0.0));
    session.set_document_size(Size::new(f64::NAN, 300.0));
    assert_eq!(session.state(), GestureState::Pressing);
    assert_eq!(session.viewport().document_size(), Some(Size::new(1600.0, 1200.0)));

    session.handle(&PointerEvent::tick(1000));
    let pin = session.pin().unwrap();
    assert!(approx(pin.norm_x, 0.5));
    assert!(approx(pin.norm_y, 0.5));
}

#[test]
fn test_sessions_are_independent() {
    let mut first = fitted_session();
    let second = fitted_session();
    first.restore_pin(0.1, 0.9).unwrap();
    first.zoom_in();

    assert!(second.pin().is_none());
    assert!(approx(second.viewport().scale(), 0.475));
}

#[test]
fn test_custom_hold_duration() {
    let mut config = Config::default();
    config.gesture.hold_duration_ms = 300;
    let mut session = PlacementSession::with_container(Size::new(800.0, 600.0), &config);
    session.set_document_size(Size::new(800.0, 600.0));

    session.handle(&PointerEvent::down(1, 400.0, 300.0, 0));
    session.handle(&PointerEvent::tick(300));
    assert!(session.pin().is_some());
}

#[test]
fn test_placement_json_roundtrip() {
    let placement = PinPlacement {
        norm_x: 0.125,
        norm_y: 0.875,
        floor_plan_id: 99,
    };
    let json = serde_json::to_string(&placement).unwrap();
    assert!(json.contains("\"floorPlanId\":99"));
    let back: PinPlacement = serde_json::from_str(&json).unwrap();
    assert_eq!(back, placement);
}
