//! Two-finger zoom and pointer-count changes.

use planpin_core::{PointerEvent, ScreenPoint};
use planpin_placement::{GestureState, PinchBaseline};

use crate::common::{approx, fitted_session, unit_session, EPS};

#[test]
fn test_pinch_scales_by_distance_ratio() {
    let mut session = unit_session();
    session.handle(&PointerEvent::down(1, 350.0, 300.0, 0));
    session.handle(&PointerEvent::down(2, 450.0, 300.0, 5));
    assert_eq!(session.state(), GestureState::Pinching);

    session.handle(&PointerEvent::moved(1, 325.0, 300.0, 20));
    assert!(approx(session.viewport().scale(), 1.25));
    session.handle(&PointerEvent::moved(2, 475.0, 300.0, 30));
    assert!(approx(session.viewport().scale(), 1.5));
}

#[test]
fn test_pinch_clamps_to_scale_bounds() {
    let mut session = unit_session();
    session.handle(&PointerEvent::down(1, 350.0, 300.0, 0));
    session.handle(&PointerEvent::down(2, 450.0, 300.0, 0));

    session.handle(&PointerEvent::moved(2, 1350.0, 300.0, 10));
    assert_eq!(session.viewport().scale(), 5.0);

    session.handle(&PointerEvent::moved(2, 360.0, 300.0, 20));
    assert_eq!(session.viewport().scale(), 0.5);
}

#[test]
fn test_zooming_out_from_fit_never_increases_scale() {
    let mut session = fitted_session();
    let fit = session.viewport().scale();

    session.zoom_out();
    assert!(session.viewport().scale() <= fit + EPS);

    session.handle(&PointerEvent::Wheel {
        x: 400.0,
        y: 300.0,
        delta: 1.0,
    });
    assert!(session.viewport().scale() <= fit + EPS);

    session.handle(&PointerEvent::down(1, 350.0, 300.0, 0));
    session.handle(&PointerEvent::down(2, 450.0, 300.0, 0));
    session.handle(&PointerEvent::moved(2, 440.0, 300.0, 10));
    assert!(session.viewport().scale() <= fit + EPS);
}

#[test]
fn test_non_finite_wheel_leaves_hold_mapping_intact() {
    let mut session = unit_session();
    session.handle(&PointerEvent::Wheel {
        x: f64::NAN,
        y: 300.0,
        delta: -1.0,
    });
    assert_eq!(session.viewport().pan(), ScreenPoint::ORIGIN);
    assert!(approx(session.viewport().scale(), 1.0));

    session.handle(&PointerEvent::down(1, 600.0, 450.0, 0));
    session.handle(&PointerEvent::tick(1000));
    let pin = session.pin().unwrap();
    assert!(approx(pin.norm_x, 0.75));
    assert!(approx(pin.norm_y, 0.75));
}

#[test]
fn test_pinch_keeps_midpoint_content_fixed() {
    let mut session = unit_session();
    session.handle(&PointerEvent::down(1, 200.0, 200.0, 0));
    session.handle(&PointerEvent::down(2, 300.0, 200.0, 0));

    // Midpoint of the pair once finger 2 has moved out to 350.
    let midpoint = ScreenPoint::new(275.0, 200.0);
    let before = session.viewport().screen_to_document(midpoint).unwrap();
    session.handle(&PointerEvent::moved(2, 350.0, 200.0, 20));

    let after = session.viewport().screen_to_document(midpoint).unwrap();
    assert!(approx(session.viewport().scale(), 1.5));
    assert!(approx(before.x, after.x));
    assert!(approx(before.y, after.y));
}

#[test]
fn test_pointer_count_change_rebaselines() {
    let mut session = unit_session();
    session.handle(&PointerEvent::down(1, 350.0, 300.0, 0));
    session.handle(&PointerEvent::down(2, 450.0, 300.0, 0));
    session.handle(&PointerEvent::moved(2, 500.0, 300.0, 10));
    assert!(approx(session.viewport().scale(), 1.5));

    session.handle(&PointerEvent::down(3, 500.0, 400.0, 20));
    let baseline = session.recognizer().pinch_baseline().unwrap();
    assert!(approx(baseline.initial_distance, 150.0));
    assert!(approx(baseline.initial_scale, 1.5));

    session.handle(&PointerEvent::up(1));
    assert!(approx(session.viewport().scale(), 1.5), "lifting a finger must not jump the scale");
    assert_eq!(
        session.recognizer().pinch_baseline(),
        Some(PinchBaseline {
            initial_distance: 100.0,
            initial_scale: session.viewport().scale(),
        })
    );
}

#[test]
fn test_pinch_winds_down_through_pan_to_idle() {
    let mut session = unit_session();
    session.handle(&PointerEvent::down(1, 350.0, 300.0, 0));
    session.handle(&PointerEvent::down(2, 450.0, 300.0, 0));

    session.handle(&PointerEvent::up(2));
    assert_eq!(session.state(), GestureState::Panning);
    session.handle(&PointerEvent::moved(1, 370.0, 310.0, 50));
    assert!(approx(session.viewport().pan_x(), 20.0));
    assert!(approx(session.viewport().pan_y(), 10.0));

    session.handle(&PointerEvent::up(1));
    assert_eq!(session.state(), GestureState::Idle);
    session.handle(&PointerEvent::tick(10_000));
    assert!(session.pin().is_none());
}

#[test]
fn test_wheel_zoom_anchored_at_cursor() {
    let mut session = unit_session();
    let cursor = ScreenPoint::new(120.0, 80.0);
    let before = session.viewport().screen_to_document(cursor).unwrap();

    session.handle(&PointerEvent::Wheel {
        x: cursor.x,
        y: cursor.y,
        delta: -3.0,
    });
    assert!(approx(session.viewport().scale(), 1.2_f64.powi(3)));

    let after = session.viewport().screen_to_document(cursor).unwrap();
    assert!(approx(before.x, after.x));
    assert!(approx(before.y, after.y));
}
