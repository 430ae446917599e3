use planpin_core::{NormPoint, ScreenPoint, Size};
use planpin_placement::Viewport;
use planpin_settings::ViewportSettings;

use crate::common::approx;

fn viewport(container: Size, document: Size) -> Viewport {
    let mut vp = Viewport::with_container(container, &ViewportSettings::default());
    vp.set_document_size(document);
    vp
}

#[test]
fn test_document_centre_tracks_container_centre() {
    let mut vp = viewport(Size::new(1024.0, 768.0), Size::new(3000.0, 1000.0));
    for scale in [0.5, 0.8, 1.0, 2.5, 5.0] {
        vp.set_scale(scale, None);
        let centre = vp.document_to_screen(NormPoint::new(0.5, 0.5)).unwrap();
        assert!(approx(centre.x, 512.0));
        assert!(approx(centre.y, 384.0));
    }
}

#[test]
fn test_fit_uses_limiting_axis() {
    let vp = viewport(Size::new(800.0, 600.0), Size::new(400.0, 600.0));
    assert!(approx(vp.scale(), 0.95));
    assert_eq!(vp.fit_scale(), Some(vp.scale()));
}

#[test]
fn test_reset_after_navigation() {
    let mut vp = viewport(Size::new(800.0, 600.0), Size::new(1600.0, 1200.0));
    vp.zoom_in();
    vp.pan_by(-250.0, 40.0);
    vp.reset();
    assert!(approx(vp.scale(), 0.475));
    assert_eq!(vp.pan(), ScreenPoint::ORIGIN);
}

#[test]
fn test_zoom_button_keeps_centre_fixed() {
    let mut vp = viewport(Size::new(800.0, 600.0), Size::new(1600.0, 1200.0));
    vp.pan_by(100.0, 0.0);
    let before = vp.screen_to_document(ScreenPoint::new(400.0, 300.0)).unwrap();
    vp.zoom_in();
    vp.zoom_in();
    let after = vp.screen_to_document(ScreenPoint::new(400.0, 300.0)).unwrap();
    assert!(approx(before.x, after.x));
    assert!(approx(before.y, after.y));
}

#[test]
fn test_zoom_out_floors_at_min_scale() {
    let mut vp = viewport(Size::new(800.0, 600.0), Size::new(800.0, 600.0));
    for _ in 0..20 {
        vp.zoom_out();
    }
    assert_eq!(vp.scale(), 0.5);
}

#[test]
fn test_zoom_out_below_min_from_fit_never_zooms_in() {
    let mut vp = viewport(Size::new(800.0, 600.0), Size::new(1600.0, 1200.0));
    let fit = vp.scale();
    assert!(approx(fit, 0.475));

    vp.zoom_out();
    assert!(vp.scale() <= fit);
    vp.zoom_wheel(1.0, ScreenPoint::new(200.0, 150.0));
    assert!(vp.scale() <= fit);

    vp.zoom_in();
    vp.zoom_out();
    assert!(approx(vp.scale(), 0.5));
}

#[test]
fn test_screen_to_document_is_unclamped() {
    let vp = viewport(Size::new(800.0, 600.0), Size::new(800.0, 600.0));
    let outside = vp.screen_to_document(ScreenPoint::new(-100.0, 700.0)).unwrap();
    assert!(!outside.is_within_unit_square());
}

#[test]
fn test_container_resize_recentres() {
    let mut vp = viewport(Size::new(800.0, 600.0), Size::new(800.0, 600.0));
    vp.set_container_size(Size::new(1000.0, 1000.0));
    let centre = vp.document_to_screen(NormPoint::new(0.5, 0.5)).unwrap();
    assert!(approx(centre.x, 500.0));
    assert!(approx(centre.y, 500.0));
}
