// Host-side tests for the 2D projection: sizing rule, resize guards, and the
// field-positions-survive-resize property.

use glam::Vec3;
use globe_core::{FieldParams, ParticleField, Viewport, SCREEN_RADIUS_FRACTION};

#[test]
fn new_rejects_degenerate_rects() {
    assert!(Viewport::new(0.0, 600.0).is_none());
    assert!(Viewport::new(800.0, 0.0).is_none());
    assert!(Viewport::new(-100.0, 600.0).is_none());
    assert!(Viewport::new(f32::NAN, 600.0).is_none());
    assert!(Viewport::new(800.0, 600.0).is_some());
}

#[test]
fn resize_ignores_zero_sized_notifications() {
    let mut vp = Viewport::new(800.0, 600.0).expect("viewport");
    let before = vp;
    assert!(!vp.resize(0.0, 0.0));
    assert_eq!(vp, before);
    assert!(vp.resize(1024.0, 768.0));
    assert!(!vp.resize(1024.0, 768.0), "no-change resize reports false");
}

#[test]
fn screen_radius_follows_min_dimension() {
    let vp = Viewport::new(800.0, 600.0).expect("viewport");
    assert!((vp.screen_radius() - 600.0 * SCREEN_RADIUS_FRACTION).abs() < 1e-4);
    let vp = Viewport::new(300.0, 900.0).expect("viewport");
    assert!((vp.screen_radius() - 300.0 * SCREEN_RADIUS_FRACTION).abs() < 1e-4);
}

#[test]
fn project_maps_center_and_scales_radius() {
    let vp = Viewport::new(800.0, 600.0).expect("viewport");
    let r = 100.0;
    let (cx, cy) = vp.project(Vec3::ZERO, r);
    assert!((cx - 400.0).abs() < 1e-4);
    assert!((cy - 300.0).abs() < 1e-4);

    // a point at +radius on x lands exactly one screen radius right of center
    let (px, py) = vp.project(Vec3::new(r, 0.0, 0.0), r);
    assert!((px - (400.0 + vp.screen_radius())).abs() < 1e-3);
    assert!((py - 300.0).abs() < 1e-4);
}

#[test]
fn resize_never_moves_field_points() {
    let field = ParticleField::new(FieldParams::default(), 3).expect("field");
    let before: Vec<Vec3> = field.points().iter().map(|p| p.position).collect();

    let mut vp = Viewport::new(640.0, 480.0).expect("viewport");
    vp.resize(1920.0, 1080.0);
    vp.resize(0.0, 0.0);
    vp.resize(320.0, 240.0);

    let after: Vec<Vec3> = field.points().iter().map(|p| p.position).collect();
    assert_eq!(before, after);
}
