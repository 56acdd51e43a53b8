// Host-side tests for constants and their mathematical relationships.

use globe_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(POINT_COUNT > 0 && POINT_COUNT <= u16::MAX as usize);
    assert!(FIELD_RADIUS > 0.0);
    assert!(CONNECTION_THRESHOLD_FRACTION > 0.0 && CONNECTION_THRESHOLD_FRACTION < 1.0);
    assert!(ROTATION_STEP_RADIANS > 0.0 && ROTATION_STEP_RADIANS < 0.1);
    assert!(SCREEN_RADIUS_FRACTION > 0.0 && SCREEN_RADIUS_FRACTION <= 0.5);
    assert!(MARKER_PICK_RADIUS_FRACTION > 0.0 && MARKER_PICK_RADIUS_FRACTION < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn visual_ranges_are_ordered_and_clamped() {
    assert!(POINT_SIZE_MIN > 0.0);
    assert!(POINT_SIZE_MAX > POINT_SIZE_MIN);
    assert!(POINT_ALPHA_MIN >= 0.0);
    assert!(POINT_ALPHA_MAX > POINT_ALPHA_MIN);
    assert!(POINT_ALPHA_MAX <= 1.0);
    assert!(EDGE_ALPHA_MAX > 0.0 && EDGE_ALPHA_MAX <= 1.0);
    assert!(EDGE_DEPTH_ALPHA_MAX > 0.0 && EDGE_DEPTH_ALPHA_MAX <= EDGE_ALPHA_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Hover fall should be slower than rise
    assert!(HOVER_FALL_TAU_SEC > HOVER_RISE_TAU_SEC);
    assert!(HOVER_SCALE_SPAN > 0.0);
    assert!(WORLD_RADIUS > 0.0);
}
