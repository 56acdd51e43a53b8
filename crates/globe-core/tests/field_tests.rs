// Host-side tests for the particle field: sphere sampling, the one-time
// proximity pass, rigid rotation, and depth-based opacity.

use glam::Vec3;
use globe_core::{FieldError, FieldParams, ParticleField};

fn make_field() -> ParticleField {
    ParticleField::new(FieldParams::default(), 42).expect("field")
}

fn edge_pairs(field: &ParticleField) -> Vec<(u16, u16)> {
    field.edges().iter().map(|e| (e.a, e.b)).collect()
}

#[test]
fn construction_rejects_bad_params() {
    let mut params = FieldParams::default();
    params.point_count = 0;
    assert_eq!(
        ParticleField::new(params, 1).err(),
        Some(FieldError::NoPoints)
    );

    let mut params = FieldParams::default();
    params.radius = 0.0;
    assert!(matches!(
        ParticleField::new(params, 1),
        Err(FieldError::BadRadius(_))
    ));

    let mut params = FieldParams::default();
    params.radius = f32::NAN;
    assert!(matches!(
        ParticleField::new(params, 1),
        Err(FieldError::BadRadius(_))
    ));
}

#[test]
fn from_points_rejects_bad_radius() {
    let positions = [Vec3::new(1.0, 0.0, 0.0)];

    let mut params = FieldParams::default();
    params.radius = 0.0;
    assert!(matches!(
        ParticleField::from_points(&positions, params),
        Err(FieldError::BadRadius(_))
    ));

    let mut params = FieldParams::default();
    params.radius = f32::NAN;
    assert!(matches!(
        ParticleField::from_points(&positions, params),
        Err(FieldError::BadRadius(_))
    ));
}

#[test]
fn all_points_lie_on_the_sphere() {
    let field = make_field();
    let r = field.params.radius;
    for p in field.points() {
        let d = p.position.length();
        assert!((d - r).abs() < 1e-3, "point off sphere: {d} vs {r}");
    }
}

#[test]
fn points_stay_on_the_sphere_after_many_ticks() {
    let mut field = make_field();
    let r = field.params.radius;
    for _ in 0..1000 {
        field.rotate_y(field.params.rotation_step_radians);
    }
    for p in field.points() {
        let d = p.position.length();
        assert!((d - r).abs() < 5e-2, "rotation not distance-preserving: {d}");
    }
}

#[test]
fn sizes_and_alphas_are_within_configured_ranges() {
    let field = make_field();
    let (s_min, s_max) = field.params.size_range;
    let (a_min, a_max) = field.params.alpha_range;
    for p in field.points() {
        assert!(p.size >= s_min && p.size <= s_max);
        assert!(p.base_alpha >= a_min && p.base_alpha <= a_max);
    }
}

#[test]
fn sampling_covers_both_hemispheres_and_centers() {
    // Seeded and deterministic; a uniform spherical sample should straddle
    // the equator and average out near the center.
    let field = make_field();
    let front = field.points().iter().filter(|p| p.position.z > 0.0).count();
    let back = field.points().len() - front;
    assert!(front > 20, "front hemisphere underpopulated: {front}");
    assert!(back > 20, "back hemisphere underpopulated: {back}");

    let mean = field
        .points()
        .iter()
        .fold(Vec3::ZERO, |acc, p| acc + p.position)
        / field.points().len() as f32;
    assert!(
        mean.length() < field.params.radius * 0.25,
        "sample mean far from center: {mean:?}"
    );
}

#[test]
fn edge_set_is_frozen_across_ticks() {
    let mut field = make_field();
    let before = edge_pairs(&field);
    assert!(!before.is_empty(), "expected some edges at n=150");
    for _ in 0..500 {
        field.rotate_y(field.params.rotation_step_radians);
    }
    assert_eq!(edge_pairs(&field), before);
    // per-point connection lists are frozen too
    for (i, p) in field.points().iter().enumerate() {
        for &j in &p.connections {
            assert!((j as usize) > i, "connections must point forward");
            assert!(before.contains(&(i as u16, j)));
        }
    }
}

#[test]
fn edge_weights_decrease_with_distance() {
    let field = make_field();
    let threshold = field.params.connection_threshold();
    for e in field.edges() {
        let d = field.points()[e.a as usize]
            .position
            .distance(field.points()[e.b as usize].position);
        assert!(d < threshold, "edge beyond threshold: {d} >= {threshold}");
        let expected = 1.0 - d / threshold;
        assert!((e.weight - expected).abs() < 1e-4);
        assert!(e.weight > 0.0 && e.weight <= 1.0);
    }
}

#[test]
fn threshold_comparison_is_strictly_less_than() {
    // radius 100 x fraction 0.4 = threshold 40: a pair exactly 40 apart must
    // not connect, a pair just inside must.
    let params = FieldParams {
        radius: 100.0,
        connection_threshold_fraction: 0.4,
        ..FieldParams::default()
    };
    let at_boundary = [Vec3::ZERO, Vec3::new(40.0, 0.0, 0.0)];
    let field = ParticleField::from_points(&at_boundary, params.clone()).expect("field");
    assert_eq!(field.edge_count(), 0, "boundary pair must not connect");

    let inside = [Vec3::ZERO, Vec3::new(39.999, 0.0, 0.0)];
    let field = ParticleField::from_points(&inside, params).expect("field");
    assert_eq!(field.edge_count(), 1, "pair inside threshold must connect");
    assert_eq!((field.edges()[0].a, field.edges()[0].b), (0, 1));
}

#[test]
fn rotation_round_trip_restores_positions() {
    let mut field = make_field();
    let before: Vec<Vec3> = field.points().iter().map(|p| p.position).collect();
    field.rotate_y(0.25);
    field.rotate_y(-0.25);
    for (p, orig) in field.points().iter().zip(&before) {
        assert!(
            p.position.distance(*orig) < 1e-2,
            "round trip drifted: {:?} vs {orig:?}",
            p.position
        );
    }
}

#[test]
fn full_revolution_restores_configuration() {
    let mut field = make_field();
    let before: Vec<Vec3> = field.points().iter().map(|p| p.position).collect();
    let steps = 1024;
    let step = std::f32::consts::TAU / steps as f32;
    for _ in 0..steps {
        field.rotate_y(step);
    }
    for (p, orig) in field.points().iter().zip(&before) {
        assert!(
            p.position.distance(*orig) < 0.1,
            "2pi rotation drifted: {:?} vs {orig:?}",
            p.position
        );
    }
}

#[test]
fn point_alpha_tracks_depth() {
    let params = FieldParams {
        radius: 100.0,
        ..FieldParams::default()
    };
    let positions = [
        Vec3::new(0.0, 0.0, 100.0),  // near pole
        Vec3::new(0.0, 0.0, -100.0), // far pole
        Vec3::new(100.0, 0.0, 0.0),  // equator
    ];
    let field = ParticleField::from_points(&positions, params).expect("field");
    let base = field.points()[0].base_alpha;
    assert!((field.point_alpha(0) - base).abs() < 1e-6);
    assert!(field.point_alpha(1).abs() < 1e-6);
    assert!((field.point_alpha(2) - base * 0.5).abs() < 1e-6);
}

#[test]
fn edge_alpha_fades_when_either_endpoint_is_deep() {
    let params = FieldParams {
        radius: 100.0,
        connection_threshold_fraction: 0.4,
        ..FieldParams::default()
    };
    // 20 apart, both near the equator plane: fully weighted by depth
    let positions = [Vec3::new(0.0, 0.0, 0.0), Vec3::new(20.0, 0.0, 0.0)];
    let field = ParticleField::from_points(&positions, params.clone()).expect("field");
    let e = field.edges()[0];
    let shallow = field.edge_alpha(&e);
    assert!(shallow > 0.0);

    // same spacing, one endpoint pushed to the far pole: alpha collapses
    let positions = [Vec3::new(0.0, 0.0, -100.0), Vec3::new(20.0, 0.0, -100.0)];
    let field = ParticleField::from_points(&positions, params).expect("field");
    let e = field.edges()[0];
    assert!(field.edge_alpha(&e).abs() < 1e-6);
}

#[test]
fn draw_order_sorts_far_to_near() {
    let field = make_field();
    let order = field.draw_order();
    assert_eq!(order.len(), field.points().len());
    for pair in order.windows(2) {
        let za = field.points()[pair[0]].position.z;
        let zb = field.points()[pair[1]].position.z;
        assert!(za <= zb, "draw order not far-to-near: {za} > {zb}");
    }
}

#[test]
fn same_seed_reproduces_the_field() {
    let a = make_field();
    let b = make_field();
    for (pa, pb) in a.points().iter().zip(b.points()) {
        assert_eq!(pa.position, pb.position);
        assert_eq!(pa.size, pb.size);
        assert_eq!(pa.base_alpha, pb.base_alpha);
    }
    assert_eq!(edge_pairs(&a), edge_pairs(&b));
}
