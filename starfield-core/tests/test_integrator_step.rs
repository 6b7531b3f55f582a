//! Unit tests for the simulation step: integration, culling and capacity

use glam::Vec3;
use starfield_core::tests::test_helpers::{seeded_rng, star, still_star_at_depth};
use starfield_core::{step, FieldConfig};

fn config_with_capacity(max_stars: usize) -> FieldConfig {
    FieldConfig {
        max_stars,
        ..FieldConfig::default()
    }
}

#[test]
fn test_location_advances_by_velocity() {
    let mut stars = vec![
        star(Vec3::new(10.0, -20.0, -5.0), Vec3::new(0.0, 0.0, -2.5)),
        star(Vec3::new(-3.0, 4.0, -100.0), Vec3::new(1.0, -1.0, -0.5)),
    ];
    let before = stars.clone();
    // Capacity equals the current count so nothing spawns
    let config = config_with_capacity(2);

    let report = step(&mut stars, &config, 800.0, 600.0, &mut seeded_rng(1));

    assert_eq!(report.advanced, 2);
    assert_eq!(report.culled, 0);
    assert_eq!(report.spawned, 0);
    for (after, prev) in stars.iter().zip(before.iter()) {
        assert_eq!(after.location, prev.location + prev.velocity);
        assert_eq!(after.velocity, prev.velocity);
        assert_eq!(after.size, prev.size);
        assert_eq!(after.color, prev.color);
    }
}

#[test]
fn test_culls_at_and_beyond_near_plane() {
    let mut stars = vec![
        star(Vec3::new(0.0, 0.0, 0.5), Vec3::new(0.0, 0.0, 0.5)), // lands on 1.0
        star(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 3.0)), // lands on 3.0
        star(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.5)), // lands on 0.5
    ];
    let config = config_with_capacity(1);

    let report = step(&mut stars, &config, 800.0, 600.0, &mut seeded_rng(2));

    assert_eq!(report.culled, 2);
    assert_eq!(stars.len(), 1);
    assert_eq!(stars[0].location.z, 0.5);
}

#[test]
fn test_far_boundary_is_exclusive() {
    let config = config_with_capacity(2);
    let mut stars = vec![
        still_star_at_depth(-config.max_distance),
        still_star_at_depth(-config.max_distance + 0.0001),
    ];

    step(&mut stars, &config, 800.0, 600.0, &mut seeded_rng(3));

    assert_eq!(stars.len(), 1);
    assert!(stars[0].location.z > -config.max_distance);
}

#[test]
fn test_star_receding_past_far_boundary_is_dropped() {
    let config = config_with_capacity(1);
    let mut stars = vec![star(
        Vec3::new(0.0, 0.0, -config.max_distance + 1.0),
        Vec3::new(0.0, 0.0, -1.5),
    )];

    let report = step(&mut stars, &config, 800.0, 600.0, &mut seeded_rng(4));

    assert_eq!(report.culled, 1);
    // Room for one star means the spawn roll is drawn from [0, 1)
    assert!(stars.is_empty());
}

#[test]
fn test_count_never_exceeds_max() {
    let config = config_with_capacity(50);
    let mut stars = Vec::new();
    let mut rng = seeded_rng(5);

    for _ in 0..500 {
        step(&mut stars, &config, 800.0, 600.0, &mut rng);
        assert!(stars.len() <= config.max_stars);
    }
}

#[test]
fn test_no_spawn_when_at_capacity() {
    let config = config_with_capacity(3);
    let mut stars = vec![
        still_star_at_depth(-1.0),
        still_star_at_depth(-2.0),
        still_star_at_depth(-3.0),
    ];

    for seed in 0..20 {
        let report = step(&mut stars, &config, 800.0, 600.0, &mut seeded_rng(seed));
        assert_eq!(report.spawned, 0);
        assert_eq!(stars.len(), 3);
    }
}

#[test]
fn test_survivors_keep_their_order() {
    let config = config_with_capacity(3);
    let mut stars = vec![
        still_star_at_depth(-1.0),
        still_star_at_depth(-config.max_distance),
        still_star_at_depth(-3.0),
    ];

    step(&mut stars, &config, 800.0, 600.0, &mut seeded_rng(6));

    assert_eq!(stars[0].location.z, -1.0);
    assert_eq!(stars[1].location.z, -3.0);
}

#[test]
fn test_spawned_stars_use_given_dimensions() {
    let config = config_with_capacity(2000);
    let mut stars = Vec::new();
    let mut rng = seeded_rng(8);

    step(&mut stars, &config, 100.0, 40.0, &mut rng);

    for s in &stars {
        assert!(s.location.x >= -50.0 && s.location.x < 50.0);
        assert!(s.location.y >= -20.0 && s.location.y < 20.0);
    }
}
