//! Tests for the field engine, drift system, snapshots, and render surface.

use std::collections::HashSet;

use sovereign_core::commands::FieldCommand;
use sovereign_core::enums::*;
use sovereign_core::types::{Position, Surface, Velocity};

use crate::engine::{DriftRange, FieldConfig, VectorField};
use crate::render::{cross_path, render_svg};
use crate::systems::drift;

fn field_with(point_count: usize, width: f64, height: f64) -> VectorField {
    VectorField::new(FieldConfig {
        point_count,
        surface: Surface::new(width, height),
        ..Default::default()
    })
}

// ---- Initialization ----

#[test]
fn test_point_count_and_distinct_ids() {
    for n in [0usize, 1, 2, 3, 24, 40, 257] {
        let field = field_with(n, 1000.0, 600.0);
        let snap = field.snapshot();
        assert_eq!(snap.points.len(), n);
        assert_eq!(field.point_count(), n);

        let ids: HashSet<&str> = snap.points.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), n, "Identifiers must be unique");
    }
}

#[test]
fn test_initial_points_in_bounds() {
    let field = field_with(500, 1000.0, 600.0);
    assert!(field.snapshot().all_in_bounds());
}

#[test]
fn test_point_ids_follow_creation_order() {
    let snap = field_with(3, 1000.0, 600.0).snapshot();
    let ids: Vec<&str> = snap.points.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["VEC-100", "VEC-101", "VEC-102"]);
}

#[test]
fn test_velocity_within_drift_ranges() {
    let snap = field_with(300, 1000.0, 600.0).snapshot();
    for p in &snap.points {
        assert!(p.velocity.x.abs() <= 0.015, "vx out of range: {}", p.velocity.x);
        assert!(p.velocity.y.abs() <= 0.005, "vy out of range: {}", p.velocity.y);
    }
}

#[test]
fn test_categories_round_robin() {
    let snap = field_with(9, 1000.0, 600.0).snapshot();
    let kinetic = snap
        .points
        .iter()
        .filter(|p| p.category == VectorCategory::Kinetic)
        .count();
    assert_eq!(kinetic, 3);
    assert_eq!(snap.points[1].category, VectorCategory::Cyber);
    assert_eq!(snap.points[5].category, VectorCategory::Resource);
}

#[test]
fn test_cosmetic_attributes() {
    let snap = field_with(1000, 1000.0, 600.0).snapshot();
    let large = snap
        .points
        .iter()
        .filter(|p| p.radius == RadiusClass::Large)
        .count();
    // ~20% large; wide tolerance, the draw is seeded
    assert!((100..=300).contains(&large), "large count {large}");

    for p in &snap.points {
        assert!((0.0..=1.0).contains(&p.instability));
        assert!(p.label.starts_with("SEC-"));
        let sector: u32 = p.label[4..].parse().unwrap();
        assert!((10..=99).contains(&sector));
    }
}

#[test]
fn test_empty_surface_yields_empty_field() {
    let mut field = field_with(24, 0.0, 600.0);
    assert_eq!(field.point_count(), 0);
    let snap = field.advance();
    assert!(snap.points.is_empty());
}

#[test]
fn test_zero_drift_range_is_stationary() {
    let mut field = VectorField::new(FieldConfig {
        point_count: 5,
        drift: DriftRange {
            x_max: 0.0,
            y_max: 0.0,
        },
        ..Default::default()
    });
    let before = field.snapshot();
    let after = (0..100).map(|_| field.advance()).last().unwrap();
    for (a, b) in before.points.iter().zip(after.points.iter()) {
        assert_eq!(a.position, b.position);
    }
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut field_a = VectorField::new(FieldConfig {
        seed: 12345,
        ..Default::default()
    });
    let mut field_b = VectorField::new(FieldConfig {
        seed: 12345,
        ..Default::default()
    });

    for _ in 0..300 {
        let json_a = serde_json::to_string(&field_a.advance()).unwrap();
        let json_b = serde_json::to_string(&field_b.advance()).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let field_a = VectorField::new(FieldConfig {
        seed: 111,
        ..Default::default()
    });
    let field_b = VectorField::new(FieldConfig {
        seed: 222,
        ..Default::default()
    });
    assert_ne!(field_a.snapshot().points, field_b.snapshot().points);
}

// ---- Per-frame update ----

#[test]
fn test_advance_adds_velocity() {
    let mut field = field_with(24, 1000.0, 600.0);
    let before = field.snapshot();
    let after = field.advance();

    for (a, b) in before.points.iter().zip(after.points.iter()) {
        let expected = Surface::new(1000.0, 600.0).wrap(Position::new(
            a.position.x + a.velocity.x,
            a.position.y + a.velocity.y,
        ));
        assert_eq!(b.position, expected, "point {}", a.id);
    }
    assert_eq!(after.clock.frame, 1);
}

#[test]
fn test_velocity_invariant_across_frames() {
    let mut field = field_with(24, 1000.0, 600.0);
    let before = field.snapshot();
    for _ in 0..1_000 {
        field.advance();
    }
    let after = field.snapshot();

    for (a, b) in before.points.iter().zip(after.points.iter()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.velocity, b.velocity, "velocity changed for {}", a.id);
        assert_eq!(a.category, b.category);
        assert_eq!(a.radius, b.radius);
    }
}

#[test]
fn test_drift_wraps_far_edge_to_zero() {
    let mut world = hecs::World::new();
    let surface = Surface::new(100.0, 50.0);
    let e = world.spawn((Position::new(99.99, 49.999), Velocity::new(0.02, 0.002)));

    drift::run(&mut world, &surface);

    let pos = *world.get::<&Position>(e).unwrap();
    assert_eq!(pos.x, 0.0);
    assert_eq!(pos.y, 0.0);
}

#[test]
fn test_drift_wraps_near_edge_to_far_edge() {
    let mut world = hecs::World::new();
    let surface = Surface::new(100.0, 50.0);
    let e = world.spawn((Position::new(0.005, 0.001), Velocity::new(-0.015, -0.005)));

    drift::run(&mut world, &surface);

    let pos = *world.get::<&Position>(e).unwrap();
    assert!(pos.x > 99.0 && pos.x < 100.0, "x = {}", pos.x);
    assert!(pos.y > 49.0 && pos.y < 50.0, "y = {}", pos.y);
}

#[test]
fn test_drift_noop_on_empty_surface() {
    let mut world = hecs::World::new();
    let e = world.spawn((Position::new(3.0, 4.0), Velocity::new(1.0, 1.0)));

    drift::run(&mut world, &Surface::new(0.0, 0.0));

    assert_eq!(*world.get::<&Position>(e).unwrap(), Position::new(3.0, 4.0));
}

#[test]
fn test_fast_points_never_escape() {
    // Velocities far larger than the configured glacial drift
    let mut field = VectorField::new(FieldConfig {
        point_count: 50,
        surface: Surface::new(10.0, 5.0),
        drift: DriftRange {
            x_max: 3.7,
            y_max: 2.9,
        },
        ..Default::default()
    });
    for _ in 0..2_000 {
        let snap = field.advance();
        assert!(snap.all_in_bounds(), "escaped at frame {}", snap.clock.frame);
    }
}

#[test]
fn test_end_to_end_ten_thousand_frames() {
    let mut field = field_with(24, 1000.0, 600.0);
    let initial = field.snapshot();
    assert_eq!(initial.points.len(), 24);
    assert!(initial.all_in_bounds());

    for _ in 0..10_000 {
        let snap = field.advance();
        assert!(snap.all_in_bounds(), "out of bounds at frame {}", snap.clock.frame);
    }

    let last = field.snapshot();
    assert_eq!(last.points.len(), 24);
    assert_eq!(last.clock.frame, 10_000);
}

// ---- Commands ----

#[test]
fn test_pause_holds_positions() {
    let mut field = field_with(24, 1000.0, 600.0);
    for _ in 0..10 {
        field.advance();
    }

    field.queue_command(FieldCommand::Pause);
    let paused = field.advance();
    assert_eq!(paused.phase, FieldPhase::Paused);
    assert_eq!(paused.clock.frame, 10);

    for _ in 0..10 {
        let snap = field.advance();
        assert_eq!(snap.points, paused.points, "Points moved while paused");
    }

    field.queue_command(FieldCommand::Resume);
    let resumed = field.advance();
    assert_eq!(resumed.phase, FieldPhase::Running);
    assert_eq!(resumed.clock.frame, 11);
}

#[test]
fn test_resize_rewraps_positions() {
    let mut field = field_with(200, 1000.0, 600.0);
    field.queue_command(FieldCommand::Resize {
        width: 300.0,
        height: 200.0,
    });
    let snap = field.advance();

    assert_eq!(snap.surface, Surface::new(300.0, 200.0));
    assert_eq!(snap.points.len(), 200);
    assert!(snap.all_in_bounds());
}

#[test]
fn test_resize_to_zero_freezes_field() {
    let mut field = field_with(24, 1000.0, 600.0);
    field.queue_command(FieldCommand::Resize {
        width: 0.0,
        height: 0.0,
    });
    let first = field.advance();
    let second = field.advance();
    assert_eq!(first.points, second.points);
}

// ---- Teardown ----

#[test]
fn test_teardown_is_idempotent() {
    let mut field = field_with(24, 1000.0, 600.0);
    field.advance();

    field.teardown();
    let after_first = field.snapshot();
    field.teardown();
    let after_second = field.snapshot();

    assert!(field.is_torn_down());
    assert_eq!(after_first, after_second);
}

#[test]
fn test_no_mutation_after_teardown() {
    let mut field = field_with(24, 1000.0, 600.0);
    for _ in 0..5 {
        field.advance();
    }
    field.queue_command(FieldCommand::Teardown);
    let torn = field.advance();
    assert_eq!(torn.phase, FieldPhase::TornDown);
    assert_eq!(torn.clock.frame, 5);

    // Neither frames nor commands revive a torn-down field
    field.queue_commands([
        FieldCommand::Resume,
        FieldCommand::Resize {
            width: 10.0,
            height: 10.0,
        },
    ]);
    for _ in 0..100 {
        let snap = field.advance();
        assert_eq!(snap.points, torn.points);
        assert_eq!(snap.surface, torn.surface);
        assert_eq!(snap.phase, FieldPhase::TornDown);
    }
}

// ---- Render ----

#[test]
fn test_cross_path() {
    assert_eq!(cross_path(2.0), "M -2,0 L 2,0 M 0,-2 L 0,2");
    assert_eq!(cross_path(5.0), "M -5,0 L 5,0 M 0,-5 L 0,5");
}

#[test]
fn test_render_svg_layers() {
    let snap = field_with(24, 1000.0, 600.0).snapshot();
    let svg = render_svg(&snap);

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"viewBox="0 0 1000 600""#));
    assert_eq!(svg.matches(r#"class="horizon""#).count(), 3);
    assert!(svg.contains(r#"y1="300""#), "middle horizon at half height");
    assert_eq!(svg.matches("<path").count(), 24);
    assert!(svg.contains(r#"id="VEC-100""#));
    assert!(svg.contains(r#"class="vector kinetic""#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_render_is_pure() {
    let snap = field_with(24, 1000.0, 600.0).snapshot();
    assert_eq!(render_svg(&snap), render_svg(&snap));
}
