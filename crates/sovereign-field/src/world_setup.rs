//! Point spawn factories for setting up the field world.
//!
//! Creates vector point entities with their component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use sovereign_core::constants::*;
use sovereign_core::enums::{RadiusClass, VectorCategory};
use sovereign_core::types::{Position, Surface, Velocity};

use crate::components::{VectorMarker, VectorTraits};
use crate::engine::DriftRange;

/// Spawn `count` vector points scattered uniformly across the surface.
/// Spawns nothing on an empty surface.
pub fn spawn_points(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    count: usize,
    surface: &Surface,
    drift: &DriftRange,
) -> usize {
    if surface.is_empty() {
        return 0;
    }

    for index in 0..count {
        spawn_point(world, rng, index, surface, drift);
    }
    count
}

/// Spawn a single vector point with the given creation index.
pub fn spawn_point(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    index: usize,
    surface: &Surface,
    drift: &DriftRange,
) -> hecs::Entity {
    let position = Position::new(
        rng.gen_range(0.0..surface.width),
        rng.gen_range(0.0..surface.height),
    );
    let velocity = Velocity::new(
        symmetric(rng, drift.x_max),
        symmetric(rng, drift.y_max),
    );

    let radius = if rng.gen_bool(LARGE_RADIUS_PROBABILITY) {
        RadiusClass::Large
    } else {
        RadiusClass::Small
    };

    let marker = VectorMarker {
        index,
        id: point_id(index),
        label: format!(
            "SEC-{}",
            rng.gen_range(SECTOR_LABEL_MIN..=SECTOR_LABEL_MAX)
        ),
    };

    let traits = VectorTraits {
        category: VectorCategory::from_index(index),
        instability: rng.gen::<f64>(),
        radius,
    };

    world.spawn((marker, traits, position, velocity))
}

/// Identifier for the point at `index`: `VEC-100`, `VEC-101`, ...
pub fn point_id(index: usize) -> String {
    format!("VEC-{:03}", POINT_ID_BASE + index)
}

/// Uniform draw from `[-half, half)`. Zero when the range is empty.
fn symmetric(rng: &mut ChaCha8Rng, half: f64) -> f64 {
    if half.is_finite() && half > 0.0 {
        rng.gen_range(-half..half)
    } else {
        0.0
    }
}
