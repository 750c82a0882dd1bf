//! Snapshot system: queries the field world and builds a complete FieldSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use sovereign_core::enums::FieldPhase;
use sovereign_core::state::{FieldSnapshot, PointView};
use sovereign_core::types::{FrameClock, Position, Surface, Velocity};

use crate::components::{VectorMarker, VectorTraits};

/// Build a complete FieldSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    clock: &FrameClock,
    phase: FieldPhase,
    surface: &Surface,
) -> FieldSnapshot {
    FieldSnapshot {
        clock: *clock,
        phase,
        surface: *surface,
        points: build_points(world),
    }
}

/// Build PointView list in creation order.
fn build_points(world: &World) -> Vec<PointView> {
    let mut points: Vec<(usize, PointView)> = world
        .query::<(&VectorMarker, &VectorTraits, &Position, &Velocity)>()
        .iter()
        .map(|(_, (marker, traits, pos, vel))| {
            (
                marker.index,
                PointView {
                    id: marker.id.clone(),
                    position: *pos,
                    velocity: *vel,
                    category: traits.category,
                    instability: traits.instability,
                    radius: traits.radius,
                    label: marker.label.clone(),
                },
            )
        })
        .collect();

    points.sort_by_key(|(index, _)| *index);
    points.into_iter().map(|(_, view)| view).collect()
}
