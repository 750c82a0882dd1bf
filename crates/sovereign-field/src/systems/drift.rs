//! Drift integration system.
//!
//! Updates Position from Velocity each frame (`position += velocity`), then
//! wraps every coordinate toroidally so points never leave the surface.
//! There are no inter-point forces and no damping.

use hecs::World;

use sovereign_core::types::{Position, Surface, Velocity};

/// Advance every point by its velocity and wrap it onto the surface.
/// A no-op on an empty surface.
pub fn run(world: &mut World, surface: &Surface) {
    if surface.is_empty() {
        return;
    }

    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x;
        pos.y += vel.y;
        *pos = surface.wrap(*pos);
    }
}

/// Re-wrap every position after the surface changed size.
pub fn rewrap(world: &mut World, surface: &Surface) {
    if surface.is_empty() {
        return;
    }

    for (_entity, pos) in world.query_mut::<&mut Position>() {
        *pos = surface.wrap(*pos);
    }
}
