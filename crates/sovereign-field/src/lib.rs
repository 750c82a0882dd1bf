//! Vector field engine for SOVEREIGN.
//!
//! Owns the hecs world of drifting vector points, advances it once per
//! frame, and produces FieldSnapshots for a render surface.

pub mod components;
pub mod engine;
pub mod render;
pub mod systems;
pub mod world_setup;

pub use engine::{FieldConfig, VectorField};

#[cfg(test)]
mod tests;
