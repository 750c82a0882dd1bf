//! Field snapshot: the complete visible state handed to a render surface each frame.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{FrameClock, Position, Surface, Velocity};

/// Complete field state produced after each frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub clock: FrameClock,
    pub phase: FieldPhase,
    pub surface: Surface,
    /// Points in creation order.
    pub points: Vec<PointView>,
}

/// One vector point as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointView {
    pub id: String,
    pub position: Position,
    pub velocity: Velocity,
    pub category: VectorCategory,
    /// 0.0 - 1.0. Informational only.
    pub instability: f64,
    pub radius: RadiusClass,
    pub label: String,
}

impl FieldSnapshot {
    /// True if every point lies inside the surface bounds.
    pub fn all_in_bounds(&self) -> bool {
        self.points
            .iter()
            .all(|p| self.surface.contains(&p.position))
    }

    /// Look up a point by identifier.
    pub fn point(&self, id: &str) -> Option<&PointView> {
        self.points.iter().find(|p| p.id == id)
    }
}
