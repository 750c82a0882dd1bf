//! ECS components attached to vector point entities.
//!
//! Points also carry `Position` and `Velocity` from `sovereign_core::types`.

use sovereign_core::enums::{RadiusClass, VectorCategory};

/// Identity of a vector point. Assigned at creation, never changed.
#[derive(Debug, Clone)]
pub struct VectorMarker {
    /// Creation index within the field (0-based).
    pub index: usize,
    /// Stable identifier, unique within the field (`VEC-100`, ...).
    pub id: String,
    /// Decorative sector label.
    pub label: String,
}

/// Cosmetic attributes consumed only by rendering.
#[derive(Debug, Clone, Copy)]
pub struct VectorTraits {
    pub category: VectorCategory,
    /// 0.0 - 1.0
    pub instability: f64,
    pub radius: RadiusClass,
}
