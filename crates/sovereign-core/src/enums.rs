//! Enumeration types used throughout the field and briefing flow.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Threat category of a vector point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VectorCategory {
    #[default]
    Kinetic,
    Cyber,
    Resource,
}

/// Glyph size class of a vector point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadiusClass {
    #[default]
    Small,
    Large,
}

/// Field lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldPhase {
    /// Points advance every frame.
    #[default]
    Running,
    /// Frames are processed but points hold position.
    Paused,
    /// Terminal. No frame ever mutates the field again.
    TornDown,
}

impl VectorCategory {
    pub const ALL: [VectorCategory; 3] = [
        VectorCategory::Kinetic,
        VectorCategory::Cyber,
        VectorCategory::Resource,
    ];

    /// Round-robin assignment by creation index.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VectorCategory::Kinetic => "kinetic",
            VectorCategory::Cyber => "cyber",
            VectorCategory::Resource => "resource",
        }
    }
}

impl fmt::Display for VectorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RadiusClass {
    /// Glyph half-size in surface units.
    pub fn size(&self) -> f64 {
        match self {
            RadiusClass::Small => crate::constants::SMALL_RADIUS,
            RadiusClass::Large => crate::constants::LARGE_RADIUS,
        }
    }
}
