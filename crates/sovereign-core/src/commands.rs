//! Commands sent to a running vector field.
//!
//! Commands are queued and applied at the next frame boundary.

use serde::{Deserialize, Serialize};

/// All possible field control actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FieldCommand {
    /// Hold all points in place until resumed.
    Pause,
    /// Resume drifting after a pause.
    Resume,
    /// The render surface changed size. Positions are re-wrapped into the new bounds.
    Resize { width: f64, height: f64 },
    /// Stop the field permanently.
    Teardown,
}
