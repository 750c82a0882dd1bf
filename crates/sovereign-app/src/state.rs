//! State shared between the frame loop thread and its handle.

use std::sync::{Arc, Mutex};

use sovereign_core::commands::FieldCommand;
use sovereign_core::state::FieldSnapshot;

/// Commands sent from a handle to the frame loop thread.
#[derive(Debug)]
pub enum FrameLoopCommand {
    /// A field command to forward to the engine.
    Field(FieldCommand),
    /// Tear the field down and exit the loop.
    Shutdown,
}

/// Latest snapshot for synchronous polling.
/// Written by the frame loop thread after each frame.
pub type SharedSnapshot = Arc<Mutex<Option<FieldSnapshot>>>;

