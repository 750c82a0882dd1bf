//! Runtime errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The frame loop thread could not be started.
    #[error("Failed to spawn frame loop: {0}")]
    Spawn(#[from] std::io::Error),

    /// The frame loop has already stopped.
    #[error("Frame loop is not running")]
    LoopStopped,
}
