//! Systems that operate on the field world each frame.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state. All state lives in components.

pub mod drift;
pub mod snapshot;
