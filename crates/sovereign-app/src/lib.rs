//! SOVEREIGN runtime.
//!
//! Wires the vector field and the briefing requester together: the field
//! animates on its own thread while briefings are requested asynchronously,
//! with no shared mutable state between the two.

pub mod desk;
pub mod error;
pub mod frame_loop;
pub mod state;

