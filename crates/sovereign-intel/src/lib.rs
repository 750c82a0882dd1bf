//! Briefing generation for SOVEREIGN.
//!
//! Turns a selected vector into a display-ready `BriefingRecord` by asking a
//! hosted text-generation model for a structured assessment. Every failure
//! (missing credential, network, malformed output) degrades to the fixed
//! uplink-severed record; callers always get something to display.

pub mod config;
pub mod error;
pub mod model;
pub mod prompt;
pub mod requester;

pub use config::IntelConfig;
pub use error::{ErrorKind, IntelError};
pub use model::{BriefingModel, GeminiModel, GenerationRequest};
pub use requester::BriefingRequester;
