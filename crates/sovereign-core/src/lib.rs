//! Core types and definitions for SOVEREIGN.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, commands, field snapshots, briefing records, and constants.
//! It has no dependency on any runtime, network client, or renderer.

pub mod briefing;
pub mod commands;
pub mod constants;
pub mod enums;
pub mod state;
pub mod types;
