//! Vector field engine: the animated background.
//!
//! `VectorField` owns the hecs world of vector points, processes field
//! commands, runs the drift system, and produces `FieldSnapshot`s. Completely
//! headless (no renderer, no clock), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use sovereign_core::commands::FieldCommand;
use sovereign_core::constants::{DEFAULT_POINT_COUNT, DRIFT_X_MAX, DRIFT_Y_MAX};
use sovereign_core::enums::FieldPhase;
use sovereign_core::state::FieldSnapshot;
use sovereign_core::types::{FrameClock, Surface};

use crate::systems;
use crate::world_setup;

/// Symmetric velocity ranges for newly spawned points (units/frame).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftRange {
    pub x_max: f64,
    pub y_max: f64,
}

impl Default for DriftRange {
    fn default() -> Self {
        Self {
            x_max: DRIFT_X_MAX,
            y_max: DRIFT_Y_MAX,
        }
    }
}

/// Configuration for creating a new field.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// RNG seed for determinism. Same seed = same field.
    pub seed: u64,
    /// Number of points. Fixed for the lifetime of the field.
    pub point_count: usize,
    pub surface: Surface,
    pub drift: DriftRange,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            point_count: DEFAULT_POINT_COUNT,
            surface: Surface::default(),
            drift: DriftRange::default(),
        }
    }
}

/// The vector field. Owns the ECS world and all animation state.
///
/// Only the field's own frame step mutates point state.
pub struct VectorField {
    world: World,
    clock: FrameClock,
    phase: FieldPhase,
    surface: Surface,
    point_count: usize,
    command_queue: VecDeque<FieldCommand>,
}

impl VectorField {
    /// Create a new field and scatter its points across the surface.
    pub fn new(config: FieldConfig) -> Self {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

        let point_count = world_setup::spawn_points(
            &mut world,
            &mut rng,
            config.point_count,
            &config.surface,
            &config.drift,
        );

        if point_count < config.point_count {
            warn!(
                width = config.surface.width,
                height = config.surface.height,
                requested = config.point_count,
                "Surface has no area, field is empty"
            );
        }
        info!(
            seed = config.seed,
            points = point_count,
            width = config.surface.width,
            height = config.surface.height,
            "Vector field initialized"
        );

        Self {
            world,
            clock: FrameClock::default(),
            phase: FieldPhase::default(),
            surface: config.surface,
            point_count,
            command_queue: VecDeque::new(),
        }
    }

    /// Queue a command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: FieldCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = FieldCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the field by one frame and return the resulting snapshot.
    pub fn advance(&mut self) -> FieldSnapshot {
        self.process_commands();

        if self.phase == FieldPhase::Running {
            systems::drift::run(&mut self.world, &self.surface);
            self.clock.advance();
        }

        self.snapshot()
    }

    /// Snapshot the current state without advancing.
    pub fn snapshot(&self) -> FieldSnapshot {
        systems::snapshot::build_snapshot(&self.world, &self.clock, self.phase, &self.surface)
    }

    /// Stop the field permanently. Calling it again has no effect.
    pub fn teardown(&mut self) {
        if self.phase == FieldPhase::TornDown {
            return;
        }
        self.phase = FieldPhase::TornDown;
        self.command_queue.clear();
        info!(frame = self.clock.frame, "Vector field torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.phase == FieldPhase::TornDown
    }

    /// Get the current field phase.
    pub fn phase(&self) -> FieldPhase {
        self.phase
    }

    /// Get the current frame clock.
    pub fn clock(&self) -> FrameClock {
        self.clock
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Number of points. Never changes after creation.
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single field command.
    fn handle_command(&mut self, command: FieldCommand) {
        if self.phase == FieldPhase::TornDown {
            return;
        }

        match command {
            FieldCommand::Pause => {
                if self.phase == FieldPhase::Running {
                    self.phase = FieldPhase::Paused;
                }
            }
            FieldCommand::Resume => {
                if self.phase == FieldPhase::Paused {
                    self.phase = FieldPhase::Running;
                }
            }
            FieldCommand::Resize { width, height } => {
                self.surface = Surface::new(width, height);
                systems::drift::rewrap(&mut self.world, &self.surface);
                debug!(width, height, "Vector field resized");
            }
            FieldCommand::Teardown => self.teardown(),
        }
    }
}
