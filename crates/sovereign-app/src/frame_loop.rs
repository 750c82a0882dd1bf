//! Frame loop thread: advances the vector field at a fixed frame rate and
//! presents every snapshot to a render sink.
//!
//! The field is created inside this thread so it is owned by exactly one
//! writer. Commands arrive via `mpsc` channel. Snapshots go to the `FrameSink`
//! and into shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use sovereign_core::commands::FieldCommand;
use sovereign_core::constants::FRAME_RATE;
use sovereign_core::state::FieldSnapshot;
use sovereign_field::engine::{FieldConfig, VectorField};

use crate::error::AppError;
use crate::state::{FrameLoopCommand, SharedSnapshot};

/// Where each frame is drawn.
pub trait FrameSink: Send + 'static {
    fn present(&mut self, snapshot: &FieldSnapshot);
}

impl<F> FrameSink for F
where
    F: FnMut(&FieldSnapshot) + Send + 'static,
{
    fn present(&mut self, snapshot: &FieldSnapshot) {
        self(snapshot)
    }
}

/// Sink that traces a heartbeat every `every` frames.
pub struct TraceSink {
    pub every: u64,
}

impl Default for TraceSink {
    fn default() -> Self {
        Self {
            every: FRAME_RATE as u64,
        }
    }
}

impl FrameSink for TraceSink {
    fn present(&mut self, snapshot: &FieldSnapshot) {
        let frame = snapshot.clock.frame;
        if self.every > 0 && frame > 0 && frame % self.every == 0 {
            debug!(frame, points = snapshot.points.len(), "Field frame");
        }
    }
}

/// Frame loop settings.
#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub field: FieldConfig,
    /// Frames per second.
    pub frame_rate: u32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            frame_rate: FRAME_RATE,
        }
    }
}

impl LoopConfig {
    /// Nominal duration of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / self.frame_rate.max(1) as u64)
    }
}

/// Handle to a running frame loop. Dropping it stops the loop.
pub struct FrameLoopHandle {
    cmd_tx: mpsc::Sender<FrameLoopCommand>,
    latest_snapshot: SharedSnapshot,
    thread: Option<JoinHandle<()>>,
}

impl FrameLoopHandle {
    /// Forward a field command to the loop.
    pub fn send(&self, command: FieldCommand) -> Result<(), AppError> {
        self.cmd_tx
            .send(FrameLoopCommand::Field(command))
            .map_err(|_| AppError::LoopStopped)
    }

    /// The most recent frame, if any has been produced.
    pub fn latest_snapshot(&self) -> Option<FieldSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// True until the loop thread has exited.
    pub fn is_running(&self) -> bool {
        self.thread
            .as_ref()
            .is_some_and(|thread| !thread.is_finished())
    }

    /// Stop the loop and wait for the thread to exit.
    ///
    /// Once this returns no further frames are processed. Calling it again has
    /// no effect.
    pub fn stop(&mut self) {
        let Some(thread) = self.thread.take() else {
            return;
        };

        // Fails only if the loop already exited on its own
        let _ = self.cmd_tx.send(FrameLoopCommand::Shutdown);
        if thread.join().is_err() {
            warn!("Frame loop thread panicked");
        }
    }
}

impl Drop for FrameLoopHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawns the frame loop in a new thread.
pub fn spawn_frame_loop(
    config: LoopConfig,
    sink: impl FrameSink,
) -> Result<FrameLoopHandle, AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<FrameLoopCommand>();
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let shared = latest_snapshot.clone();

    let thread = std::thread::Builder::new()
        .name("sovereign-frame-loop".into())
        .spawn(move || {
            run_frame_loop(config, cmd_rx, sink, &shared);
        })?;

    Ok(FrameLoopHandle {
        cmd_tx,
        latest_snapshot,
        thread: Some(thread),
    })
}

/// The frame loop. Runs until Shutdown, channel disconnect, or field teardown.
fn run_frame_loop(
    config: LoopConfig,
    cmd_rx: mpsc::Receiver<FrameLoopCommand>,
    mut sink: impl FrameSink,
    latest_snapshot: &Mutex<Option<FieldSnapshot>>,
) {
    let frame_duration = config.frame_duration();
    let mut field = VectorField::new(config.field);
    let mut next_frame_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(FrameLoopCommand::Field(cmd)) => field.queue_command(cmd),
                Ok(FrameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    field.teardown();
                    store(latest_snapshot, field.snapshot());
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one frame (engine handles pause semantics internally)
        let snapshot = field.advance();

        if field.is_torn_down() {
            info!(frame = snapshot.clock.frame, "Frame loop exiting after teardown");
            store(latest_snapshot, snapshot);
            return;
        }

        // 3. Draw
        sink.present(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        store(latest_snapshot, snapshot);

        // 5. Sleep until the next frame
        next_frame_time += frame_duration;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > frame_duration * 2 {
            // Too far behind, reset instead of replaying missed frames
            next_frame_time = now;
        }
    }
}

fn store(latest_snapshot: &Mutex<Option<FieldSnapshot>>, snapshot: FieldSnapshot) {
    if let Ok(mut lock) = latest_snapshot.lock() {
        *lock = Some(snapshot);
    }
}
