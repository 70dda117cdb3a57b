//! Session crate - serialized access to one running game
//!
//! The core engine is a pure state machine; something still has to own "the
//! current state" and apply transitions one at a time. [`Session`] is that
//! owner: a mutex-guarded slot holding the latest
//! [`EngineState`](blockfall_core::EngineState). Every tick or command locks
//! the slot, computes the successor snapshot, and replaces the slot before
//! unlocking, so two transitions can never interleave even when a timer
//! thread and an input thread drive the same game.
//!
//! The session also emits structured logs for the interesting moments
//! (landings, clears, overflow resets) and produces serializable
//! [`Observation`] snapshots for renderers and recorders.

use std::sync::{Mutex, PoisonError};

use log::{debug, info, trace};

use blockfall_core::{EngineState, LandEvent};
use blockfall_types::{Command, GameConfig};

pub mod observe;

pub use observe::{CellView, EventView, Observation, PieceView};

/// A running game behind a single serialization point.
#[derive(Debug)]
pub struct Session {
    state: Mutex<EngineState>,
}

impl Session {
    /// Start a session with the default configuration.
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    /// Start a session on a board sized by `config`.
    pub fn with_config(config: GameConfig, seed: u32) -> Self {
        info!(
            "session started: {}x{} board, seed {}",
            config.cols, config.rows, seed
        );
        Self {
            state: Mutex::new(EngineState::with_config(config, seed)),
        }
    }

    /// Resume a session from a previously captured engine state.
    pub fn from_state(state: EngineState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    /// Apply one fall step.
    ///
    /// Returns the landing event, if the step landed the piece.
    pub fn tick(&self) -> Option<LandEvent> {
        let event = self.transition(|state| state.on_tick());
        log_land(event);
        event
    }

    /// Apply one external command.
    pub fn command(&self, command: Command) -> Option<LandEvent> {
        trace!("command: {}", command.as_str());
        let event = self.transition(|state| state.on_command(command));
        log_land(event);
        event
    }

    /// A serializable snapshot of the current state.
    pub fn observe(&self) -> Observation {
        Observation::from(&*self.lock())
    }

    /// A full copy of the current engine state.
    pub fn snapshot(&self) -> EngineState {
        self.lock().clone()
    }

    fn transition(&self, next: impl FnOnce(&EngineState) -> EngineState) -> Option<LandEvent> {
        let mut guard = self.lock();
        let next_state = next(&guard);
        let event = next_state.last_event();
        *guard = next_state;
        event
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, EngineState> {
        // Transitions replace the state wholesale, so even a guard poisoned
        // by a panicking thread still holds a coherent snapshot.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn log_land(event: Option<LandEvent>) {
    match event {
        Some(event) if event.reset => {
            info!(
                "board overflowed, starting over ({} rows cleared by the final landing)",
                event.rows_cleared
            );
        }
        Some(event) => debug!("piece landed, cleared {} rows", event.rows_cleared),
        None => {}
    }
}
