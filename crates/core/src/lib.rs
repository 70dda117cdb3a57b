//! Core game rules - pure, deterministic, and testable
//!
//! This crate contains the whole rule set of the falling-block game: shapes,
//! collision, line clearing, and the tick/command state machine. It has
//! **zero dependencies** on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: the spawn RNG lives inside the state, so a seed plus
//!   an event sequence replays the exact same game
//! - **Testable**: every rule is a pure function over value types
//! - **Portable**: drive it from a terminal, a GUI, or a headless harness
//!
//! # Module Structure
//!
//! - [`geometry`]: the shape table (7 kinds x 4 rotations) and its validated
//!   lookup
//! - [`piece`]: the falling piece and its derived absolute cells
//! - [`board`]: sparse settled-cell grid with row fill, clearing, and
//!   overflow detection
//! - [`engine`]: placement validation, moves, rotation, the fall step, and
//!   command dispatch
//! - [`rng`]: the small deterministic generator behind piece spawning
//!
//! # Game Rules
//!
//! A piece falls one row per tick. Sideways moves and rotations apply only
//! when the result stays inside the board and off settled cells; invalid
//! requests are silently ignored. A piece that cannot descend lands, filled
//! rows clear with the cells above falling in, and a new piece spawns. If a
//! landing leaves settled cells in the top spawn-buffer rows the board is
//! replaced with an empty one and play continues.
//!
//! # Example
//!
//! ```
//! use blockfall_core::EngineState;
//! use blockfall_types::Command;
//!
//! let game = EngineState::new(12345);
//!
//! // Transitions are pure: each call returns the next snapshot.
//! let game = game.on_command(Command::Left);
//! let game = game.on_tick();
//!
//! assert!(game.board_cells().is_empty()); // still falling, nothing settled
//! assert_eq!(game.piece_cells().len(), 4);
//! ```

pub mod board;
pub mod engine;
pub mod geometry;
pub mod piece;
pub mod rng;

pub use blockfall_types as types;

// Re-export commonly used items for convenience
pub use board::Board;
pub use engine::{is_valid_placement, move_piece, rotate_piece, EngineState, LandEvent};
pub use geometry::{
    shape_offsets, InvalidArgument, ShapeOffsets, KIND_I, KIND_J, KIND_L, KIND_O, KIND_S, KIND_T,
    KIND_Z, SHAPES,
};
pub use piece::Piece;
pub use rng::SimpleRng;
