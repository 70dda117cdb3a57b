//! Engine module - the orchestrator all external events funnel through
//!
//! Owns the current board and falling piece and applies the game's only
//! transitions: sideways moves, rotation, and the fall step. Transitions are
//! pure functions from one state snapshot to the next; nothing here blocks,
//! ticks a clock, or touches I/O. The driving shell decides when a fall tick
//! happens and which commands arrive, then applies them one at a time.
//!
//! There is no terminal "game over" state. When a landing leaves settled
//! cells inside the spawn buffer, the tick that caused it returns a fresh
//! board and piece instead, and the game keeps going.

use blockfall_types::{Cell, Command, Direction, GameConfig};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::SimpleRng;

/// Check that every cell of `piece` is inside the board and unoccupied.
pub fn is_valid_placement(piece: &Piece, board: &Board) -> bool {
    piece.occupied_cells().iter().all(|cell| {
        let pos = cell.pos;
        pos.x >= 0
            && (pos.x as i16) < board.cols() as i16
            && pos.y >= 0
            && (pos.y as i16) < board.rows() as i16
            && !board.occupied(pos)
    })
}

/// Nudge a piece one step in `direction` if the result fits.
///
/// An invalid move is silently rejected: the original piece comes back
/// unchanged, never an error.
pub fn move_piece(piece: &Piece, direction: Direction, board: &Board) -> Piece {
    let candidate = piece.translated(direction.offset());
    if is_valid_placement(&candidate, board) {
        candidate
    } else {
        *piece
    }
}

/// Advance a piece one rotation state if the result fits.
///
/// Same accept/reject rule as [`move_piece`]; there are no wall kicks, a
/// blocked rotation just keeps the current orientation.
pub fn rotate_piece(piece: &Piece, board: &Board) -> Piece {
    let candidate = piece.rotated();
    if is_valid_placement(&candidate, board) {
        candidate
    } else {
        *piece
    }
}

/// What happened on the most recent fall step, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandEvent {
    /// Rows cleared by the landing.
    pub rows_cleared: u8,
    /// True when the landing overflowed the spawn buffer and the board was
    /// replaced with an empty one.
    pub reset: bool,
}

/// The complete game state: board, falling piece, and the spawn RNG.
///
/// Immutable snapshot. [`EngineState::on_tick`] and
/// [`EngineState::on_command`] return the successor state and leave the
/// receiver untouched, so "apply a transition" is a single replace of the
/// caller's current value. The RNG rides along inside the state, which makes
/// an entire game a pure function of the seed and the event sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineState {
    config: GameConfig,
    board: Board,
    piece: Piece,
    rng: SimpleRng,
    last_event: Option<LandEvent>,
}

impl EngineState {
    /// Start a new game with the default configuration.
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    /// Start a new game on a board sized by `config`.
    pub fn with_config(config: GameConfig, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let piece = Piece::spawn(&mut rng, &config);
        Self {
            config,
            board: Board::new(config.cols, config.rows),
            piece,
            rng,
            last_event: None,
        }
    }

    /// Assemble a state from explicit parts.
    ///
    /// Mainly useful for setting up mid-game positions in tests and for
    /// replaying recorded games.
    pub fn from_parts(config: GameConfig, board: Board, piece: Piece, seed: u32) -> Self {
        Self {
            config,
            board,
            piece,
            rng: SimpleRng::new(seed),
            last_event: None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// The landing event produced by the most recent transition, if that
    /// transition was a fall step that landed the piece.
    pub fn last_event(&self) -> Option<LandEvent> {
        self.last_event
    }

    /// The settled cells, for rendering.
    pub fn board_cells(&self) -> &[Cell] {
        self.board.cells()
    }

    /// The falling piece's four absolute cells, for rendering.
    pub fn piece_cells(&self) -> [Cell; 4] {
        self.piece.occupied_cells()
    }

    /// Everything a renderer needs to draw: settled cells, then the falling
    /// piece's cells.
    pub fn visible_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.board
            .cells()
            .iter()
            .copied()
            .chain(self.piece.occupied_cells())
    }

    /// The fall step. Runs on every timer tick and on the `down` command.
    ///
    /// If the piece can move down one row it does, and nothing else changes.
    /// Otherwise the piece lands: its cells merge into the board, filled rows
    /// are cleared, and a fresh piece spawns. If the board left behind has
    /// settled cells inside the spawn buffer, the whole state is replaced
    /// with an empty board and another fresh spawn.
    pub fn on_tick(&self) -> EngineState {
        let mut rng = self.rng.clone();
        let candidate = self.piece.translated(Direction::Down.offset());

        let (board, piece, last_event) = if is_valid_placement(&candidate, &self.board) {
            (self.board.clone(), candidate, None)
        } else {
            let landed = self.board.land_piece(&self.piece);
            let rows_cleared = landed.filled_rows().len() as u8;
            let board = landed.clear_filled_rows();
            let piece = Piece::spawn(&mut rng, &self.config);
            (
                board,
                piece,
                Some(LandEvent {
                    rows_cleared,
                    reset: false,
                }),
            )
        };

        // The overflow check runs after every fall step, not just landings;
        // keep it out here rather than folding it into the landing branch.
        if board.is_overflowing(self.config.spawn_buffer_rows) {
            let rows_cleared = last_event.map_or(0, |event| event.rows_cleared);
            let piece = Piece::spawn(&mut rng, &self.config);
            return EngineState {
                config: self.config,
                board: Board::new(self.config.cols, self.config.rows),
                piece,
                rng,
                last_event: Some(LandEvent {
                    rows_cleared,
                    reset: true,
                }),
            };
        }

        EngineState {
            config: self.config,
            board,
            piece,
            rng,
            last_event,
        }
    }

    /// Apply one external command.
    ///
    /// `left`, `right` and `rotate` try the corresponding nudge; `down`
    /// forces an immediate fall step, identical to a timer tick.
    pub fn on_command(&self, command: Command) -> EngineState {
        match command {
            Command::Left => self.with_piece(move_piece(&self.piece, Direction::Left, &self.board)),
            Command::Right => {
                self.with_piece(move_piece(&self.piece, Direction::Right, &self.board))
            }
            Command::Rotate => self.with_piece(rotate_piece(&self.piece, &self.board)),
            Command::Down => self.on_tick(),
        }
    }

    fn with_piece(&self, piece: Piece) -> EngineState {
        EngineState {
            config: self.config,
            board: self.board.clone(),
            piece,
            rng: self.rng.clone(),
            last_event: None,
        }
    }
}
