//! Observation module - serializable snapshots of the game state
//!
//! Wire-friendly mirrors of the core types, decoupled so the core crate
//! stays dependency-free. Settled cells and the active piece are reported
//! separately; observers that only draw can concatenate them, observers that
//! predict need the piece's kind and rotation anyway.

use serde::{Deserialize, Serialize};

use blockfall_core::{EngineState, LandEvent};
use blockfall_types::Cell;

/// One colored cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub x: i8,
    pub y: i8,
    pub color: u8,
}

impl From<Cell> for CellView {
    fn from(cell: Cell) -> Self {
        Self {
            x: cell.pos.x,
            y: cell.pos.y,
            color: cell.color,
        }
    }
}

/// The falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceView {
    pub kind: u8,
    pub color: u8,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
    /// The piece's four absolute cells, so a renderer needs no shape table.
    pub cells: [CellView; 4],
}

/// Landing outcome attached to the snapshot that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventView {
    pub rows_cleared: u8,
    pub reset: bool,
}

impl From<LandEvent> for EventView {
    fn from(event: LandEvent) -> Self {
        Self {
            rows_cleared: event.rows_cleared,
            reset: event.reset,
        }
    }
}

/// Everything an external observer gets to see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub cols: u8,
    pub rows: u8,
    /// Settled cells only; the active piece is reported in `active`.
    pub board: Vec<CellView>,
    pub active: PieceView,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_event: Option<EventView>,
}

impl From<&EngineState> for Observation {
    fn from(state: &EngineState) -> Self {
        let piece = state.piece();
        let cells = state.piece_cells();
        Self {
            cols: state.board().cols(),
            rows: state.board().rows(),
            board: state.board_cells().iter().copied().map(CellView::from).collect(),
            active: PieceView {
                kind: piece.kind(),
                color: piece.color(),
                rotation: piece.rotation(),
                x: piece.pos().x,
                y: piece.pos().y,
                cells: cells.map(CellView::from),
            },
            last_event: state.last_event().map(EventView::from),
        }
    }
}
