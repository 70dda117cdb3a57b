//! Board module - the grid of settled cells
//!
//! The board is sparse: dimensions plus a flat collection of colored cells,
//! at most one per position. Coordinates: (x, y) with x in 0..cols (left to
//! right) and y in 0..rows (top to bottom). Boards are immutable snapshots;
//! every operation that changes the grid returns a new value, which is what
//! lets the engine treat a whole transition as one atomic state replace.

use blockfall_types::{Cell, Point};

use crate::piece::Piece;

/// The grid of settled cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cols: u8,
    rows: u8,
    /// Settled cells in landing order. No two share a position.
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// Dimensions must fit the `i8` coordinate space (at most 127 in each
    /// direction); row scans iterate `0..rows` as `i8` and would come up
    /// empty beyond that.
    pub fn new(cols: u8, rows: u8) -> Self {
        debug_assert!(
            cols <= i8::MAX as u8 && rows <= i8::MAX as u8,
            "board dimensions must fit i8 coordinates"
        );
        Self {
            cols,
            rows,
            cells: Vec::new(),
        }
    }

    /// Create a board with pre-settled cells.
    ///
    /// Positions must be distinct and inside the grid; this is the caller's
    /// contract, not re-checked here. Dimension bounds are as for
    /// [`Board::new`].
    pub fn with_cells(cols: u8, rows: u8, cells: Vec<Cell>) -> Self {
        debug_assert!(
            cols <= i8::MAX as u8 && rows <= i8::MAX as u8,
            "board dimensions must fit i8 coordinates"
        );
        Self { cols, rows, cells }
    }

    /// Number of columns.
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// The settled cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Whether a settled cell sits at `pos`.
    pub fn occupied(&self, pos: Point) -> bool {
        self.cells.iter().any(|cell| cell.pos == pos)
    }

    /// Count of settled cells in row `y`.
    pub fn row_cell_count(&self, y: i8) -> usize {
        self.cells.iter().filter(|cell| cell.pos.y == y).count()
    }

    /// Indices of completely filled rows, in ascending order.
    pub fn filled_rows(&self) -> Vec<i8> {
        (0..self.rows as i8)
            .filter(|&y| self.row_cell_count(y) >= self.cols as usize)
            .collect()
    }

    /// Remove filled rows and let the cells above them fall.
    ///
    /// Cells on filled rows are dropped, then the gravity shift runs once per
    /// cleared row in ascending order: every cell strictly above that row
    /// moves down one. Running the passes one cleared row at a time is what
    /// makes the shifts compound, so a cell above several cleared rows falls
    /// by their full count.
    pub fn clear_filled_rows(&self) -> Board {
        let filled = self.filled_rows();
        if filled.is_empty() {
            return self.clone();
        }

        let mut cells: Vec<Cell> = self
            .cells
            .iter()
            .filter(|cell| !filled.contains(&cell.pos.y))
            .copied()
            .collect();

        for &row in &filled {
            for cell in &mut cells {
                if cell.pos.y < row {
                    cell.pos.y += 1;
                }
            }
        }

        Board {
            cols: self.cols,
            rows: self.rows,
            cells,
        }
    }

    /// Whether any settled cell intrudes into the top `buffer_rows` rows.
    ///
    /// Those rows are the spawn buffer; a settled cell there is the loss
    /// condition. The default buffer height is
    /// [`blockfall_types::SPAWN_BUFFER_ROWS`].
    pub fn is_overflowing(&self, buffer_rows: u8) -> bool {
        self.cells.iter().any(|cell| cell.pos.y < buffer_rows as i8)
    }

    /// Merge a piece's cells into the board.
    ///
    /// No placement check happens here; the caller must already have
    /// validated the piece's position.
    pub fn land_piece(&self, piece: &Piece) -> Board {
        let mut cells = self.cells.clone();
        cells.extend(piece.occupied_cells());
        Board {
            cols: self.cols,
            rows: self.rows,
            cells,
        }
    }
}
