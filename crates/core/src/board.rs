//! Board module - the fixed-size playfield grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the piece
//! that filled it. Coordinates are (x, y): x is the column (0..9, left to right), y is
//! the row (0..19, top to bottom). Rows with negative y sit above the visible playfield;
//! they always read as empty and writes to them are dropped.
//!
//! Line clearing never edits a board in place: [`Board::clear_full_rows`] builds the
//! replacement board and the rules engine installs it.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// One horizontal line of cells.
pub type Row = [Cell; WIDTH];

/// Row indices removed by a clear pass. A board has at most `HEIGHT` full rows.
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The game board - 10 columns x 20 rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Rows top to bottom.
    rows: [Row; HEIGHT],
}

/// Result of a clear pass: the replacement board and the rows it dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClear {
    pub board: Board,
    /// Indices (into the old board) of the removed rows, bottom to top.
    pub rows: ClearedRows,
}

impl LineClear {
    /// Number of rows removed.
    pub fn count(&self) -> usize {
        self.rows.len()
    }
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [[None; WIDTH]; HEIGHT],
        }
    }

    /// Build a board from explicit rows (top to bottom).
    pub fn from_rows(rows: [Row; HEIGHT]) -> Self {
        Self { rows }
    }

    /// Map (x, y) to array indices, `None` when out of bounds.
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<(usize, usize)> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize, x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at (x, y).
    ///
    /// Anything outside the grid reads as empty. Above the playfield that is the rule;
    /// beside or below it, [`crate::GameState::can_place`] rejects the coordinate
    /// before the cell is ever consulted.
    pub fn get(&self, x: i8, y: i8) -> Cell {
        Self::index(x, y).and_then(|(row, col)| self.rows[row][col])
    }

    /// Set cell at (x, y). Returns false (and does nothing) if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some((row, col)) => {
                self.rows[row][col] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the grid and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.get(x, y).is_some()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> &[Row; HEIGHT] {
        &self.rows
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Write `kind` into every in-bounds cell of `cells`.
    ///
    /// Cells above the playfield are dropped silently.
    pub fn merge(&mut self, cells: &[(i8, i8)], kind: PieceKind) {
        for &(x, y) in cells {
            self.set(x, y, Some(kind));
        }
    }

    /// Remove every full row and return the compacted board.
    ///
    /// Scans bottom to top with a write cursor: surviving rows keep their relative
    /// order and settle at the bottom, and empty rows pad the top.
    pub fn clear_full_rows(&self) -> LineClear {
        let mut cleared = ClearedRows::new();
        let mut out = Board::new();
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
            } else {
                write_y -= 1;
                out.rows[write_y] = self.rows[read_y];
            }
        }

        LineClear {
            board: out,
            rows: cleared,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
