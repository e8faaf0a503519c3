//! Snapshot of the board for the presentation layer.
//!
//! The core does not render; it exposes a flat u8 grid of cell codes that
//! a visual layer can poll after each tick.

use crate::core::board::Board;

/// Point-in-time copy of the board occupancy as cell codes.
///
/// Zero is an empty cell; non-zero codes come from `TileKind::cell_code`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    width: u8,
    height: u8,
    cells: Vec<u8>,
}

impl BoardSnapshot {
    pub fn capture(board: &Board) -> Self {
        let mut cells = Vec::new();
        board.write_cell_codes(&mut cells);
        Self {
            width: board.width(),
            height: board.height(),
            cells,
        }
    }

    /// Refresh in place, reusing the cell buffer.
    pub fn recapture(&mut self, board: &Board) {
        self.width = board.width();
        self.height = board.height();
        board.write_cell_codes(&mut self.cells);
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell code at (x, y); None if out of bounds.
    pub fn get(&self, x: u8, y: u8) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[usize::from(y) * usize::from(self.width) + usize::from(x)])
    }

    /// Row-major cell codes, one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(usize::from(self.width).max(1))
    }
}
