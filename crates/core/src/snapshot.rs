//! Render-facing copy of the game state.
//!
//! Observers (the terminal view, tests) read snapshots instead of borrowing
//! the live game, keeping the engine free to mutate between frames.

use crate::types::{Outcome, Tile, CELL_COUNT, ROW_OFFSETS, ROW_WIDTHS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    /// All 19 tile values, rows concatenated top to bottom
    pub cells: [Tile; CELL_COUNT],
    pub score: u32,
    pub outcome: Outcome,
    pub seed: u32,
}

impl GameSnapshot {
    /// Borrow one row of the snapshot as a slice
    pub fn row(&self, row: usize) -> &[Tile] {
        let start = ROW_OFFSETS[row];
        &self.cells[start..start + ROW_WIDTHS[row]]
    }

    pub fn playable(&self) -> bool {
        !self.outcome.is_terminal()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cells: [0; CELL_COUNT],
            score: 0,
            outcome: Outcome::Ongoing,
            seed: 0,
        }
    }
}
