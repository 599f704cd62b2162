//! Board module - manages the hexagonal grid
//!
//! The board is a hexagon flattened into five rows of widths 3/4/5/4/3.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..4 (top to bottom) and col
//! ranges over that row's width, left to right. A cell holds a tile value;
//! `0` denotes empty.

use arrayvec::ArrayVec;

use crate::types::{Tile, CELL_COUNT, ROW_COUNT, ROW_OFFSETS, ROW_WIDTHS};

/// The hexagonal game board - 19 cells using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexBoard {
    /// Flat array of tiles, rows concatenated top to bottom
    cells: [Tile; CELL_COUNT],
}

impl HexBoard {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Create a board from a flat cell array (rows concatenated top to bottom)
    pub fn from_cells(cells: [Tile; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= ROW_COUNT || col >= ROW_WIDTHS[row] {
            return None;
        }
        Some(ROW_OFFSETS[row] + col)
    }

    /// Width of a row, or 0 for an out-of-range row
    pub fn row_width(row: usize) -> usize {
        if row < ROW_COUNT {
            ROW_WIDTHS[row]
        } else {
            0
        }
    }

    /// Get tile at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set tile at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Set tile by flat index (as returned by [`HexBoard::empty_cells`])
    pub fn set_index(&mut self, idx: usize, tile: Tile) -> bool {
        match self.cells.get_mut(idx) {
            Some(cell) => {
                *cell = tile;
                true
            }
            None => false,
        }
    }

    /// Borrow one row as a slice
    ///
    /// # Panics
    ///
    /// Panics if `row >= ROW_COUNT`.
    pub fn row(&self, row: usize) -> &[Tile] {
        let start = ROW_OFFSETS[row];
        &self.cells[start..start + ROW_WIDTHS[row]]
    }

    /// Borrow one row as a mutable slice
    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [Tile] {
        let start = ROW_OFFSETS[row];
        &mut self.cells[start..start + ROW_WIDTHS[row]]
    }

    /// Infallible accessor for coordinates known to be on the board
    /// (ring tables, row scans)
    #[inline(always)]
    pub(crate) fn tile(&self, row: usize, col: usize) -> Tile {
        debug_assert!(row < ROW_COUNT && col < ROW_WIDTHS[row]);
        self.cells[ROW_OFFSETS[row] + col]
    }

    #[inline(always)]
    pub(crate) fn set_tile(&mut self, row: usize, col: usize, tile: Tile) {
        debug_assert!(row < ROW_COUNT && col < ROW_WIDTHS[row]);
        self.cells[ROW_OFFSETS[row] + col] = tile;
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Tile; CELL_COUNT] {
        &self.cells
    }

    /// Collect the flat indices of all empty cells, zero-allocation
    pub fn empty_cells(&self) -> ArrayVec<usize, CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &tile)| tile == 0)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Check whether any cell holds the given value
    pub fn contains(&self, value: Tile) -> bool {
        self.cells.iter().any(|&tile| tile == value)
    }

    /// Check whether no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&tile| tile != 0)
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [0; CELL_COUNT];
    }
}

impl Default for HexBoard {
    fn default() -> Self {
        Self::new()
    }
}
