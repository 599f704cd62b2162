//! Slide module - the canonical "slide right" primitive
//!
//! Every one of the six directional moves reduces to sliding right after a
//! rotation (see [`crate::moves`]). Each row alternates two passes until
//! stable:
//!
//! - *add pass*: scan right-to-left, merging a cell into an equal right
//!   neighbor (the right cell doubles, the left empties). A freshly doubled
//!   tile is never re-merged within the same pass.
//! - *move pass*: scan left-to-right, shifting each tile one step into an
//!   empty right neighbor (single-step gravity, not full compaction).
//!
//! The passes repeat while movement continues and no merge has happened;
//! after a merge, exactly one more move pass closes the resulting gap.
//!
//! Scoring is returned, not applied: the caller decides whether the gained
//! value reaches the live score or is discarded (trial moves).

use crate::board::HexBoard;
use crate::types::{Tile, ROW_COUNT};

/// Result of one slide over the whole board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideOutcome {
    /// Whether any row saw at least one merge or shift
    pub moved: bool,
    /// Sum of the doubled values created by merges
    pub gained: u32,
}

/// Slide every row toward its right edge, merging equal neighbors
pub fn slide_right(board: &mut HexBoard) -> SlideOutcome {
    let mut outcome = SlideOutcome::default();

    for row in 0..ROW_COUNT {
        let cells = board.row_mut(row);
        let mut added = false;
        let mut moved = true;

        while moved && !added {
            let (merged, gained) = add_pass(cells);
            added = merged;
            outcome.gained += gained;
            moved = move_pass(cells);
            if added || moved {
                outcome.moved = true;
            }
        }
        if added {
            // One extra shift to close the gap the merge opened.
            move_pass(cells);
        }
    }

    outcome
}

/// Merge equal neighbors right-to-left; returns (merged, value gained)
fn add_pass(row: &mut [Tile]) -> (bool, u32) {
    let mut added = false;
    let mut gained = 0;

    let mut x = row.len() - 1;
    while x > 0 {
        if row[x] != 0 && row[x - 1] == row[x] {
            row[x] *= 2;
            row[x - 1] = 0;
            gained += row[x];
            added = true;
        }
        x -= 1;
    }

    (added, gained)
}

/// Shift tiles one step right into empty neighbors; returns whether any moved
fn move_pass(row: &mut [Tile]) -> bool {
    let mut moved = false;

    for x in 0..row.len() - 1 {
        if row[x] != 0 && row[x + 1] == 0 {
            row[x + 1] = row[x];
            row[x] = 0;
            moved = true;
        }
    }

    moved
}
