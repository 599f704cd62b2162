//! Ring rotation - the sole geometric primitive on the hex board
//!
//! The 19 cells decompose into two concentric rings plus a fixed center:
//! an outer ring of 12 cells and an inner ring of 6 cells, each enumerated
//! clockwise. One rotation step (60 degrees) shifts the outer ring by 2
//! positions and the inner ring by 1, with the value falling off the end of
//! a ring re-entering at its start. Six steps restore the identity.

use arrayvec::ArrayVec;

use crate::board::HexBoard;
use crate::types::Tile;

/// Outer ring (row, col) coordinates in clockwise order
pub const OUTER_RING: [(usize, usize); 12] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 3),
    (2, 4),
    (3, 3),
    (4, 2),
    (4, 1),
    (4, 0),
    (3, 0),
    (2, 0),
    (1, 0),
];

/// Inner ring (row, col) coordinates in clockwise order
pub const INNER_RING: [(usize, usize); 6] = [(1, 1), (1, 2), (2, 3), (3, 2), (3, 1), (2, 1)];

/// Positions the outer ring advances per rotation step
const OUTER_STEP: usize = 2;

/// Positions the inner ring advances per rotation step
const INNER_STEP: usize = 1;

/// Apply one discrete hex-rotation step to the whole board
pub fn rotate(board: &mut HexBoard, counterclockwise: bool) {
    rotate_ring(board, &OUTER_RING, OUTER_STEP, counterclockwise);
    rotate_ring(board, &INNER_RING, INNER_STEP, counterclockwise);
}

/// Cyclically shift the values along one ring by `step` positions
fn rotate_ring(
    board: &mut HexBoard,
    coords: &[(usize, usize)],
    step: usize,
    counterclockwise: bool,
) {
    let n = coords.len();
    let mut shifted: ArrayVec<Tile, 12> = ArrayVec::new();
    for i in 0..n {
        // Clockwise moves values forward along the coordinate list.
        let src = if counterclockwise {
            (i + step) % n
        } else {
            (i + n - step) % n
        };
        let (row, col) = coords[src];
        shifted.push(board.tile(row, col));
    }
    for (i, &(row, col)) in coords.iter().enumerate() {
        board.set_tile(row, col, shifted[i]);
    }
}
