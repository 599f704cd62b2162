//! Moves module - direction plumbing over the slide primitive
//!
//! A move in any of the six directions is: rotate the board by the
//! direction's fixed step count, slide right, rotate back the same number of
//! steps in the opposite sense. Trial moves run on a copy and never touch
//! live state or score.

use crate::board::HexBoard;
use crate::rings::rotate;
use crate::slide::{slide_right, SlideOutcome};
use crate::types::Direction;

/// Rotation prelude for a direction: (steps, counterclockwise)
fn rotation_steps(direction: Direction) -> (usize, bool) {
    match direction {
        Direction::Right => (0, false),
        Direction::Left => (3, false),
        Direction::UpRight => (1, false),
        Direction::UpLeft => (2, false),
        Direction::DownRight => (1, true),
        Direction::DownLeft => (2, true),
    }
}

/// Slide all tiles toward `direction`, merging equal neighbors
///
/// The gained score is returned to the caller; this function never touches
/// any score state itself.
pub fn shift(board: &mut HexBoard, direction: Direction) -> SlideOutcome {
    let (steps, counterclockwise) = rotation_steps(direction);

    for _ in 0..steps {
        rotate(board, counterclockwise);
    }
    let outcome = slide_right(board);
    for _ in 0..steps {
        rotate(board, !counterclockwise);
    }

    outcome
}

/// Simulate a move on a copy of the grid; reports only whether it would move
pub fn trial_shift(board: &HexBoard, direction: Direction) -> bool {
    let mut copy = *board;
    shift(&mut copy, direction).moved
}

/// Whether at least one of the six directions can still change the board
pub fn any_move_possible(board: &HexBoard) -> bool {
    Direction::ALL
        .iter()
        .any(|&direction| trial_shift(board, direction))
}
