//! Game state module - manages the complete game state
//!
//! This module ties together the board, the move plumbing, the RNG, and
//! scoring. It owns the only live grid; every simulation (loss detection)
//! runs on copies so the real grid and score are never touched.

use crate::board::HexBoard;
use crate::moves::{any_move_possible, shift};
use crate::rings::rotate;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, Outcome, Tile, SPAWN_FOUR_ODDS, WIN_TILE};

/// Complete game state: grid, score, outcome, and tile generator
#[derive(Debug, Clone)]
pub struct HexGame {
    board: HexBoard,
    score: u32,
    outcome: Outcome,
    rng: SimpleRng,
    seed: u32,
    started: bool,
}

impl HexGame {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: HexBoard::new(),
            score: 0,
            outcome: Outcome::Ongoing,
            rng: SimpleRng::new(seed),
            seed,
            started: false,
        }
    }

    /// Create a game over a prepared board (tests, scenarios)
    pub fn with_board(board: HexBoard, seed: u32) -> Self {
        Self {
            board,
            started: true,
            ..Self::new(seed)
        }
    }

    /// Start the game by seeding the two initial tiles
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.evaluate(true);
        self.evaluate(true);
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn board(&self) -> &HexBoard {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn game_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Apply an action to the live grid
    ///
    /// Returns whether any tile moved or merged. Directional shifts add
    /// merge values to the score; the debug rotate permutes the grid but
    /// reports no movement, so it never triggers a spawn.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over() {
            return false;
        }
        match action {
            GameAction::Shift(direction) => {
                let outcome = shift(&mut self.board, direction);
                self.score += outcome.gained;
                outcome.moved
            }
            GameAction::Rotate => {
                rotate(&mut self.board, false);
                false
            }
        }
    }

    /// Evaluate win/loss and conditionally spawn a tile
    ///
    /// Order matters and matches the rules exactly:
    /// 1. any cell at the win threshold wins immediately, with no spawn;
    /// 2. if `did_move` and an empty cell exists, one uniformly random
    ///    empty cell becomes 2 (or 4, one time in ten);
    /// 3. if the grid is now full and no simulated move in any of the six
    ///    directions can change it, the game is lost.
    ///
    /// Calling this with `did_move = true` on a full grid skips the spawn
    /// without error.
    pub fn evaluate(&mut self, did_move: bool) -> Outcome {
        if self.outcome.is_terminal() {
            return self.outcome;
        }

        if self.board.contains(WIN_TILE) {
            self.outcome = Outcome::Won;
            return self.outcome;
        }

        let mut blanks = self.board.empty_cells();
        if did_move && !blanks.is_empty() {
            let pick = self.rng.next_range(blanks.len() as u32) as usize;
            let value: Tile = if self.rng.next_range(SPAWN_FOUR_ODDS) == 0 {
                4
            } else {
                2
            };
            self.board.set_index(blanks[pick], value);
            blanks.swap_remove(pick);
        }

        if blanks.is_empty() && !any_move_possible(&self.board) {
            self.outcome = Outcome::Lost;
        }

        self.outcome
    }

    /// Copy the observable state for rendering
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cells: *self.board.cells(),
            score: self.score,
            outcome: self.outcome,
            seed: self.seed,
        }
    }
}
