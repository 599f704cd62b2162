//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management for the
//! hexagonal 16384 puzzle. It has **zero dependencies** on UI or I/O:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, headless)
//! - **Fast**: Zero-allocation hot paths for move processing
//!
//! # Module Structure
//!
//! - [`board`]: the 19-cell hexagonal grid (five rows of widths 3/4/5/4/3)
//! - [`rings`]: one-step board rotation over the outer/inner cell rings
//! - [`slide`]: the canonical slide-right add/move passes with scoring
//! - [`moves`]: six-direction moves via rotate/slide/counter-rotate, plus
//!   trial moves on grid copies
//! - [`game_state`]: score accumulation, tile spawning, win/loss evaluation
//! - [`rng`]: seedable LCG for deterministic tile spawning
//! - [`snapshot`]: render-facing copies of the observable state
//!
//! # Game Rules
//!
//! - Tiles slide in six directions and merge by powers of two; every merge
//!   adds the doubled value to the score.
//! - After any move that changed the grid, one random empty cell becomes a
//!   2 (or a 4, one time in ten).
//! - Reaching a 16384 tile wins. The game is lost when the grid is full and
//!   no direction can change it, decided by simulating all six moves on a
//!   copy of the grid.
//!
//! # Example
//!
//! ```
//! use hex16384_core::HexGame;
//! use hex16384_types::{Direction, GameAction, Outcome};
//!
//! // Create and start a game (seeds the two initial tiles).
//! let mut game = HexGame::new(12345);
//! game.start();
//!
//! // One turn: move, then evaluate (spawn + win/loss check).
//! let moved = game.apply_action(GameAction::Shift(Direction::Right));
//! let outcome = game.evaluate(moved);
//! assert_eq!(outcome, Outcome::Ongoing);
//! ```

pub mod board;
pub mod game_state;
pub mod moves;
pub mod rings;
pub mod rng;
pub mod slide;
pub mod snapshot;

pub use hex16384_types as types;

// Re-export commonly used types for convenience
pub use board::HexBoard;
pub use game_state::HexGame;
pub use moves::{any_move_possible, shift, trial_shift};
pub use rings::rotate;
pub use rng::SimpleRng;
pub use slide::{slide_right, SlideOutcome};
pub use snapshot::GameSnapshot;
