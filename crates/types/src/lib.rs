//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, terminal rendering, tests).
//!
//! # Board Shape
//!
//! The board is a hexagon flattened into five rows of uneven width:
//!
//! | Row | Width | Flat offset |
//! |-----|-------|-------------|
//! | 0 | 3 | 0 |
//! | 1 | 4 | 3 |
//! | 2 | 5 | 7 |
//! | 3 | 4 | 12 |
//! | 4 | 3 | 16 |
//!
//! 19 cells total. Row widths never change after construction.
//!
//! # Examples
//!
//! ```
//! use hex16384_types::{Direction, Outcome, CELL_COUNT, ROW_WIDTHS};
//!
//! assert_eq!(ROW_WIDTHS.iter().sum::<usize>(), CELL_COUNT);
//!
//! let parsed = Direction::from_str("upRight").unwrap();
//! assert_eq!(parsed, Direction::UpRight);
//!
//! assert!(!Outcome::Ongoing.is_terminal());
//! assert!(Outcome::Won.is_terminal());
//! ```

/// Number of rows on the board
pub const ROW_COUNT: usize = 5;

/// Cells per row, top to bottom
pub const ROW_WIDTHS: [usize; ROW_COUNT] = [3, 4, 5, 4, 3];

/// Flat-array offset of each row (prefix sums of `ROW_WIDTHS`)
pub const ROW_OFFSETS: [usize; ROW_COUNT] = [0, 3, 7, 12, 16];

/// Total number of cells on the board
pub const CELL_COUNT: usize = 19;

/// A tile value. `0` means the cell is empty; every non-zero value is a
/// power of two.
pub type Tile = u32;

/// Reaching this tile value wins the game
pub const WIN_TILE: Tile = 16384;

/// One spawned tile in this many is a 4; the rest are 2s
pub const SPAWN_FOUR_ODDS: u32 = 10;

/// The six sliding directions on the hexagonal board
///
/// Every direction reduces to the canonical "slide right" primitive by
/// rotating the board a fixed number of steps first and rotating back after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
}

impl Direction {
    /// All six directions, in loss-check order
    pub const ALL: [Direction; 6] = [
        Direction::Right,
        Direction::Left,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use hex16384_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("right"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("downLeft"), Some(Direction::DownLeft));
    /// assert_eq!(Direction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "right" => Some(Direction::Right),
            "left" => Some(Direction::Left),
            "upright" => Some(Direction::UpRight),
            "upleft" => Some(Direction::UpLeft),
            "downright" => Some(Direction::DownRight),
            "downleft" => Some(Direction::DownLeft),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::UpRight => "upRight",
            Direction::UpLeft => "upLeft",
            Direction::DownRight => "downRight",
            Direction::DownLeft => "downLeft",
        }
    }
}

/// Game actions that can be applied to the engine
///
/// The input layer decodes raw key codes into these once at the boundary;
/// the engine never sees key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles toward the named direction, merging equal neighbors
    Shift(Direction),
    /// Rotate the whole board one hex step clockwise (debug control)
    Rotate,
}

/// Terminal-state classification of the game
///
/// `Won` and `Lost` are terminal: once reached, no further grid mutation
/// is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Ongoing,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}
