//! Key mapping from terminal events to game actions.
//!
//! Reference bindings: the six directional keys sit on the keyboard the way
//! the directions sit on the hexagon (w/e above, a/d beside, z/x below),
//! plus `r` to rotate the whole board and `q` to quit.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Upper diagonals
        KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::Shift(Direction::UpLeft)),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(GameAction::Shift(Direction::UpRight)),

        // Horizontal
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::Shift(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::Shift(Direction::Right))
        }

        // Lower diagonals
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(GameAction::Shift(Direction::DownLeft)),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(GameAction::Shift(Direction::DownRight)),

        // Debug board rotation
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Rotate),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
