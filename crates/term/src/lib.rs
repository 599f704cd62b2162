//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is then flushed to a terminal
//! backend, instead of going through a widget/layout framework.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render the hexagon layout with precise control over tile placement
//! - Restore the terminal reliably on exit

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use hex16384_core as core;
pub use hex16384_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
