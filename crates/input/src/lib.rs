//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] values once at
//! the boundary; the engine never sees raw key codes. Unrecognized keys map
//! to nothing and must not trigger a spawn.

pub mod map;

pub use hex16384_types as types;

pub use map::{handle_key_event, should_quit};
