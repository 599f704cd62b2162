//! Hexagonal 16384 (workspace facade crate).
//!
//! This package keeps a stable `hex16384::{core,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use hex16384_core as core;
pub use hex16384_input as input;
pub use hex16384_term as term;
pub use hex16384_types as types;
