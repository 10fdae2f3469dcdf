//! Configuration types
//!
//! Board-agnostic match timing configuration. The firmware generates its
//! instance from `game.toml` at build time.

pub mod types;

pub use types::*;
