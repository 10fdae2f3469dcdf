//! Board-agnostic core logic for the Rally firmware
//!
//! This crate contains all game logic that does not depend on specific
//! hardware implementations:
//!
//! - Hardware abstraction traits (link, clock, display, paddle input)
//! - Cooperative task scheduler
//! - Ball, paddle and collision rules
//! - Pre-match role negotiation
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// must stay first so the logging macros are visible to every module
mod fmt;

pub mod config;
pub mod game;
pub mod handshake;
pub mod scheduler;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use game::{game_schedule, GameTask, Match, Outcome};
pub use handshake::{negotiate, Role};
