//! Board-to-board link protocol
//!
//! This crate defines the half-duplex serial protocol between the two boards.
//! Every message is a single byte with no framing:
//!
//! ```text
//! ┌─────────┬──────────────┬────────────────┐
//! │ ROW     │ VELOCITY - 1 │ DIRECTION CODE │
//! │ 3 bits  │ 2 bits       │ 3 bits         │
//! └─────────┴──────────────┴────────────────┘
//! ```
//!
//! A byte either hands the ball to the peer or, as the reserved value `0xFF`,
//! tells the peer that the sender lost. Because the boards face each other,
//! the receiver converts the sender's coordinates with
//! [`orientation::to_peer`] before use.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod direction;
pub mod handshake;
pub mod orientation;
pub mod wire;

pub use direction::{Direction, Heading, Vertical};
pub use handshake::HandshakeByte;
pub use orientation::{to_peer, Arrival};
pub use wire::{
    encode_raw, Handoff, WireError, WireMessage, LAST_ROW, LOST_SENTINEL, MAX_VELOCITY,
    MIN_VELOCITY,
};
