//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in rally-core on top of `embedded-hal` pins and `embedded-io` ports:
//!
//! - Multiplexed 5×7 LED matrix and result glyphs
//! - Push buttons with press-edge detection
//! - Single-byte serial link to the peer board

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod input;
pub mod link;
