//! LED matrix display

pub mod glyph;
pub mod matrix;

pub use glyph::{draw_glyph, outcome_glyph, Glyph, LOST, WON};
pub use matrix::{ActiveLevel, FrameBuffer, LedMatrix};
