//! Push button input

pub mod buttons;

pub use buttons::{Button, EdgeDetector, PaddleButtons};
