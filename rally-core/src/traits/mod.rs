//! Hardware abstraction traits
//!
//! These traits define the interface between the game logic and the
//! board-specific link, timer, display and input implementations.

pub mod channel;
pub mod clock;
pub mod display;
pub mod input;

pub use channel::{Channel, ChannelError};
pub use clock::Clock;
pub use display::PixelDisplay;
pub use input::{PaddleInput, PaddleMove};
