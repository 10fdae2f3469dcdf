//! Peer link

pub mod serial;

pub use serial::SerialLink;
