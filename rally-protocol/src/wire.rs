//! Single-byte ball handoff encoding
//!
//! Byte layout:
//! ```text
//! ┌─────────┬──────────────┬────────────────┐
//! │ 7     5 │ 4          3 │ 2            0 │
//! │ ROW     │ VELOCITY - 1 │ DIRECTION CODE │
//! └─────────┴──────────────┴────────────────┘
//! ```
//!
//! - ROW: row on the sending board, 0-6
//! - VELOCITY - 1: 0-3, i.e. velocity 1-4
//! - DIRECTION CODE: NE = 0, E = 1, SE = 2. Only eastbound headings leave a
//!   board, so westbound headings have no code.
//!
//! The loss sentinel `0xFF` carries row 7 and direction code 7, neither of
//! which a handoff can produce.

use crate::direction::Direction;

/// Highest row index on either board
pub const LAST_ROW: u8 = 6;

/// Slowest ball speed
pub const MIN_VELOCITY: u8 = 1;

/// Fastest ball speed
pub const MAX_VELOCITY: u8 = 4;

/// "I have lost; you have won"
pub const LOST_SENTINEL: u8 = 0xFF;

const ROW_SHIFT: u8 = 5;
const ROW_MASK: u8 = 0b111;
const VELOCITY_SHIFT: u8 = 3;
const VELOCITY_MASK: u8 = 0b11;
const DIRECTION_SHIFT: u8 = 0;
const DIRECTION_MASK: u8 = 0b111;

const CODE_NORTH_EAST: u8 = 0;
const CODE_EAST: u8 = 1;
const CODE_SOUTH_EAST: u8 = 2;

/// Errors from encoding or decoding a wire byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WireError {
    /// Row does not fit the board
    RowOutOfRange(u8),
    /// Velocity outside 1-4
    VelocityOutOfRange(u8),
    /// Westbound headings never cross the wire
    UnencodableDirection(Direction),
    /// Direction field holds an unassigned code
    InvalidDirectionCode(u8),
}

/// Place a row into its bit field
pub const fn pack_row(row: u8) -> u8 {
    (row & ROW_MASK) << ROW_SHIFT
}

/// Extract the row bit field
pub const fn unpack_row(byte: u8) -> u8 {
    (byte >> ROW_SHIFT) & ROW_MASK
}

/// Place a velocity (1-4) into its bit field as velocity - 1
pub const fn pack_velocity(velocity: u8) -> u8 {
    (velocity.wrapping_sub(1) & VELOCITY_MASK) << VELOCITY_SHIFT
}

/// Extract the velocity bit field, restoring the 1-4 range
pub const fn unpack_velocity(byte: u8) -> u8 {
    ((byte >> VELOCITY_SHIFT) & VELOCITY_MASK) + 1
}

/// Place a direction code into its bit field
pub const fn pack_direction_code(code: u8) -> u8 {
    (code & DIRECTION_MASK) << DIRECTION_SHIFT
}

/// Extract the direction code bit field
pub const fn unpack_direction_code(byte: u8) -> u8 {
    (byte >> DIRECTION_SHIFT) & DIRECTION_MASK
}

/// Wire code for an eastbound heading
pub const fn direction_code(direction: Direction) -> Option<u8> {
    match direction {
        Direction::NorthEast => Some(CODE_NORTH_EAST),
        Direction::East => Some(CODE_EAST),
        Direction::SouthEast => Some(CODE_SOUTH_EAST),
        _ => None,
    }
}

/// Heading for a wire code
pub const fn direction_from_code(code: u8) -> Option<Direction> {
    match code {
        CODE_NORTH_EAST => Some(Direction::NorthEast),
        CODE_EAST => Some(Direction::East),
        CODE_SOUTH_EAST => Some(Direction::SouthEast),
        _ => None,
    }
}

/// Pack a validated (row, velocity, direction) triple
pub fn encode_raw(row: u8, velocity: u8, direction: Direction) -> Result<u8, WireError> {
    if row > LAST_ROW {
        return Err(WireError::RowOutOfRange(row));
    }
    if !(MIN_VELOCITY..=MAX_VELOCITY).contains(&velocity) {
        return Err(WireError::VelocityOutOfRange(velocity));
    }
    let code = direction_code(direction).ok_or(WireError::UnencodableDirection(direction))?;

    Ok(pack_row(row) | pack_velocity(velocity) | pack_direction_code(code))
}

/// Ball state as it leaves the sending board
///
/// All fields are in the sender's coordinates. Use
/// [`Handoff::arrival`](crate::orientation) to convert to the receiver's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Handoff {
    pub row: u8,
    pub velocity: u8,
    pub direction: Direction,
}

impl Handoff {
    /// Create a handoff, rejecting anything the byte cannot carry
    pub fn new(row: u8, velocity: u8, direction: Direction) -> Result<Self, WireError> {
        encode_raw(row, velocity, direction)?;
        Ok(Self {
            row,
            velocity,
            direction,
        })
    }

    /// Encode to the wire byte
    pub fn to_byte(&self) -> Result<u8, WireError> {
        encode_raw(self.row, self.velocity, self.direction)
    }
}

/// One message on the link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WireMessage {
    /// The ball crossed onto the receiving board
    Handoff(Handoff),
    /// The sender missed the ball
    Lost,
}

impl WireMessage {
    /// Encode to the wire byte
    pub fn to_byte(&self) -> Result<u8, WireError> {
        match self {
            WireMessage::Handoff(handoff) => handoff.to_byte(),
            WireMessage::Lost => Ok(LOST_SENTINEL),
        }
    }

    /// Parse a received byte
    ///
    /// The sentinel is checked first and never reaches field decoding.
    pub fn from_byte(byte: u8) -> Result<Self, WireError> {
        if byte == LOST_SENTINEL {
            return Ok(WireMessage::Lost);
        }

        let row = unpack_row(byte);
        if row > LAST_ROW {
            return Err(WireError::RowOutOfRange(row));
        }

        let code = unpack_direction_code(byte);
        let direction = direction_from_code(code).ok_or(WireError::InvalidDirectionCode(code))?;

        Ok(WireMessage::Handoff(Handoff {
            row,
            velocity: unpack_velocity(byte),
            direction,
        }))
    }
}
