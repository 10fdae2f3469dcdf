//! Board coordinates
//!
//! Columns run 0-4 with the paddle on column 4 and the peer board beyond
//! column 0. Rows run 0-6 from bottom to top. Coordinates are signed so a
//! ball can sit one step outside the board while it is being resolved.

use rally_protocol::LAST_ROW;

/// Number of LED columns
pub const COLUMNS: u8 = 5;

/// Number of LED rows
pub const ROWS: u8 = LAST_ROW + 1;

pub const BOTTOM_ROW: i8 = 0;
pub const TOP_ROW: i8 = LAST_ROW as i8;

/// Column the local paddle occupies
pub const PADDLE_COLUMN: i8 = 4;

/// A ball reaching this column leaves for the peer board
pub const TRANSMIT_COLUMN: i8 = -1;

/// Column a received ball appears on
pub const RECEPTION_COLUMN: i8 = 0;

/// A ball reaching this column got past the paddle
pub const LOST_COLUMN: i8 = PADDLE_COLUMN + 1;

/// Cell on the board, possibly just outside it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    pub column: i8,
    pub row: i8,
}

impl Position {
    /// Marker for "no previous cell"
    pub const OFF_BOARD: Position = Position { column: -1, row: -1 };

    pub const fn new(column: i8, row: i8) -> Self {
        Self { column, row }
    }

    pub const fn is_on_board(&self) -> bool {
        self.column >= 0
            && self.column < COLUMNS as i8
            && self.row >= BOTTOM_ROW
            && self.row <= TOP_ROW
    }

    /// Display coordinates, if the cell is on the board
    pub fn pixel(&self) -> Option<(u8, u8)> {
        if self.is_on_board() {
            Some((self.column as u8, self.row as u8))
        } else {
            None
        }
    }
}
