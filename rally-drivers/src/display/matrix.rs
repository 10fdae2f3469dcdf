//! Row/column multiplexed LED matrix
//!
//! Only one column is lit at a time. Each refresh turns the current column
//! off, drives the row lines for the next column from the frame buffer and
//! turns that column on, so the display task rate divided by the column
//! count is the visible frame rate.

use embedded_hal::digital::OutputPin;
use rally_core::game::geometry::{COLUMNS, ROWS};
use rally_core::traits::PixelDisplay;

const COLUMN_COUNT: usize = COLUMNS as usize;
const ROW_COUNT: usize = ROWS as usize;

/// Pixel state, one row bitmask per column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameBuffer {
    columns: [u8; COLUMN_COUNT],
}

impl FrameBuffer {
    pub const fn new() -> Self {
        Self {
            columns: [0; COLUMN_COUNT],
        }
    }

    /// Set a pixel; coordinates off the matrix are ignored
    pub fn set(&mut self, column: u8, row: u8, on: bool) {
        if row >= ROWS {
            return;
        }
        let Some(bits) = self.columns.get_mut(column as usize) else {
            return;
        };
        if on {
            *bits |= 1 << row;
        } else {
            *bits &= !(1 << row);
        }
    }

    pub fn is_lit(&self, column: u8, row: u8) -> bool {
        row < ROWS
            && self
                .columns
                .get(column as usize)
                .is_some_and(|bits| bits & (1 << row) != 0)
    }

    /// Row bitmask for one column, bit 0 is the bottom row
    pub fn column_bits(&self, column: u8) -> u8 {
        self.columns.get(column as usize).copied().unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.columns = [0; COLUMN_COUNT];
    }
}

/// Electrical level that turns an LED line on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    High,
    Low,
}

fn drive<P: OutputPin>(pin: &mut P, level: ActiveLevel, on: bool) -> Result<(), P::Error> {
    match (level, on) {
        (ActiveLevel::High, true) | (ActiveLevel::Low, false) => pin.set_high(),
        (ActiveLevel::High, false) | (ActiveLevel::Low, true) => pin.set_low(),
    }
}

/// LED matrix driven directly from GPIO
pub struct LedMatrix<P> {
    rows: [P; ROW_COUNT],
    columns: [P; COLUMN_COUNT],
    row_level: ActiveLevel,
    column_level: ActiveLevel,
    frame: FrameBuffer,
    scan: u8,
}

impl<P: OutputPin> LedMatrix<P> {
    /// Create a matrix with every line off
    ///
    /// `rows[0]` is the bottom row and `columns[0]` the column next to the
    /// peer board.
    pub fn new(
        rows: [P; ROW_COUNT],
        columns: [P; COLUMN_COUNT],
        row_level: ActiveLevel,
        column_level: ActiveLevel,
    ) -> Result<Self, P::Error> {
        let mut matrix = Self {
            rows,
            columns,
            row_level,
            column_level,
            frame: FrameBuffer::new(),
            scan: 0,
        };
        for pin in matrix.rows.iter_mut() {
            drive(pin, row_level, false)?;
        }
        for pin in matrix.columns.iter_mut() {
            drive(pin, column_level, false)?;
        }
        Ok(matrix)
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Column lit by the most recent refresh
    pub fn scan_column(&self) -> u8 {
        (self.scan + COLUMNS - 1) % COLUMNS
    }

    /// Advance the scan by one column
    pub fn try_refresh(&mut self) -> Result<(), P::Error> {
        let previous = self.scan_column() as usize;
        drive(&mut self.columns[previous], self.column_level, false)?;

        let bits = self.frame.column_bits(self.scan);
        for (row, pin) in self.rows.iter_mut().enumerate() {
            drive(pin, self.row_level, bits & (1 << row) != 0)?;
        }

        drive(&mut self.columns[self.scan as usize], self.column_level, true)?;
        self.scan = (self.scan + 1) % COLUMNS;
        Ok(())
    }
}

impl<P: OutputPin> PixelDisplay for LedMatrix<P> {
    fn set_pixel(&mut self, column: u8, row: u8, on: bool) {
        self.frame.set(column, row, on);
    }

    fn clear(&mut self) {
        self.frame.clear();
    }

    fn refresh(&mut self) {
        // a failed line just leaves this column dark until the next pass
        let _ = self.try_refresh();
    }
}
