//! Fixed 5×7 result banners

use rally_core::game::geometry::{COLUMNS, ROWS};
use rally_core::traits::PixelDisplay;
use rally_core::Outcome;

/// One row bitmask per column, bit 0 is the bottom row
pub type Glyph = [u8; COLUMNS as usize];

/// "W"
pub const WON: Glyph = [0b111_1111, 0b000_0010, 0b000_1100, 0b000_0010, 0b111_1111];

/// "L"
pub const LOST: Glyph = [0b111_1111, 0b000_0001, 0b000_0001, 0b000_0001, 0b000_0001];

pub fn outcome_glyph(outcome: Outcome) -> &'static Glyph {
    match outcome {
        Outcome::Won => &WON,
        Outcome::Lost => &LOST,
    }
}

/// Replace the display contents with a glyph
pub fn draw_glyph<D: PixelDisplay>(display: &mut D, glyph: &Glyph) {
    display.clear();
    for (column, bits) in (0..COLUMNS).zip(glyph.iter()) {
        for row in 0..ROWS {
            if bits & (1 << row) != 0 {
                display.set_pixel(column, row, true);
            }
        }
    }
}
