//! Coordinate transform between the two facing boards
//!
//! The boards face each other, so a ball leaving one board's east edge enters
//! the other board travelling west, and the row axes point in opposite
//! physical directions. Rows are mirrored as `LAST_ROW - row`, then diagonals
//! are nudged one row so that the entry corner on the receiving board lines up
//! with the exit corner on the sending board.

use crate::direction::Direction;
use crate::wire::{Handoff, LAST_ROW};

/// Ball state in the receiving board's coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Arrival {
    /// May sit one row outside the board for corner entries; the first
    /// update moves it back on.
    pub row: i8,
    pub velocity: u8,
    pub direction: Direction,
}

/// Row nudge applied after mirroring, keyed on the heading being converted
const fn corner_shift(direction: Direction) -> i8 {
    match direction {
        Direction::SouthEast | Direction::NorthWest => -1,
        Direction::NorthEast | Direction::SouthWest => 1,
        Direction::East | Direction::West => 0,
    }
}

/// Convert a (row, heading) pair to the facing board's coordinates
///
/// Applying this twice returns the original pair.
pub const fn to_peer(row: i8, direction: Direction) -> (i8, Direction) {
    (
        LAST_ROW as i8 - row + corner_shift(direction),
        direction.mirrored(),
    )
}

impl Handoff {
    /// The ball as the receiving board sees it
    pub fn arrival(&self) -> Arrival {
        let (row, direction) = to_peer(self.row as i8, self.direction);
        Arrival {
            row,
            velocity: self.velocity,
            direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_east_becomes_west_with_mirrored_row() {
        let handoff = Handoff::new(1, 3, Direction::East).unwrap();
        let arrival = handoff.arrival();
        assert_eq!(arrival.direction, Direction::West);
        assert_eq!(arrival.row, 5);
        assert_eq!(arrival.velocity, 3);
    }

    #[test]
    fn test_south_east_becomes_north_west_one_row_lower() {
        let arrival = Handoff::new(2, 1, Direction::SouthEast).unwrap().arrival();
        assert_eq!(arrival.direction, Direction::NorthWest);
        assert_eq!(arrival.row, 6 - 2 - 1);
    }

    #[test]
    fn test_north_east_becomes_south_west_one_row_higher() {
        let arrival = Handoff::new(2, 1, Direction::NorthEast).unwrap().arrival();
        assert_eq!(arrival.direction, Direction::SouthWest);
        assert_eq!(arrival.row, 6 - 2 + 1);
    }

    #[test]
    fn test_corner_entry_may_sit_off_board() {
        let arrival = Handoff::new(6, 1, Direction::SouthEast).unwrap().arrival();
        assert_eq!(arrival.row, -1);
        let arrival = Handoff::new(0, 1, Direction::NorthEast).unwrap().arrival();
        assert_eq!(arrival.row, 7);
    }

    proptest! {
        #[test]
        fn prop_to_peer_is_involution(row in 0i8..=6, index in 0usize..6) {
            let direction = Direction::ALL[index];
            let there = to_peer(row, direction);
            let back = to_peer(there.0, there.1);
            prop_assert_eq!(back, (row, direction));
        }

        #[test]
        fn prop_east_row_mirrors(row in 0u8..=LAST_ROW) {
            let arrival = Handoff::new(row, 1, Direction::East).unwrap().arrival();
            prop_assert_eq!(arrival.direction, Direction::West);
            prop_assert_eq!(arrival.row, (LAST_ROW - row) as i8);
            let (home_row, home_dir) = to_peer(arrival.row, arrival.direction);
            prop_assert_eq!(home_dir, Direction::East);
            prop_assert_eq!(home_row, row as i8);
        }
    }
}
