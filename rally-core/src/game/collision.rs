//! Paddle and wall collision rules

use rally_protocol::{Direction, Heading, Vertical};

use super::geometry::{BOTTOM_ROW, TOP_ROW};
use super::paddle::Span;

/// Where on the paddle the ball landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Impact {
    Bottom,
    Middle,
    Top,
    Miss,
}

/// Classify a row against the paddle span
pub const fn classify(row: i8, span: Span) -> Impact {
    if row == span.bottom {
        Impact::Bottom
    } else if row == span.top {
        Impact::Top
    } else if span.bottom < row && row < span.top {
        Impact::Middle
    } else {
        Impact::Miss
    }
}

/// Impact for a westbound ball that has just stepped onto the paddle column
///
/// A level ball is judged by the row it arrived on; a diagonal ball by the
/// row it came from.
pub const fn impact_point(direction: Direction, old_row: i8, new_row: i8, span: Span) -> Impact {
    match direction.vertical() {
        Vertical::Level => classify(new_row, span),
        Vertical::North | Vertical::South => classify(old_row, span),
    }
}

/// Outcome of a paddle hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Deflection {
    pub direction: Direction,
    pub row: i8,
    /// Added to the velocity before clamping
    pub speed_up: u8,
}

/// Resolve a paddle collision for a westbound ball
///
/// Returns `None` on a miss. Eastbound headings never reach the paddle and
/// also return `None`.
pub fn deflect(direction: Direction, impact: Impact, old_row: i8, new_row: i8) -> Option<Deflection> {
    if direction.heading() != Heading::Westbound {
        return None;
    }

    let hit = |direction, row, speed_up| {
        Some(Deflection {
            direction,
            row,
            speed_up,
        })
    };

    match (direction.vertical(), impact) {
        (_, Impact::Miss) => None,

        (Vertical::Level, Impact::Middle) => hit(Direction::East, new_row, 0),
        (Vertical::Level, Impact::Top) => hit(Direction::NorthEast, new_row + 1, 0),
        (Vertical::Level, Impact::Bottom) => hit(Direction::SouthEast, new_row - 1, 0),

        (Vertical::North | Vertical::South, Impact::Middle) => hit(Direction::East, old_row, 0),

        (Vertical::South, Impact::Top) => hit(Direction::SouthEast, new_row, 1),
        (Vertical::South, Impact::Bottom) => hit(Direction::SouthEast, new_row, 2),
        (Vertical::North, Impact::Top) => hit(Direction::NorthEast, new_row, 2),
        (Vertical::North, Impact::Bottom) => hit(Direction::NorthEast, new_row, 1),
    }
}

/// Bounce a ball that has stepped past the top or bottom row
///
/// Rows already on the board pass through unchanged.
pub const fn reflect_off_walls(row: i8, direction: Direction) -> (i8, Direction) {
    if row < BOTTOM_ROW {
        let direction = match direction.vertical() {
            Vertical::South => direction.reflect_vertical(),
            _ => direction,
        };
        (BOTTOM_ROW + 1, direction)
    } else if row > TOP_ROW {
        let direction = match direction.vertical() {
            Vertical::North => direction.reflect_vertical(),
            _ => direction,
        };
        (TOP_ROW - 1, direction)
    } else {
        (row, direction)
    }
}
