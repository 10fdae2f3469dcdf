//! Player paddle

use super::geometry::{BOTTOM_ROW, TOP_ROW};
use crate::traits::PaddleMove;

/// Rows covered by the paddle beyond its bottom row
pub const PADDLE_REACH: i8 = 2;

/// Bottom row of a fresh paddle
pub const STARTING_BOTTOM: i8 = 2;

/// Rows covered by the paddle, inclusive at both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Span {
    pub bottom: i8,
    pub top: i8,
}

impl Span {
    pub const fn from_bottom(bottom: i8) -> Self {
        Self {
            bottom,
            top: bottom + PADDLE_REACH,
        }
    }

    pub const fn contains(&self, row: i8) -> bool {
        self.bottom <= row && row <= self.top
    }

    pub const fn is_on_board(&self) -> bool {
        self.bottom >= BOTTOM_ROW && self.top <= TOP_ROW
    }

    /// Every covered row, bottom first
    pub fn rows(&self) -> impl Iterator<Item = i8> {
        self.bottom..=self.top
    }

    const fn shifted(&self, delta: i8) -> Self {
        Self {
            bottom: self.bottom + delta,
            top: self.top + delta,
        }
    }
}

/// Paddle position before and after the latest move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Paddle {
    old: Span,
    new: Span,
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new()
    }
}

impl Paddle {
    pub const fn new() -> Self {
        let start = Span::from_bottom(STARTING_BOTTOM);
        Self {
            old: start,
            new: start,
        }
    }

    /// Current span
    pub const fn span(&self) -> Span {
        self.new
    }

    /// Span before the latest successful move
    pub const fn previous(&self) -> Span {
        self.old
    }

    /// Move one row if the paddle stays on the board
    ///
    /// Returns false, leaving the paddle untouched, when the move would push
    /// it past the top or bottom row.
    pub fn shift(&mut self, movement: PaddleMove) -> bool {
        let moved = self.new.shifted(movement.row_delta());
        if !moved.is_on_board() {
            return false;
        }
        self.old = self.new;
        self.new = moved;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_span() {
        let paddle = Paddle::new();
        assert_eq!(paddle.span(), Span { bottom: 2, top: 4 });
    }

    #[test]
    fn test_shift_moves_both_ends() {
        let mut paddle = Paddle::new();
        assert!(paddle.shift(PaddleMove::TowardTop));
        assert_eq!(paddle.span(), Span { bottom: 3, top: 5 });
        assert_eq!(paddle.previous(), Span { bottom: 2, top: 4 });
    }

    #[test]
    fn test_shift_stops_at_edges() {
        let mut paddle = Paddle::new();
        while paddle.shift(PaddleMove::TowardTop) {}
        assert_eq!(paddle.span().top, TOP_ROW);
        let before = paddle;
        assert!(!paddle.shift(PaddleMove::TowardTop));
        assert_eq!(paddle, before);

        while paddle.shift(PaddleMove::TowardBottom) {}
        assert_eq!(paddle.span().bottom, BOTTOM_ROW);
        assert!(!paddle.shift(PaddleMove::TowardBottom));
        assert_eq!(paddle.span(), Span { bottom: 0, top: 2 });
    }

    #[test]
    fn test_span_contains() {
        let span = Span::from_bottom(1);
        assert!(!span.contains(0));
        assert!(span.contains(1));
        assert!(span.contains(3));
        assert!(!span.contains(4));
        assert_eq!(span.rows().count(), 3);
    }
}
