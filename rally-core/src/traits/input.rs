//! Paddle input events

/// Discrete request to move the paddle one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PaddleMove {
    TowardTop,
    TowardBottom,
}

impl PaddleMove {
    /// Row change for this move (top is the highest row)
    pub fn row_delta(self) -> i8 {
        match self {
            PaddleMove::TowardTop => 1,
            PaddleMove::TowardBottom => -1,
        }
    }
}

/// Source of paddle move events
///
/// Implementations report press edges only; holding a button must not
/// produce repeated events.
pub trait PaddleInput {
    /// Return the next pending move, if any
    fn poll_edge(&mut self) -> Option<PaddleMove>;
}

impl<T: PaddleInput + ?Sized> PaddleInput for &mut T {
    fn poll_edge(&mut self) -> Option<PaddleMove> {
        (**self).poll_edge()
    }
}
