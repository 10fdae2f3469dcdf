//! Task bookkeeping and wrap-tolerant deadline arithmetic

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest overrun still treated as "due"
///
/// Kept just below half the counter range so a deadline that has passed can
/// be told apart from one that is still ahead after the counter wraps.
pub const OVERRUN_MAX: u16 = 32767;

/// True once `now` has reached `deadline`, tolerating counter wraparound
#[inline]
pub const fn is_due(now: u16, deadline: u16) -> bool {
    now.wrapping_sub(deadline) < OVERRUN_MAX
}

/// One periodic task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Task<K> {
    pub kind: K,
    /// Ticks between runs
    pub period: u16,
    /// Tick at which the task next becomes due
    pub deadline: u16,
}

impl<K: Copy> Task<K> {
    pub const fn new(kind: K, period: u16) -> Self {
        Self {
            kind,
            period,
            deadline: 0,
        }
    }

    pub const fn is_due(&self, now: u16) -> bool {
        is_due(now, self.deadline)
    }

    /// Ticks until the deadline, wrapping
    pub const fn remaining(&self, now: u16) -> u16 {
        self.deadline.wrapping_sub(now)
    }

    /// Move the deadline forward by one period
    ///
    /// The new deadline is derived from the old one, never from the clock,
    /// so late runs do not accumulate drift.
    pub fn advance(&mut self) {
        self.deadline = self.deadline.wrapping_add(self.period);
    }
}
