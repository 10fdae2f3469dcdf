//! Game tick counter on top of the embassy time driver

use embassy_time::Instant;
use rally_core::traits::Clock;

/// 16-bit wrapping tick counter at a configured rate
///
/// Derived from the 64-bit uptime, so it never drifts against the time
/// driver; only the truncation to 16 bits wraps.
pub struct TickClock {
    rate_hz: u64,
}

impl TickClock {
    pub const fn new(rate_hz: u16) -> Self {
        Self {
            rate_hz: rate_hz as u64,
        }
    }
}

impl Clock for TickClock {
    fn now(&mut self) -> u16 {
        let ticks = Instant::now().as_micros() * self.rate_hz / 1_000_000;
        ticks as u16
    }
}
