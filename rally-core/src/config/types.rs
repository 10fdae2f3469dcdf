//! Match timing configuration

use crate::scheduler::OVERRUN_MAX;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors found while validating a [`MatchConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A task rate of 0 Hz can never be scheduled
    ZeroRate,
    /// Task rate is faster than the tick counter can resolve
    RateAboveTickRate,
    /// Task period is too long for wrap-tolerant deadline comparison
    PeriodTooLong,
    /// Negotiation window of 0 ticks
    ZeroWindow,
    /// Negotiation would never be attempted
    ZeroAttempts,
}

/// Timing for one match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchConfig {
    /// Rate at which the clock advances (Hz)
    pub tick_rate_hz: u16,
    /// Display refresh task rate (Hz)
    pub display_rate_hz: u16,
    /// Paddle input task rate (Hz)
    pub paddle_rate_hz: u16,
    /// Ball task base rate (Hz); ball speed is a fraction of this
    pub ball_rate_hz: u16,
    /// How long negotiation listens before sending another claim (ticks)
    pub handshake_window_ticks: u16,
    /// How many listen windows negotiation tries before giving up
    pub handshake_attempts: u16,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: 10_000,
            display_rate_hz: 250,
            paddle_rate_hz: 100,
            ball_rate_hz: 100,
            handshake_window_ticks: 200,
            handshake_attempts: 500,
        }
    }
}

impl MatchConfig {
    /// Convert a task rate into a scheduler period in ticks
    pub fn period_ticks(&self, rate_hz: u16) -> Result<u16, ConfigError> {
        if rate_hz == 0 {
            return Err(ConfigError::ZeroRate);
        }
        if rate_hz > self.tick_rate_hz {
            return Err(ConfigError::RateAboveTickRate);
        }
        let period = self.tick_rate_hz / rate_hz;
        if period >= OVERRUN_MAX {
            return Err(ConfigError::PeriodTooLong);
        }
        Ok(period)
    }

    /// Display task period in ticks
    pub fn display_period(&self) -> Result<u16, ConfigError> {
        self.period_ticks(self.display_rate_hz)
    }

    /// Paddle task period in ticks
    pub fn paddle_period(&self) -> Result<u16, ConfigError> {
        self.period_ticks(self.paddle_rate_hz)
    }

    /// Ball task period in ticks
    pub fn ball_period(&self) -> Result<u16, ConfigError> {
        self.period_ticks(self.ball_rate_hz)
    }

    /// Check that every field can be used as-is
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::ZeroRate);
        }
        self.display_period()?;
        self.paddle_period()?;
        self.ball_period()?;
        if self.handshake_window_ticks == 0 || self.handshake_window_ticks >= OVERRUN_MAX {
            return Err(ConfigError::ZeroWindow);
        }
        if self.handshake_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }
}
