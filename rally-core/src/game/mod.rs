//! Game state and rules
//!
//! - [`geometry`]: board coordinates and edge columns
//! - [`ball`]: ball kinematics, handoff and loss
//! - [`collision`]: paddle deflection and wall reflection
//! - [`paddle`]: paddle span and movement
//! - [`pacing`]: velocity-dependent update gating
//! - [`session`]: one match, wiring the above to the hardware traits

pub mod ball;
pub mod collision;
pub mod geometry;
pub mod pacing;
pub mod paddle;
pub mod session;

pub use ball::{Ball, Step};
pub use collision::{Deflection, Impact};
pub use geometry::Position;
pub use pacing::VelocityGate;
pub use paddle::{Paddle, Span};
pub use session::{Match, Outcome};

use crate::config::{ConfigError, MatchConfig};
use crate::scheduler::{Scheduler, SchedulerError};

/// Number of scheduled game tasks
pub const GAME_TASKS: usize = 3;

/// Periodic work during a match, highest priority first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameTask {
    /// Drive the display
    Display,
    /// Advance the ball or poll for an incoming one
    Ball,
    /// Apply paddle input
    Paddle,
}

/// Errors building the match schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetupError {
    Config(ConfigError),
    Scheduler(SchedulerError),
}

impl From<ConfigError> for SetupError {
    fn from(e: ConfigError) -> Self {
        SetupError::Config(e)
    }
}

impl From<SchedulerError> for SetupError {
    fn from(e: SchedulerError) -> Self {
        SetupError::Scheduler(e)
    }
}

/// Build the task list for one match
pub fn game_schedule(config: &MatchConfig) -> Result<Scheduler<GameTask, GAME_TASKS>, SetupError> {
    config.validate()?;

    let mut scheduler = Scheduler::new();
    scheduler.add(GameTask::Display, config.display_period()?)?;
    scheduler.add(GameTask::Ball, config.ball_period()?)?;
    scheduler.add(GameTask::Paddle, config.paddle_period()?)?;
    Ok(scheduler)
}
