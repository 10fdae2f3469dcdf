//! Velocity-dependent update pacing
//!
//! The ball task runs at a fixed base rate. A cycle position in `0..100`
//! advances on every call, and a ball of velocity `v` acts on `v` evenly
//! spaced checkpoints per cycle, counting down from 99.

use rally_protocol::{MAX_VELOCITY, MIN_VELOCITY};

/// Base-rate calls per pacing cycle
pub const CYCLE_LENGTH: u8 = 100;

/// Cycle position of the first checkpoint
pub const FIRST_CHECKPOINT: u8 = CYCLE_LENGTH - 1;

/// True when `position` is one of the checkpoints for `velocity`
pub fn is_checkpoint(position: u8, velocity: u8) -> bool {
    let velocity = velocity.clamp(MIN_VELOCITY, MAX_VELOCITY);
    let spacing = CYCLE_LENGTH / velocity;
    (0..velocity).any(|i| FIRST_CHECKPOINT - i * spacing == position)
}

/// Cycle counter deciding which base-rate calls act
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VelocityGate {
    position: u8,
}

impl VelocityGate {
    pub const fn new() -> Self {
        Self { position: 0 }
    }

    pub const fn position(&self) -> u8 {
        self.position
    }

    /// Advance one base-rate call; true if this call should act
    pub fn tick(&mut self, velocity: u8) -> bool {
        let fire = is_checkpoint(self.position, velocity);
        self.position = (self.position + 1) % CYCLE_LENGTH;
        fire
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fires_per_cycle(velocity: u8) -> usize {
        let mut gate = VelocityGate::new();
        (0..CYCLE_LENGTH).filter(|_| gate.tick(velocity)).count()
    }

    #[test]
    fn test_checkpoints() {
        assert!(is_checkpoint(99, 1));
        assert!(!is_checkpoint(49, 1));
        assert!(is_checkpoint(49, 2));
        assert!(is_checkpoint(33, 3));
        assert!(is_checkpoint(24, 4));
        assert!(!is_checkpoint(25, 4));
    }

    #[test]
    fn test_velocity_sets_updates_per_cycle() {
        for velocity in MIN_VELOCITY..=MAX_VELOCITY {
            assert_eq!(fires_per_cycle(velocity), velocity as usize);
        }
    }

    #[test]
    fn test_out_of_range_velocity_is_clamped() {
        assert_eq!(fires_per_cycle(0), 1);
        assert_eq!(fires_per_cycle(9), 4);
    }

    #[test]
    fn test_position_wraps() {
        let mut gate = VelocityGate::new();
        for _ in 0..CYCLE_LENGTH {
            gate.tick(1);
        }
        assert_eq!(gate.position(), 0);
        // first checkpoint is the last call of each cycle
        for _ in 0..FIRST_CHECKPOINT {
            assert!(!gate.tick(1));
        }
        assert!(gate.tick(1));
    }
}
