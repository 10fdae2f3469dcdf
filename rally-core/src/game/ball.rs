//! Ball kinematics
//!
//! The ball is only simulated on the board that owns it. Crossing the east
//! edge hands it to the peer; slipping past the paddle ends the match.

use rally_protocol::{Arrival, Direction, Handoff, WireError, MAX_VELOCITY, MIN_VELOCITY};

use super::collision::{deflect, impact_point, reflect_off_walls};
use super::geometry::{Position, LOST_COLUMN, PADDLE_COLUMN, RECEPTION_COLUMN, TRANSMIT_COLUMN};
use super::paddle::Span;

/// Row a served ball starts on
pub const SERVE_ROW: i8 = 3;

/// Column a served ball starts on
pub const SERVE_COLUMN: i8 = 0;

/// Result of one ball update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Not owned; nothing moved
    Idle,
    /// Moved within the board
    Moved,
    /// Left through the east edge; ownership released
    Crossed,
    /// Got past the paddle
    Missed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ball {
    pub old: Position,
    pub new: Position,
    pub velocity: u8,
    pub direction: Direction,
    pub owned: bool,
}

impl Ball {
    /// Ball for the board that serves
    pub const fn serve() -> Self {
        Self {
            old: Position::OFF_BOARD,
            new: Position::new(SERVE_COLUMN, SERVE_ROW),
            velocity: MIN_VELOCITY,
            direction: Direction::West,
            owned: true,
        }
    }

    /// Placeholder for the board waiting on the first handoff
    ///
    /// Polls the link at the fastest pace until a ball arrives.
    pub const fn awaiting() -> Self {
        Self {
            old: Position::OFF_BOARD,
            new: Position::OFF_BOARD,
            velocity: MAX_VELOCITY,
            direction: Direction::West,
            owned: false,
        }
    }

    /// Take ownership of a ball handed over by the peer
    pub fn receive(&mut self, arrival: Arrival) {
        self.old = Position::OFF_BOARD;
        self.new = Position::new(RECEPTION_COLUMN, arrival.row);
        self.velocity = arrival.velocity;
        self.direction = arrival.direction;
        self.owned = true;
    }

    /// Wire form of the ball as it leaves this board
    pub fn handoff(&self) -> Result<Handoff, WireError> {
        let row = u8::try_from(self.new.row).map_err(|_| WireError::RowOutOfRange(self.new.row as u8))?;
        Handoff::new(row, self.velocity, self.direction)
    }

    /// Advance one step against the given paddle span
    pub fn advance(&mut self, paddle: Span) -> Step {
        if !self.owned {
            return Step::Idle;
        }

        self.old = self.new;
        self.new.column += self.direction.column_delta();
        self.new.row += self.direction.row_delta();

        if self.direction.is_westbound() && self.new.column == PADDLE_COLUMN {
            let impact = impact_point(self.direction, self.old.row, self.new.row, paddle);
            match deflect(self.direction, impact, self.old.row, self.new.row) {
                Some(deflection) => {
                    self.direction = deflection.direction;
                    self.new.row = deflection.row;
                    self.velocity = self.velocity.saturating_add(deflection.speed_up);
                    self.new.column = self.old.column - 1;
                }
                None => {
                    self.new.column = LOST_COLUMN;
                    self.owned = false;
                    return Step::Missed;
                }
            }
        }

        let (row, direction) = reflect_off_walls(self.new.row, self.direction);
        self.new.row = row;
        self.direction = direction;
        self.velocity = self.velocity.clamp(MIN_VELOCITY, MAX_VELOCITY);

        if self.new.column == TRANSMIT_COLUMN {
            self.owned = false;
            return Step::Crossed;
        }

        Step::Moved
    }
}
