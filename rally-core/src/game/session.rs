//! One match between the two boards
//!
//! [`Match`] owns every piece of game state plus the link, display and input
//! it drives. The scheduler borrows it as a [`TaskSet`] and dispatches each
//! [`GameTask`] to the matching tick method.

use rally_protocol::{WireMessage, LOST_SENTINEL};

use super::ball::{Ball, Step};
use super::geometry::{Position, PADDLE_COLUMN};
use super::pacing::VelocityGate;
use super::paddle::{Paddle, Span};
use super::GameTask;
use crate::handshake::Role;
use crate::scheduler::TaskSet;
use crate::traits::{Channel, PaddleInput, PixelDisplay};

/// How the match ended for this board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    Won,
    Lost,
}

pub struct Match<Ch, D, I> {
    ball: Ball,
    paddle: Paddle,
    gate: VelocityGate,
    continues: bool,
    local_lost: bool,
    channel: Ch,
    display: D,
    input: I,
}

impl<Ch: Channel, D: PixelDisplay, I: PaddleInput> Match<Ch, D, I> {
    /// Set up a fresh board for the given role
    pub fn new(role: Role, channel: Ch, display: D, input: I) -> Self {
        let ball = match role {
            Role::Server => Ball::serve(),
            Role::Receiver => Ball::awaiting(),
        };

        let mut game = Self {
            ball,
            paddle: Paddle::new(),
            gate: VelocityGate::new(),
            continues: true,
            local_lost: false,
            channel,
            display,
            input,
        };

        game.display.clear();
        game.draw_span(game.paddle.span(), true);
        if game.ball.owned {
            game.draw(game.ball.new, true);
        }
        game
    }

    /// Ball task body
    ///
    /// Runs at the base ball rate; only calls that land on a velocity
    /// checkpoint move the ball or poll the link.
    pub fn tick_ball(&mut self) {
        if !self.continues || !self.gate.tick(self.ball.velocity) {
            return;
        }

        if self.ball.owned {
            self.update_ball();
        } else {
            self.poll_link();
        }
    }

    /// Paddle task body
    pub fn tick_paddle(&mut self) {
        let Some(movement) = self.input.poll_edge() else {
            return;
        };
        if self.paddle.shift(movement) {
            self.draw_span(self.paddle.previous(), false);
            self.draw_span(self.paddle.span(), true);
        }
    }

    /// Display task body
    pub fn refresh_display(&mut self) {
        self.display.refresh();
    }

    pub fn match_continues(&self) -> bool {
        self.continues
    }

    pub fn local_player_lost(&self) -> bool {
        self.local_lost
    }

    /// Result once the match is over
    pub fn outcome(&self) -> Option<Outcome> {
        match (self.continues, self.local_lost) {
            (true, _) => None,
            (false, true) => Some(Outcome::Lost),
            (false, false) => Some(Outcome::Won),
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    /// Hand the hardware back for the next match
    pub fn into_parts(self) -> (Ch, D, I) {
        (self.channel, self.display, self.input)
    }

    fn update_ball(&mut self) {
        match self.ball.advance(self.paddle.span()) {
            Step::Idle => {}
            Step::Moved => self.redraw_ball(),
            Step::Crossed => {
                self.redraw_ball();
                self.send_handoff();
            }
            Step::Missed => {
                info!("ball missed at row {}", self.ball.new.row);
                self.lose();
            }
        }
    }

    fn send_handoff(&mut self) {
        let byte = self
            .ball
            .handoff()
            .and_then(|handoff| WireMessage::Handoff(handoff).to_byte());

        match byte {
            Ok(byte) => {
                debug!("handoff sent: {=u8:#x}", byte);
                if let Err(e) = self.channel.write_byte(byte) {
                    warn!("handoff write failed: {}", e);
                }
            }
            Err(e) => {
                error!("ball cannot be encoded: {}", e);
                self.lose();
            }
        }
    }

    fn poll_link(&mut self) {
        if !self.channel.is_readable() {
            return;
        }

        let byte = match self.channel.read_byte() {
            Ok(byte) => byte,
            Err(e) => {
                warn!("link read failed: {}", e);
                return;
            }
        };

        match WireMessage::from_byte(byte) {
            Ok(WireMessage::Lost) => {
                info!("peer missed, match won");
                self.continues = false;
                self.local_lost = false;
            }
            Ok(WireMessage::Handoff(handoff)) => {
                debug!("handoff received: {=u8:#x}", byte);
                self.ball.receive(handoff.arrival());
                self.draw(self.ball.new, true);
            }
            Err(e) => warn!("dropping malformed byte {=u8:#x}: {}", byte, e),
        }
    }

    fn lose(&mut self) {
        if let Err(e) = self.channel.write_byte(LOST_SENTINEL) {
            warn!("loss notice write failed: {}", e);
        }
        self.continues = false;
        self.local_lost = true;
    }

    fn redraw_ball(&mut self) {
        self.draw(self.ball.old, false);
        if self.ball.owned {
            self.draw(self.ball.new, true);
        }
    }

    fn draw(&mut self, position: Position, on: bool) {
        if let Some((column, row)) = position.pixel() {
            self.display.set_pixel(column, row, on);
        }
    }

    fn draw_span(&mut self, span: Span, on: bool) {
        for row in span.rows() {
            self.draw(Position::new(PADDLE_COLUMN, row), on);
        }
    }
}

impl<Ch: Channel, D: PixelDisplay, I: PaddleInput> TaskSet<GameTask> for Match<Ch, D, I> {
    fn run_task(&mut self, kind: GameTask) {
        match kind {
            GameTask::Display => self.refresh_display(),
            GameTask::Ball => self.tick_ball(),
            GameTask::Paddle => self.tick_paddle(),
        }
    }

    fn should_continue(&self) -> bool {
        self.continues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use crate::game::game_schedule;
    use crate::game::geometry::{LOST_COLUMN, TRANSMIT_COLUMN};
    use crate::mock::{MockChannel, RecordingDisplay, ScriptedInput, StepClock};
    use crate::traits::PaddleMove;
    use rally_protocol::{Direction, Handoff};

    type TestMatch = Match<MockChannel, RecordingDisplay, ScriptedInput>;

    fn game(role: Role, channel: MockChannel) -> TestMatch {
        Match::new(role, channel, RecordingDisplay::new(), ScriptedInput::default())
    }

    /// Call the ball task until the gate lets one update through
    fn ball_step(game: &mut TestMatch) {
        let before = game.gate.position();
        loop {
            let fire = pacing_fires(game);
            game.tick_ball();
            if fire || game.gate.position() == before {
                return;
            }
        }
    }

    fn pacing_fires(game: &TestMatch) -> bool {
        crate::game::pacing::is_checkpoint(game.gate.position(), game.ball.velocity)
    }

    #[test]
    fn test_server_draws_paddle_and_ball() {
        let game = game(Role::Server, MockChannel::new());
        let display = &game.display;
        assert!(display.is_lit(4, 2) && display.is_lit(4, 3) && display.is_lit(4, 4));
        assert!(display.is_lit(0, 3));
        assert_eq!(display.lit_count(), 4);
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_receiver_draws_only_paddle() {
        let game = game(Role::Receiver, MockChannel::new());
        assert_eq!(game.display.lit_count(), 3);
        assert!(!game.ball().owned);
    }

    #[test]
    fn test_ball_moves_once_per_cycle_at_velocity_one() {
        let mut game = game(Role::Server, MockChannel::new());
        for _ in 0..99 {
            game.tick_ball();
        }
        assert_eq!(game.ball().new, Position::new(0, 3));
        game.tick_ball();
        assert_eq!(game.ball().new, Position::new(1, 3));
        assert!(!game.display.is_lit(0, 3));
        assert!(game.display.is_lit(1, 3));
    }

    #[test]
    fn test_west_inside_span_turns_east() {
        let mut game = game(Role::Server, MockChannel::new());
        game.ball.new = Position::new(3, 3);
        game.ball.velocity = 2;
        ball_step(&mut game);
        assert_eq!(game.ball().direction, Direction::East);
        assert_eq!(game.ball().new, Position::new(2, 3));
        assert_eq!(game.ball().velocity, 2);
        // paddle pixel survives the bounce
        assert!(game.display.is_lit(4, 3));
    }

    #[test]
    fn test_south_west_on_paddle_bottom() {
        let mut game = game(Role::Server, MockChannel::new());
        game.ball.new = Position::new(3, 2);
        game.ball.direction = Direction::SouthWest;
        ball_step(&mut game);
        assert_eq!(game.ball().direction, Direction::SouthEast);
        assert_eq!(game.ball().velocity, 3);
        assert_eq!(game.ball().new.column, 2);
    }

    #[test]
    fn test_crossing_sends_one_byte_and_releases_ball() {
        let mut game = game(Role::Server, MockChannel::new());
        game.ball.new = Position::new(0, 5);
        game.ball.direction = Direction::East;
        game.ball.velocity = 2;
        ball_step(&mut game);

        let expected = Handoff::new(5, 2, Direction::East).unwrap().to_byte().unwrap();
        assert_eq!(game.channel.written, [expected]);
        assert!(!game.ball().owned);
        assert_eq!(game.ball().new.column, TRANSMIT_COLUMN);
        assert!(!game.display.is_lit(0, 5));

        // nothing more happens until a byte arrives
        for _ in 0..300 {
            game.tick_ball();
        }
        assert_eq!(game.channel.written.len(), 1);
        assert!(game.match_continues());
    }

    #[test]
    fn test_miss_sends_sentinel_and_loses() {
        let mut game = game(Role::Server, MockChannel::new());
        game.ball.new = Position::new(3, 0);
        ball_step(&mut game);

        assert_eq!(game.ball().new.column, LOST_COLUMN);
        assert_eq!(game.channel.written, [LOST_SENTINEL]);
        assert!(!game.match_continues());
        assert!(game.local_player_lost());
        assert_eq!(game.outcome(), Some(Outcome::Lost));
    }

    #[test]
    fn test_received_sentinel_wins() {
        let mut game = game(Role::Receiver, MockChannel::with_rx(&[LOST_SENTINEL]));
        ball_step(&mut game);
        assert!(!game.match_continues());
        assert!(!game.local_player_lost());
        assert_eq!(game.outcome(), Some(Outcome::Won));
    }

    #[test]
    fn test_received_handoff_is_drawn() {
        let byte = Handoff::new(1, 3, Direction::East).unwrap().to_byte().unwrap();
        let mut game = game(Role::Receiver, MockChannel::with_rx(&[byte]));
        ball_step(&mut game);

        let ball = game.ball();
        assert!(ball.owned);
        assert_eq!(ball.new, Position::new(0, 5));
        assert_eq!(ball.direction, Direction::West);
        assert_eq!(ball.velocity, 3);
        assert!(game.display.is_lit(0, 5));
    }

    #[test]
    fn test_malformed_byte_is_dropped() {
        // row field 7 with a valid direction code
        let mut game = game(Role::Receiver, MockChannel::with_rx(&[0b111_00_001]));
        ball_step(&mut game);
        assert!(!game.ball().owned);
        assert!(game.match_continues());
        assert!(game.channel.rx.is_empty());
    }

    #[test]
    fn test_paddle_input_redraws_span() {
        let input = ScriptedInput::new(&[
            Some(PaddleMove::TowardTop),
            None,
            Some(PaddleMove::TowardTop),
            Some(PaddleMove::TowardTop),
        ]);
        let mut game = Match::new(Role::Receiver, MockChannel::new(), RecordingDisplay::new(), input);
        for _ in 0..4 {
            game.tick_paddle();
        }
        assert_eq!(game.paddle().span(), Span { bottom: 4, top: 6 });
        assert!(!game.display.is_lit(4, 2));
        assert!(!game.display.is_lit(4, 3));
        assert!(game.display.is_lit(4, 4) && game.display.is_lit(4, 5) && game.display.is_lit(4, 6));
    }

    #[test]
    fn test_task_dispatch() {
        let mut game = game(Role::Receiver, MockChannel::new());
        game.run_task(GameTask::Display);
        game.run_task(GameTask::Display);
        assert_eq!(game.display.refreshes, 2);
        assert!(game.should_continue());
    }

    #[test]
    fn test_scheduled_rally_until_peer_misses() {
        // serve, bounce off the middle of the paddle, cross, then the peer
        // reports a miss
        let crossing = Handoff::new(3, 1, Direction::East).unwrap().to_byte().unwrap();
        let channel = MockChannel::new().reply(crossing, LOST_SENTINEL);
        let mut game = game(Role::Server, channel);

        let clock = StepClock::new(0, 1);
        let mut scheduler = game_schedule(&MatchConfig::default()).unwrap();
        scheduler.run(&clock, &mut game);

        assert_eq!(game.outcome(), Some(Outcome::Won));
        assert_eq!(game.channel.written, [crossing]);
        assert!(game.display.refreshes > 0);
    }
}
