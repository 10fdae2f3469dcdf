//! Pre-match role negotiation
//!
//! Both boards start listening. A board that hears nothing within one window
//! sends a claim to serve and keeps claiming each window. A board that hears
//! a claim before making its own acknowledges it and becomes the receiver;
//! the claiming board becomes the server when the acknowledgement arrives.
//!
//! Once a board has claimed it ignores the peer's claims, so two boards that
//! claim at the same moment both time out rather than both receiving.

use rally_protocol::handshake::{HandshakeByte, ACK, CLAIM};

use crate::config::MatchConfig;
use crate::scheduler::is_due;
use crate::traits::{Channel, ChannelError, Clock};

/// Which side of the match this board plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Role {
    /// Owns the ball at kickoff
    Server,
    /// Waits for the first handoff
    Receiver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HandshakeError {
    /// No agreement within the attempt budget
    Timeout,
    Channel(ChannelError),
}

impl From<ChannelError> for HandshakeError {
    fn from(e: ChannelError) -> Self {
        HandshakeError::Channel(e)
    }
}

/// Throw away bytes left over from before the match
///
/// Returns how many bytes were dropped.
pub fn discard_pending<Ch: Channel>(mut channel: Ch) -> usize {
    let mut dropped = 0;
    while channel.is_readable() {
        let _ = channel.read_byte();
        dropped += 1;
    }
    dropped
}

/// Poll the link until `deadline`, returning the first negotiation byte
/// accepted by `wanted`
fn listen<Ch: Channel, C: Clock>(
    channel: &mut Ch,
    clock: &mut C,
    deadline: u16,
    wanted: impl Fn(HandshakeByte) -> bool,
) -> Option<HandshakeByte> {
    loop {
        if channel.is_readable() {
            match channel.read_byte() {
                Ok(byte) => match HandshakeByte::from_byte(byte) {
                    Some(hs) if wanted(hs) => return Some(hs),
                    _ => trace!("negotiation: ignoring {=u8:#x}", byte),
                },
                Err(e) => warn!("negotiation: read failed: {}", e),
            }
        }
        if is_due(clock.now(), deadline) {
            return None;
        }
    }
}

/// Agree with the peer on who serves
pub fn negotiate<Ch: Channel, C: Clock>(
    mut channel: Ch,
    mut clock: C,
    config: &MatchConfig,
) -> Result<Role, HandshakeError> {
    let window = config.handshake_window_ticks;
    let mut claimed = false;

    for attempt in 0..config.handshake_attempts {
        let deadline = clock.now().wrapping_add(window);
        let expected = if claimed { HandshakeByte::Ack } else { HandshakeByte::Claim };

        match listen(&mut channel, &mut clock, deadline, |hs| hs == expected) {
            Some(HandshakeByte::Claim) => {
                channel.write_byte(ACK)?;
                // swallow claims the peer sent before our ack reached it
                let settle = clock.now().wrapping_add(window);
                listen(&mut channel, &mut clock, settle, |_| false);
                info!("negotiation: receiver after {} attempts", attempt + 1);
                return Ok(Role::Receiver);
            }
            Some(HandshakeByte::Ack) => {
                info!("negotiation: server after {} attempts", attempt + 1);
                return Ok(Role::Server);
            }
            None => {}
        }

        channel.write_byte(CLAIM)?;
        claimed = true;
    }

    warn!("negotiation: no answer from peer");
    Err(HandshakeError::Timeout)
}
