//! Test doubles for the hardware traits

use core::cell::Cell;
use std::collections::VecDeque;
use std::vec::Vec;

use crate::traits::{Channel, ChannelError, Clock, PaddleInput, PaddleMove, PixelDisplay};

/// Link with a scripted receive queue and a log of sent bytes
#[derive(Debug, Default)]
pub struct MockChannel {
    pub rx: VecDeque<u8>,
    pub written: Vec<u8>,
    /// When a byte matching the key is written, the values are queued for
    /// reading, as if the peer answered
    pub replies: Vec<(u8, u8)>,
    pub fail_writes: bool,
}

impl MockChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rx(bytes: &[u8]) -> Self {
        Self {
            rx: bytes.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn reply(mut self, written: u8, answer: u8) -> Self {
        self.replies.push((written, answer));
        self
    }
}

impl Channel for MockChannel {
    fn is_readable(&mut self) -> bool {
        !self.rx.is_empty()
    }

    fn read_byte(&mut self) -> Result<u8, ChannelError> {
        self.rx.pop_front().ok_or(ChannelError::Other)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), ChannelError> {
        if self.fail_writes {
            return Err(ChannelError::WriteFailed);
        }
        self.written.push(byte);
        for (trigger, answer) in &self.replies {
            if *trigger == byte {
                self.rx.push_back(*answer);
            }
        }
        Ok(())
    }
}

/// Clock that moves forward a fixed step every time it is read
///
/// Shared by reference so a task set under test can observe and advance
/// the same counter the scheduler waits on.
#[derive(Debug)]
pub struct StepClock {
    ticks: Cell<u16>,
    step: u16,
}

impl StepClock {
    pub fn new(start: u16, step: u16) -> Self {
        Self {
            ticks: Cell::new(start),
            step,
        }
    }

    /// Current tick without advancing
    pub fn peek(&self) -> u16 {
        self.ticks.get()
    }

    pub fn advance(&self, ticks: u16) {
        self.ticks.set(self.ticks.get().wrapping_add(ticks));
    }
}

impl Clock for &StepClock {
    fn now(&mut self) -> u16 {
        let now = self.ticks.get();
        self.ticks.set(now.wrapping_add(self.step));
        now
    }
}

/// Input that replays a fixed list of polls
#[derive(Debug, Default)]
pub struct ScriptedInput {
    pub polls: VecDeque<Option<PaddleMove>>,
}

impl ScriptedInput {
    pub fn new(polls: &[Option<PaddleMove>]) -> Self {
        Self {
            polls: polls.iter().copied().collect(),
        }
    }
}

impl PaddleInput for ScriptedInput {
    fn poll_edge(&mut self) -> Option<PaddleMove> {
        self.polls.pop_front().flatten()
    }
}

/// Display that tracks lit pixels and counts refreshes
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub lit: [[bool; 7]; 5],
    pub refreshes: usize,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_lit(&self, column: u8, row: u8) -> bool {
        self.lit[column as usize][row as usize]
    }

    pub fn lit_count(&self) -> usize {
        self.lit.iter().flatten().filter(|on| **on).count()
    }
}

impl PixelDisplay for RecordingDisplay {
    fn set_pixel(&mut self, column: u8, row: u8, on: bool) {
        if let Some(cell) = self
            .lit
            .get_mut(column as usize)
            .and_then(|rows| rows.get_mut(row as usize))
        {
            *cell = on;
        }
    }

    fn clear(&mut self) {
        self.lit = Default::default();
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
    }
}
