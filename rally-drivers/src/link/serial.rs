//! Single-byte link over a blocking serial port

use embedded_io::{Error, ErrorKind, Read, ReadReady, Write};
use rally_core::traits::{Channel, ChannelError};

/// Link to the peer board over any `embedded-io` port
pub struct SerialLink<S> {
    port: S,
}

impl<S> SerialLink<S> {
    pub fn new(port: S) -> Self {
        Self { port }
    }

    pub fn into_inner(self) -> S {
        self.port
    }
}

fn read_error(kind: ErrorKind) -> ChannelError {
    match kind {
        ErrorKind::InvalidData => ChannelError::Corrupted,
        _ => ChannelError::Other,
    }
}

impl<S: Read + ReadReady + Write> Channel for SerialLink<S> {
    fn is_readable(&mut self) -> bool {
        self.port.read_ready().unwrap_or(false)
    }

    fn read_byte(&mut self) -> Result<u8, ChannelError> {
        let mut buf = [0u8; 1];
        match self.port.read(&mut buf) {
            Ok(1) => Ok(buf[0]),
            Ok(_) => Err(ChannelError::Other),
            Err(e) => Err(read_error(e.kind())),
        }
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), ChannelError> {
        self.port
            .write_all(&[byte])
            .and_then(|_| self.port.flush())
            .map_err(|_| ChannelError::WriteFailed)
    }
}
