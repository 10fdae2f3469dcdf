//! Byte link to the peer board

/// Errors that can occur on the link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelError {
    /// Receiver overrun or framing fault
    Corrupted,
    /// Transmitter could not accept the byte
    WriteFailed,
    /// Any other transport fault
    Other,
}

/// Half-duplex single-byte transport
///
/// Every message on the link is one byte, so there is no framing here.
pub trait Channel {
    /// Check whether a byte is waiting without blocking
    fn is_readable(&mut self) -> bool;

    /// Read one byte
    ///
    /// Only call after [`Channel::is_readable`] returned true.
    fn read_byte(&mut self) -> Result<u8, ChannelError>;

    /// Send one byte
    fn write_byte(&mut self, byte: u8) -> Result<(), ChannelError>;
}

impl<T: Channel + ?Sized> Channel for &mut T {
    fn is_readable(&mut self) -> bool {
        (**self).is_readable()
    }

    fn read_byte(&mut self) -> Result<u8, ChannelError> {
        (**self).read_byte()
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), ChannelError> {
        (**self).write_byte(byte)
    }
}
