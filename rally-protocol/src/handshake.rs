//! Pre-match negotiation bytes
//!
//! Negotiation happens before any ball state is exchanged, so these values
//! may overlap with valid handoff encodings.

/// "I would like to serve"
pub const CLAIM: u8 = 0x02;

/// "Go ahead, you serve"
pub const ACK: u8 = 0x01;

/// Negotiation byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HandshakeByte {
    Claim,
    Ack,
}

impl HandshakeByte {
    /// Parse a negotiation byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            CLAIM => Some(HandshakeByte::Claim),
            ACK => Some(HandshakeByte::Ack),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            HandshakeByte::Claim => CLAIM,
            HandshakeByte::Ack => ACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handshake_roundtrip() {
        for b in [HandshakeByte::Claim, HandshakeByte::Ack] {
            assert_eq!(HandshakeByte::from_byte(b.to_byte()), Some(b));
        }
    }

    #[test]
    fn test_unknown_byte() {
        assert!(HandshakeByte::from_byte(0x00).is_none());
        assert!(HandshakeByte::from_byte(0xFF).is_none());
    }
}
