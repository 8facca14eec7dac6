use std::fmt;

/// The 4-bit frame type tag.
///
/// Values outside the ones RFC 6455 defines are kept as `Reserved` so the
/// caller decides whether to reject them.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Continue,
    Text,
    Binary,
    Close,
    Ping,
    Pong,
    Reserved(u8),
}

impl Opcode {
    /// Close, ping and pong frames.
    pub fn is_control(self) -> bool {
        u8::from(self) & 0x08 != 0
    }
}

impl From<u8> for Opcode {
    fn from(bits: u8) -> Self {
        match bits & 0x0f {
            0 => Opcode::Continue,
            1 => Opcode::Text,
            2 => Opcode::Binary,
            8 => Opcode::Close,
            9 => Opcode::Ping,
            10 => Opcode::Pong,
            other => Opcode::Reserved(other),
        }
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> Self {
        match op {
            Opcode::Continue => 0,
            Opcode::Text => 1,
            Opcode::Binary => 2,
            Opcode::Close => 8,
            Opcode::Ping => 9,
            Opcode::Pong => 10,
            Opcode::Reserved(bits) => bits & 0x0f,
        }
    }
}

impl fmt::Debug for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opcode::Continue => f.write_str("Continue"),
            Opcode::Text => f.write_str("Text"),
            Opcode::Binary => f.write_str("Binary"),
            Opcode::Close => f.write_str("Close"),
            Opcode::Ping => f.write_str("Ping"),
            Opcode::Pong => f.write_str("Pong"),
            Opcode::Reserved(bits) => write!(f, "Reserved({:#x})", bits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags() {
        assert_eq!(Opcode::from(0x1), Opcode::Text);
        assert_eq!(Opcode::from(0x8), Opcode::Close);
        assert_eq!(u8::from(Opcode::Pong), 0xa);
    }

    #[test]
    fn reserved_passes_through() {
        let op = Opcode::from(0x3);
        assert_eq!(op, Opcode::Reserved(3));
        assert_eq!(u8::from(op), 3);
        assert!(Opcode::from(0xb).is_control());
        assert!(!Opcode::Binary.is_control());
    }
}
