use super::Opcode;

/// The mandatory first two bytes of every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub fin: bool,
    pub rsv: [bool; 3],
    pub opcode: Opcode,
    pub mask: bool,
    /// The 7-bit length field; 126 and 127 announce an extended length.
    pub len_code: u8,
}

impl Header {
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        let [b0, b1] = bytes;
        Self {
            fin: b0 & 0x80 != 0,
            rsv: [b0 & 0x40 != 0, b0 & 0x20 != 0, b0 & 0x10 != 0],
            opcode: Opcode::from(b0 & 0x0f),
            mask: b1 & 0x80 != 0,
            len_code: b1 & 0x7f,
        }
    }

    /// Size of the extension that follows this header: the extended payload
    /// length (if any) plus the mask key (if any).
    pub fn extension_len(&self) -> usize {
        let len = match self.len_code {
            126 => 2,
            127 => 8,
            _ => 0,
        };
        if self.mask {
            len + 4
        } else {
            len
        }
    }

    /// The payload length when it fits in the header itself.
    pub fn short_len(&self) -> Option<u64> {
        if self.len_code <= 125 {
            Some(u64::from(self.len_code))
        } else {
            None
        }
    }
}

/// Decodes the fixed frame header. Anything but exactly two bytes is
/// unparseable.
///
/// ```
/// use ws_codec::frame::{parse_header, Opcode};
///
/// let header = parse_header(&[0x81, 0x05]).unwrap();
/// assert!(header.fin);
/// assert_eq!(header.opcode, Opcode::Text);
/// assert_eq!(header.len_code, 5);
/// assert!(!header.mask);
/// ```
pub fn parse_header(buf: &[u8]) -> Option<Header> {
    match *buf {
        [b0, b1] => Some(Header::from_bytes([b0, b1])),
        _ => None,
    }
}
