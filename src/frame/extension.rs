use super::MaskKey;
use std::convert::TryInto;

/// The variable part between the header and the payload.
///
/// `len` is `None` when the frame carries no extended length field and
/// `Some(0)` when the field is present and holds zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Extension {
    pub len: Option<u64>,
    pub mask: Option<MaskKey>,
}

impl Extension {
    /// Returns true when nothing could be decoded.
    pub fn is_empty(&self) -> bool {
        self.len.is_none() && self.mask.is_none()
    }
}

/// Decodes the extension of a frame.
///
/// The size of `buf` tells which fields are present, so the caller slices it
/// using [`Header::extension_len`](super::Header::extension_len):
///
/// | bytes | fields |
/// |---|---|
/// | 2 | 16-bit length |
/// | 4 | mask key |
/// | 6 | 16-bit length, mask key |
/// | 8 | 64-bit length |
/// | 12 | 64-bit length, mask key |
///
/// Any other size decodes to an empty extension.
pub fn parse_extension(buf: &[u8]) -> Extension {
    match buf.len() {
        2 => Extension {
            len: Some(read_short(buf)),
            mask: None,
        },
        4 => Extension {
            len: None,
            mask: read_key(buf),
        },
        6 => Extension {
            len: Some(read_short(&buf[..2])),
            mask: read_key(&buf[2..]),
        },
        8 => Extension {
            len: read_long(buf),
            mask: None,
        },
        12 => Extension {
            len: read_long(&buf[..8]),
            mask: read_key(&buf[8..]),
        },
        _ => Extension::default(),
    }
}

fn read_short(buf: &[u8]) -> u64 {
    u64::from(u16::from_be_bytes([buf[0], buf[1]]))
}

// The most significant bit must be zero; it is dropped rather than rejected.
fn read_long(buf: &[u8]) -> Option<u64> {
    let bytes: [u8; 8] = buf.try_into().ok()?;
    Some(u64::from_be_bytes(bytes) & (u64::MAX >> 1))
}

fn read_key(buf: &[u8]) -> Option<MaskKey> {
    buf.try_into().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: MaskKey = [0x37, 0xfa, 0x21, 0x3d];

    #[test]
    fn short_length() {
        let ext = parse_extension(&[0x01, 0x00]);
        assert_eq!(ext.len, Some(256));
        assert_eq!(ext.mask, None);
    }

    #[test]
    fn zero_length_is_present() {
        let ext = parse_extension(&[0x00, 0x00]);
        assert_eq!(ext.len, Some(0));
        assert!(!ext.is_empty());
    }

    #[test]
    fn key_only() {
        let ext = parse_extension(&KEY);
        assert_eq!(
            ext,
            Extension {
                len: None,
                mask: Some(KEY)
            }
        );
    }

    #[test]
    fn short_length_and_key() {
        let ext = parse_extension(&[0xff, 0xfe, 0x37, 0xfa, 0x21, 0x3d]);
        assert_eq!(ext.len, Some(65534));
        assert_eq!(ext.mask, Some(KEY));
    }

    #[test]
    fn long_length_and_key() {
        let mut buf = [0u8; 12];
        buf[..8].copy_from_slice(&70_000u64.to_be_bytes());
        buf[8..].copy_from_slice(&KEY);
        let ext = parse_extension(&buf);
        assert_eq!(ext.len, Some(70_000));
        assert_eq!(ext.mask, Some(KEY));
    }

    #[test]
    fn long_length_drops_top_bit() {
        let ext = parse_extension(&[0x80, 0, 0, 0, 0, 0x01, 0x00, 0x00]);
        assert_eq!(ext.len, Some(65536));
    }

    #[test]
    fn other_sizes_are_empty() {
        for &len in [0usize, 1, 3, 5, 7, 9, 10, 11, 13, 14].iter() {
            let buf = vec![0xaau8; len];
            assert!(parse_extension(&buf).is_empty(), "size {}", len);
        }
    }
}
