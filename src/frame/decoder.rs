use super::{apply_mask, parse_extension, Frame, Header, MAX_SHORT_LEN};
use crate::{Error, Result};
use bytes::{Buf, Bytes, BytesMut};
use std::convert::TryFrom;

/// Limits a [`Decoder`] enforces on incoming frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub max_payload_len: usize,
    /// `Some(true)` on servers, `Some(false)` on clients, `None` to accept both.
    pub expect_masked: Option<bool>,
}

impl Config {
    pub const DEFAULT_MAX_PAYLOAD_LEN: usize = 64 << 20;

    pub fn server() -> Self {
        Self::default().expect_masked(Some(true))
    }

    pub fn client() -> Self {
        Self::default().expect_masked(Some(false))
    }

    pub fn max_payload_len(mut self, max: usize) -> Self {
        self.max_payload_len = max;
        self
    }

    pub fn expect_masked(mut self, expect: Option<bool>) -> Self {
        self.expect_masked = expect;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_payload_len: Self::DEFAULT_MAX_PAYLOAD_LEN,
            expect_masked: None,
        }
    }
}

/// Splits complete frames off the front of a read buffer.
///
/// Payloads are unmasked before they are returned. Fragmented messages come
/// out as separate frames.
#[derive(Clone, Debug, Default)]
pub struct Decoder {
    config: Config,
}

impl Decoder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Decodes the next frame from `buf`.
    ///
    /// Returns `Ok(None)` and leaves `buf` untouched until a whole frame is
    /// buffered. An error means the connection should be closed.
    pub fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<Frame<Bytes>>> {
        if buf.len() < 2 {
            return Ok(None);
        }
        let header = Header::from_bytes([buf[0], buf[1]]);

        if let Some(expected) = self.config.expect_masked {
            if header.mask != expected {
                tracing::debug!(expected, "rejecting frame with unexpected mask bit");
                return Err(Error::UnexpectedMask {
                    expected,
                    found: header.mask,
                });
            }
        }

        let head_len = 2 + header.extension_len();
        if buf.len() < head_len {
            return Ok(None);
        }
        let ext = parse_extension(&buf[2..head_len]);

        let len = match (header.short_len(), ext.len) {
            (Some(len), _) | (None, Some(len)) => len,
            (None, None) => unreachable!("extension is sized from the header"),
        };
        if header.opcode.is_control() && len > MAX_SHORT_LEN as u64 {
            tracing::debug!(opcode = ?header.opcode, len, "rejecting oversized control frame");
            return Err(Error::ControlTooLarge(len));
        }
        let payload_len = match usize::try_from(len) {
            Ok(n) if n <= self.config.max_payload_len => n,
            _ => {
                tracing::debug!(len, "rejecting oversized frame");
                return Err(Error::PayloadTooLarge {
                    len,
                    max: self.config.max_payload_len,
                });
            }
        };
        // the caller's reads grow the buffer; nothing is reserved up front
        if buf.len() - head_len < payload_len {
            return Ok(None);
        }

        buf.advance(head_len);
        let mut payload = buf.split_to(payload_len);
        if let Some(key) = ext.mask {
            apply_mask(&mut payload, key);
        }

        tracing::trace!(opcode = ?header.opcode, len = payload_len, fin = header.fin, "decoded frame");
        Ok(Some(Frame::new(
            header.fin,
            header.opcode,
            header.rsv,
            payload.freeze(),
        )))
    }
}
