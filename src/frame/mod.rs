//! RFC 6455 frame codec.
//!
//! A frame on the wire is a two byte [`Header`], an optional [`Extension`]
//! holding the extended payload length and mask key, then the payload.
//! The transforms here are stateless apart from the [`MaskKeys`] generator a
//! caller passes in when building masked frames.

use bytes::BytesMut;
use std::fmt;

mod builder;
pub use builder::{build_frame, encode, frame_len, len_code, Builder, MAX_SHORT_LEN};

mod decoder;
pub use decoder::{Config, Decoder};

mod extension;
pub use extension::{parse_extension, Extension};

mod header;
pub use header::{parse_header, Header};

mod keys;
pub use keys::{MaskKeys, RandomKeys, SeededKeys};

mod mask;
pub use mask::{apply_mask, unmask_payload};

mod opcode;
pub use opcode::Opcode;

/// The 4-byte key a payload is masked with.
pub type MaskKey = [u8; 4];

pub struct Frame<P> {
    pub fin: bool,
    pub opcode: Opcode,
    pub rsv: [bool; 3],
    pub payload: P,
}

impl<P> Frame<P> {
    pub const fn new(fin: bool, opcode: Opcode, rsv: [bool; 3], payload: P) -> Self {
        Self {
            fin,
            opcode,
            rsv,
            payload,
        }
    }

    pub const fn binary(payload: P) -> Self {
        Self::new_default(Opcode::Binary, payload)
    }

    pub const fn text(payload: P) -> Self {
        Self::new_default(Opcode::Text, payload)
    }

    pub const fn ping(payload: P) -> Self {
        Self::new_default(Opcode::Ping, payload)
    }

    pub const fn pong(payload: P) -> Self {
        Self::new_default(Opcode::Pong, payload)
    }

    pub const fn close(payload: P) -> Self {
        Self::new_default(Opcode::Close, payload)
    }

    const fn new_default(op: Opcode, payload: P) -> Self {
        Self::new(true, op, [false; 3], payload)
    }

    /// The first byte on the wire: FIN, RSV bits and opcode.
    pub fn first_byte(&self) -> u8 {
        let [rsv1, rsv2, rsv3] = self.rsv;
        (self.fin as u8) << 7
            | (rsv1 as u8) << 6
            | (rsv2 as u8) << 5
            | (rsv3 as u8) << 4
            | u8::from(self.opcode)
    }

    pub fn into_payload(self) -> P {
        self.payload
    }
}

impl<P: AsRef<[u8]>> Frame<P> {
    /// Writes this frame to `dst`, masking the payload if `key` is given.
    pub fn encode(&self, dst: &mut BytesMut, key: Option<MaskKey>) {
        encode(dst, self.first_byte(), self.payload.as_ref(), key)
    }
}

impl<P> fmt::Debug for Frame<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("fin", &self.fin)
            .field("opcode", &self.opcode)
            .field("rsv", &self.rsv)
            .finish()
    }
}
