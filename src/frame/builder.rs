use super::{apply_mask, MaskKey, MaskKeys};
use crate::{Error, Result};
use bytes::{BufMut, Bytes, BytesMut};

/// Largest payload whose length fits in the header itself.
pub const MAX_SHORT_LEN: usize = 125;

/// The 7-bit length field for a payload of `len` bytes.
///
/// Payloads of 65535 bytes and up use the 64-bit extended length.
pub fn len_code(len: usize) -> u8 {
    if len <= MAX_SHORT_LEN {
        len as u8
    } else if len < 0xffff {
        126
    } else {
        127
    }
}

/// Size of the encoded frame for a payload of `payload_len` bytes.
pub fn frame_len(payload_len: usize, mask: bool) -> usize {
    let ext = match len_code(payload_len) {
        126 => 2,
        127 => 8,
        _ => 0,
    };
    let key = if mask { 4 } else { 0 };
    2 + ext + key + payload_len
}

/// Writes one frame to `dst`.
///
/// `first` is written verbatim, so it carries the FIN and RSV bits along with
/// the opcode. The payload is masked with `key` when one is given.
pub fn encode(dst: &mut BytesMut, first: u8, payload: &[u8], key: Option<MaskKey>) {
    let len = payload.len();
    dst.reserve(frame_len(len, key.is_some()));

    let code = len_code(len);
    let mask_bit = if key.is_some() { 0x80 } else { 0 };
    dst.put_u8(first);
    dst.put_u8(mask_bit | code);

    match code {
        126 => dst.put_u16(len as u16),
        127 => dst.put_u64(len as u64),
        _ => {}
    }

    if let Some(key) = key {
        dst.put_slice(&key);
        let start = dst.len();
        dst.put_slice(payload);
        apply_mask(&mut dst[start..], key);
    } else {
        dst.put_slice(payload);
    }

    tracing::trace!(first, len, masked = key.is_some(), "encoded frame");
}

/// Builds a complete frame, drawing a key from `keys` when `mask` is set.
///
/// ```
/// use ws_codec::frame::{build_frame, SeededKeys};
///
/// let frame = build_frame(b"Hello", 0x81, false, SeededKeys::default());
/// assert_eq!(&frame[..], b"\x81\x05Hello");
/// ```
pub fn build_frame<K: MaskKeys>(payload: &[u8], opcode: u8, mask: bool, mut keys: K) -> Bytes {
    let key = if mask { Some(keys.next_key()) } else { None };
    let mut dst = BytesMut::with_capacity(frame_len(payload.len(), mask));
    encode(&mut dst, opcode, payload, key);
    dst.freeze()
}

/// Collects the arguments of a frame before building it.
///
/// ```
/// use ws_codec::frame::{Builder, RandomKeys};
///
/// let frame = Builder::new()
///     .payload(b"ping")
///     .opcode(0x89)
///     .mask(true)
///     .build(RandomKeys::default())?;
/// assert_eq!(frame.len(), 2 + 4 + 4);
/// # Ok::<_, ws_codec::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Builder<'a> {
    payload: Option<&'a [u8]>,
    opcode: Option<u8>,
    mask: Option<bool>,
}

impl<'a> Builder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payload(mut self, payload: &'a [u8]) -> Self {
        self.payload = Some(payload);
        self
    }

    /// The first frame byte: FIN, RSV bits and opcode.
    pub fn opcode(mut self, opcode: u8) -> Self {
        self.opcode = Some(opcode);
        self
    }

    pub fn mask(mut self, mask: bool) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn build<K: MaskKeys>(self, keys: K) -> Result<Bytes> {
        let payload = self.payload.ok_or(Error::MissingArgument("payload"))?;
        let opcode = self.opcode.ok_or(Error::MissingArgument("opcode"))?;
        let mask = self.mask.ok_or(Error::MissingArgument("mask"))?;
        Ok(build_frame(payload, opcode, mask, keys))
    }
}
