use super::MaskKey;
use std::convert::TryInto;

/// XORs `buf` with `key` repeated, byte `i` using `key[i % 4]`.
///
/// Masking and unmasking are the same operation.
#[inline]
pub fn apply_mask(buf: &mut [u8], key: MaskKey) {
    let word = u64::from_ne_bytes([
        key[0], key[1], key[2], key[3], key[0], key[1], key[2], key[3],
    ]);

    let mut chunks = buf.chunks_exact_mut(8);
    for chunk in &mut chunks {
        let mut bytes = [0; 8];
        bytes.copy_from_slice(chunk);
        chunk.copy_from_slice(&(u64::from_ne_bytes(bytes) ^ word).to_ne_bytes());
    }

    // the remainder starts on a multiple of 8, so the key phase is unchanged
    apply_mask_fallback(chunks.into_remainder(), key);
}

#[inline]
pub(crate) fn apply_mask_fallback(buf: &mut [u8], key: MaskKey) {
    for (i, b) in buf.iter_mut().enumerate() {
        *b ^= key[i % 4];
    }
}

/// Unmasks a received payload in place.
///
/// Returns `None` without touching `payload` if `key` is not 4 bytes long or
/// the payload is empty.
///
/// ```
/// use ws_codec::frame::unmask_payload;
///
/// let mut payload = *b"\x7f\x9f\x4d\x51\x58";
/// let plain = unmask_payload(&[0x37, 0xfa, 0x21, 0x3d], &mut payload).unwrap();
/// assert_eq!(plain, b"Hello");
/// ```
pub fn unmask_payload<'a>(key: &[u8], payload: &'a mut [u8]) -> Option<&'a mut [u8]> {
    let key: MaskKey = key.try_into().ok()?;
    if payload.is_empty() {
        return None;
    }
    apply_mask(payload, key);
    Some(payload)
}
