//! Helpers for the opening HTTP handshake.
//!
//! The request/response exchange itself belongs to the HTTP layer; these only
//! derive the header values.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::Rng;
use ::sha1::{Digest, Sha1};

pub const SEC_WEBSOCKET_ACCEPT: &str = "Sec-WebSocket-Accept";
pub const SEC_WEBSOCKET_KEY: &str = "Sec-WebSocket-Key";

const GUID: &[u8] = b"258EAFA5-E914-47DA-95CA-C5AB0DC85B11";

/// Standard base64 with `=` padding.
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn sha1(bytes: &[u8]) -> [u8; 20] {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    hasher.finalize().into()
}

/// A fresh `Sec-WebSocket-Key` value: 16 random bytes, base64 encoded.
pub fn generate_key<R: Rng + ?Sized>(rng: &mut R) -> String {
    let nonce: [u8; 16] = rng.gen();
    encode_base64(&nonce)
}

/// The `Sec-WebSocket-Accept` value a server answers `key` with.
///
/// ```
/// use ws_codec::handshake;
///
/// let accept = handshake::accept(b"dGhlIHNhbXBsZSBub25jZQ==");
/// assert_eq!(accept, "s3pPLMBiTxaQ9kYGzzhZRbK+xOo=");
/// ```
pub fn accept(key: &[u8]) -> String {
    let bytes = [key, GUID].concat();
    encode_base64(&sha1(&bytes))
}
