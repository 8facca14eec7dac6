//! The binary framing layer of RFC 6455.
//!
//! ```
//! use bytes::BytesMut;
//! use ws_codec::frame::{build_frame, Decoder, Opcode, RandomKeys};
//!
//! let wire = build_frame(b"Hello", 0x81, true, RandomKeys::default());
//!
//! let mut buf = BytesMut::from(&wire[..]);
//! let frame = Decoder::default().decode(&mut buf)?.unwrap();
//! assert_eq!(frame.opcode, Opcode::Text);
//! assert_eq!(&frame.payload[..], b"Hello");
//! # Ok::<_, ws_codec::Error>(())
//! ```

mod error;
pub use error::{Error, Result};

pub mod frame;
pub use frame::{Frame, Opcode};

pub mod handshake;
