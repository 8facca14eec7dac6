use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A frame argument was never supplied to the builder.
    #[error("missing frame argument `{0}`, expected build(payload, opcode, mask)")]
    MissingArgument(&'static str),

    #[error("payload of {len} bytes exceeds the limit of {max}")]
    PayloadTooLarge { len: u64, max: usize },

    /// The mask bit did not match what this side of the connection expects.
    #[error("frame mask bit is {found}, expected {expected}")]
    UnexpectedMask { expected: bool, found: bool },

    /// Close, ping and pong frames carry at most 125 bytes.
    #[error("control frame payload of {0} bytes exceeds 125")]
    ControlTooLarge(u64),
}
