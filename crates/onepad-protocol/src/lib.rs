//! Onepad protocol -- alphabet, cipher transform, frame codec, service tags.
//!
//! TCP between client and server, one transform per connection.
//! 4-byte big-endian length prefix + raw alphabet payload.

pub mod alphabet;
pub mod cipher;
pub mod codec;
pub mod framing;
pub mod tag;

pub use cipher::{transform, Direction};
pub use codec::FrameCodec;
pub use framing::FrameStream;
pub use tag::ServiceTag;

/// Chunk window for socket writes; reads are bounded by one byte less.
pub const CHUNK_SIZE: usize = 1000;

/// Maximum frame size: 1 MiB. Pads are plain text files; a larger length
/// prefix is rejected rather than allocated.
pub const MAX_FRAME_BYTES: usize = 1024 * 1024;

/// Service tag size on the wire (3 ASCII chars + NUL).
pub const TAG_WIRE_SIZE: usize = 4;

/// Exit code for usage, input-validation, and transport failures.
pub const EXIT_FAILURE: u8 = 1;

/// Exit code for a service-tag mismatch.
pub const EXIT_TAG_MISMATCH: u8 = 2;

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("invalid symbol {symbol:?} (code {byte}) at byte {pos}; alphabet is A-Z and space")]
    InvalidSymbol { symbol: char, byte: u8, pos: usize },
    #[error("key too short: {key} key bytes for {text} bytes of text")]
    KeyTooShort { text: usize, key: usize },
    #[error("frame too large: {size} bytes (max {max})")]
    FrameTooLarge { size: usize, max: usize },
    #[error("connection closed mid-frame after {got} buffered bytes")]
    TruncatedFrame { got: usize },
    #[error("service tag mismatch: we are \"{ours}\", peer sent \"{theirs}\"")]
    TagMismatch { ours: ServiceTag, theirs: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProtocolError {
    /// Process exit code under the 0/1/2 contract: tag mismatches are the
    /// only class with a dedicated code.
    pub fn exit_code(&self) -> u8 {
        match self {
            ProtocolError::TagMismatch { .. } => EXIT_TAG_MISMATCH,
            _ => EXIT_FAILURE,
        }
    }
}
