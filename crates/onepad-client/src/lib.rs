//! Onepad client -- pad-file loading and one-shot transform requests.
//!
//! The `enc_client` and `dec_client` binaries differ only in the tag they
//! present; file validation, the request procedure, and the CLI live here.

pub mod cli;
pub mod input;
pub mod request;

pub use request::request;

use onepad_protocol::{ProtocolError, EXIT_FAILURE};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("unable to open {path}: {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid character in {path}: {source}")]
    InvalidContent {
        path: String,
        source: ProtocolError,
    },
    #[error("unable to connect to {addr}: {source}")]
    Connect {
        addr: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

impl ClientError {
    /// Process exit code under the 0/1/2 contract.
    pub fn exit_code(&self) -> u8 {
        match self {
            ClientError::Protocol(e) => e.exit_code(),
            _ => EXIT_FAILURE,
        }
    }
}
