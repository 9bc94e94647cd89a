//! Onepad server -- library crate for the encryption and decryption services.
//!
//! The two service binaries differ only in the tag they answer with and
//! the direction of the transform; everything else lives here.

pub mod cli;
pub mod config;
pub mod server;

pub use config::ServerConfig;
pub use server::PadServer;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Protocol(#[from] onepad_protocol::ProtocolError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
