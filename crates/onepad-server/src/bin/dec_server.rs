//! Decryption service binary.
//!
//! Usage: dec_server port [--config path.toml]

use std::process::ExitCode;

use onepad_protocol::ServiceTag;

#[tokio::main]
async fn main() -> ExitCode {
    onepad_server::cli::run_service(ServiceTag::Decrypt).await
}
