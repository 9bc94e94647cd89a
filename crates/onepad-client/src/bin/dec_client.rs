//! Decryption client binary.
//!
//! Usage: dec_client textfile keyfile port

use std::process::ExitCode;

use onepad_protocol::ServiceTag;

#[tokio::main]
async fn main() -> ExitCode {
    onepad_client::cli::run_client(ServiceTag::Decrypt).await
}
