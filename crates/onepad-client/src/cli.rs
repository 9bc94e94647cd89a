//! Shared CLI for the client binaries.
//!
//! Usage: enc_client textfile keyfile port
//!        dec_client textfile keyfile port

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use onepad_protocol::{ServiceTag, EXIT_FAILURE};

use crate::{input, request, ClientError};

#[derive(Parser)]
pub struct Cli {
    /// Path to the text file
    pub text: PathBuf,

    /// Path to the key file
    pub key: PathBuf,

    /// Server port
    pub port: u16,

    /// Server host
    #[arg(long, default_value = "localhost")]
    pub host: String,
}

/// Parse argv, run one request, print the result followed by a newline.
///
/// Shared by the `enc_client` and `dec_client` binaries; only the tag
/// differs. Exit codes: 0 success, 1 usage/input/transport failure,
/// 2 tag mismatch.
pub async fn run_client(service: ServiceTag) -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "onepad_client=warn".into()),
        )
        .init();

    // Usage failures exit 1; code 2 is reserved for tag mismatches.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_FAILURE),
            };
        }
    };

    let name = format!("{}_client", service.as_str());
    match run(&cli, service).await {
        Ok(result) => {
            let mut stdout = std::io::stdout().lock();
            if stdout
                .write_all(&result)
                .and_then(|()| stdout.write_all(b"\n"))
                .is_err()
            {
                return ExitCode::from(EXIT_FAILURE);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{name}: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: &Cli, service: ServiceTag) -> Result<Vec<u8>, ClientError> {
    let text = input::read_pad_file(&cli.text)?;
    let key = input::read_pad_file(&cli.key)?;
    request(&cli.host, cli.port, service, &text, &key).await
}
