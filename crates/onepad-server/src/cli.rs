//! Shared CLI for the service binaries.
//!
//! Usage: enc_server port [--config path.toml]
//!        dec_server port [--config path.toml]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use onepad_protocol::{ServiceTag, EXIT_FAILURE};

use crate::{PadServer, ServerConfig};

#[derive(Parser)]
pub struct Cli {
    /// Port to listen on
    pub port: u16,

    /// Path to an optional TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Parse argv, load config, bind, and serve until the process is killed.
///
/// Shared by the `enc_server` and `dec_server` binaries; only the tag
/// differs. Exit codes: 1 for usage/bind failures (2 is reserved for
/// tag mismatches, reported by clients).
pub async fn run_service(service: ServiceTag) -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "onepad_server=info".into()),
        )
        .init();

    // Usage failures exit 1, not clap's default of 2.
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

    let name = format!("{}_server", service.as_str());
    let config = match cli.config {
        Some(ref path) => match ServerConfig::load_or_default(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{name}: {e}");
                return ExitCode::from(EXIT_FAILURE);
            }
        },
        None => ServerConfig::default(),
    };

    match PadServer::bind(service, &config, cli.port).await {
        Ok(server) => {
            server.serve().await;
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{name}: {e}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
