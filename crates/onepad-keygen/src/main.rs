//! Random key generator.
//!
//! Usage: keygen keylength
//!
//! Writes `keylength` symbols drawn uniformly from the 27-symbol alphabet,
//! then a newline, to standard output. The key is only as strong as the
//! process randomness; pads meant for real secrecy need a better source.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use onepad_protocol::alphabet;
use onepad_protocol::EXIT_FAILURE;
use rand::Rng;

#[derive(Parser)]
#[command(name = "keygen", about = "Generate a random one-time pad")]
struct Cli {
    /// Number of key symbols to generate (positive)
    keylength: usize,
}

/// Draw `length` symbols uniformly from the alphabet.
fn generate_key<R: Rng>(rng: &mut R, length: usize) -> Vec<u8> {
    (0..length)
        .map(|_| alphabet::symbol(rng.gen_range(0..alphabet::RADIX)))
        .collect()
}

fn main() -> ExitCode {
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

    if cli.keylength == 0 {
        eprintln!("keygen: keylength must be positive");
        return ExitCode::from(EXIT_FAILURE);
    }

    let key = generate_key(&mut rand::thread_rng(), cli.keylength);

    let mut stdout = io::stdout().lock();
    match stdout
        .write_all(&key)
        .and_then(|()| stdout.write_all(b"\n"))
        .and_then(|()| stdout.flush())
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("keygen: {e}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
