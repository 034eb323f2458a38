//! Shelf CLI

use std::process;

use clap::Parser;
use tracing::error;

use crate::cli::Cli;

mod cli;
mod logging;

/// Shelf CLI entry point
#[tokio::main]
#[expect(clippy::exit, reason = "the CLI exits with 1 on any failure")]
pub async fn main() {
    // Load .env file if present (ignore if missing)
    _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(parse_error) => {
            let code = i32::from(parse_error.use_stderr());

            _ = parse_error.print();

            process::exit(code);
        }
    };

    if let Err(init_error) = logging::init(&cli.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for logging errors"
        )]
        {
            eprintln!("Error: {init_error}");
        }

        process::exit(1);
    }

    if let Err(run_error) = cli.run().await {
        error!("Error: {run_error}");

        process::exit(1);
    }
}
