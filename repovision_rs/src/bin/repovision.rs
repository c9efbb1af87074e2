use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use repovision::cli::{Cli, commands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries SVG and command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("Starting repovision v{}", env!("CARGO_PKG_VERSION"));

    match commands::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[repovision] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
