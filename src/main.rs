#![recursion_limit = "256"]

mod cli;
mod application;
mod domain;
mod data;
mod ml;
mod infra;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("spam_classifier=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let kind = cli::error_kind(&err);
            tracing::debug!("Failed with {:?}", kind);
            eprintln!("Error: {err:?}");
            ExitCode::from(kind.exit_code())
        }
    }
}
