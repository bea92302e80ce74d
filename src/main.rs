mod cli;
mod config;
mod credentials;
mod error;
mod listing;
mod model;
mod providers;

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout carries only the listing.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("DE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match config::load_config() {
        Ok(config) => cli::run(cli, &config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
