//! Crop Advisor - command-line client
//!
//! Requests crop recommendations from the remote scoring service and keeps
//! a local history of the results.

use anyhow::Context;
use clap::Parser;
use crop_advisor_cli::{run, Cli, CliError, Config, TerminalUi};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crop_advisor_cli=info,shared=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = Config::load()
        .context("Failed to load configuration")?
        .with_overrides(cli.endpoint, cli.history_file);

    tracing::debug!("History file: {}", config.history_path.display());

    match run(cli.command, &config, &TerminalUi::stdio()).await {
        Ok(()) => Ok(()),
        // The alert has already been printed
        Err(e @ CliError::Submit(_)) => std::process::exit(e.exit_code()),
        Err(e) => Err(e.into()),
    }
}
