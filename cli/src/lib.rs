//! Crop Advisor terminal front-end
//!
//! Runs the shared submitter against the live recommendation service with
//! history kept in a local JSON file.

use std::io::Write;

use shared::{FormFields, HistoryStore, Submitter};

pub mod args;
pub mod config;
pub mod error;
pub mod external;
pub mod storage;
pub mod ui;

pub use args::{Cli, Command, RecommendArgs};
pub use config::Config;
pub use error::{CliError, CliResult};
pub use external::RecommendationApiClient;
pub use storage::{JsonFileHistoryRepository, LocalClock};
pub use ui::TerminalUi;

/// Execute one command
pub async fn run<O: Write, E: Write>(
    command: Command,
    config: &Config,
    ui: &TerminalUi<O, E>,
) -> CliResult<()> {
    let history = HistoryStore::new(
        JsonFileHistoryRepository::new(&config.history_path),
        LocalClock,
    );

    match command {
        Command::Recommend(args) => {
            tracing::info!(endpoint = %config.endpoint, "Submitting recommendation request");
            let submitter = Submitter::new(RecommendationApiClient::new(&config.endpoint), history);
            submitter.submit(&FormFields::from(args), ui, ui).await?;
        }
        Command::History { json: true } => {
            ui.print(&serde_json::to_string_pretty(&history.load())?);
        }
        Command::History { json: false } => {
            history.render(ui);
        }
    }

    Ok(())
}
