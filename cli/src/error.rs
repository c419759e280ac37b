//! Error handling for the Crop Advisor CLI

use shared::SubmitError;
use thiserror::Error;

/// CLI error types
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    /// Already shown to the user by the submitter
    #[error("{}", .0.alert_message())]
    Submit(#[from] SubmitError),

    #[error("Failed to encode history: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Submit(SubmitError::Validation(_)) => 2,
            CliError::Submit(SubmitError::Service(_)) => 3,
            CliError::Submit(SubmitError::Transport(_)) => 4,
            _ => 1,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
