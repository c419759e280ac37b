//! Error types for the Crop Advisor
//!
//! Every failure ends in a blocking message to the user; `alert_message`
//! gives the exact text each front-end shows.

use thiserror::Error;

/// Text shown when a required form field is empty
pub const MISSING_FIELDS_MESSAGE: &str = "⚠ Please fill all required fields!";

/// A required form field was empty
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Failure of one recommendation submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The service answered with an explicit error payload
    #[error("Service error: {0}")]
    Service(String),

    /// Network failure or an unreadable response body
    #[error("Transport error: {0}")]
    Transport(String),
}

impl SubmitError {
    /// Text for the blocking alert
    pub fn alert_message(&self) -> String {
        match self {
            SubmitError::Validation(_) => MISSING_FIELDS_MESSAGE.to_string(),
            SubmitError::Service(message) => message.clone(),
            SubmitError::Transport(message) => format!("API Error: {}", message),
        }
    }
}

/// Writing the history log failed
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to encode history: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to write history: {0}")]
    Write(String),
}

pub type SubmitResult<T> = Result<T, SubmitError>;
