//! Configuration for the Crop Advisor CLI
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Optional configuration file (config/crop-advisor.toml)
//! 3. Environment variable overrides with CROP_ADVISOR_ prefix

use std::path::PathBuf;

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::DEFAULT_ENDPOINT;

/// Default location of the history file
pub const DEFAULT_HISTORY_PATH: &str = "crop-history.json";

/// Main application configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Recommendation endpoint URL
    pub endpoint: String,

    /// JSON file holding the history log
    pub history_path: PathBuf,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Environment::with_prefix("CROP_ADVISOR"))
    }

    /// Load with a specific environment source (tests pass a fixed map)
    pub fn load_from(environment: Environment) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            // Start with default values
            .set_default("endpoint", DEFAULT_ENDPOINT)?
            .set_default("history_path", DEFAULT_HISTORY_PATH)?
            .add_source(File::with_name("config/crop-advisor").required(false))
            // Override with environment variables
            .add_source(
                environment
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, endpoint: Option<String>, history_path: Option<PathBuf>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        if let Some(history_path) = history_path {
            self.history_path = history_path;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            history_path: PathBuf::from(DEFAULT_HISTORY_PATH),
        }
    }
}
