//! File-backed history repository and local clock

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use shared::{Clock, HistoryLog, HistoryRepository, StorageError};
use tempfile::NamedTempFile;

/// History kept as one JSON array in a file
#[derive(Debug, Clone)]
pub struct JsonFileHistoryRepository {
    path: PathBuf,
}

impl JsonFileHistoryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Raw file contents, `None` when the file does not exist
    pub fn raw(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Cannot read history file {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

impl HistoryRepository for JsonFileHistoryRepository {
    fn load(&self) -> HistoryLog {
        HistoryLog::decode(self.raw().as_deref())
    }

    /// Replace the file atomically so a crash never leaves half a log
    fn save(&self, log: &HistoryLog) -> Result<(), StorageError> {
        let encoded = log.encode()?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| StorageError::Write(e.to_string()))?;

        let mut file = NamedTempFile::new_in(dir).map_err(|e| StorageError::Write(e.to_string()))?;
        file.write_all(encoded.as_bytes())
            .map_err(|e| StorageError::Write(e.to_string()))?;
        file.persist(&self.path)
            .map_err(|e| StorageError::Write(e.error.to_string()))?;

        tracing::debug!("Wrote {} history entries to {}", log.len(), self.path.display());
        Ok(())
    }
}

/// Local time formatted like a browser's default `toLocaleString`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

/// `5/1/2025, 9:30:00 AM`
pub const LOCAL_TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

impl Clock for LocalClock {
    fn now(&self) -> String {
        Local::now().format(LOCAL_TIMESTAMP_FORMAT).to_string()
    }
}
