//! Persisted history models

use serde::{Deserialize, Serialize};

use super::recommendation::{deserialize_top_crops, TopCrops};

/// One archived recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Local, human-readable time of the request
    pub date: String,
    #[serde(deserialize_with = "deserialize_top_crops")]
    pub result: TopCrops,
}

impl HistoryEntry {
    pub fn new(date: impl Into<String>, result: TopCrops) -> Self {
        Self {
            date: date.into(),
            result,
        }
    }

    /// Crop names in rank order
    pub fn crop_names(&self) -> [&str; 3] {
        [
            self.result[0].crop.as_str(),
            self.result[1].crop.as_str(),
            self.result[2].crop.as_str(),
        ]
    }
}

/// Every archived recommendation, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    pub entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// Decode the stored value; a missing or unreadable value is an empty log
    pub fn decode(raw: Option<&str>) -> Self {
        match raw {
            Some(raw) => serde_json::from_str(raw).unwrap_or_else(|e| {
                tracing::debug!("Discarding unreadable history: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Encode for storage as a JSON array
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<Vec<HistoryEntry>> for HistoryLog {
    fn from(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
