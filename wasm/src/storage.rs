//! Browser `localStorage` history repository and clock

use shared::{Clock, HistoryLog, HistoryRepository, StorageError, HISTORY_STORAGE_KEY};
use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::dom::{js_error_message, window};

/// History kept under one `localStorage` key
#[derive(Debug, Clone)]
pub struct LocalStorageRepository {
    key: String,
}

impl LocalStorageRepository {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Result<Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage())
            .map_err(|e| StorageError::Unavailable(js_error_message(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }

    /// Raw stored value, if any
    pub fn raw(&self) -> Option<String> {
        self.storage()
            .ok()
            .and_then(|s| s.get_item(&self.key).ok().flatten())
    }
}

impl Default for LocalStorageRepository {
    fn default() -> Self {
        Self::new(HISTORY_STORAGE_KEY)
    }
}

impl HistoryRepository for LocalStorageRepository {
    fn load(&self) -> HistoryLog {
        HistoryLog::decode(self.raw().as_deref())
    }

    fn save(&self, log: &HistoryLog) -> Result<(), StorageError> {
        let encoded = log.encode()?;
        self.storage()?
            .set_item(&self.key, &encoded)
            .map_err(|e| StorageError::Write(js_error_message(&e)))
    }
}

/// Local time in the browser's locale format
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> String {
        js_sys::Date::new_0()
            .to_locale_string("default", &JsValue::UNDEFINED)
            .into()
    }
}
