//! History store
//!
//! Each successful recommendation is appended to a persisted log and the
//! list view is rebuilt from storage after every change. Storage is reached
//! only through [`HistoryRepository`], so the same store runs against
//! browser storage, a JSON file or memory.

use std::cell::RefCell;
use std::rc::Rc;

use crate::display::{history_view, HistoryItemView};
use crate::error::StorageError;
use crate::models::{HistoryEntry, HistoryLog, TopCrops};

/// Persistence for the history log
///
/// `load` never fails: a missing or unreadable value is an empty log.
pub trait HistoryRepository {
    fn load(&self) -> HistoryLog;
    fn save(&self, log: &HistoryLog) -> Result<(), StorageError>;
}

impl<T: HistoryRepository + ?Sized> HistoryRepository for &T {
    fn load(&self) -> HistoryLog {
        (**self).load()
    }

    fn save(&self, log: &HistoryLog) -> Result<(), StorageError> {
        (**self).save(log)
    }
}

impl<T: HistoryRepository + ?Sized> HistoryRepository for Rc<T> {
    fn load(&self) -> HistoryLog {
        (**self).load()
    }

    fn save(&self, log: &HistoryLog) -> Result<(), StorageError> {
        (**self).save(log)
    }
}

/// Source of the human-readable timestamp stored with each entry
pub trait Clock {
    fn now(&self) -> String;
}

impl<F: Fn() -> String> Clock for F {
    fn now(&self) -> String {
        self()
    }
}

/// Where the rendered history goes
pub trait HistoryView {
    /// Replace whatever is shown with `items`
    fn show(&self, items: &[HistoryItemView]);
}

impl<T: HistoryView + ?Sized> HistoryView for &T {
    fn show(&self, items: &[HistoryItemView]) {
        (**self).show(items)
    }
}

/// Append-only history backed by a repository
#[derive(Debug, Clone)]
pub struct HistoryStore<R, C> {
    repository: R,
    clock: C,
}

impl<R: HistoryRepository, C: Clock> HistoryStore<R, C> {
    pub fn new(repository: R, clock: C) -> Self {
        Self { repository, clock }
    }

    /// Current persisted log
    pub fn load(&self) -> HistoryLog {
        self.repository.load()
    }

    /// Archive `crops` with the current time, persist, then re-render
    ///
    /// The view is left untouched when the write fails.
    pub fn record(
        &self,
        crops: &TopCrops,
        view: &impl HistoryView,
    ) -> Result<HistoryEntry, StorageError> {
        let mut log = self.repository.load();
        let entry = HistoryEntry::new(self.clock.now(), crops.clone());
        log.push(entry.clone());

        self.repository.save(&log)?;
        tracing::debug!("History now holds {} entries", log.len());

        self.render(view);
        Ok(entry)
    }

    /// Rebuild the view from storage without touching it
    pub fn render(&self, view: &impl HistoryView) -> Vec<HistoryItemView> {
        let items = history_view(&self.repository.load());
        view.show(&items);
        items
    }
}

/// Repository holding the raw encoded value in memory
///
/// Keeps the string form so tests can seed absent or corrupt storage.
#[derive(Debug, Default)]
pub struct InMemoryHistoryRepository {
    raw: RefCell<Option<String>>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary stored value
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RefCell::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl HistoryRepository for InMemoryHistoryRepository {
    fn load(&self) -> HistoryLog {
        HistoryLog::decode(self.raw.borrow().as_deref())
    }

    fn save(&self, log: &HistoryLog) -> Result<(), StorageError> {
        *self.raw.borrow_mut() = Some(log.encode()?);
        Ok(())
    }
}

/// View that keeps the last rendered items, for tests and headless use
#[derive(Debug, Default)]
pub struct RecordingHistoryView {
    pub shown: RefCell<Vec<HistoryItemView>>,
    pub renders: RefCell<usize>,
}

impl HistoryView for RecordingHistoryView {
    fn show(&self, items: &[HistoryItemView]) {
        *self.shown.borrow_mut() = items.to_vec();
        *self.renders.borrow_mut() += 1;
    }
}
