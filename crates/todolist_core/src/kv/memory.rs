//! In-process key-value store.

use super::{KeyValueStore, KvResult};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// Map-backed store for single-threaded use and tests.
///
/// Counts `set` and `remove` calls so persistence traffic is observable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
    writes: Cell<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set`/`remove` calls served so far.
    pub fn write_count(&self) -> u64 {
        self.writes.get()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn record_write(&self) {
        self.writes.set(self.writes.get() + 1);
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> KvResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.record_write();
        Ok(())
    }

    fn remove(&self, key: &str) -> KvResult<()> {
        self.entries.borrow_mut().remove(key);
        self.record_write();
        Ok(())
    }
}
