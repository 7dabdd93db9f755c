//! Process-local key-value store.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::board::ports::{KeyValueError, KeyValueResult, KeyValueStore, StorageKey};

/// Thread-safe in-memory key-value store.
///
/// Clones share the same slots, so a test can keep a handle and inspect what
/// a board wrote. The store can be marked unavailable to simulate a
/// disabled or full browser storage area.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    state: Arc<RwLock<InMemoryKeyValueState>>,
}

#[derive(Debug, Default)]
struct InMemoryKeyValueState {
    slots: HashMap<StorageKey, String>,
    write_count: usize,
    unavailable: bool,
}

impl InMemoryKeyValueStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with `value` already written under `key`.
    #[must_use]
    pub fn with_value(key: &StorageKey, value: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .slots
            .insert(key.clone(), value.into());
        store
    }

    /// Returns the raw value under `key`, bypassing availability checks.
    #[must_use]
    pub fn value(&self, key: &StorageKey) -> Option<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .slots
            .get(key)
            .cloned()
    }

    /// Returns how many successful writes the store has accepted.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .write_count
    }

    fn read_state(&self) -> KeyValueResult<RwLockReadGuard<'_, InMemoryKeyValueState>> {
        self.state.read().map_err(|err| {
            KeyValueError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write_state(&self) -> KeyValueResult<RwLockWriteGuard<'_, InMemoryKeyValueState>> {
        self.state.write().map_err(|err| {
            KeyValueError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    /// Makes every subsequent read, write, and removal fail (or succeed
    /// again when `unavailable` is `false`).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .unavailable = unavailable;
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &StorageKey) -> KeyValueResult<Option<String>> {
        let state = self.read_state()?;
        if state.unavailable {
            return Err(KeyValueError::Unavailable);
        }
        Ok(state.slots.get(key).cloned())
    }

    fn set(&self, key: &StorageKey, value: &str) -> KeyValueResult<()> {
        let mut state = self.write_state()?;
        if state.unavailable {
            return Err(KeyValueError::Unavailable);
        }
        state.slots.insert(key.clone(), value.to_owned());
        state.write_count += 1;
        Ok(())
    }

    fn remove(&self, key: &StorageKey) -> KeyValueResult<()> {
        let mut state = self.write_state()?;
        if state.unavailable {
            return Err(KeyValueError::Unavailable);
        }
        state.slots.remove(key);
        Ok(())
    }
}
