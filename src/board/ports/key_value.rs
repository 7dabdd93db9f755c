//! Synchronous key-value storage port holding the persisted board.

use crate::board::domain::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value store operations.
pub type KeyValueResult<T> = Result<T, KeyValueError>;

/// Key-value slot storage.
///
/// Calls block until the value is read or written; there is no queuing and
/// no retry.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError`] when the backing store cannot be read.
    fn get(&self, key: &StorageKey) -> KeyValueResult<Option<String>>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError`] when the backing store rejects the write.
    fn set(&self, key: &StorageKey, value: &str) -> KeyValueResult<()>;

    /// Clears the slot. Clearing an empty slot succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError`] when the backing store rejects the removal.
    fn remove(&self, key: &StorageKey) -> KeyValueResult<()>;
}

/// Errors returned by key-value store implementations.
#[derive(Debug, Clone, Error)]
pub enum KeyValueError {
    /// The store is not available in this environment.
    #[error("key-value store unavailable")]
    Unavailable,

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl KeyValueError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

/// Name of a key-value slot.
///
/// Keys double as file stems in directory-backed stores, so they may not
/// contain path separators, `..`, or surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StorageKey(String);

impl StorageKey {
    /// Slot used when no key is configured.
    pub const DEFAULT: &'static str = "todos";

    /// Creates a validated storage key.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidStorageKey`] when the key is empty,
    /// padded with whitespace, or contains a path component.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let is_valid = !raw.is_empty()
            && raw.trim() == raw
            && raw != "."
            && raw != ".."
            && !raw.contains(['/', '\\']);
        if !is_valid {
            return Err(BoardDomainError::InvalidStorageKey(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the key as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StorageKey {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl TryFrom<String> for StorageKey {
    type Error = BoardDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StorageKey> for String {
    fn from(key: StorageKey) -> Self {
        key.0
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
