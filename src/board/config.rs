//! Board configuration.

use serde::{Deserialize, Serialize};

use crate::board::ports::StorageKey;

/// How the board reacts when a write-through save fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersistenceFailurePolicy {
    /// Reject the mutation and leave the in-memory collection untouched.
    #[default]
    Strict,
    /// Keep the mutation in memory and log the failed write.
    InMemoryFallback,
}

/// Configuration for a task board.
///
/// # Examples
///
/// ```
/// use laneboard::board::config::{BoardConfig, PersistenceFailurePolicy};
///
/// let config = BoardConfig::default();
/// assert_eq!(config.storage_key.as_str(), "todos");
/// assert_eq!(config.persistence_failure, PersistenceFailurePolicy::Strict);
///
/// let degraded = BoardConfig::in_memory_fallback();
/// assert_eq!(
///     degraded.persistence_failure,
///     PersistenceFailurePolicy::InMemoryFallback
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Slot holding the serialized task collection.
    pub storage_key: StorageKey,
    /// Reaction to failed saves (and, for the fallback, failed loads).
    pub persistence_failure: PersistenceFailurePolicy,
}

impl BoardConfig {
    /// Creates a configuration that keeps working in memory when storage
    /// fails.
    #[must_use]
    pub fn in_memory_fallback() -> Self {
        Self {
            persistence_failure: PersistenceFailurePolicy::InMemoryFallback,
            ..Default::default()
        }
    }

    /// Sets the storage slot.
    #[must_use]
    pub fn with_storage_key(mut self, storage_key: StorageKey) -> Self {
        self.storage_key = storage_key;
        self
    }
}
