//! Persistence of the whole task collection in a single key-value slot.

use std::sync::Arc;

use thiserror::Error;

use crate::board::{
    domain::{TaskCollection, TaskRecord},
    ports::{KeyValueError, KeyValueStore, StorageKey},
};

/// Result type for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Errors raised while reading or writing the collection snapshot.
#[derive(Debug, Clone, Error)]
pub enum SnapshotError {
    /// The backing store failed.
    #[error(transparent)]
    Store(#[from] KeyValueError),

    /// The collection could not be serialized.
    #[error("failed to encode task snapshot: {0}")]
    Encode(Arc<serde_json::Error>),
}

/// Outcome of reading the snapshot slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotLoad {
    /// Nothing has been stored yet.
    Missing,
    /// The slot holds something that is not a task list.
    Malformed,
    /// A task list was read and migrated.
    Loaded(TaskCollection),
}

impl SnapshotLoad {
    /// Returns the loaded collection, or an empty one when there was no
    /// usable prior state.
    #[must_use]
    pub fn into_collection(self) -> TaskCollection {
        match self {
            Self::Loaded(tasks) => tasks,
            Self::Missing | Self::Malformed => TaskCollection::new(),
        }
    }
}

/// Reads and writes the task collection as a JSON array of records.
#[derive(Debug, Clone)]
pub struct TaskSnapshotStore<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
    key: StorageKey,
}

impl<S> TaskSnapshotStore<S>
where
    S: KeyValueStore,
{
    /// Creates a snapshot store writing under `key`.
    #[must_use]
    pub const fn new(store: Arc<S>, key: StorageKey) -> Self {
        Self { store, key }
    }

    /// Returns the slot the snapshot lives in.
    #[must_use]
    pub const fn key(&self) -> &StorageKey {
        &self.key
    }

    /// Reads the stored collection.
    ///
    /// Records without a `status` are migrated into the TODO lane. A payload
    /// that does not parse is reported as [`SnapshotLoad::Malformed`] rather
    /// than as an error.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Store`] when the slot cannot be read.
    pub fn load(&self) -> SnapshotResult<SnapshotLoad> {
        let Some(payload) = self.store.get(&self.key)? else {
            return Ok(SnapshotLoad::Missing);
        };
        if payload.trim().is_empty() {
            return Ok(SnapshotLoad::Missing);
        }
        match decode_snapshot(&payload) {
            Ok(tasks) => Ok(SnapshotLoad::Loaded(tasks)),
            Err(err) => {
                tracing::warn!(
                    key = %self.key,
                    error = %err,
                    "ignoring malformed task snapshot"
                );
                Ok(SnapshotLoad::Malformed)
            }
        }
    }

    /// Replaces the stored collection.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] when encoding or the write fails.
    pub fn save(&self, tasks: &TaskCollection) -> SnapshotResult<()> {
        let payload = encode_snapshot(tasks)?;
        self.store.set(&self.key, &payload)?;
        Ok(())
    }
}

/// Parses a snapshot payload.
///
/// # Errors
///
/// Returns the parser error when `payload` is not a JSON array of task
/// records.
pub fn decode_snapshot(payload: &str) -> Result<TaskCollection, serde_json::Error> {
    let records: Vec<TaskRecord> = serde_json::from_str(payload)?;
    Ok(TaskCollection::from_records(records))
}

/// Serializes a collection into its snapshot payload.
///
/// # Errors
///
/// Returns [`SnapshotError::Encode`] if serialization fails.
pub fn encode_snapshot(tasks: &TaskCollection) -> SnapshotResult<String> {
    serde_json::to_string(&tasks.to_records()).map_err(|err| SnapshotError::Encode(Arc::new(err)))
}
