//! Key-value store backed by a capability directory.
//!
//! Each slot is a `<key>.json` file. Writes land in a hidden temporary file
//! first and are renamed over the slot, so a reader never sees a torn
//! payload.

use std::fmt;
use std::io::ErrorKind;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::board::ports::{KeyValueError, KeyValueResult, KeyValueStore, StorageKey};

/// Key-value store keeping one file per slot.
pub struct DirectoryKeyValueStore {
    dir: Dir,
}

impl DirectoryKeyValueStore {
    /// Wraps an already opened directory.
    #[must_use]
    pub const fn new(dir: Dir) -> Self {
        Self { dir }
    }

    /// Opens `path`, creating it and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError::Persistence`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> KeyValueResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .map_err(KeyValueError::persistence)?;
        let dir =
            Dir::open_ambient_dir(path, ambient_authority()).map_err(KeyValueError::persistence)?;
        Ok(Self::new(dir))
    }
}

impl fmt::Debug for DirectoryKeyValueStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryKeyValueStore").finish_non_exhaustive()
    }
}

fn slot_file(key: &StorageKey) -> String {
    format!("{key}.json")
}

fn staging_file(key: &StorageKey) -> String {
    format!(".{key}.json.tmp")
}

impl KeyValueStore for DirectoryKeyValueStore {
    fn get(&self, key: &StorageKey) -> KeyValueResult<Option<String>> {
        match self.dir.read_to_string(slot_file(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(KeyValueError::persistence(err)),
        }
    }

    fn set(&self, key: &StorageKey, value: &str) -> KeyValueResult<()> {
        let staging = staging_file(key);
        self.dir
            .write(&staging, value)
            .map_err(KeyValueError::persistence)?;
        self.dir
            .rename(&staging, &self.dir, slot_file(key))
            .map_err(KeyValueError::persistence)
    }

    fn remove(&self, key: &StorageKey) -> KeyValueResult<()> {
        match self.dir.remove_file(slot_file(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(KeyValueError::persistence(err)),
        }
    }
}
