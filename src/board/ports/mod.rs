//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod key_value;

pub use key_value::{KeyValueError, KeyValueResult, KeyValueStore, StorageKey};
