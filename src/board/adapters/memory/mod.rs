//! In-memory adapter for the key-value port.

mod key_value;

pub use key_value::InMemoryKeyValueStore;
