//! Adapter implementations for board ports.
//!
//! - [`memory`]: process-local store for tests and ephemeral boards
//! - [`directory`]: one file per slot inside a capability directory

pub mod directory;
pub mod memory;
