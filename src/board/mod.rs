//! Three-lane task board with write-through persistence.
//!
//! Tasks are created in the TODO lane, moved between TODO, DOING, and DONE
//! (by drag-and-drop or directly), toggled, and deleted. Every change is
//! written to a single key-value slot before it becomes visible. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Board settings in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
