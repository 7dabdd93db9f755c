//! Laneboard: a single-page, three-lane task board core.
//!
//! This crate holds everything behind a TODO / DOING / DONE board except
//! the rendering: the task state model, the drop resolution that turns
//! drag-and-drop gestures into lane moves, and write-through persistence of
//! the whole collection into a key-value slot.
//!
//! # Architecture
//!
//! Laneboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, filesystem)
//!
//! # Modules
//!
//! - [`board`]: Task state, lanes, drop resolution, and persistence

pub mod board;
