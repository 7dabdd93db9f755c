//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task text is empty after trimming.
    #[error("task text must not be empty")]
    EmptyTaskText,

    /// The storage key is empty, padded, or contains a path separator.
    #[error("invalid storage key '{0}', expected a bare non-empty name")]
    InvalidStorageKey(String),
}

/// Error returned while parsing a lane identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown lane: {0}")]
pub struct ParseLaneError(pub String);

/// Errors returned while translating a raw drag gesture into a drop
/// description.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DropTranslationError {
    /// The draggable identifier is not a task identifier.
    #[error("invalid draggable id '{0}', expected an integer task id")]
    InvalidDraggableId(String),

    /// A droppable identifier does not name a lane.
    #[error(transparent)]
    UnknownLane(#[from] ParseLaneError),
}
