//! Drop resolution for drag-and-drop between lanes.
//!
//! A gesture library reports where a dragged item started and where it was
//! released. [`resolve_drop`] turns that report into an optional
//! [`MoveCommand`] without touching any state, so the interaction can be
//! exercised without simulating pointer events.
//!
//! Moves only reassign lane membership. The destination index is carried
//! through for the presentation layer but does not reorder anything: a
//! moved task keeps its place in the overall sequence, and a drop within
//! the same lane at a different index leaves the order as it was.

use super::{DropTranslationError, Lane, TaskId};
use serde::{Deserialize, Serialize};

/// Draggable category used for task items.
pub const TASK_DRAGGABLE_TYPE: &str = "TASK";

/// A position within a lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DropLocation {
    /// Lane holding the position.
    pub lane: Lane,
    /// Zero-based index within the lane's rendered order.
    pub index: usize,
}

impl DropLocation {
    /// Creates a location.
    #[must_use]
    pub const fn new(lane: Lane, index: usize) -> Self {
        Self { lane, index }
    }
}

/// Resolved outcome of a drag gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropDescription {
    /// Identity of the dragged task.
    pub task_id: TaskId,
    /// Category of the dragged item.
    pub draggable_type: String,
    /// Where the drag started, or `None` when the gesture reported an
    /// area that is not a lane.
    pub source: Option<DropLocation>,
    /// Where the item was released, or `None` outside any lane.
    pub destination: Option<DropLocation>,
}

impl DropDescription {
    /// Describes a task drag from `source` to `destination`.
    #[must_use]
    pub fn task(
        task_id: TaskId,
        source: DropLocation,
        destination: Option<DropLocation>,
    ) -> Self {
        Self {
            task_id,
            draggable_type: TASK_DRAGGABLE_TYPE.to_owned(),
            source: Some(source),
            destination,
        }
    }

    /// Replaces the draggable category.
    #[must_use]
    pub fn with_draggable_type(mut self, draggable_type: impl Into<String>) -> Self {
        self.draggable_type = draggable_type.into();
        self
    }
}

/// Instruction to reassign a task's lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveCommand {
    /// Task to move.
    pub task_id: TaskId,
    /// Lane the task moves into.
    pub destination: Lane,
}

/// Resolves a drop into a move, if it calls for one.
///
/// Returns `None` when the item was released outside every lane, dropped
/// back where it started, or is not a task.
#[must_use]
pub fn resolve_drop(drop: &DropDescription) -> Option<MoveCommand> {
    let destination = drop.destination?;
    if drop.source == Some(destination) || drop.draggable_type != TASK_DRAGGABLE_TYPE {
        return None;
    }
    Some(MoveCommand {
        task_id: drop.task_id,
        destination: destination.lane,
    })
}

/// A lane position as reported by a gesture library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDropLocation {
    /// Identifier of the droppable area.
    pub droppable_id: String,
    /// Zero-based index within the droppable area.
    pub index: usize,
}

/// Drag-end event as reported by a gesture library, before validation.
///
/// Field names follow the library's camelCase wire form (`draggableId`,
/// `droppableId`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDropEvent {
    /// String identity of the dragged item.
    pub draggable_id: String,
    /// Category of the dragged item.
    #[serde(rename = "type")]
    pub draggable_type: String,
    /// Where the drag started.
    pub source: RawDropLocation,
    /// Where the item was released, if over a droppable area.
    pub destination: Option<RawDropLocation>,
}

impl TryFrom<&RawDropLocation> for DropLocation {
    type Error = DropTranslationError;

    fn try_from(raw: &RawDropLocation) -> Result<Self, Self::Error> {
        let lane = Lane::try_from(raw.droppable_id.as_str())?;
        Ok(Self::new(lane, raw.index))
    }
}

impl TryFrom<&RawDropEvent> for DropDescription {
    type Error = DropTranslationError;

    fn try_from(raw: &RawDropEvent) -> Result<Self, Self::Error> {
        let task_id = raw
            .draggable_id
            .trim()
            .parse::<u64>()
            .map(TaskId::new)
            .map_err(|_| DropTranslationError::InvalidDraggableId(raw.draggable_id.clone()))?;
        // Only the destination decides the move; an unknown source area just
        // means the drop can never count as "in place".
        let source = DropLocation::try_from(&raw.source).ok();
        let destination = raw
            .destination
            .as_ref()
            .map(DropLocation::try_from)
            .transpose()?;
        Ok(Self {
            task_id,
            draggable_type: raw.draggable_type.clone(),
            source,
            destination,
        })
    }
}
