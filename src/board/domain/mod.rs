//! Domain model for the task board.
//!
//! Pure types and algorithms: tasks, lanes, the ordered collection, and
//! drop resolution. Nothing in here performs I/O.

mod collection;
mod drag;
mod error;
mod ids;
mod lane;
mod task;

pub use collection::TaskCollection;
pub use drag::{
    DropDescription, DropLocation, MoveCommand, RawDropEvent, RawDropLocation,
    TASK_DRAGGABLE_TYPE, resolve_drop,
};
pub use error::{BoardDomainError, DropTranslationError, ParseLaneError};
pub use ids::{TaskId, TaskIdGenerator};
pub use lane::Lane;
pub use task::{Task, TaskRecord};
