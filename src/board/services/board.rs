//! The task board: owner of the task collection.
//!
//! Every mutation works on a copy of the collection, writes that copy
//! through to storage, and only then replaces the in-memory state. With
//! [`PersistenceFailurePolicy::Strict`] a failed write therefore leaves the
//! board exactly as it was.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;

use super::snapshot::{SnapshotError, TaskSnapshotStore};
use crate::board::{
    config::{BoardConfig, PersistenceFailurePolicy},
    domain::{DropDescription, Lane, Task, TaskCollection, TaskId, TaskIdGenerator, resolve_drop},
    ports::KeyValueStore,
};

/// Service-level errors for board operations.
///
/// Invalid input (empty text, unknown identifiers) is never an error; only
/// storage failures surface here.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Reading or writing the snapshot failed.
    #[error(transparent)]
    Persistence(#[from] SnapshotError),
}

/// Result type for board operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Whether an identifier-addressed operation found its task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
    /// At least one task was changed.
    Applied,
    /// No task matched; the collection is unchanged.
    Ignored,
}

impl Mutation {
    /// Returns `true` for [`Mutation::Applied`].
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }

    const fn from_matched(matched: bool) -> Self {
        if matched { Self::Applied } else { Self::Ignored }
    }
}

/// Render data for one lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLane<'a> {
    lane: Lane,
    tasks: Vec<&'a Task>,
}

impl<'a> BoardLane<'a> {
    /// Returns the lane.
    #[must_use]
    pub const fn lane(&self) -> Lane {
        self.lane
    }

    /// Returns the heading shown above the lane.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.lane.title()
    }

    /// Returns the lane's tasks in collection order.
    #[must_use]
    pub fn tasks(&self) -> &[&'a Task] {
        &self.tasks
    }

    /// Returns whether the lane has no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Task board with write-through persistence.
pub struct TaskBoard<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    snapshots: TaskSnapshotStore<S>,
    clock: Arc<C>,
    config: BoardConfig,
    tasks: TaskCollection,
    ids: TaskIdGenerator,
}

impl<S, C> TaskBoard<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    /// Opens the board stored under the configured slot.
    ///
    /// A missing or malformed snapshot yields an empty board. The loaded
    /// (and migrated) collection is written straight back, so the slot
    /// always holds the current shape after startup.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Persistence`] when storage cannot be read or
    /// written and the policy is [`PersistenceFailurePolicy::Strict`].
    pub fn open(store: Arc<S>, clock: Arc<C>, config: BoardConfig) -> TaskBoardResult<Self> {
        let snapshots = TaskSnapshotStore::new(store, config.storage_key.clone());
        let loaded = match snapshots.load() {
            Ok(load) => load.into_collection(),
            Err(err) if config.persistence_failure == PersistenceFailurePolicy::InMemoryFallback => {
                tracing::warn!(
                    key = %config.storage_key,
                    error = %err,
                    "task storage unreadable, starting with an empty board"
                );
                TaskCollection::new()
            }
            Err(err) => return Err(err.into()),
        };
        tracing::debug!(
            key = %config.storage_key,
            tasks = loaded.len(),
            "opened task board"
        );

        let mut board = Self {
            snapshots,
            clock,
            ids: TaskIdGenerator::starting_after(loaded.max_id()),
            config,
            tasks: TaskCollection::new(),
        };
        board.commit(loaded)?;
        Ok(board)
    }

    /// Returns the board configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the whole collection in order.
    #[must_use]
    pub const fn tasks(&self) -> &TaskCollection {
        &self.tasks
    }

    /// Adds a new task to the end of the TODO lane.
    ///
    /// Text that is empty after trimming is ignored without touching storage
    /// and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Persistence`] when the write fails under the
    /// strict policy.
    pub fn add(&mut self, text: impl Into<String>) -> TaskBoardResult<Option<TaskId>> {
        let mut ids = self.ids;
        let id = ids.next_id(&*self.clock);
        let Ok(task) = Task::new(id, text) else {
            tracing::debug!("ignoring task with empty text");
            return Ok(None);
        };

        let mut next = self.tasks.clone();
        next.push(task);
        self.commit(next)?;
        self.ids = ids;
        tracing::debug!(task_id = %id, "added task");
        Ok(Some(id))
    }

    /// Flips the completion flag of a task without changing its lane.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Persistence`] when the write fails under the
    /// strict policy.
    pub fn toggle_complete(&mut self, id: TaskId) -> TaskBoardResult<Mutation> {
        let outcome = self.mutate(|tasks| tasks.toggle_complete(id))?;
        tracing::debug!(task_id = %id, ?outcome, "toggled task completion");
        Ok(outcome)
    }

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Persistence`] when the write fails under the
    /// strict policy.
    pub fn delete_task(&mut self, id: TaskId) -> TaskBoardResult<Mutation> {
        let outcome = self.mutate(|tasks| tasks.remove(id))?;
        tracing::debug!(task_id = %id, ?outcome, "deleted task");
        Ok(outcome)
    }

    /// Moves a task into `lane`, forcing completion on entering DONE and
    /// clearing it on leaving DONE.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Persistence`] when the write fails under the
    /// strict policy.
    pub fn move_task(&mut self, id: TaskId, lane: Lane) -> TaskBoardResult<Mutation> {
        let outcome = self.mutate(|tasks| tasks.move_to(id, lane))?;
        tracing::debug!(task_id = %id, %lane, ?outcome, "moved task");
        Ok(outcome)
    }

    /// Applies a finished drag gesture.
    ///
    /// Drops that resolve to no move are ignored without touching storage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Persistence`] when the write fails under the
    /// strict policy.
    pub fn apply_drop(&mut self, drop: &DropDescription) -> TaskBoardResult<Mutation> {
        let Some(command) = resolve_drop(drop) else {
            tracing::debug!(task_id = %drop.task_id, "drop resolved to no move");
            return Ok(Mutation::Ignored);
        };
        self.move_task(command.task_id, command.destination)
    }

    /// Returns the tasks in `lane`, in collection order.
    pub fn tasks_for_lane(&self, lane: Lane) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.tasks_for_lane(lane)
    }

    /// Returns render data for all three lanes in display order.
    #[must_use]
    pub fn lanes(&self) -> [BoardLane<'_>; 3] {
        Lane::ALL.map(|lane| BoardLane {
            lane,
            tasks: self.tasks.tasks_for_lane(lane).collect(),
        })
    }

    fn mutate(
        &mut self,
        operation: impl FnOnce(&mut TaskCollection) -> bool,
    ) -> TaskBoardResult<Mutation> {
        let mut next = self.tasks.clone();
        let outcome = Mutation::from_matched(operation(&mut next));
        self.commit(next)?;
        Ok(outcome)
    }

    fn commit(&mut self, next: TaskCollection) -> TaskBoardResult<()> {
        match self.snapshots.save(&next) {
            Ok(()) => {
                self.tasks = next;
                Ok(())
            }
            Err(err) => match self.config.persistence_failure {
                PersistenceFailurePolicy::Strict => Err(err.into()),
                PersistenceFailurePolicy::InMemoryFallback => {
                    tracing::warn!(
                        key = %self.snapshots.key(),
                        error = %err,
                        "task snapshot write failed, keeping change in memory"
                    );
                    self.tasks = next;
                    Ok(())
                }
            },
        }
    }
}
