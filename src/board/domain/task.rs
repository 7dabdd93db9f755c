//! Task entity and its persisted record shape.

use super::{BoardDomainError, Lane, TaskId};
use serde::{Deserialize, Deserializer, Serialize};

/// A short text task living in exactly one lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    text: String,
    completed: bool,
    status: Lane,
}

/// Persisted form of a task.
///
/// Records written before lanes existed carry no `status` (or a `null`
/// one); they load into [`Lane::Todo`]. A missing or `null` `completed`
/// loads as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Task text as entered.
    pub text: String,
    /// Completion flag.
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
    /// Lane membership.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: Lane,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Task {
    /// Creates a new, uncompleted task in the TODO lane.
    ///
    /// The text is stored exactly as given; only its trimmed form is checked.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskText`] when the text is empty or
    /// whitespace only.
    pub fn new(id: TaskId, text: impl Into<String>) -> Result<Self, BoardDomainError> {
        let entered = text.into();
        if entered.trim().is_empty() {
            return Err(BoardDomainError::EmptyTaskText);
        }
        Ok(Self {
            id,
            text: entered,
            completed: false,
            status: Lane::Todo,
        })
    }

    /// Reconstructs a task from its persisted record.
    #[must_use]
    pub fn from_persisted(record: TaskRecord) -> Self {
        Self {
            id: record.id,
            text: record.text,
            completed: record.completed,
            status: record.status,
        }
    }

    /// Returns the persisted form of this task.
    #[must_use]
    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            id: self.id,
            text: self.text.clone(),
            completed: self.completed,
            status: self.status,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the task is marked completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the lane the task belongs to.
    #[must_use]
    pub const fn status(&self) -> Lane {
        self.status
    }

    /// Flips the completion flag. The lane is left alone.
    pub const fn toggle_complete(&mut self) {
        self.completed = !self.completed;
    }

    /// Moves the task into `lane`, coupling the completion flag.
    ///
    /// Entering DONE always marks the task completed. Leaving DONE for TODO
    /// or DOING always clears it. Any other move keeps the flag as it was.
    pub const fn move_to(&mut self, lane: Lane) {
        let previous = self.status;
        self.status = lane;
        match (previous, lane) {
            (_, Lane::Done) => self.completed = true,
            (Lane::Done, Lane::Todo | Lane::Doing) => self.completed = false,
            _ => {}
        }
    }
}
