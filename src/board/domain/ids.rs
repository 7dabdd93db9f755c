//! Task identifiers and their allocation.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a task within a board.
///
/// Identifiers are timestamp-shaped integers (milliseconds since the Unix
/// epoch at creation time) and are persisted as plain JSON numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a task identifier from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Allocates strictly increasing task identifiers from a clock.
///
/// The next identifier is the current time in milliseconds, bumped past the
/// last identifier handed out when two tasks are created within the same
/// millisecond (or when the clock steps backwards).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskIdGenerator {
    last_issued: Option<TaskId>,
}

impl TaskIdGenerator {
    /// Creates a generator with no identifiers issued yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { last_issued: None }
    }

    /// Creates a generator that never issues `floor` or anything below it.
    #[must_use]
    pub const fn starting_after(floor: Option<TaskId>) -> Self {
        Self { last_issued: floor }
    }

    /// Returns the most recently issued (or seeded) identifier.
    #[must_use]
    pub const fn last_issued(&self) -> Option<TaskId> {
        self.last_issued
    }

    /// Issues the next identifier using the clock's current time.
    pub fn next_id(&mut self, clock: &impl Clock) -> TaskId {
        self.next_id_at(clock.utc())
    }

    /// Issues the next identifier for a task created at `now`.
    ///
    /// Times before the Unix epoch count as zero.
    pub fn next_id_at(&mut self, now: DateTime<Utc>) -> TaskId {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let candidate = self
            .last_issued
            .map_or(millis, |last| millis.max(last.0.saturating_add(1)));
        let id = TaskId(candidate);
        self.last_issued = Some(id);
        id
    }
}
