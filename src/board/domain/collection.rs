//! Ordered task collection backing the board.

use super::{Lane, Task, TaskId, TaskRecord};

/// Ordered sequence of tasks.
///
/// Insertion order is the only ordering signal: a lane shows its tasks in
/// the order they appear here. Operations addressed by identifier affect
/// every task carrying that identifier, since legacy payloads may repeat
/// one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Builds a collection from persisted records, keeping their order.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = TaskRecord>) -> Self {
        Self {
            tasks: records.into_iter().map(Task::from_persisted).collect(),
        }
    }

    /// Returns the persisted form of every task, in order.
    #[must_use]
    pub fn to_records(&self) -> Vec<TaskRecord> {
        self.tasks.iter().map(Task::to_record).collect()
    }

    /// Appends a task to the end of the collection.
    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Flips the completion flag of the matching task.
    ///
    /// Returns `false` when no task carries `id`.
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        self.update_matching(id, Task::toggle_complete)
    }

    /// Moves the matching task into `lane` without changing its position.
    ///
    /// Returns `false` when no task carries `id`.
    pub fn move_to(&mut self, id: TaskId, lane: Lane) -> bool {
        self.update_matching(id, |task| task.move_to(lane))
    }

    /// Removes the matching task, keeping the remaining order.
    ///
    /// Returns `false` when no task carries `id`.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        self.tasks.len() != before
    }

    /// Returns the tasks in `lane`, in collection order.
    pub fn tasks_for_lane(&self, lane: Lane) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |task| task.status() == lane)
    }

    /// Returns the first task carrying `id`.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns every task in collection order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter()
    }

    /// Returns the number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the collection holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the largest identifier in the collection.
    #[must_use]
    pub fn max_id(&self) -> Option<TaskId> {
        self.tasks.iter().map(Task::id).max()
    }

    fn update_matching(&mut self, id: TaskId, mut update: impl FnMut(&mut Task)) -> bool {
        let mut matched = false;
        for task in self.tasks.iter_mut().filter(|task| task.id() == id) {
            update(task);
            matched = true;
        }
        matched
    }
}

impl From<Vec<Task>> for TaskCollection {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}
