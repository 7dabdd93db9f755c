//! Shared helpers for in-memory board tests.

use std::sync::Arc;

use laneboard::board::{
    adapters::memory::InMemoryKeyValueStore,
    config::BoardConfig,
    domain::{Lane, Task, TaskId},
    services::TaskBoard,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Board type used throughout the in-memory tests.
pub type TestBoard = TaskBoard<InMemoryKeyValueStore, DefaultClock>;

/// Provides a fresh in-memory store for each test.
#[fixture]
pub fn store() -> InMemoryKeyValueStore {
    InMemoryKeyValueStore::new()
}

/// Opens a board over `store` with the default configuration.
///
/// # Errors
///
/// Returns an error if the board cannot be opened.
pub fn open_board(store: &InMemoryKeyValueStore) -> Result<TestBoard, eyre::Report> {
    let board = TaskBoard::open(
        Arc::new(store.clone()),
        Arc::new(DefaultClock),
        BoardConfig::default(),
    )?;
    Ok(board)
}

/// Adds a task and returns its identifier.
///
/// # Errors
///
/// Returns an error if the add fails or the text is rejected.
pub fn add_task(board: &mut TestBoard, text: &str) -> Result<TaskId, eyre::Report> {
    board
        .add(text)?
        .ok_or_else(|| eyre::eyre!("text {text:?} was rejected"))
}

/// Returns the tasks of `lane` as owned values.
#[must_use]
pub fn lane_tasks(board: &TestBoard, lane: Lane) -> Vec<Task> {
    board.tasks_for_lane(lane).cloned().collect()
}
