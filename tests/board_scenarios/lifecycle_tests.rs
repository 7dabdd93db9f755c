//! End-to-end walkthroughs of the board lifecycle.

use super::helpers::{add_task, lane_tasks, open_board, store};
use laneboard::board::{
    adapters::memory::InMemoryKeyValueStore, domain::Lane, ports::StorageKey,
};
use rstest::rstest;

#[rstest]
fn added_task_lands_in_todo(store: InMemoryKeyValueStore) -> Result<(), eyre::Report> {
    let mut board = open_board(&store)?;

    add_task(&mut board, "Buy milk")?;

    let todo = lane_tasks(&board, Lane::Todo);
    eyre::ensure!(todo.len() == 1, "expected one TODO task, found {}", todo.len());
    let task = todo.first().ok_or_else(|| eyre::eyre!("missing task"))?;
    eyre::ensure!(task.text() == "Buy milk", "unexpected text {}", task.text());
    eyre::ensure!(!task.completed(), "new task must not be completed");
    Ok(())
}

#[rstest]
fn task_moves_through_done_and_back(store: InMemoryKeyValueStore) -> Result<(), eyre::Report> {
    let mut board = open_board(&store)?;
    let id = add_task(&mut board, "Buy milk")?;

    board.move_task(id, Lane::Done)?;
    let done = lane_tasks(&board, Lane::Done);
    eyre::ensure!(done.len() == 1, "expected the task in DONE");
    eyre::ensure!(
        done.iter().all(laneboard::board::domain::Task::completed),
        "DONE task must be completed"
    );
    eyre::ensure!(
        lane_tasks(&board, Lane::Todo).is_empty(),
        "TODO must be empty after the move"
    );

    board.move_task(id, Lane::Doing)?;
    let doing = lane_tasks(&board, Lane::Doing);
    eyre::ensure!(doing.len() == 1, "expected the task in DOING");
    eyre::ensure!(
        doing.iter().all(|task| !task.completed()),
        "leaving DONE must clear completion"
    );
    Ok(())
}

#[rstest]
fn deleting_the_only_task_empties_every_lane(
    store: InMemoryKeyValueStore,
) -> Result<(), eyre::Report> {
    let mut board = open_board(&store)?;
    let id = add_task(&mut board, "Buy milk")?;

    board.delete_task(id)?;

    for lane in Lane::ALL {
        eyre::ensure!(lane_tasks(&board, lane).is_empty(), "{lane} should be empty");
    }
    Ok(())
}

#[rstest]
fn legacy_snapshot_without_status_loads_into_todo() -> Result<(), eyre::Report> {
    let store = InMemoryKeyValueStore::with_value(
        &StorageKey::default(),
        r#"[{"id":1,"text":"Saved","completed":false}]"#,
    );

    let board = open_board(&store)?;

    let todo = lane_tasks(&board, Lane::Todo);
    let texts: Vec<_> = todo.iter().map(laneboard::board::domain::Task::text).collect();
    eyre::ensure!(texts == ["Saved"], "unexpected TODO lane {texts:?}");
    Ok(())
}

#[rstest]
fn state_survives_reopening_the_board(store: InMemoryKeyValueStore) -> Result<(), eyre::Report> {
    let mut board = open_board(&store)?;
    let first = add_task(&mut board, "first")?;
    let second = add_task(&mut board, "second")?;
    add_task(&mut board, "third")?;
    board.move_task(second, Lane::Doing)?;
    board.toggle_complete(first)?;

    let reopened = open_board(&store)?;

    eyre::ensure!(
        reopened.tasks() == board.tasks(),
        "reloaded board differs from the original"
    );
    Ok(())
}
