//! Given steps for task board BDD scenarios.

use super::world::{BoardWorld, parse_lane};
use eyre::WrapErr;
use laneboard::board::ports::StorageKey;
use rstest_bdd_macros::given;

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.open_board().wrap_err("open empty board")
}

#[given(r#"a board with the task "{text}""#)]
fn board_with_task(world: &mut BoardWorld, text: String) -> Result<(), eyre::Report> {
    world.open_board().wrap_err("open board")?;
    world
        .board_mut()?
        .add(text.as_str())
        .wrap_err("add initial task")?
        .ok_or_else(|| eyre::eyre!("initial task text {text:?} was rejected"))?;
    Ok(())
}

#[given(r#"the task "{text}" is in the {lane} lane"#)]
fn task_is_in_lane(world: &mut BoardWorld, text: String, lane: String) -> Result<(), eyre::Report> {
    let target = parse_lane(&lane)?;
    let id = world.task_id(&text)?;
    world
        .board_mut()?
        .move_task(id, target)
        .wrap_err("move task into starting lane")?;
    Ok(())
}

#[given(r#"a stored legacy snapshot with the task "{text}""#)]
fn stored_legacy_snapshot(world: &mut BoardWorld, text: String) -> Result<(), eyre::Report> {
    let payload = serde_json::json!([{ "id": 1, "text": text, "completed": false }]);
    world.store =
        laneboard::board::adapters::memory::InMemoryKeyValueStore::with_value(
            &StorageKey::default(),
            payload.to_string(),
        );
    Ok(())
}
