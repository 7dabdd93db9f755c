//! When steps for task board BDD scenarios.

use super::world::{BoardWorld, parse_lane};
use eyre::WrapErr;
use laneboard::board::domain::{DropDescription, DropLocation};
use rstest_bdd_macros::when;

#[when("the board is opened")]
fn board_is_opened(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.open_board().wrap_err("open board from stored snapshot")
}

#[when(r#"the user adds a task "{text}""#)]
fn user_adds_task(world: &mut BoardWorld, text: String) -> Result<(), eyre::Report> {
    world.board_mut()?.add(text).wrap_err("add task")?;
    Ok(())
}

#[when("the user adds a blank task")]
fn user_adds_blank_task(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.board_mut()?.add("   ").wrap_err("add blank task")?;
    Ok(())
}

#[when(r#"the user moves "{text}" to {lane}"#)]
fn user_moves_task(world: &mut BoardWorld, text: String, lane: String) -> Result<(), eyre::Report> {
    let target = parse_lane(&lane)?;
    let id = world.task_id(&text)?;
    world.board_mut()?.move_task(id, target).wrap_err("move task")?;
    Ok(())
}

#[when(r#"the user toggles "{text}""#)]
fn user_toggles_task(world: &mut BoardWorld, text: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&text)?;
    world
        .board_mut()?
        .toggle_complete(id)
        .wrap_err("toggle task")?;
    Ok(())
}

#[when(r#"the user deletes "{text}""#)]
fn user_deletes_task(world: &mut BoardWorld, text: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&text)?;
    world.board_mut()?.delete_task(id).wrap_err("delete task")?;
    Ok(())
}

#[when(r#"the user drags "{text}" from {from} to {to}"#)]
fn user_drags_task(
    world: &mut BoardWorld,
    text: String,
    from: String,
    to: String,
) -> Result<(), eyre::Report> {
    let source = DropLocation::new(parse_lane(&from)?, 0);
    let destination = DropLocation::new(parse_lane(&to)?, 0);
    let drop = DropDescription::task(world.task_id(&text)?, source, Some(destination));
    world.board_mut()?.apply_drop(&drop).wrap_err("apply drop")?;
    Ok(())
}

#[when(r#"the user drops "{text}" outside the board"#)]
fn user_drops_outside(world: &mut BoardWorld, text: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&text)?;
    let home = world.task(&text)?.status();
    let drop = DropDescription::task(id, DropLocation::new(home, 0), None);
    world.board_mut()?.apply_drop(&drop).wrap_err("apply drop")?;
    Ok(())
}
