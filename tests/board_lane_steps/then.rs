//! Then steps for task board BDD scenarios.

use super::world::{BoardWorld, parse_lane};
use laneboard::board::domain::Lane;
use rstest_bdd_macros::then;

#[then(r#"the {lane} lane contains "{text}""#)]
fn lane_contains(world: &BoardWorld, lane: String, text: String) -> Result<(), eyre::Report> {
    let target = parse_lane(&lane)?;
    let found = world
        .board()?
        .tasks_for_lane(target)
        .any(|task| task.text() == text);
    if !found {
        return Err(eyre::eyre!("expected {lane} lane to contain {text:?}"));
    }
    Ok(())
}

#[then("the {lane} lane is empty")]
fn lane_is_empty(world: &BoardWorld, lane: String) -> Result<(), eyre::Report> {
    let target = parse_lane(&lane)?;
    let count = world.board()?.tasks_for_lane(target).count();
    if count != 0 {
        return Err(eyre::eyre!("expected {lane} lane to be empty, found {count} tasks"));
    }
    Ok(())
}

#[then(r#"the task "{text}" is completed"#)]
fn task_is_completed(world: &BoardWorld, text: String) -> Result<(), eyre::Report> {
    if !world.task(&text)?.completed() {
        return Err(eyre::eyre!("expected {text:?} to be completed"));
    }
    Ok(())
}

#[then(r#"the task "{text}" is not completed"#)]
fn task_is_not_completed(world: &BoardWorld, text: String) -> Result<(), eyre::Report> {
    if world.task(&text)?.completed() {
        return Err(eyre::eyre!("expected {text:?} not to be completed"));
    }
    Ok(())
}

#[then("every lane is empty")]
fn every_lane_is_empty(world: &BoardWorld) -> Result<(), eyre::Report> {
    let board = world.board()?;
    for lane in Lane::ALL {
        if board.tasks_for_lane(lane).next().is_some() {
            return Err(eyre::eyre!("expected {lane} lane to be empty"));
        }
    }
    Ok(())
}
