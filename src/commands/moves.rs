use super::{list, report};
use crate::{
    db::tasks::{Direction, Tasks},
    libs::{config::Config, error::TaskError, messages::Message},
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// ID of the task to move
    id: i64,
}

pub fn up(args: MoveArgs) -> Result<()> {
    move_task(args.id, Direction::Up)
}

pub fn down(args: MoveArgs) -> Result<()> {
    move_task(args.id, Direction::Down)
}

fn move_task(id: i64, direction: Direction) -> Result<()> {
    let config = Config::read()?;
    let mut tasks = Tasks::new()?;

    let task = match tasks.get(id)? {
        Some(task) => task,
        None => return report(TaskError::NotFound(id)),
    };

    let moved = match tasks.move_task(id, direction) {
        Ok(moved) => moved,
        Err(err) => return report(err),
    };

    match (moved, direction) {
        (true, Direction::Up) => msg_success!(Message::TaskMovedUp(task.name)),
        (true, Direction::Down) => msg_success!(Message::TaskMovedDown(task.name)),
        (false, Direction::Up) => msg_warning!(Message::TaskAlreadyFirst(task.name)),
        (false, Direction::Down) => msg_warning!(Message::TaskAlreadyLast(task.name)),
    }

    list::show(&mut tasks, &config)
}
