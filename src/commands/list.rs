use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let mut tasks = Tasks::new()?;

    show(&mut tasks, &config)
}

/// Reloads the whole list and prints it. Every mutating command ends here.
pub fn show(tasks: &mut Tasks, config: &Config) -> Result<()> {
    let tasks = tasks.list_all()?;

    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&tasks, config)
}
