use super::list;
use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let mut tasks = Tasks::new()?;

    let changed = tasks.renumber()?;
    msg_success!(Message::TasksRenumbered(changed));

    list::show(&mut tasks, &config)
}
