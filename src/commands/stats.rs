use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message, view::View},
    msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let stats = Tasks::new()?.stats()?;

    msg_print!(Message::StatsHeader, true);
    View::stats(&stats, &config)
}
