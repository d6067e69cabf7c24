use super::{list, report};
use crate::{
    db::tasks::Tasks,
    libs::{config::Config, error::TaskError, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the task to delete
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let config = Config::read()?;
    let mut tasks = Tasks::new()?;

    let task = match tasks.get(args.id)? {
        Some(task) => task,
        None => return report(TaskError::NotFound(args.id)),
    };

    let confirmed = args.yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.name.clone()).to_string())
            .default(false)
            .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let deleted = match tasks.delete_with(task.id, config.renumber_on_delete) {
        Ok(deleted) => deleted,
        Err(err) => return report(err),
    };

    msg_success!(Message::TaskDeleted(deleted.name));
    list::show(&mut tasks, &config)
}
