use super::{list, prompt_field, report};
use crate::{
    db::tasks::Tasks,
    libs::{config::Config, error::TaskError, messages::Message, task::TaskInput},
    msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID of the task to edit
    id: i64,
    /// New name
    #[arg(short, long)]
    name: Option<String>,
    /// New cost
    #[arg(short, long)]
    cost: Option<String>,
    /// New due date as dd/mm/yyyy
    #[arg(short, long)]
    due: Option<String>,
}

/// Edits name, cost and due date of a task.
///
/// Without options every field is prompted, pre-filled with the current
/// value. With at least one option, the fields not given keep their value.
pub fn cmd(args: EditArgs) -> Result<()> {
    let config = Config::read()?;
    let mut tasks = Tasks::new()?;

    let task = match tasks.get(args.id)? {
        Some(task) => task,
        None => return report(TaskError::NotFound(args.id)),
    };
    let current = TaskInput::from_task(&task);

    let interactive = args.name.is_none() && args.cost.is_none() && args.due.is_none();
    let input = if interactive {
        msg_print!(Message::EditingTask(task.name.clone()), true);
        TaskInput {
            name: prompt_field(None, Message::PromptTaskName, Some(current.name))?,
            cost: prompt_field(None, Message::PromptTaskCost(config.currency.clone()), Some(current.cost))?,
            due_date: prompt_field(None, Message::PromptTaskDueDate, Some(current.due_date))?,
        }
    } else {
        TaskInput {
            name: args.name.unwrap_or(current.name),
            cost: args.cost.unwrap_or(current.cost),
            due_date: args.due.unwrap_or(current.due_date),
        }
    };

    match tasks.update(task.id, &input) {
        Ok(task) => {
            msg_success!(Message::TaskUpdated(task.name));
            list::show(&mut tasks, &config)
        }
        Err(err) => report(err),
    }
}
