//! Adds a task to the bottom of the list.
//!
//! Fields not given as options are asked for interactively:
//!
//! ```text
//! taskbook add --name Report --cost 1000,50 --due 31/12/2025
//! taskbook add            # prompts for all three fields
//! ```

use super::{list, prompt_field, report};
use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message, task::TaskInput},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task name, unique in the list
    #[arg(short, long)]
    name: Option<String>,
    /// Cost; both `1200.50` and `1200,50` are accepted
    #[arg(short, long)]
    cost: Option<String>,
    /// Due date as dd/mm/yyyy
    #[arg(short, long)]
    due: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let config = Config::read()?;

    let input = TaskInput {
        name: prompt_field(args.name, Message::PromptTaskName, None)?,
        cost: prompt_field(args.cost, Message::PromptTaskCost(config.currency.clone()), None)?,
        due_date: prompt_field(args.due, Message::PromptTaskDueDate, None)?,
    };

    let mut tasks = Tasks::new()?;
    match tasks.create(&input) {
        Ok(task) => {
            msg_success!(Message::TaskCreated(task.name));
            list::show(&mut tasks, &config)
        }
        Err(err) => report(err),
    }
}
