//! Maintenance command: clears SQLite's autoincrement counters.
//!
//! Never run implicitly. Existing tasks are not touched; only the id handed
//! to the next new task changes.

use crate::{
    db::tasks::Tasks,
    libs::messages::Message,
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ResetSequenceArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: ResetSequenceArgs) -> Result<()> {
    let confirmed = args.yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmResetSequence.to_string())
            .default(false)
            .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let removed = Tasks::new()?.reset_sequence()?;
    msg_success!(Message::SequenceReset(removed));

    Ok(())
}
