pub mod add;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod moves;
pub mod renumber;
pub mod reset_sequence;
pub mod stats;

use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error};
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task to the bottom of the list")]
    Add(add::AddArgs),
    #[command(about = "Show all tasks in order")]
    List,
    #[command(about = "Edit a task")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Move a task one position up")]
    Up(moves::MoveArgs),
    #[command(about = "Move a task one position down")]
    Down(moves::MoveArgs),
    #[command(about = "Show task count and total cost")]
    Stats,
    #[command(about = "Close gaps in the task positions")]
    Renumber,
    #[command(about = "Reset the id sequence of the database (maintenance)")]
    ResetSequence(reset_sequence::ResetSequenceArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List => list::cmd(),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Up(args) => moves::up(args),
            Commands::Down(args) => moves::down(args),
            Commands::Stats => stats::cmd(),
            Commands::Renumber => renumber::cmd(),
            Commands::ResetSequence(args) => reset_sequence::cmd(args),
        }
    }
}

/// Reports a store error to the user.
///
/// Bad input, duplicate names and unknown ids are printed and the command
/// ends normally; storage failures are returned to `main`.
fn report(err: TaskError) -> Result<()> {
    if err.is_recoverable() {
        msg_error!(err);
        return Ok(());
    }
    msg_bail_anyhow!(err)
}

/// Returns `value` when given on the command line, otherwise asks for it.
///
/// Empty answers are accepted here and rejected by validation, so the user
/// gets the same "all fields are required" message either way.
fn prompt_field(value: Option<String>, prompt: Message, default: Option<String>) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }

    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(prompt.to_string())
        .allow_empty(true);
    if let Some(default) = default {
        input = input.default(default);
    }

    Ok(input.interact_text()?)
}
