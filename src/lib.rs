//! # Taskbook
//!
//! A command-line task list. Each task has a name, a cost and a due date,
//! lives in a local SQLite database and keeps a manual position in the list.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit and delete tasks with validated fields
//! - **Manual Ordering**: Move tasks up and down the list
//! - **Statistics**: Task count and total cost
//! - **Maintenance**: Rank compaction and id sequence reset
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskbook::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
