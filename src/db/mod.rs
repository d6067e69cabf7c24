//! Database layer for the taskbook application.
//!
//! A single SQLite file holds the `tasks` table plus the `migrations`
//! bookkeeping table. Every store opens its own connection through [`db::Db`],
//! which applies pending migrations before handing the connection out.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskbook::db::tasks::Tasks;
//! use taskbook::libs::task::TaskInput;
//!
//! let mut tasks = Tasks::new()?;
//! tasks.create(&TaskInput::new("Report", "1000", "31/12/2025"))?;
//! for task in tasks.list_all()? {
//!     println!("{} {}", task.rank, task.name);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management and initialization.
pub mod db;

/// Versioned schema setup.
pub mod migrations;

/// Task CRUD, ordering and statistics.
pub mod tasks;
