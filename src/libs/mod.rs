//! Core library modules for the taskbook application.
//!
//! ## Features
//!
//! - **Domain**: Task records, raw input and validation
//! - **Infrastructure**: Configuration, data storage location, messaging
//! - **User Interface**: Table rendering and money formatting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskbook::db::tasks::Tasks;
//! use taskbook::libs::task::TaskInput;
//!
//! let mut tasks = Tasks::new()?;
//! tasks.create(&TaskInput::new("Report", "1000", "31/12/2025"))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod task;
pub mod validation;
pub mod view;
