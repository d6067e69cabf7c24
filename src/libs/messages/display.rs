//! Display implementation for taskbook application messages.
//!
//! Every user-facing string lives here, so commands and the store only ever
//! refer to `Message` variants and never build text themselves.
//!
//! ```rust
//! use taskbook::libs::messages::Message;
//!
//! assert_eq!(Message::TaskCreated("Report".into()).to_string(), "Task 'Report' created successfully");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(name) => format!("Task '{}' created successfully", name),
            Message::TaskUpdated(name) => format!("Task '{}' updated successfully", name),
            Message::TaskDeleted(name) => format!("Task '{}' deleted successfully", name),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found", id),
            Message::TaskNameExists(name) => format!("A task named '{}' already exists", name),
            Message::TasksNotFound => "No tasks yet. Add one with `taskbook add`.".to_string(),
            Message::TasksHeader => "Task list".to_string(),
            Message::TaskMovedUp(name) => format!("Task '{}' moved up", name),
            Message::TaskMovedDown(name) => format!("Task '{}' moved down", name),
            Message::TaskAlreadyFirst(name) => format!("Task '{}' is already at the top", name),
            Message::TaskAlreadyLast(name) => format!("Task '{}' is already at the bottom", name),
            Message::TasksRenumbered(count) => format!("Renumbered {} task(s)", count),
            Message::EditingTask(name) => format!("Editing task: {}", name),
            Message::ConfirmDeleteTask(name) => format!("Do you really want to delete the task '{}'?", name),

            // === VALIDATION MESSAGES ===
            Message::AllFieldsRequired => "All fields are required".to_string(),
            Message::InvalidDate => "Invalid date. Use the format dd/mm/yyyy.".to_string(),
            Message::InvalidCost(value) => format!("Invalid cost '{}'. Enter a number such as 1200,50 or 1200.50.", value),
            Message::NegativeCost(value) => format!("Cost cannot be negative: {}", value),

            // === STATISTICS MESSAGES ===
            Message::StatsHeader => "Task statistics".to_string(),
            Message::StatsTotalTasks(count) => format!("Total tasks: {}", count),
            Message::StatsTotalCost(cost) => format!("Total cost: {}", cost),

            // === PROMPTS ===
            Message::PromptTaskName => "Task name".to_string(),
            Message::PromptTaskCost(currency) => format!("Cost ({})", currency),
            Message::PromptTaskDueDate => "Due date (dd/mm/yyyy)".to_string(),
            Message::PromptCurrency => "Currency symbol".to_string(),
            Message::PromptHighlightThreshold => "Highlight tasks costing at least".to_string(),
            Message::PromptRenumberOnDelete => "Close rank gaps after deleting a task?".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigParseError(error) => format!("Failed to parse configuration: {}", error),

            // === MAINTENANCE MESSAGES ===
            Message::ConfirmResetSequence => "This clears the id sequence of the task database. Continue?".to_string(),
            Message::SequenceReset(rows) => format!("Id sequence reset ({} entr{} removed)", rows, if *rows == 1 { "y" } else { "ies" }),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::DatabaseOpened(path) => format!("Opened database at {}", path),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
        };

        write!(f, "{}", text)
    }
}
