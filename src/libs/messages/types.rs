#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TaskNotFoundWithId(i64),
    TaskNameExists(String),
    TasksNotFound,
    TasksHeader,
    TaskMovedUp(String),
    TaskMovedDown(String),
    TaskAlreadyFirst(String),
    TaskAlreadyLast(String),
    TasksRenumbered(usize),
    EditingTask(String),
    ConfirmDeleteTask(String),

    // === VALIDATION MESSAGES ===
    AllFieldsRequired,
    InvalidDate,
    InvalidCost(String),
    NegativeCost(String),

    // === STATISTICS MESSAGES ===
    StatsHeader,
    StatsTotalTasks(usize),
    StatsTotalCost(String),

    // === PROMPTS ===
    PromptTaskName,
    PromptTaskCost(String), // currency
    PromptTaskDueDate,
    PromptCurrency,
    PromptHighlightThreshold,
    PromptRenumberOnDelete,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigParseError(String),

    // === MAINTENANCE MESSAGES ===
    ConfirmResetSequence,
    SequenceReset(usize), // rows removed

    // === GENERAL MESSAGES ===
    OperationCancelled,
    DatabaseOpened(String), // path

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseUpToDate,
}
