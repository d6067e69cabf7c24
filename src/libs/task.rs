use chrono::NaiveDate;

/// Textual form of `due_date`, both on screen and in the database.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// A persisted task.
///
/// `rank` is the position in the list (1 is the top). Ranks are unique but
/// may contain gaps after a delete until the list is renumbered.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub cost: f64,
    pub due_date: NaiveDate,
    pub rank: i64,
}

impl Task {
    pub fn due_date_text(&self) -> String {
        self.due_date.format(DATE_FORMAT).to_string()
    }
}

/// Raw field values as typed by the user, before validation.
///
/// Cost and due date stay as text so that parsing (decimal comma, date
/// shape) happens in one place, see [`crate::libs::validation`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskInput {
    pub name: String,
    pub cost: String,
    pub due_date: String,
}

impl TaskInput {
    pub fn new(name: &str, cost: &str, due_date: &str) -> Self {
        TaskInput {
            name: name.to_string(),
            cost: cost.to_string(),
            due_date: due_date.to_string(),
        }
    }

    /// Pre-fills an input from an existing task, used by `edit`.
    ///
    /// The cost is written in its shortest exact form so that accepting the
    /// pre-filled value stores the same amount again.
    pub fn from_task(task: &Task) -> Self {
        TaskInput {
            name: task.name.clone(),
            cost: task.cost.to_string(),
            due_date: task.due_date_text(),
        }
    }
}

/// Validated field values, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskFields {
    pub name: String,
    pub cost: f64,
    pub due_date: NaiveDate,
}

/// Aggregate numbers shown by `taskbook stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TaskStats {
    pub count: usize,
    pub total_cost: f64,
}
