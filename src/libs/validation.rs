//! Field validation for task input.
//!
//! Checks run in a fixed order: all fields present, then the due date, then
//! the cost. The first failure wins and nothing is written.

use super::error::TaskError;
use super::messages::Message;
use super::task::{TaskFields, TaskInput, DATE_FORMAT};
use chrono::NaiveDate;

/// Validates every field of `input`.
///
/// The name is trimmed before it is stored; a name made only of whitespace
/// counts as missing.
///
/// # Example
///
/// ```rust
/// use taskbook::libs::task::TaskInput;
/// use taskbook::libs::validation::validate;
///
/// let fields = validate(&TaskInput::new("Report", "1000,50", "31/12/2025")).unwrap();
/// assert_eq!(fields.cost, 1000.5);
/// ```
pub fn validate(input: &TaskInput) -> Result<TaskFields, TaskError> {
    let name = input.name.trim();
    if name.is_empty() || input.cost.trim().is_empty() || input.due_date.trim().is_empty() {
        return Err(TaskError::InvalidInput(Message::AllFieldsRequired.to_string()));
    }

    let due_date = parse_due_date(&input.due_date)?;
    let cost = parse_cost(&input.cost)?;

    Ok(TaskFields {
        name: name.to_string(),
        cost,
        due_date,
    })
}

/// Parses a `dd/mm/yyyy` date.
///
/// The shape is checked strictly (two-digit day and month, four-digit year)
/// before the calendar check, so `1/2/2025` or `2025-12-31` are rejected
/// along with `31/02/2025`.
pub fn parse_due_date(value: &str) -> Result<NaiveDate, TaskError> {
    let value = value.trim();
    let invalid = || TaskError::InvalidInput(Message::InvalidDate.to_string());

    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

/// Parses a decimal amount, accepting `,` as the decimal separator.
pub fn parse_cost(value: &str) -> Result<f64, TaskError> {
    let trimmed = value.trim();
    let normalized = trimmed.replace(',', ".");

    let cost: f64 = match normalized.parse() {
        Ok(cost) => cost,
        Err(_) => return Err(TaskError::InvalidInput(Message::InvalidCost(trimmed.to_string()).to_string())),
    };

    // `f64::from_str` accepts "inf" and "NaN"
    if !cost.is_finite() {
        return Err(TaskError::InvalidInput(Message::InvalidCost(trimmed.to_string()).to_string()));
    }
    if cost < 0.0 {
        return Err(TaskError::InvalidInput(Message::NegativeCost(trimmed.to_string()).to_string()));
    }

    Ok(cost)
}

impl TaskInput {
    pub fn validate(&self) -> Result<TaskFields, TaskError> {
        validate(self)
    }
}
