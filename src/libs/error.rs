//! Error type returned by the task store.
//!
//! The first three kinds are recoverable: commands report them to the user and
//! carry on. `Db` wraps anything the storage layer itself failed at.

use super::messages::Message;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// A field was missing or could not be parsed.
    #[error("{0}")]
    InvalidInput(String),

    #[error("{}", Message::TaskNameExists(.0.clone()))]
    DuplicateName(String),

    #[error("{}", Message::TaskNotFoundWithId(.0.clone()))]
    NotFound(i64),

    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),
}

impl TaskError {
    /// `true` for the kinds a user can fix by retrying with other input.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Db(_))
    }
}
