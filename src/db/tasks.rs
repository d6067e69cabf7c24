//! Task store: CRUD, manual ordering and statistics over the `tasks` table.
//!
//! ## Ordering
//!
//! Every task holds a unique `rank`; the list is displayed in ascending rank
//! order. New tasks go to the bottom (`max(rank) + 1`). Moving a task swaps
//! its rank with its neighbor's in three steps through a sentinel rank,
//! because the `UNIQUE` constraint rejects any intermediate state where two
//! rows share a rank:
//!
//! ```text
//! neighbor.rank = -1            (park the neighbor)
//! task.rank     = neighbor rank (take its place)
//! -1            -> task's old rank
//! ```
//!
//! The three statements run in one transaction: either all of them are
//! applied or none is, and the sentinel never survives a failure.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskbook::db::tasks::Tasks;
//! use taskbook::libs::task::TaskInput;
//!
//! let mut tasks = Tasks::new()?;
//! let report = tasks.create(&TaskInput::new("Report", "1000", "31/12/2025"))?;
//! let review = tasks.create(&TaskInput::new("Review", "250", "15/01/2026"))?;
//! tasks.move_up(review.id)?;
//! assert_eq!(tasks.list_all()?[0].name, "Review");
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::db::Db;
use crate::libs::error::TaskError;
use crate::libs::task::{Task, TaskInput, TaskStats, DATE_FORMAT};
use crate::msg_debug;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction};
use std::path::Path;

/// Rank held by a task only while a swap is in progress.
pub const SENTINEL_RANK: i64 = -1;

const SELECT_TASKS: &str = "SELECT id, name, cost, due_date, rank FROM tasks ORDER BY rank";
const SELECT_TASK_BY_ID: &str = "SELECT id, name, cost, due_date, rank FROM tasks WHERE id = ?1";
const SELECT_NAME_TAKEN: &str = "SELECT EXISTS(SELECT 1 FROM tasks WHERE name = ?1 AND id <> ?2)";
const SELECT_NEXT_RANK: &str = "SELECT COALESCE(MAX(rank), 0) + 1 FROM tasks";
const INSERT_TASK: &str = "INSERT INTO tasks (name, cost, due_date, rank) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_TASK: &str = "UPDATE tasks SET name = ?2, cost = ?3, due_date = ?4 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_NEIGHBOR_ABOVE: &str = "SELECT id, rank FROM tasks WHERE rank < ?1 ORDER BY rank DESC LIMIT 1";
const SELECT_NEIGHBOR_BELOW: &str = "SELECT id, rank FROM tasks WHERE rank > ?1 ORDER BY rank ASC LIMIT 1";
const UPDATE_RANK: &str = "UPDATE tasks SET rank = ?2 WHERE id = ?1";
const RELEASE_SENTINEL: &str = "UPDATE tasks SET rank = ?1 WHERE rank = ?2";
const SELECT_RANKS: &str = "SELECT id, rank FROM tasks ORDER BY rank";
const NEGATE_RANKS: &str = "UPDATE tasks SET rank = -rank";
const SELECT_STATS: &str = "SELECT COUNT(*), COALESCE(SUM(cost), 0.0) FROM tasks";
const RESET_SEQUENCE: &str = "DELETE FROM sqlite_sequence";

/// Direction of a single-step move in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    /// Opens the store in the application data directory.
    pub fn new() -> Result<Tasks> {
        let db = Db::new()?;

        Ok(Tasks { conn: db.conn })
    }

    /// Opens the store backed by the database file at `path`.
    pub fn open(path: &Path) -> Result<Tasks> {
        let db = Db::open(path)?;

        Ok(Tasks { conn: db.conn })
    }

    /// Validates `input` and appends a new task at the bottom of the list.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if a field is missing or malformed
    /// - `DuplicateName` if another task already has this name
    pub fn create(&mut self, input: &TaskInput) -> Result<Task, TaskError> {
        let fields = input.validate()?;
        let due_date = fields.due_date.format(DATE_FORMAT).to_string();

        let tx = self.conn.transaction()?;

        if name_taken(&tx, &fields.name, None)? {
            return Err(TaskError::DuplicateName(fields.name));
        }

        let rank: i64 = tx.query_row(SELECT_NEXT_RANK, [], |row| row.get(0))?;
        tx.execute(INSERT_TASK, params![fields.name, fields.cost, due_date, rank])
            .map_err(|e| unique_violation(e, &fields.name))?;
        let id = tx.last_insert_rowid();

        tx.commit()?;
        msg_debug!(format!("Created task {} with rank {}", id, rank));

        Ok(Task {
            id,
            name: fields.name,
            cost: fields.cost,
            due_date: fields.due_date,
            rank,
        })
    }

    /// All tasks, ascending by rank.
    pub fn list_all(&mut self) -> Result<Vec<Task>, TaskError> {
        let mut stmt = self.conn.prepare(SELECT_TASKS)?;
        let tasks = stmt.query_map([], map_task)?.collect::<Result<Vec<_>, _>>()?;

        Ok(tasks)
    }

    pub fn get(&mut self, id: i64) -> Result<Option<Task>, TaskError> {
        Ok(self.conn.query_row(SELECT_TASK_BY_ID, params![id], map_task).optional()?)
    }

    /// Overwrites name, cost and due date of task `id`. The rank is kept.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if a field is missing or malformed
    /// - `NotFound` if there is no task with this id
    /// - `DuplicateName` if another task already has the new name
    pub fn update(&mut self, id: i64, input: &TaskInput) -> Result<Task, TaskError> {
        let fields = input.validate()?;
        let due_date = fields.due_date.format(DATE_FORMAT).to_string();

        let tx = self.conn.transaction()?;

        let current = tx
            .query_row(SELECT_TASK_BY_ID, params![id], map_task)
            .optional()?
            .ok_or(TaskError::NotFound(id))?;

        if name_taken(&tx, &fields.name, Some(id))? {
            return Err(TaskError::DuplicateName(fields.name));
        }

        tx.execute(UPDATE_TASK, params![id, fields.name, fields.cost, due_date])
            .map_err(|e| unique_violation(e, &fields.name))?;

        tx.commit()?;

        Ok(Task {
            id,
            name: fields.name,
            cost: fields.cost,
            due_date: fields.due_date,
            rank: current.rank,
        })
    }

    /// Removes task `id` and returns it.
    ///
    /// Remaining ranks are not renumbered, so the list keeps a gap where the
    /// task used to be. Call [`Tasks::renumber`] to close it.
    pub fn delete(&mut self, id: i64) -> Result<Task, TaskError> {
        self.delete_with(id, false)
    }

    /// Removes task `id`, compacting the remaining ranks to `1..N` in the
    /// same transaction when `renumber` is set.
    pub fn delete_with(&mut self, id: i64, renumber: bool) -> Result<Task, TaskError> {
        let tx = self.conn.transaction()?;

        let task = tx
            .query_row(SELECT_TASK_BY_ID, params![id], map_task)
            .optional()?
            .ok_or(TaskError::NotFound(id))?;
        tx.execute(DELETE_TASK, params![id])?;

        if renumber {
            compact_ranks(&tx)?;
        }

        tx.commit()?;

        Ok(task)
    }

    /// Swaps task `id` with the task right above it.
    ///
    /// Returns `false` without touching anything if the task is already first.
    pub fn move_up(&mut self, id: i64) -> Result<bool, TaskError> {
        self.move_task(id, Direction::Up)
    }

    /// Swaps task `id` with the task right below it.
    ///
    /// Returns `false` without touching anything if the task is already last.
    pub fn move_down(&mut self, id: i64) -> Result<bool, TaskError> {
        self.move_task(id, Direction::Down)
    }

    /// Swaps the rank of task `id` with its nearest neighbor in `direction`.
    ///
    /// The neighbor is the adjacent task in display order, which is the task
    /// at `rank - 1` / `rank + 1` when ranks are contiguous and the next task
    /// past a gap otherwise.
    pub fn move_task(&mut self, id: i64, direction: Direction) -> Result<bool, TaskError> {
        let tx = self.conn.transaction()?;

        let rank: i64 = tx
            .query_row("SELECT rank FROM tasks WHERE id = ?1", params![id], |row| row.get(0))
            .optional()?
            .ok_or(TaskError::NotFound(id))?;

        let neighbor_query = match direction {
            Direction::Up => SELECT_NEIGHBOR_ABOVE,
            Direction::Down => SELECT_NEIGHBOR_BELOW,
        };
        let neighbor: Option<(i64, i64)> = tx
            .query_row(neighbor_query, params![rank], |row| Ok((row.get(0)?, row.get(1)?)))
            .optional()?;

        let Some((neighbor_id, neighbor_rank)) = neighbor else {
            // Already first/last; dropping `tx` rolls back the empty transaction
            return Ok(false);
        };

        msg_debug!(format!("Swapping task {} (rank {}) with task {} (rank {})", id, rank, neighbor_id, neighbor_rank));

        tx.execute(UPDATE_RANK, params![neighbor_id, SENTINEL_RANK])?;
        tx.execute(UPDATE_RANK, params![id, neighbor_rank])?;
        tx.execute(RELEASE_SENTINEL, params![rank, SENTINEL_RANK])?;

        tx.commit()?;

        Ok(true)
    }

    /// Number of tasks and the sum of their costs (0 when empty).
    pub fn stats(&mut self) -> Result<TaskStats, TaskError> {
        let (count, total_cost): (i64, f64) = self.conn.query_row(SELECT_STATS, [], |row| Ok((row.get(0)?, row.get(1)?)))?;

        Ok(TaskStats {
            count: count as usize,
            total_cost,
        })
    }

    /// Compacts ranks back to `1..N`, keeping the current order.
    ///
    /// Returns the number of tasks whose rank changed.
    pub fn renumber(&mut self) -> Result<usize, TaskError> {
        let tx = self.conn.transaction()?;
        let changed = compact_ranks(&tx)?;
        tx.commit()?;

        Ok(changed)
    }

    /// Clears SQLite's autoincrement counters.
    ///
    /// Administrative operation: the next id becomes one past the highest id
    /// still present instead of one past the highest id ever issued. Returns
    /// the number of counter rows removed.
    pub fn reset_sequence(&mut self) -> Result<usize, TaskError> {
        Ok(self.conn.execute(RESET_SEQUENCE, [])?)
    }
}

fn map_task(row: &Row) -> rusqlite::Result<Task> {
    let due_date: String = row.get(3)?;
    let due_date = NaiveDate::parse_from_str(&due_date, DATE_FORMAT).map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    Ok(Task {
        id: row.get(0)?,
        name: row.get(1)?,
        cost: row.get(2)?,
        due_date,
        rank: row.get(4)?,
    })
}

/// Rewrites ranks to `1..N` in their current order and returns how many moved.
fn compact_ranks(tx: &Transaction) -> Result<usize, TaskError> {
    let ranked: Vec<(i64, i64)> = {
        let mut stmt = tx.prepare(SELECT_RANKS)?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        rows.collect::<Result<Vec<_>, _>>()?
    };

    // Move every rank out of the positive range first so that no
    // assignment below can collide with a rank not yet rewritten
    tx.execute(NEGATE_RANKS, [])?;

    let mut changed = 0;
    for (position, (id, old_rank)) in ranked.iter().enumerate() {
        let new_rank = position as i64 + 1;
        tx.execute(UPDATE_RANK, params![id, new_rank])?;
        if new_rank != *old_rank {
            changed += 1;
        }
    }

    msg_debug!(format!("Renumbered {} of {} tasks", changed, ranked.len()));

    Ok(changed)
}

fn name_taken(tx: &Transaction, name: &str, except_id: Option<i64>) -> Result<bool, TaskError> {
    Ok(tx.query_row(SELECT_NAME_TAKEN, params![name, except_id.unwrap_or(0)], |row| row.get(0))?)
}

/// Maps a `UNIQUE` violation on insert/update to `DuplicateName`.
fn unique_violation(err: rusqlite::Error, name: &str) -> TaskError {
    if let rusqlite::Error::SqliteFailure(e, _) = &err {
        if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE {
            return TaskError::DuplicateName(name.to_string());
        }
    }
    TaskError::Db(err)
}
