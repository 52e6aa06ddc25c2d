//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical to-do record owned by the task repository.
//! - Map the in-memory status enum onto the two-flag wire record.
//!
//! # Invariants
//! - `id` is unique within one user's collection and never reused.
//! - `completed` and `inProgress` are never both `true` on the wire; records
//!   violating this are rejected at decode time.
//! - Status only moves along `Pending -> InProgress -> Completed -> Pending`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Task identifier: creation time in epoch milliseconds, bumped to stay unique.
pub type TaskId = i64;

/// Three-state lifecycle of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    /// Created but not started.
    #[default]
    Pending,
    /// Work has started.
    InProgress,
    /// Finished.
    Completed,
}

impl TaskStatus {
    /// Returns the next status in the toggle cycle.
    ///
    /// The rotation is strict: there is no direct `Pending -> Completed` or
    /// `Completed -> InProgress` step.
    pub fn next(self) -> Self {
        match self {
            Self::Pending => Self::InProgress,
            Self::InProgress => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    fn from_flags(completed: bool, in_progress: bool) -> Result<Self, TaskDecodeError> {
        match (completed, in_progress) {
            (false, false) => Ok(Self::Pending),
            (false, true) => Ok(Self::InProgress),
            (true, false) => Ok(Self::Completed),
            (true, true) => Err(TaskDecodeError::ConflictingStatusFlags),
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode failure for one persisted task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskDecodeError {
    /// Both `completed` and `inProgress` were set.
    ConflictingStatusFlags,
}

impl Display for TaskDecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConflictingStatusFlags => {
                write!(f, "task cannot be both completed and in progress")
            }
        }
    }
}

impl Error for TaskDecodeError {}

/// One to-do item scoped to a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord", into = "TaskRecord")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    /// Calendar date in `YYYY-MM-DD` form. Stored as given.
    pub date: String,
    pub status: TaskStatus,
}

impl Task {
    /// Creates a pending task.
    pub fn new(id: TaskId, text: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            date: date.into(),
            status: TaskStatus::Pending,
        }
    }

    /// Advances the status one step and returns the new value.
    pub fn toggle(&mut self) -> TaskStatus {
        self.status = self.status.next();
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == TaskStatus::InProgress
    }

    pub fn is_pending(&self) -> bool {
        self.status == TaskStatus::Pending
    }
}

/// Wire shape of a task inside the persisted JSON array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskRecord {
    id: TaskId,
    text: String,
    date: String,
    completed: bool,
    in_progress: bool,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskDecodeError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let status = TaskStatus::from_flags(record.completed, record.in_progress)?;
        Ok(Self {
            id: record.id,
            text: record.text,
            date: record.date,
            status,
        })
    }
}

impl From<Task> for TaskRecord {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            text: task.text,
            date: task.date,
            completed: task.status == TaskStatus::Completed,
            in_progress: task.status == TaskStatus::InProgress,
        }
    }
}
