//! Derived task views.
//!
//! Pure functions over a task slice and the current UI selection. Results are
//! recomputed on every call.

use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Named predicate restricting which tasks are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskFilter {
    #[default]
    All,
    /// Neither started nor completed.
    Active,
    Completed,
    InProgress,
}

impl TaskFilter {
    pub const VARIANTS: [Self; 4] = [Self::All, Self::Active, Self::InProgress, Self::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::InProgress => "inProgress",
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => task.is_pending(),
            Self::Completed => task.is_completed(),
            Self::InProgress => task.is_in_progress(),
        }
    }
}

impl Display for TaskFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown filter name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFilterError(pub String);

impl Display for ParseFilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown task filter `{}`; expected all|active|inProgress|completed",
            self.0
        )
    }
}

impl Error for ParseFilterError {}

impl FromStr for TaskFilter {
    type Err = ParseFilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::VARIANTS
            .into_iter()
            .find(|filter| filter.as_str() == value)
            .ok_or_else(|| ParseFilterError(value.to_string()))
    }
}

/// Counts for one date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
}

/// Tasks on `date`, in collection order.
pub fn tasks_for_date<'a>(tasks: &'a [Task], date: &str) -> Vec<&'a Task> {
    tasks.iter().filter(|task| task.date == date).collect()
}

/// Tasks on `date` further restricted by `filter`.
pub fn filtered_tasks<'a>(tasks: &'a [Task], date: &str, filter: TaskFilter) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| task.date == date && filter.matches(task))
        .collect()
}

pub fn task_stats(tasks: &[Task], date: &str) -> TaskStats {
    tasks_for_date(tasks, date)
        .into_iter()
        .fold(TaskStats::default(), |mut stats, task| {
            stats.total += 1;
            stats.completed += usize::from(task.is_completed());
            stats.in_progress += usize::from(task.is_in_progress());
            stats
        })
}
