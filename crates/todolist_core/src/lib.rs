//! Core state and persistence for the todolist client.
//! The rendering layer calls into `TodoApp` and re-renders from its state.

pub mod config;
pub mod db;
pub mod kv;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use config::StorageKeys;
pub use kv::{KeyValueStore, KvError, KvResult, MemoryStore, SqliteKvStore};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::session::{Session, SessionState, ValidationError};
pub use model::task::{Task, TaskDecodeError, TaskId, TaskStatus};
pub use repo::task_repo::{RepoError, RepoResult, TaskRepository};
pub use service::app::{today, Selection, TodoApp};
pub use service::session_service::{SessionStore, StoreError, StoreResult};
pub use view::{
    filtered_tasks, task_stats, tasks_for_date, ParseFilterError, TaskFilter, TaskStats,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
