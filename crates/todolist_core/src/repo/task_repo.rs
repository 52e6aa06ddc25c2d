//! Task repository over the key-value store.
//!
//! # Responsibility
//! - Own the in-memory task collection for the active user.
//! - Round-trip the whole collection through one key per user.
//!
//! # Invariants
//! - Every mutation that changes or may change the collection is followed by
//!   a full overwrite of the owner's key.
//! - A corrupt stored collection loads as empty and is never surfaced.
//! - Ids handed out are strictly increasing and above every loaded id.

use crate::config::StorageKeys;
use crate::kv::{KeyValueStore, KvError};
use crate::model::session::require_present;
use crate::model::task::{Task, TaskId, TaskStatus};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence failure for task collection operations.
#[derive(Debug)]
pub enum RepoError {
    Kv(KvError),
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kv(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode task collection: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Kv(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<KvError> for RepoError {
    fn from(value: KvError) -> Self {
        Self::Kv(value)
    }
}

/// Monotonic id source seeded from wall-clock milliseconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdSequence {
    last: TaskId,
}

impl IdSequence {
    /// Returns an id no smaller than `now_ms` and above every id seen so far.
    pub fn next_id(&mut self, now_ms: TaskId) -> TaskId {
        let id = now_ms.max(self.last.saturating_add(1));
        self.last = id;
        id
    }

    /// Records an existing id so later ids sort after it.
    pub fn observe(&mut self, id: TaskId) {
        self.last = self.last.max(id);
    }
}

/// In-memory task collection bound to one user's storage key.
pub struct TaskRepository<'kv, S: KeyValueStore + ?Sized> {
    store: &'kv S,
    keys: StorageKeys,
    owner: Option<String>,
    tasks: Vec<Task>,
    ids: IdSequence,
}

impl<'kv, S: KeyValueStore + ?Sized> TaskRepository<'kv, S> {
    pub fn new(store: &'kv S, keys: StorageKeys) -> Self {
        Self {
            store,
            keys,
            owner: None,
            tasks: Vec::new(),
            ids: IdSequence::default(),
        }
    }

    /// Current collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Email whose collection is loaded, if any.
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Replaces the collection with the one stored for `email`.
    ///
    /// Absent or undecodable data yields an empty collection. Only backend
    /// failures are returned.
    pub fn load_tasks(&mut self, email: &str) -> RepoResult<usize> {
        let raw = self.store.get(&self.keys.tasks_key(email))?;
        let tasks = match raw {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<Task>>(&raw) {
                Ok(tasks) => tasks,
                Err(err) => {
                    warn!(
                        "event=tasks_load module=repo status=recovered error_code=task_decode_failed bytes={} error={err}",
                        raw.len()
                    );
                    Vec::new()
                }
            },
        };

        for task in &tasks {
            self.ids.observe(task.id);
        }
        self.owner = Some(email.to_string());
        self.tasks = tasks;
        info!(
            "event=tasks_load module=repo status=ok count={}",
            self.tasks.len()
        );
        Ok(self.tasks.len())
    }

    /// Appends a pending task and persists.
    ///
    /// Returns `None` without writing when `text` is blank or no user is
    /// loaded.
    pub fn add_task(&mut self, text: &str, date: &str) -> RepoResult<Option<Task>> {
        if require_present("text", text).is_err() {
            debug!("event=task_add module=repo status=skipped reason=blank_text");
            return Ok(None);
        }
        if self.owner.is_none() {
            debug!("event=task_add module=repo status=skipped reason=no_owner");
            return Ok(None);
        }

        let id = self.ids.next_id(now_epoch_ms());
        let task = Task::new(id, text, date);
        self.tasks.push(task.clone());
        self.save_tasks()?;
        info!("event=task_add module=repo status=ok task_id={id}");
        Ok(Some(task))
    }

    /// Advances one task along the status cycle and persists.
    ///
    /// Returns the new status, or `None` without writing when the id is unknown.
    pub fn toggle_status(&mut self, id: TaskId) -> RepoResult<Option<TaskStatus>> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!("event=task_toggle module=repo status=skipped reason=not_found task_id={id}");
            return Ok(None);
        };

        let status = task.toggle();
        self.save_tasks()?;
        info!("event=task_toggle module=repo status=ok task_id={id} task_status={status}");
        Ok(Some(status))
    }

    /// Removes a task if present and persists either way.
    pub fn delete_task(&mut self, id: TaskId) -> RepoResult<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = self.tasks.len() != before;
        self.save_tasks()?;
        info!("event=task_delete module=repo status=ok task_id={id} removed={removed}");
        Ok(removed)
    }

    /// Writes the full collection under the owner's key.
    pub fn save_tasks(&self) -> RepoResult<()> {
        let Some(owner) = self.owner.as_deref() else {
            debug!("event=tasks_save module=repo status=skipped reason=no_owner");
            return Ok(());
        };

        let encoded = serde_json::to_string(&self.tasks).map_err(RepoError::Encode)?;
        self.store.set(&self.keys.tasks_key(owner), &encoded)?;
        debug!(
            "event=tasks_save module=repo status=ok count={} bytes={}",
            self.tasks.len(),
            encoded.len()
        );
        Ok(())
    }

    /// Drops the in-memory collection without touching storage.
    pub fn clear(&mut self) {
        self.owner = None;
        self.tasks.clear();
    }
}

fn now_epoch_ms() -> TaskId {
    chrono::Utc::now().timestamp_millis()
}
