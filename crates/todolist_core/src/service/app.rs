//! Application store facade handed to the rendering layer.
//!
//! # Responsibility
//! - Tie the session store, task repository and UI selection together.
//! - Reload tasks whenever the active user or selected date changes.
//!
//! # Invariants
//! - Tasks are loaded only for a logged-in user; logout clears memory but
//!   keeps the stored collection.
//! - Reloads always replace the in-memory collection.
//! - Task operations while logged out are no-ops.

use crate::config::StorageKeys;
use crate::kv::KeyValueStore;
use crate::model::session::Session;
use crate::model::task::{Task, TaskId, TaskStatus};
use crate::repo::task_repo::TaskRepository;
use crate::service::session_service::{SessionStore, StoreResult};
use crate::view::{filtered_tasks, task_stats, TaskFilter, TaskStats};
use log::info;

/// Transient UI selection. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
    pub filter: TaskFilter,
}

impl Selection {
    /// Today's UTC date with the `All` filter.
    pub fn today() -> Self {
        Self {
            date: today(),
            filter: TaskFilter::All,
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::today()
    }
}

/// Current UTC calendar date as `YYYY-MM-DD`.
pub fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

/// Explicit store object with `init` / `restore_session` / `teardown`
/// lifecycle.
pub struct TodoApp<'kv, S: KeyValueStore + ?Sized> {
    session: SessionStore<'kv, S>,
    tasks: TaskRepository<'kv, S>,
    selection: Selection,
}

impl<'kv, S: KeyValueStore + ?Sized> TodoApp<'kv, S> {
    /// Creates a logged-out store with default selection.
    pub fn init(store: &'kv S, keys: StorageKeys) -> Self {
        info!("event=app_init module=app status=ok");
        Self {
            session: SessionStore::new(store, keys.clone()),
            tasks: TaskRepository::new(store, keys),
            selection: Selection::default(),
        }
    }

    /// Restores the last user and loads their tasks. Returns whether a user
    /// was restored.
    pub fn restore_session(&mut self) -> StoreResult<bool> {
        if !self.session.restore_session()? {
            return Ok(false);
        }
        self.reload_tasks()?;
        Ok(true)
    }

    pub fn login(&mut self, username: &str, email: &str, password: &str) -> StoreResult<()> {
        let session = self.session.login(username, email, password)?;
        self.tasks.load_tasks(&session.email)?;
        Ok(())
    }

    pub fn logout(&mut self) -> StoreResult<()> {
        self.tasks.clear();
        self.session.logout()?;
        Ok(())
    }

    /// Adds a task on the selected date.
    pub fn add_task(&mut self, text: &str) -> StoreResult<Option<Task>> {
        let task = self.tasks.add_task(text, &self.selection.date)?;
        Ok(task)
    }

    pub fn toggle_status(&mut self, id: TaskId) -> StoreResult<Option<TaskStatus>> {
        Ok(self.tasks.toggle_status(id)?)
    }

    pub fn delete_task(&mut self, id: TaskId) -> StoreResult<bool> {
        Ok(self.tasks.delete_task(id)?)
    }

    /// Changes the selected date and reloads the collection from storage.
    pub fn set_selected_date(&mut self, date: impl Into<String>) -> StoreResult<()> {
        self.selection.date = date.into();
        self.reload_tasks()
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.selection.filter = filter;
    }

    pub fn session(&self) -> &Session {
        self.session.session()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Tasks on the selected date matching the active filter.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        filtered_tasks(
            self.tasks.tasks(),
            &self.selection.date,
            self.selection.filter,
        )
    }

    /// Counts for the selected date.
    pub fn stats(&self) -> TaskStats {
        task_stats(self.tasks.tasks(), &self.selection.date)
    }

    /// Ends the store lifecycle. Every mutation is already persisted.
    pub fn teardown(self) {
        info!(
            "event=app_teardown module=app status=ok logged_in={} task_count={}",
            self.session.is_logged_in(),
            self.tasks.tasks().len()
        );
    }

    fn reload_tasks(&mut self) -> StoreResult<()> {
        if let Some(email) = self.session.session().active_email() {
            self.tasks.load_tasks(email)?;
        }
        Ok(())
    }
}
