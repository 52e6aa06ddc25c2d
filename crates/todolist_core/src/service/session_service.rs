//! Session store.
//!
//! # Responsibility
//! - Own the current identity and the login/logout transitions.
//! - Persist identity keys so a later process can restore the session.
//!
//! # Invariants
//! - Rejected logins perform no store writes and leave state untouched.
//! - A successful login writes exactly one key per identity field.
//! - Passwords are checked for presence only and never stored or logged.

use crate::config::StorageKeys;
use crate::kv::{KeyValueStore, KvError, KvResult};
use crate::model::session::{Session, ValidationError};
use crate::repo::task_repo::RepoError;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by session and facade operations.
#[derive(Debug)]
pub enum StoreError {
    /// Blank required input; nothing was changed.
    Validation(ValidationError),
    /// Backing store or encoding failure.
    Repo(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<KvError> for StoreError {
    fn from(value: KvError) -> Self {
        Self::Repo(RepoError::Kv(value))
    }
}

/// Holds the current session and mirrors it into the key-value store.
pub struct SessionStore<'kv, S: KeyValueStore + ?Sized> {
    store: &'kv S,
    keys: StorageKeys,
    session: Session,
}

impl<'kv, S: KeyValueStore + ?Sized> SessionStore<'kv, S> {
    /// Creates a logged-out store.
    pub fn new(store: &'kv S, keys: StorageKeys) -> Self {
        Self {
            store,
            keys,
            session: Session::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// Logs in after presence checks and persists the identity.
    pub fn login(&mut self, username: &str, email: &str, password: &str) -> StoreResult<Session> {
        let session = Session::from_input(username, email, password).inspect_err(|err| {
            debug!("event=login module=session status=rejected reason=validation error={err}");
        })?;

        self.store.set(&self.keys.identity_key, &session.email)?;
        self.store.set(&self.keys.username_key, &session.username)?;
        self.session = session.clone();
        info!("event=login module=session status=ok");
        Ok(session)
    }

    /// Clears the session and its persisted identity keys.
    pub fn logout(&mut self) -> KvResult<()> {
        self.session.clear();
        self.store.remove(&self.keys.identity_key)?;
        self.store.remove(&self.keys.username_key)?;
        info!("event=logout module=session status=ok");
        Ok(())
    }

    /// Restores the last logged-in identity, if one was persisted.
    ///
    /// A missing display name falls back to the email. Returns whether a
    /// session was restored.
    pub fn restore_session(&mut self) -> KvResult<bool> {
        let email = self
            .store
            .get(&self.keys.identity_key)?
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        let Some(email) = email else {
            debug!("event=session_restore module=session status=skipped reason=no_identity");
            return Ok(false);
        };

        let username = self
            .store
            .get(&self.keys.username_key)?
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| email.clone());

        self.session = Session { username, email };
        info!("event=session_restore module=session status=ok");
        Ok(true)
    }
}
