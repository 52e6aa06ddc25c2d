//! Persistent key-value store contract and implementations.
//!
//! # Responsibility
//! - Define the narrow synchronous `get`/`set`/`remove` contract the core
//!   persists through.
//! - Ship an in-process map and an embedded SQLite backing.
//!
//! # Invariants
//! - Operations are synchronous and complete before returning.
//! - `set` is a full overwrite; there is no append or transaction API.
//! - `remove` of a missing key is not an error.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteKvStore;

pub type KvResult<T> = Result<T, KvError>;

/// Backend failure for key-value operations.
#[derive(Debug)]
pub enum KvError {
    Db(DbError),
    /// Backend-specific failure for stores outside this crate.
    Unavailable(String),
}

impl Display for KvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unavailable(message) => write!(f, "key-value store unavailable: {message}"),
        }
    }
}

impl Error for KvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for KvError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for KvError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Synchronous string-keyed, string-valued storage.
///
/// Methods take `&self` so the session store and task repository can share
/// one backend by reference; implementations use interior mutability where
/// needed.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> KvResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> KvResult<()>;
    fn remove(&self, key: &str) -> KvResult<()>;
}
