//! Storage key layout.
//!
//! # Invariants
//! - Task collection keys are `task_key_prefix + email`, one per user.
//! - Defaults match keys written by earlier releases of the web client.

pub const DEFAULT_IDENTITY_KEY: &str = "currentUser";
pub const DEFAULT_USERNAME_KEY: &str = "currentUsername";
pub const DEFAULT_TASK_KEY_PREFIX: &str = "tasks_";

/// Names of the keys the core reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// Holds the logged-in user's email.
    pub identity_key: String,
    /// Holds the logged-in user's display name.
    pub username_key: String,
    pub task_key_prefix: String,
}

impl StorageKeys {
    /// Prefixes every key with `namespace`, so independent lists can share
    /// one backing store.
    pub fn namespaced(namespace: &str) -> Self {
        Self {
            identity_key: format!("{namespace}{DEFAULT_IDENTITY_KEY}"),
            username_key: format!("{namespace}{DEFAULT_USERNAME_KEY}"),
            task_key_prefix: format!("{namespace}{DEFAULT_TASK_KEY_PREFIX}"),
        }
    }

    pub fn tasks_key(&self, email: &str) -> String {
        format!("{}{email}", self.task_key_prefix)
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::namespaced("")
    }
}

#[cfg(test)]
mod tests {
    use super::StorageKeys;

    #[test]
    fn default_keys_match_web_client() {
        let keys = StorageKeys::default();
        assert_eq!(keys.identity_key, "currentUser");
        assert_eq!(keys.tasks_key("a@b.c"), "tasks_a@b.c");
    }

    #[test]
    fn namespaced_prefixes_every_key() {
        let keys = StorageKeys::namespaced("work.");
        assert_eq!(keys.username_key, "work.currentUsername");
        assert_eq!(keys.tasks_key("a@b.c"), "work.tasks_a@b.c");
    }
}
