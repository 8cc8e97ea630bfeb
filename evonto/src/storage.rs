//! Persisted string key/value storage behind the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client backs this with `localStorage`, the CLI with a JSON
//! file, tests with [`MemoryStorage`]. Keys and values are plain strings so
//! every backend can mirror the browser's storage model exactly.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use parking_lot::Mutex;

/// Key holding the opaque auth token.
pub const TOKEN_KEY: &str = "authToken";
/// Key holding the JSON user profile.
pub const USER_INFO_KEY: &str = "userInfo";
/// Older keys that earlier client builds wrote; cleared on logout.
pub const LEGACY_KEYS: [&str; 4] = ["user", "userData", "preferences", "events"];

/// Failure writing to a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Browser storage is missing or refused the write (quota, private mode).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A persisted string key/value map.
///
/// `remove` of an absent key is a no-op, never an error.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error when the backend cannot persist the value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str);
}

/// In-process storage; contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[cfg(test)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.lock().remove(key);
    }
}
