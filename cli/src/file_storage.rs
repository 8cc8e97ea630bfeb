//! JSON-file backend for the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The CLI is one process per command, so the session token has to outlive
//! the process. The file holds a flat `{ "key": "value" }` object mirroring
//! the browser's `localStorage` keys.
//!
//! ERROR HANDLING
//! ==============
//! A missing file is an empty store. A corrupt file is logged and treated as
//! empty; the next write replaces it.

#[cfg(test)]
#[path = "file_storage_test.rs"]
mod file_storage_test;

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use evonto::storage::{Storage, StorageError};
use parking_lot::Mutex;

type Entries = BTreeMap<String, String>;

/// Session storage persisted to a single JSON file.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

/// `$HOME/.evonto/session.json`, or `.evonto-session.json` in the working
/// directory when no home is set.
pub fn default_session_path() -> PathBuf {
    std::env::var_os("HOME").map_or_else(
        || PathBuf::from(".evonto-session.json"),
        |home| PathBuf::from(home).join(".evonto").join("session.json"),
    )
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Entries {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Entries::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "session file unreadable");
                return Entries::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "session file corrupt, ignoring");
            Entries::new()
        })
    }

    fn save(&self, entries: &Entries) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        restrict_permissions(&self.path)?;
        Ok(())
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let _guard = self.lock.lock();
        self.load().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock();
        let mut entries = self.load();
        entries.insert(key.to_owned(), value.to_owned());
        self.save(&entries)
    }

    fn remove(&self, key: &str) {
        let _guard = self.lock.lock();
        let mut entries = self.load();
        if entries.remove(key).is_none() {
            return;
        }
        if let Err(e) = self.save(&entries) {
            tracing::warn!(path = %self.path.display(), key, error = %e, "failed to persist session removal");
        }
    }
}
