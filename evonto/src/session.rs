//! Auth-session state for the current user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`SessionStore`] is shared by the API client (which writes rotated
//! tokens and clears the session on 401), the route guard, and the
//! navigation shell. Storage is the source of truth so a reload (or a new
//! CLI invocation) sees the same session; subscribers are notified after
//! every mutation so views never have to poll storage.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::storage::{LEGACY_KEYS, Storage, StorageError, TOKEN_KEY, USER_INFO_KEY};

/// The cached user profile: whatever JSON body was captured alongside the
/// token, with typed accessors for the fields the UI reads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(serde_json::Value);

impl UserProfile {
    #[must_use]
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// The raw JSON exactly as it was captured.
    #[must_use]
    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.0.get("username").and_then(serde_json::Value::as_str)
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.0.get("email").and_then(serde_json::Value::as_str)
    }
}

/// Snapshot of the persisted session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    /// Whether a token is present. Validity is only known to the server.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&Session) + Send + Sync>;

/// Persisted token + profile with change notification.
pub struct SessionStore {
    storage: Arc<dyn Storage>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_id: AtomicU64,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("listeners", &self.listeners.lock().len())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage, listeners: Mutex::new(Vec::new()), next_id: AtomicU64::new(1) }
    }

    /// Read the current session from storage.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        Session { token: self.token(), user: self.user() }
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    /// The cached profile. Unparseable stored JSON reads as absent.
    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        let raw = self.storage.get(USER_INFO_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(UserProfile(value)),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unparseable stored user profile");
                None
            }
        }
    }

    /// Store a fresh token and profile together.
    ///
    /// # Errors
    ///
    /// Returns an error if storage refuses either write.
    pub fn establish(&self, token: &str, user: UserProfile) -> Result<(), StorageError> {
        self.storage.set(TOKEN_KEY, token)?;
        self.storage.set(USER_INFO_KEY, &serde_json::to_string(user.as_json())?)?;
        tracing::info!(username = user.username().unwrap_or("?"), "session established");
        self.notify();
        Ok(())
    }

    /// Replace the token; replace the profile too when one is given.
    ///
    /// # Errors
    ///
    /// Returns an error if storage refuses a write.
    pub fn rotate_token(&self, token: &str, user: Option<UserProfile>) -> Result<(), StorageError> {
        self.storage.set(TOKEN_KEY, token)?;
        if let Some(user) = user {
            self.storage.set(USER_INFO_KEY, &serde_json::to_string(user.as_json())?)?;
        }
        tracing::debug!("session token rotated");
        self.notify();
        Ok(())
    }

    /// Clear token, profile, and every legacy key. Safe to call repeatedly.
    pub fn logout(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_INFO_KEY);
        for key in LEGACY_KEYS {
            self.storage.remove(key);
        }
        tracing::info!("session cleared");
        self.notify();
    }

    /// Register `listener` to receive the new session after every mutation.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Drop a listener. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.lock().retain(|(existing, _)| *existing != id);
    }

    fn notify(&self) {
        // Listeners may call back into the store, so never hold the lock while invoking them.
        let listeners: Vec<Listener> = self.listeners.lock().iter().map(|(_, l)| Arc::clone(l)).collect();
        if listeners.is_empty() {
            return;
        }
        let session = self.snapshot();
        for listener in listeners {
            listener(&session);
        }
    }
}
