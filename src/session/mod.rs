//! Persisted session record and its storage interface.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the single source of truth for "is anyone logged in".
//! It lives under one localStorage slot, survives reloads within the
//! browser profile, and is written only by the login flow, the user
//! refresh, and logout. Guards and pages read it through the narrow
//! `SessionStore` surface so the storage mechanism stays swappable
//! (tests use `MemoryStorage`).
//!
//! ERROR HANDLING
//! ==============
//! Read paths never fail: a missing or malformed record is an absent
//! session, so corrupt storage cannot crash the boot path.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::net::types::User;

/// localStorage slot holding the serialized [`Session`].
pub const STORAGE_KEY: &str = "auth";

/// Duplicate slot holding the bare token, kept for older read paths.
/// Maintained on every write and removed together on [`SessionStore::clear`].
pub const LEGACY_TOKEN_KEY: &str = "token";

/// The persisted record of who is signed in and with what credential.
///
/// Either no session exists, or the record carries a non-empty token
/// and a user with a valid numeric id; partial records are rejected on
/// read. Writing always replaces the whole record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(rename = "tokenType")]
    pub token_type: String,
    pub user: User,
}

impl Session {
    /// `Authorization` header value for authenticated requests.
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.token)
    }

    fn is_valid(&self) -> bool {
        !self.token.is_empty() && self.user.id > 0
    }
}

/// Minimal key-value persistence the session record needs.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage` backend. Hydrate-only; on the server every
/// operation safely no-ops so SSR renders as logged-out.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebStorage;

impl StorageBackend for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory backend for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

/// Narrow handle over the persisted session. Cheap to clone; all clones
/// share the same backend.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Store backed by browser `localStorage`.
    pub fn new() -> Self {
        Self::with_backend(Arc::new(WebStorage))
    }

    /// Store over an explicit backend (tests pass `MemoryStorage`).
    pub fn with_backend(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// The persisted session, or `None` when absent, malformed, or
    /// violating the non-empty-token / valid-id invariant.
    pub fn read(&self) -> Option<Session> {
        let raw = self.backend.get(STORAGE_KEY)?;
        serde_json::from_str::<Session>(&raw)
            .ok()
            .filter(Session::is_valid)
    }

    /// Persist a full session record, replacing any prior one. Also
    /// mirrors the bare token under [`LEGACY_TOKEN_KEY`].
    pub fn write(&self, token: &str, token_type: &str, user: &User) {
        let record = Session {
            token: token.to_owned(),
            token_type: token_type.to_owned(),
            user: user.clone(),
        };
        if let Ok(raw) = serde_json::to_string(&record) {
            self.backend.set(STORAGE_KEY, &raw);
            self.backend.set(LEGACY_TOKEN_KEY, token);
        }
    }

    /// Remove the session record and the legacy token slot. Idempotent.
    pub fn clear(&self) {
        self.backend.remove(STORAGE_KEY);
        self.backend.remove(LEGACY_TOKEN_KEY);
    }

    /// Bearer token of the current session, if any.
    pub fn token(&self) -> Option<String> {
        self.read().map(|session| session.token)
    }

    /// User snapshot of the current session, if any.
    pub fn current_user(&self) -> Option<User> {
        self.read().map(|session| session.user)
    }

    /// The one authenticated predicate every guard consults.
    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }
}
