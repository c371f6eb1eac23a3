//! # Session storage: the persisted half of the client session
//!
//! The browser keeps exactly one piece of client state across page reloads: the
//! bearer token handed out by `POST /api/auth/login`. It lives in
//! session-scoped storage under the key [`AUTH_TOKEN_KEY`], so it survives a
//! reload but not the closing of the tab.
//!
//! ## [`KeyValueStore`] trait
//!
//! A synchronous string-to-string interface (`get` / `set` / `remove`), the
//! shape of the Web Storage API. Implementations live in sibling modules:
//!
//! | Store | Platform | Backing |
//! |-------|----------|---------|
//! | [`crate::MemoryStore`] | native, tests | `HashMap` behind a mutex |
//! | [`crate::BrowserStore`] | wasm32 + `web` feature | `window.sessionStorage` |
//!
//! ## [`SessionStore`]
//!
//! A thin typed wrapper that only knows about the auth token. The UI
//! controller talks to this rather than to raw keys.

use thiserror::Error;

/// Key under which the bearer token is persisted.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Errors raised by a storage backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    /// The backing storage is not reachable (no window, storage disabled, ...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The backend refused the operation (quota, security policy, ...).
    #[error("storage operation failed: {0}")]
    Backend(String),
}

/// Synchronous key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Persists the authentication token.
///
/// Storage failures are logged and otherwise swallowed: a broken storage
/// degrades to "not logged in after reload", never to a crashed UI.
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The persisted token, if any. Blank tokens count as absent.
    pub fn token(&self) -> Option<String> {
        match self.store.get(AUTH_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(e) => {
                tracing::warn!("Failed to read auth token: {e}");
                None
            }
        }
    }

    pub fn save_token(&self, token: &str) {
        if let Err(e) = self.store.set(AUTH_TOKEN_KEY, token) {
            tracing::warn!("Failed to persist auth token: {e}");
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.store.remove(AUTH_TOKEN_KEY) {
            tracing::warn!("Failed to clear auth token: {e}");
        }
    }

    /// Access the underlying store.
    pub fn inner(&self) -> &S {
        &self.store
    }
}
