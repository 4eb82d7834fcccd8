//! Session context shared by every resource client.
//!
//! DESIGN
//! ======
//! The session token is the only shared mutable resource in the client. It is
//! held behind an injected `Session` handle instead of ambient module state so
//! the authenticated request path can be exercised in tests with an in-memory
//! store instead of a real browser storage API.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

pub mod store;

use std::sync::Arc;

use crate::session::store::{BrowserStore, MemoryStore, TokenStore};

/// Cheap-to-clone handle over the token store, passed to every resource
/// client. Reads go straight to the underlying store on every call, so a
/// logout between a click and the request dispatch is always honored.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    /// Wrap an arbitrary token store.
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Session backed by browser `localStorage`.
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStore))
    }

    /// Session backed by a process-local store, for tests and server renders.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    /// Current token, read fresh from the store.
    pub fn token(&self) -> Option<String> {
        self.store.get()
    }

    /// Replace the session token. At most one token is live at a time; any
    /// previous value is overwritten.
    pub fn set_token(&self, token: &str) {
        self.store.set(token);
    }

    /// Drop the session token. Subsequent `token()` calls return `None`.
    pub fn clear(&self) {
        self.store.clear();
    }

    /// Whether a token is currently stored. Says nothing about validity;
    /// only the backend can judge that.
    pub fn is_authenticated(&self) -> bool {
        self.store.get().is_some()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
