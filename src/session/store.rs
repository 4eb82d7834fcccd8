//! Token storage backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend session token is an opaque string persisted under a single
//! fixed key. Stores never inspect or validate the value.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Mutex;

/// Fixed storage key for the one live session token per browser profile.
pub const TOKEN_KEY: &str = "sahyog_session_token";

/// Key-value storage for the opaque session token.
///
/// Every `set`/`clear` must be visible to the next `get` within the same
/// context; implementations keep no caching layer.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// `localStorage`-backed store. All operations are best-effort: a browser
/// profile that denies storage access behaves like a logged-out session.
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for BrowserStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

/// In-memory store used by tests and server renders.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl TokenStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(token.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}
