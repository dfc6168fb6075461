//! Persistent session store backed by browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login writes the three credential keys, logout clears them, and `App`
//! reads them once after hydration to seed `AuthState`. Nothing else touches
//! storage directly; views go through the reactive state instead.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::net::types::Role;
use crate::state::auth::Session;

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const USER_ID_KEY: &str = "userId";

/// String key/value persistence used by [`SessionStore`].
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Reads yield nothing and writes are dropped outside
/// the hydrated browser app.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
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
            if let Some(storage) = local_storage() {
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
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process storage for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Typed access to the persisted credentials.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persist the credentials from a successful login. No validation of the
    /// token's shape; the role string is stored as received.
    pub fn write(&self, token: &str, role: &str, user_id: &str) {
        self.storage.set(TOKEN_KEY, token);
        self.storage.set(ROLE_KEY, role);
        self.storage.set(USER_ID_KEY, user_id);
    }

    /// Remove every credential key.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(ROLE_KEY);
        self.storage.remove(USER_ID_KEY);
    }

    /// Current credentials; an unrecognized role reads as `None`.
    pub fn read(&self) -> Session {
        Session {
            token: self.storage.get(TOKEN_KEY),
            role: self.storage.get(ROLE_KEY).as_deref().and_then(Role::parse),
            user_id: self.storage.get(USER_ID_KEY),
        }
    }
}

/// The store every view uses in the running app.
pub fn browser_store() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage)
}
