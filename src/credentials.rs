//! Holder of the token used to authenticate the calls.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared, mutable storage for the current token.
///
/// Clones point to the same token, so a login performed through one
/// [`Client`](crate::Client) is visible to all of its clones. Reads take a
/// full snapshot of the value, a call never sees a partially replaced token.
#[derive(Clone, Default)]
pub struct TokenStore {
    inner: Arc<RwLock<Option<String>>>,
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("token", &self.is_set().then_some("<redacted>"))
            .finish()
    }
}

impl TokenStore {
    pub fn new(token: Option<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(token.filter(|value| !value.is_empty()))),
        }
    }

    // a panic while holding the lock can't leave a half written string behind
    fn read(&self) -> RwLockReadGuard<'_, Option<String>> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<String>> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns a copy of the current token.
    pub fn get(&self) -> Option<String> {
        self.read().clone()
    }

    pub fn is_set(&self) -> bool {
        self.read().is_some()
    }

    /// Overwrites the token, an empty value clears it.
    pub fn set(&self, token: impl Into<String>) {
        let token = token.into();
        *self.write() = if token.is_empty() { None } else { Some(token) };
    }

    pub fn clear(&self) {
        *self.write() = None;
    }
}
