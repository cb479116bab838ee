//! Key-value preference storage.
//!
//! `PreferenceStore` is the seam between theme logic and `localStorage`:
//! the browser build uses [`LocalStore`], tests use [`MemoryStore`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use crate::error::ClientError;

pub trait PreferenceStore {
    /// Read `key`, returning `Ok(None)` when it was never written.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Storage`] when the backing store is unavailable.
    fn get(&self, key: &str) -> Result<Option<String>, ClientError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Storage`] when the write is rejected.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ClientError>;
}

/// In-memory store; survives as long as the value does.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every write, like Safari private mode.
    #[must_use]
    pub fn read_only() -> Self {
        Self { entries: HashMap::new(), read_only: true }
    }

    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ClientError> {
        if self.read_only {
            return Err(ClientError::Storage("store is read-only".to_owned()));
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage`, resolved once at construction.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    #[must_use]
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; theme preference will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, ClientError> {
        self.storage
            .as_ref()
            .ok_or_else(|| ClientError::Storage("localStorage unavailable".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| ClientError::Storage(ClientError::from(e).to_string()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ClientError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| ClientError::Storage(ClientError::from(e).to_string()))
    }
}
