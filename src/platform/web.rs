//! Browser LocalStorage backend

use super::storage::Store;
use crate::error::StoreError;

/// Handle to `window.localStorage`
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    /// Acquire LocalStorage; reads return `None` and writes fail if it is unavailable
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable, progress will not persist");
        }
        Self { storage }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("no LocalStorage".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }
}
