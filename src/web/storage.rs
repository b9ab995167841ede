//! Browser `localStorage` as a key-value store

use crate::data::KeyValueStore;
use crate::MapError;

/// The window's `localStorage`, if the browser grants access to it
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable, scores will not be saved");
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), MapError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| MapError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| MapError::Storage(format!("{:?}", e)))
    }
}
