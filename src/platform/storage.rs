//! LocalStorage backend (WASM only)

use crate::error::{Result, TodoError};
use crate::persistence::KeyValueStore;

/// `window.localStorage` behind the `KeyValueStore` trait
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Grab the page's LocalStorage (fails in sandboxed iframes and some private modes)
    pub fn open() -> Result<Self> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| TodoError::Storage("LocalStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| TodoError::Storage(format!("read {key}: {e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| TodoError::Storage(format!("write {key}: {e:?}")))
    }
}
