//! Save/load of the item list
//!
//! The list lives as one JSON value under a fixed key. The key-value backend
//! is injected so the browser's LocalStorage can be swapped for an in-memory
//! map in tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::consts::STORAGE_KEY;
use crate::error::{Result, TodoError};
use crate::item::ItemList;

/// Minimal string key-value slot, shaped after the Web Storage API
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory backend for native runs and tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one raw value
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Raw stored value, bypassing deserialization
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

/// Item list persisted under a single key
#[derive(Debug)]
pub struct Store<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> Store<S> {
    /// Store using the default `susnata-todos` key
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load the list, reporting malformed data as `TodoError::Parse`
    pub fn try_load(&self) -> Result<ItemList> {
        match self.backend.get_item(&self.key)? {
            Some(json) => serde_json::from_str(&json).map_err(TodoError::Parse),
            None => Ok(ItemList::new()),
        }
    }

    /// Load the list, falling back to an empty list if the slot is missing,
    /// unreadable or malformed
    pub fn load(&self) -> ItemList {
        match self.try_load() {
            Ok(list) => {
                log::info!("Loaded {} items", list.len());
                list
            }
            Err(e) => {
                log::warn!("Ignoring stored items: {}", e);
                ItemList::new()
            }
        }
    }

    /// Overwrite the slot with the serialized list
    pub fn save(&self, list: &ItemList) -> Result<()> {
        let json = serde_json::to_string(list).map_err(TodoError::Serialize)?;
        self.backend.set_item(&self.key, &json)?;
        log::info!("Saved {} items", list.len());
        Ok(())
    }
}
