//! Add/delete operations
//!
//! Each operation reloads the list from the store, mutates it, writes it
//! back and redraws the surface. The store is the only state.

use crate::error::Result;
use crate::item::{Item, ItemId, ItemList};
use crate::persistence::{KeyValueStore, Store};
use crate::platform::input::{ClickTarget, delegate_click};
use crate::platform::time::Clock;
use crate::renderer::{self, Surface};

/// The to-do app: store, clock and display surface
pub struct TodoApp<S, C, V> {
    store: Store<S>,
    clock: C,
    surface: V,
}

impl<S, C, V> TodoApp<S, C, V>
where
    S: KeyValueStore,
    C: Clock,
    V: Surface,
{
    pub fn new(store: Store<S>, clock: C, surface: V) -> Self {
        Self {
            store,
            clock,
            surface,
        }
    }

    pub fn store(&self) -> &Store<S> {
        &self.store
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    /// Current list as stored
    pub fn items(&self) -> ItemList {
        self.store.load()
    }

    /// Redraw from storage
    pub fn refresh(&mut self) -> Result<usize> {
        renderer::render(&self.store, &mut self.surface)
    }

    /// Add an item from raw input text
    ///
    /// Blank input is ignored and returns `Ok(None)` without touching storage.
    /// On success the caller should clear its input field.
    pub fn add(&mut self, input: &str) -> Result<Option<Item>> {
        if input.trim().is_empty() {
            log::debug!("Ignoring empty input");
            return Ok(None);
        }

        let mut list = self.store.load();
        let Some(item) = list.append(input, self.clock.now_ms()).cloned() else {
            return Ok(None);
        };
        self.store.save(&list)?;
        self.refresh()?;

        log::info!("Added item {} ({} total)", item.id, list.len());
        Ok(Some(item))
    }

    /// Delete every item with `id`
    ///
    /// An unknown id still re-saves and redraws the unchanged list.
    /// Returns the number of items removed.
    pub fn delete(&mut self, id: ItemId) -> Result<usize> {
        let mut list = self.store.load();
        let removed = list.remove(id);
        self.store.save(&list)?;
        self.refresh()?;

        if removed > 0 {
            log::info!("Deleted item {} ({} left)", id, list.len());
        } else {
            log::debug!("No item with id {}", id);
        }
        Ok(removed)
    }

    /// Delegated click inside the list; deletes when a delete button was hit
    pub fn handle_list_click(&mut self, target: &ClickTarget) -> Result<Option<usize>> {
        match delegate_click(target) {
            Some(id) => self.delete(id).map(Some),
            None => Ok(None),
        }
    }
}
