//! List rendering
//!
//! Every render reloads the list from the store, clears the surface and
//! rebuilds one row per item in list order. No diffing.

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::DomSurface;

use crate::error::Result;
use crate::item::{Item, ItemId, ItemList};
use crate::persistence::{KeyValueStore, Store};

/// One displayed row: the item text plus a delete control tagged with the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: ItemId,
    pub text: String,
}

impl From<&Item> for Row {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            text: item.text.clone(),
        }
    }
}

/// Display sink the renderer rebuilds from scratch
pub trait Surface {
    /// Discard every displayed row
    fn clear(&mut self) -> Result<()>;
    /// Append a row after the existing ones
    fn push_row(&mut self, row: &Row) -> Result<()>;
}

/// Rows for a list, in list order
pub fn rows(list: &ItemList) -> Vec<Row> {
    list.iter().map(Row::from).collect()
}

/// Replace the surface contents with `list`
pub fn draw<V: Surface + ?Sized>(list: &ItemList, surface: &mut V) -> Result<usize> {
    surface.clear()?;
    for row in rows(list) {
        surface.push_row(&row)?;
    }
    Ok(list.len())
}

/// Reload from the store and redraw. Returns the number of rows drawn.
pub fn render<S, V>(store: &Store<S>, surface: &mut V) -> Result<usize>
where
    S: KeyValueStore,
    V: Surface + ?Sized,
{
    let list = store.load();
    draw(&list, surface)
}

/// Surface that keeps rows in memory, used natively and in tests
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub rows: Vec<Row>,
    /// Number of full rebuilds so far
    pub renders: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.text.as_str()).collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) -> Result<()> {
        self.rows.clear();
        self.renders += 1;
        Ok(())
    }

    fn push_row(&mut self, row: &Row) -> Result<()> {
        self.rows.push(row.clone());
        Ok(())
    }
}
