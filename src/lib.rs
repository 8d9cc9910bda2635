//! Susnata Todo - a to-do list kept in browser LocalStorage
//!
//! Core modules:
//! - `item`: Item/ItemList data model (the JSON stored in LocalStorage)
//! - `persistence`: Key-value abstraction and the item Store
//! - `renderer`: Full-rebuild projection of the list onto a display surface
//! - `controller`: Add/delete operations
//! - `platform`: Browser/native platform abstraction (time, storage, input)

pub mod controller;
pub mod error;
pub mod item;
pub mod persistence;
pub mod platform;
pub mod renderer;

pub use controller::TodoApp;
pub use error::{Result, TodoError};
pub use item::{Item, ItemId, ItemList};
pub use persistence::{KeyValueStore, MemoryStorage, Store};
pub use renderer::{RecordingSurface, Row, Surface};

/// Page and storage constants
pub mod consts {
    /// LocalStorage key holding the serialized item list
    pub const STORAGE_KEY: &str = "susnata-todos";

    /// Text input the user types new items into
    pub const INPUT_ID: &str = "todo-input";
    /// Button that triggers add
    pub const ADD_BUTTON_ID: &str = "add-btn";
    /// Container the rows are rendered into
    pub const LIST_ID: &str = "todo-list";

    /// Class marking a row's delete button
    pub const DELETE_CLASS: &str = "delete-btn";
    /// Attribute carrying the item id on a delete button
    pub const ID_ATTRIBUTE: &str = "data-id";
    /// Delete button caption
    pub const DELETE_LABEL: &str = "Delete";
}
