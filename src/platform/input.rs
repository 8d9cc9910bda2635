//! Input handling
//!
//! Clicks inside the list container are delegated: a single listener looks at
//! the clicked element and maps it to the row whose delete button was hit.

use crate::consts::DELETE_CLASS;
use crate::item::ItemId;

/// What the delegated click listener saw on the event target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    /// Space-separated `class` attribute
    pub class_name: String,
    /// Raw `data-id` attribute, if any
    pub data_id: Option<String>,
}

impl ClickTarget {
    pub fn new(class_name: impl Into<String>, data_id: Option<&str>) -> Self {
        Self {
            class_name: class_name.into(),
            data_id: data_id.map(str::to_string),
        }
    }

    /// The target carries the delete-button class
    pub fn is_delete_button(&self) -> bool {
        self.class_name
            .split_ascii_whitespace()
            .any(|c| c == DELETE_CLASS)
    }
}

/// Map a click inside the list to the id of the item to delete
///
/// Clicks on anything but a delete button, or on one with a missing or
/// unparsable id, are ignored.
pub fn delegate_click(target: &ClickTarget) -> Option<ItemId> {
    if !target.is_delete_button() {
        return None;
    }
    match target.data_id.as_deref().map(str::parse::<ItemId>) {
        Some(Ok(id)) => Some(id),
        Some(Err(_)) => {
            log::debug!("Delete button with bad id {:?}", target.data_id);
            None
        }
        None => None,
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::bind;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlInputElement, MouseEvent};

    use super::ClickTarget;
    use crate::consts::{ADD_BUTTON_ID, ID_ATTRIBUTE, INPUT_ID, LIST_ID};
    use crate::controller::TodoApp;
    use crate::error::{Result, TodoError};
    use crate::persistence::KeyValueStore;
    use crate::platform::Clock;
    use crate::renderer::Surface;

    fn element(document: &Document, id: &'static str) -> Result<Element> {
        document
            .get_element_by_id(id)
            .ok_or(TodoError::MissingElement(id))
    }

    /// Wire the add button and the delegated list listener to `app`
    pub fn bind<S, C, V>(document: &Document, app: Rc<RefCell<TodoApp<S, C, V>>>) -> Result<()>
    where
        S: KeyValueStore + 'static,
        C: Clock + 'static,
        V: Surface + 'static,
    {
        let input: HtmlInputElement = element(document, INPUT_ID)?
            .dyn_into()
            .map_err(|_| TodoError::Dom(format!("#{INPUT_ID} is not an input")))?;
        let add_btn = element(document, ADD_BUTTON_ID)?;
        let list = element(document, LIST_ID)?;

        // Add button
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let result = app.borrow_mut().add(&input.value());
                match result {
                    Ok(Some(_)) => input.set_value(""),
                    Ok(None) => {}
                    Err(e) => log::warn!("Add failed: {}", e),
                }
            });
            add_btn
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .map_err(|e| TodoError::Dom(format!("bind add: {e:?}")))?;
            closure.forget();
        }

        // Delete buttons (delegated)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                    return;
                };
                let data_id = target.get_attribute(ID_ATTRIBUTE);
                let click = ClickTarget::new(target.class_name(), data_id.as_deref());
                if let Err(e) = app.borrow_mut().handle_list_click(&click) {
                    log::warn!("Delete failed: {}", e);
                }
            });
            list.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .map_err(|e| TodoError::Dom(format!("bind list: {e:?}")))?;
            closure.forget();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_button_maps_to_id() {
        let target = ClickTarget::new("delete-btn", Some("1718000000000"));
        assert_eq!(delegate_click(&target), Some(ItemId(1_718_000_000_000)));
    }

    #[test]
    fn test_extra_classes_still_match() {
        let target = ClickTarget::new("btn delete-btn small", Some("7"));
        assert_eq!(delegate_click(&target), Some(ItemId(7)));
    }

    #[test]
    fn test_other_targets_are_ignored() {
        // The row's text span
        assert_eq!(delegate_click(&ClickTarget::new("", None)), None);
        // Similar but different class
        assert_eq!(delegate_click(&ClickTarget::new("delete-btn-x", Some("7"))), None);
        // Delete button without a usable id
        assert_eq!(delegate_click(&ClickTarget::new("delete-btn", None)), None);
        assert_eq!(delegate_click(&ClickTarget::new("delete-btn", Some("abc"))), None);
    }
}
