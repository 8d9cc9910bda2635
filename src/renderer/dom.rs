//! DOM surface (WASM only)
//!
//! Builds `<li><span>text</span><button class="delete-btn" data-id="..">Delete</button></li>`
//! rows inside the list container.

use web_sys::{Document, Element};

use super::{Row, Surface};
use crate::consts::{DELETE_CLASS, DELETE_LABEL, ID_ATTRIBUTE, LIST_ID};
use crate::error::{Result, TodoError};

fn dom_err(what: &str, e: wasm_bindgen::JsValue) -> TodoError {
    TodoError::Dom(format!("{what}: {e:?}"))
}

/// The `#todo-list` container
pub struct DomSurface {
    document: Document,
    list: Element,
}

impl DomSurface {
    pub fn new(document: Document) -> Result<Self> {
        let list = document
            .get_element_by_id(LIST_ID)
            .ok_or(TodoError::MissingElement(LIST_ID))?;
        Ok(Self { document, list })
    }
}

impl Surface for DomSurface {
    fn clear(&mut self) -> Result<()> {
        self.list.set_inner_html("");
        Ok(())
    }

    fn push_row(&mut self, row: &Row) -> Result<()> {
        let li = self
            .document
            .create_element("li")
            .map_err(|e| dom_err("create li", e))?;

        let span = self
            .document
            .create_element("span")
            .map_err(|e| dom_err("create span", e))?;
        span.set_text_content(Some(row.text.as_str()));

        let button = self
            .document
            .create_element("button")
            .map_err(|e| dom_err("create button", e))?;
        button.set_class_name(DELETE_CLASS);
        button
            .set_attribute(ID_ATTRIBUTE, &row.id.to_string())
            .map_err(|e| dom_err("set data-id", e))?;
        button.set_text_content(Some(DELETE_LABEL));

        li.append_child(&span).map_err(|e| dom_err("append span", e))?;
        li.append_child(&button)
            .map_err(|e| dom_err("append button", e))?;
        self.list
            .append_child(&li)
            .map_err(|e| dom_err("append row", e))?;
        Ok(())
    }
}
