//! # Views
//!
//! Renders the item pages from handlebars templates compiled into the binary.
//!
//! ## Pages
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Page            Template      Context                                  │
//! │  ─────────────   ───────────   ──────────────────────────────────────   │
//! │  ItemList        items         { title, items: [Item] }                 │
//! │  ItemDetail      item          { title, item: Item, saved: bool }       │
//! │  AddForm         add_form      { title, item: Item (empty) }            │
//! │  EditForm        edit_form     { title, item: Item }                    │
//! │                                                                         │
//! │  Every template pulls in the `header` partial.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::response::Html;
use handlebars::{Handlebars, TemplateError};
use serde_json::{json, Value};

use catalog_core::Item;

use crate::error::ApiError;

const HEADER_PARTIAL: &str = include_str!("../templates/header.hbs");

const TEMPLATES: &[(&str, &str)] = &[
    ("items", include_str!("../templates/items.hbs")),
    ("item", include_str!("../templates/item.hbs")),
    ("add_form", include_str!("../templates/add_form.hbs")),
    ("edit_form", include_str!("../templates/edit_form.hbs")),
];

/// A page the handlers can ask for.
#[derive(Debug, Clone, Copy)]
pub enum Page<'a> {
    /// Every stored item.
    ItemList { items: &'a [Item] },

    /// One item; `saved` shows the confirmation banner after a create.
    ItemDetail { item: &'a Item, saved: bool },

    /// Blank creation form.
    AddForm { item: &'a Item },

    /// Edit form pre-filled with the stored item.
    EditForm { item: &'a Item },
}

impl Page<'_> {
    /// Name of the registered template.
    pub fn template(&self) -> &'static str {
        match self {
            Page::ItemList { .. } => "items",
            Page::ItemDetail { .. } => "item",
            Page::AddForm { .. } => "add_form",
            Page::EditForm { .. } => "edit_form",
        }
    }

    /// Data handed to the template.
    pub fn context(&self) -> Value {
        match self {
            Page::ItemList { items } => json!({ "title": "Items", "items": items }),
            Page::ItemDetail { item, saved } => {
                json!({ "title": "Item", "item": item, "saved": saved })
            }
            Page::AddForm { item } => json!({ "title": "Add item", "item": item }),
            Page::EditForm { item } => json!({ "title": "Edit item", "item": item }),
        }
    }
}

/// Compiled templates shared by all handlers.
pub struct ViewEngine {
    handlebars: Handlebars<'static>,
}

impl ViewEngine {
    /// Compiles the header partial and every page template.
    pub fn new() -> Result<Self, TemplateError> {
        let mut handlebars = Handlebars::new();
        handlebars.register_partial("header", HEADER_PARTIAL)?;
        for (name, source) in TEMPLATES {
            handlebars.register_template_string(name, source)?;
        }

        Ok(ViewEngine { handlebars })
    }

    /// Renders a page to HTML.
    pub fn render(&self, page: Page<'_>) -> Result<Html<String>, ApiError> {
        let body = self.handlebars.render(page.template(), &page.context())?;
        Ok(Html(body))
    }
}
