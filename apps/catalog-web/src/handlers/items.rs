//! # Item Handlers
//!
//! Page and form endpoints for catalog items.
//!
//! ## Endpoints
//! - `GET  /items`           - list every item
//! - `GET  /items/{id}`      - show one item (`?status=true` adds the "Saved." banner)
//! - `GET  /items/add`       - blank creation form
//! - `POST /items/add`       - create, then redirect to the detail page
//! - `GET  /items/{id}/edit` - edit form pre-filled with the stored item
//! - `POST /items/{id}/edit` - update, then redirect to the detail page
//!
//! ## Form Fields
//! Browsers send every input as text, so `price` and `quantity` arrive as
//! strings. Blank or non-numeric values are stored as "no value" instead of
//! rejecting the submission. A body that cannot be decoded at all (wrong
//! content type, `name` sent twice) is a 400 with a JSON error.

use std::sync::Arc;

use axum::extract::rejection::{FormRejection, PathRejection, QueryRejection};
use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;
use tracing::{debug, info};

use catalog_core::{CoreError, Item, ItemId};

use crate::error::ApiError;
use crate::state::AppState;
use crate::views::Page;

// =============================================================================
// Request DTOs
// =============================================================================

/// Fields submitted by the add and edit forms.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemForm {
    /// Display name. Older forms post it as `itemName`.
    #[serde(default, alias = "itemName")]
    pub name: String,

    #[serde(default)]
    pub price: Option<String>,

    #[serde(default)]
    pub quantity: Option<String>,
}

impl From<ItemForm> for Item {
    fn from(form: ItemForm) -> Self {
        Item::new(
            form.name,
            parse_number(form.price.as_deref()),
            parse_number(form.quantity.as_deref()),
        )
    }
}

/// Query string of the detail page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetailQuery {
    #[serde(default)]
    pub status: Option<String>,
}

impl DetailQuery {
    /// True when the page should confirm a fresh save.
    pub fn saved(&self) -> bool {
        self.status.as_deref() == Some("true")
    }
}

fn parse_number(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok()
}

fn item_id(path: Result<Path<ItemId>, PathRejection>) -> Result<ItemId, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

fn item_form(form: Result<Form<ItemForm>, FormRejection>) -> Result<Item, ApiError> {
    form.map(|Form(form)| form.into())
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

fn load_item(state: &AppState, id: ItemId) -> Result<Item, ApiError> {
    let item = state.store.find_by_id(id).ok_or(CoreError::ItemNotFound(id))?;
    Ok(item)
}

// =============================================================================
// Handlers
// =============================================================================

/// Lists every stored item.
pub async fn list_items(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let items = state.store.find_all();
    debug!(count = items.len(), "Listing items");

    state.views.render(Page::ItemList { items: &items })
}

/// Shows one item.
pub async fn item_detail(
    State(state): State<Arc<AppState>>,
    path: Result<Path<ItemId>, PathRejection>,
    query: Result<Query<DetailQuery>, QueryRejection>,
) -> Result<Html<String>, ApiError> {
    let id = item_id(path)?;
    // A malformed query only drops the banner.
    let query = query.map(|Query(query)| query).unwrap_or_default();
    debug!(id = %id, "Showing item");

    let item = load_item(&state, id)?;
    state.views.render(Page::ItemDetail {
        item: &item,
        saved: query.saved(),
    })
}

/// Renders the blank creation form.
pub async fn add_form(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let item = Item::empty();
    state.views.render(Page::AddForm { item: &item })
}

/// Creates an item and redirects to its detail page with the saved banner.
pub async fn add_item(
    State(state): State<Arc<AppState>>,
    form: Result<Form<ItemForm>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let item = item_form(form)?;
    debug!(name = %item.name, "Adding item");

    let (id, saved) = state.store.insert(item);

    info!(id = %id, name = %saved.name, "Item created");
    Ok(Redirect::to(&format!("/items/{id}?status=true")))
}

/// Renders the edit form for a stored item.
pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    path: Result<Path<ItemId>, PathRejection>,
) -> Result<Html<String>, ApiError> {
    let id = item_id(path)?;
    let item = load_item(&state, id)?;

    state.views.render(Page::EditForm { item: &item })
}

/// Replaces an item's fields and redirects to its detail page.
pub async fn edit_item(
    State(state): State<Arc<AppState>>,
    path: Result<Path<ItemId>, PathRejection>,
    form: Result<Form<ItemForm>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let id = item_id(path)?;
    let item = item_form(form)?;
    debug!(id = %id, "Editing item");

    let updated = state.store.update(id, &item)?;

    info!(id = %id, name = %updated.name, "Item updated");
    Ok(Redirect::to(&format!("/items/{id}")))
}
