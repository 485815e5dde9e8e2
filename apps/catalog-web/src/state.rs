//! # Application State
//!
//! Everything the handlers share, built once at startup.
//!
//! ## Thread Safety
//! The router holds `Arc<AppState>`; every request gets a clone of the `Arc`.
//! - `ItemStore`: guards its own data with a `Mutex`
//! - `ViewEngine`: read-only after construction

use std::sync::Arc;

use catalog_store::ItemStore;
use handlebars::TemplateError;

use crate::views::ViewEngine;

/// Shared application state.
pub struct AppState {
    pub store: ItemStore,
    pub views: ViewEngine,
}

impl AppState {
    /// Creates state around an existing store.
    pub fn new(store: ItemStore) -> Result<Arc<Self>, TemplateError> {
        Ok(Arc::new(AppState {
            store,
            views: ViewEngine::new()?,
        }))
    }
}
