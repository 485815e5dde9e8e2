//! # Store Error Types
//!
//! Error types for item store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ItemStore::update(unknown id)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds entity and id context                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in catalog-web) ← Serialized for the client                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  404 response                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use catalog_core::ItemId;
use thiserror::Error;

/// Item store operation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Entity not found in the store.
    ///
    /// ## When This Occurs
    /// - `update` called with an id that was never assigned
    /// - Id was assigned before `clear`
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Creates a NotFound error for an item id.
    pub fn item_not_found(id: ItemId) -> Self {
        StoreError::not_found("Item", id)
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
