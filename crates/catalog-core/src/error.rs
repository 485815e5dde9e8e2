//! # Error Types
//!
//! Domain-specific error types for catalog-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  catalog-core errors (this file)                                       │
//! │  └── CoreError        - Lookups of unknown items                       │
//! │                                                                         │
//! │  catalog-store errors (separate crate)                                 │
//! │  └── StoreError       - Store operation failures                       │
//! │                                                                         │
//! │  catalog-web errors (in app)                                           │
//! │  └── ApiError         - What the HTTP client sees (serialized)         │
//! │                                                                         │
//! │  Flow: CoreError / StoreError → ApiError → HTTP response               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There are no validation errors: absent or unparseable price and
//! quantity values are accepted as absent.

use thiserror::Error;

use crate::types::ItemId;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// No item carries the requested identity.
    ///
    /// ## When This Occurs
    /// - Detail or edit page requested for an id that was never assigned
    /// - Id was assigned before the store was cleared
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),
}

// =============================================================================
// Unit Tests
// =============================================================================
