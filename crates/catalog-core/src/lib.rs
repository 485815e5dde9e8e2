//! # catalog-core: Pure Domain Types for the Catalog Service
//!
//! This crate holds the item entity and its identity type. It has zero I/O
//! dependencies; storage lives in `catalog-store` and the HTTP surface in
//! `catalog-web`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Service Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Browser (HTML forms)                         │   │
//! │  │     Item list ──► Item detail ──► Add form ──► Edit form        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    catalog-web handlers                         │   │
//! │  │     list_items, item_detail, add_item, edit_item                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ catalog-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │        ┌───────────┐            ┌───────────┐                  │   │
//! │  │        │   types   │            │   error   │                  │   │
//! │  │        │   Item    │            │ CoreError │                  │   │
//! │  │        │  ItemId   │            │           │                  │   │
//! │  │        └───────────┘            └───────────┘                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                catalog-store (in-memory ItemStore)              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (`Item`, `ItemId`)
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::{Item, ItemId};
//!
//! let item = Item::new("testA", Some(10000), Some(10));
//! assert!(!item.is_stored());
//!
//! let stored = item.with_id(ItemId::new(1));
//! assert_eq!(stored.id, Some(ItemId::new(1)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::CoreError;
pub use types::*;
