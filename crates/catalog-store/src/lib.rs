//! # catalog-store: Item Storage for the Catalog Service
//!
//! This crate provides the single in-memory repository that owns item
//! identity and storage.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Service Data Flow                          │
//! │                                                                         │
//! │  HTTP handler (add_item)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   catalog-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────────────────┐    ┌──────────────────────┐    │   │
//! │  │   │        ItemStore          │    │        seed          │    │   │
//! │  │   │       (store.rs)          │◄───│      (seed.rs)       │    │   │
//! │  │   │                           │    │                      │    │   │
//! │  │   │  Mutex<                   │    │  testA 10000 x10     │    │   │
//! │  │   │    items: BTreeMap,       │    │  testB 20000 x20     │    │   │
//! │  │   │    sequence: u64 >        │    │                      │    │   │
//! │  │   └───────────────────────────┘    └──────────────────────┘    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `ItemStore` and its identity sequence
//! - [`seed`] - Startup seed items
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use catalog_core::Item;
//! use catalog_store::ItemStore;
//!
//! let store = ItemStore::new();
//! let saved = store.create(Item::new("testA", Some(10000), Some(10)));
//!
//! let id = saved.id.unwrap();
//! assert_eq!(store.find_by_id(id).unwrap().name, "testA");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use seed::{seed_items, SEED_ITEMS};
pub use store::ItemStore;
