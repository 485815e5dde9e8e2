//! # Seed Data
//!
//! Populates a fresh store so the item list is not empty on first use.
//!
//! ## Seeded Items
//! | name  | price | quantity |
//! |-------|-------|----------|
//! | testA | 10000 | 10       |
//! | testB | 20000 | 20       |

use catalog_core::Item;
use tracing::info;

use crate::store::ItemStore;

/// Items created at startup: (name, price, quantity).
pub const SEED_ITEMS: &[(&str, i64, i64)] = &[("testA", 10000, 10), ("testB", 20000, 20)];

/// Creates every seed item in `store`, returning them with assigned ids.
pub fn seed_items(store: &ItemStore) -> Vec<Item> {
    let seeded: Vec<Item> = SEED_ITEMS
        .iter()
        .map(|&(name, price, quantity)| store.create(Item::new(name, Some(price), Some(quantity))))
        .collect();

    info!(count = seeded.len(), "Seeded item store");
    seeded
}
