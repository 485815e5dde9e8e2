//! # Domain Types
//!
//! Core domain types used throughout the catalog service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐          ┌─────────────────┐                  │
//! │  │        Item         │          │     ItemId      │                  │
//! │  │  ─────────────────  │          │  ─────────────  │                  │
//! │  │  id: Option<ItemId> │─────────►│  u64            │                  │
//! │  │  name               │          │  1, 2, 3, ...   │                  │
//! │  │  price: Option      │          └─────────────────┘                  │
//! │  │  quantity: Option   │                                                │
//! │  └─────────────────────┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Lifecycle
//! - An item is built with `id: None`
//! - The store assigns `id` on create; it never changes afterwards
//! - Business fields (name, price, quantity) are overwritten on update

use std::fmt;

use serde::{Deserialize, Serialize};


// =============================================================================
// Item Id
// =============================================================================

/// Identity of a stored item.
///
/// Assigned by the store from a strictly increasing sequence starting at 1.
/// Serializes as a bare number so it can be used directly as a path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Wraps a raw identity value.
    #[inline]
    pub const fn new(value: u64) -> Self {
        ItemId(value)
    }

    /// Returns the raw identity value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Returns the identity that follows this one in the sequence.
    #[inline]
    pub const fn next(&self) -> Self {
        ItemId(self.0 + 1)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        ItemId(value)
    }
}

// =============================================================================
// Item
// =============================================================================

/// A catalog record.
///
/// `Default` produces the empty item used as the blank form target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Store-assigned identity, `None` until the item is created.
    pub id: Option<ItemId>,

    /// Display name.
    pub name: String,

    /// Unit price in the smallest currency unit.
    pub price: Option<i64>,

    /// Units on hand.
    pub quantity: Option<i64>,
}

impl Item {
    /// Creates an item with all fields absent.
    pub fn empty() -> Self {
        Item::default()
    }

    /// Creates an item without identity.
    pub fn new(name: impl Into<String>, price: Option<i64>, quantity: Option<i64>) -> Self {
        Item {
            id: None,
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Returns a copy carrying the given identity.
    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self
    }

    /// Checks if the item has been assigned an identity.
    #[inline]
    pub fn is_stored(&self) -> bool {
        self.id.is_some()
    }

    /// Copies the business fields of `other` onto this item.
    ///
    /// The identity of `self` is kept; `other.id` is ignored.
    pub fn apply_fields(&mut self, other: &Item) {
        self.name.clone_from(&other.name);
        self.price = other.price;
        self.quantity = other.quantity;
    }

    /// Checks whether two items carry the same business fields.
    pub fn same_fields(&self, other: &Item) -> bool {
        self.name == other.name && self.price == other.price && self.quantity == other.quantity
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
