//! # Item Store
//!
//! In-memory storage for items and the identity sequence.
//!
//! ## Key Operations
//! - Identity assignment on create
//! - Lookup by id, snapshot listing
//! - In-place update of business fields
//!
//! ## Critical Section
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How create() Assigns Identity                        │
//! │                                                                         │
//! │  Request A: create(testA)          Request B: create(testB)            │
//! │       │                                   │                             │
//! │       ▼                                   ▼                             │
//! │  ┌─────────────────────────────────────────────────────────┐           │
//! │  │ lock()  ── one holder at a time ──                      │           │
//! │  │                                                         │           │
//! │  │   sequence = sequence + 1   ──►  id                     │           │
//! │  │   items.insert(id, item)                                │           │
//! │  │                                                         │           │
//! │  │ unlock()                                                │           │
//! │  └─────────────────────────────────────────────────────────┘           │
//! │       │                                   │                             │
//! │       ▼                                   ▼                             │
//! │  testA → id 1                       testB → id 2                       │
//! │                                                                         │
//! │  Ids are never reused: clear() empties the map, not the sequence.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use catalog_core::{Item, ItemId};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Items and the sequence that numbers them.
#[derive(Debug, Default)]
struct Inventory {
    /// Keyed by id; ids grow monotonically so key order is insertion order.
    items: BTreeMap<ItemId, Item>,

    /// Last assigned identity value, 0 before the first create.
    sequence: u64,
}

/// Owner of all stored items.
///
/// ## Thread Safety
/// Everything sits behind one `Mutex`, so identity assignment and insertion
/// happen in a single critical section. Share it as `Arc<ItemStore>`.
///
/// ## Usage
/// ```rust
/// use catalog_core::{Item, ItemId};
/// use catalog_store::ItemStore;
///
/// let store = ItemStore::new();
/// let a = store.create(Item::new("testA", Some(10000), Some(10)));
/// let b = store.create(Item::new("testB", Some(20000), Some(20)));
/// assert_eq!(a.id, Some(ItemId::new(1)));
/// assert_eq!(b.id, Some(ItemId::new(2)));
/// assert_eq!(store.find_all().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ItemStore {
    inventory: Mutex<Inventory>,
}

impl ItemStore {
    /// Creates an empty store with the sequence at 0.
    pub fn new() -> Self {
        ItemStore::default()
    }

    /// Acquires the lock.
    ///
    /// Every critical section leaves the map and sequence consistent, so a
    /// poisoned lock still guards valid data.
    fn lock(&self) -> MutexGuard<'_, Inventory> {
        self.inventory.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores an item under the next identity.
    ///
    /// ## Arguments
    /// * `item` - Item to store. Any id it already carries is replaced.
    ///
    /// ## Returns
    /// The item carrying its assigned id. Never fails.
    pub fn create(&self, item: Item) -> Item {
        self.insert(item).1
    }

    /// Same as [`create`](Self::create), also handing back the assigned id.
    pub fn insert(&self, item: Item) -> (ItemId, Item) {
        let mut inventory = self.lock();

        let id = ItemId::new(inventory.sequence).next();
        inventory.sequence = id.value();

        let item = item.with_id(id);
        inventory.items.insert(id, item.clone());

        debug!(id = %id, name = %item.name, "Created item");
        (id, item)
    }

    /// Gets an item by its id.
    ///
    /// ## Returns
    /// * `Some(Item)` - Copy of the stored item
    /// * `None` - No item carries that id
    pub fn find_by_id(&self, id: ItemId) -> Option<Item> {
        self.lock().items.get(&id).cloned()
    }

    /// Returns a snapshot of every stored item.
    ///
    /// Items come back in ascending id order. The vector is a copy; changing
    /// it does not touch the store.
    pub fn find_all(&self) -> Vec<Item> {
        self.lock().items.values().cloned().collect()
    }

    /// Overwrites name, price and quantity of a stored item.
    ///
    /// ## Arguments
    /// * `id` - Identity of the stored item
    /// * `item` - Replacement fields (its own `id` is ignored)
    ///
    /// ## Returns
    /// * `Ok(Item)` - The stored item after the update
    /// * `Err(StoreError::NotFound)` - No item carries that id
    pub fn update(&self, id: ItemId, item: &Item) -> StoreResult<Item> {
        let mut inventory = self.lock();

        let stored = inventory
            .items
            .get_mut(&id)
            .ok_or_else(|| StoreError::item_not_found(id))?;
        let changed = !stored.same_fields(item);
        stored.apply_fields(item);

        debug!(id = %id, name = %stored.name, changed, "Updated item");
        Ok(stored.clone())
    }

    /// Removes every item.
    ///
    /// The sequence is kept: the next create continues from the previous
    /// high-water mark.
    pub fn clear(&self) {
        let mut inventory = self.lock();
        let removed = inventory.items.len();
        inventory.items.clear();

        debug!(removed, sequence = inventory.sequence, "Cleared item store");
    }

    /// Counts stored items.
    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    /// Checks if the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }

    /// Returns the most recently assigned id, `None` before the first create.
    pub fn last_assigned_id(&self) -> Option<ItemId> {
        match self.lock().sequence {
            0 => None,
            value => Some(ItemId::new(value)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
