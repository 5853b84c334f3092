// crates/question-conditions-core/src/runtime/memory.rs
// ============================================================================
// Module: In-Memory Item Repository
// Description: BTreeMap-backed item repository for tests and embedding hosts.
// Purpose: Provide a deterministic reference ItemRepository implementation.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! A deterministic, in-process [`ItemRepository`] used by the test suites,
//! the crate example, and hosts that hold question-sets in memory. Listing
//! order follows seqno with item id as the tie-breaker, matching the
//! ordering contract real storage backends provide.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::core::Condition;
use crate::core::Item;
use crate::core::ItemId;
use crate::core::SetId;
use crate::interfaces::ItemRepository;

// ============================================================================
// SECTION: In-Memory Repository
// ============================================================================

/// In-memory item repository keyed by item id.
///
/// # Invariants
/// - Item ids are unique; inserting an existing id replaces the item.
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemRepository {
    /// Items keyed by identifier.
    items: BTreeMap<ItemId, Item>,
}

impl InMemoryItemRepository {
    /// Creates an empty repository.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: BTreeMap::new() }
    }

    /// Creates a repository seeded with the given items.
    #[must_use]
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut repo = Self::new();
        for item in items {
            repo.insert(item);
        }
        repo
    }

    /// Inserts or replaces an item.
    pub fn insert(&mut self, item: Item) {
        self.items.insert(item.id, item);
    }

    /// Replaces the condition of an existing item.
    ///
    /// Returns `false` when the item does not exist. This is the persistence
    /// step a host performs after write-path validation succeeds.
    pub fn replace_condition(&mut self, id: ItemId, condition: Condition) -> bool {
        match self.items.get_mut(&id) {
            Some(item) => {
                item.condition = condition;
                true
            }
            None => false,
        }
    }

    /// Removes an item, returning it when present.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        self.items.remove(&id)
    }
}

impl ItemRepository for InMemoryItemRepository {
    fn get(&self, id: ItemId) -> Option<Item> {
        self.items.get(&id).cloned()
    }

    fn list_by_set(&self, set_id: SetId) -> Vec<Item> {
        let mut listing: Vec<Item> =
            self.items.values().filter(|item| item.set_id == set_id).cloned().collect();
        listing.sort_by_key(|item| (item.seqno, item.id));
        listing
    }
}
