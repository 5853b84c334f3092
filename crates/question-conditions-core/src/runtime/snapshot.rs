// crates/question-conditions-core/src/runtime/snapshot.rs
// ============================================================================
// Module: Question-Set Snapshot Cache
// Description: Request-scoped cache of one question-set's items and indexes.
// Purpose: Reuse one repository read across validation, building, and rendering.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! A [`SetSnapshot`] captures one question-set at a point in time: the
//! ordered item list, an id index, and the reverse (parent to dependents)
//! index derived from the persisted conditions. It is an explicit,
//! caller-supplied, request-scoped cache; the engine never memoizes
//! snapshots in module-level state, so two calls never observe each other's
//! data.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::core::Item;
use crate::core::ItemId;
use crate::core::SetId;
use crate::interfaces::ItemRepository;

// ============================================================================
// SECTION: Snapshot
// ============================================================================

/// Point-in-time view of one question-set.
///
/// # Invariants
/// - `items` is ordered by ascending seqno, as listed by the repository.
/// - Indexes are derived from `items` at construction and never refreshed;
///   load a new snapshot to observe later edits.
#[derive(Debug, Clone)]
pub struct SetSnapshot {
    /// Question-set this snapshot captures.
    set_id: SetId,
    /// Items ordered by ascending seqno.
    items: Vec<Item>,
    /// Index from item id into `items`.
    by_id: BTreeMap<ItemId, usize>,
    /// Reverse dependency index: parent id to direct dependent ids.
    dependents: BTreeMap<ItemId, Vec<ItemId>>,
}

impl SetSnapshot {
    /// Loads a snapshot of the set through the repository.
    #[must_use]
    pub fn load(set_id: SetId, repo: &dyn ItemRepository) -> Self {
        Self::from_items(set_id, repo.list_by_set(set_id))
    }

    /// Builds a snapshot from an already-fetched ordered item list.
    #[must_use]
    pub fn from_items(set_id: SetId, mut items: Vec<Item>) -> Self {
        items.sort_by_key(|item| item.seqno);
        let mut by_id = BTreeMap::new();
        let mut dependents: BTreeMap<ItemId, Vec<ItemId>> = BTreeMap::new();
        for (index, item) in items.iter().enumerate() {
            by_id.insert(item.id, index);
        }
        for item in &items {
            if let Some(parent) = item.condition.dependency() {
                dependents.entry(parent).or_default().push(item.id);
            }
        }
        Self { set_id, items, by_id, dependents }
    }

    /// Returns the question-set this snapshot captures.
    #[must_use]
    pub const fn set_id(&self) -> SetId {
        self.set_id
    }

    /// Returns the items in ascending seqno order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up an item by id within the snapshot.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.by_id.get(&id).and_then(|index| self.items.get(*index))
    }

    /// Returns the direct dependents of an item, in seqno order.
    #[must_use]
    pub fn dependents_of(&self, id: ItemId) -> &[ItemId] {
        self.dependents.get(&id).map_or(&[], Vec::as_slice)
    }
}
