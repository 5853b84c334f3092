// crates/question-conditions-core/src/interfaces/mod.rs
// ============================================================================
// Module: Question Conditions Interfaces
// Description: Backend-agnostic collaborator contracts for item lookups.
// Purpose: Define the repository surface the engine reads graph context from.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The engine holds no persistent state of its own; every validation or
//! build call reads the current question-set snapshot through the
//! [`ItemRepository`] collaborator. Implementations must be deterministic
//! within one call and are read-only from the engine's perspective: the
//! engine never creates, mutates, or deletes items.
//!
//! Two concurrent edits to the same question-set are subject to a
//! read-then-write race between the repository read and the host's
//! persistence write; the host must serialize writes per question-set. The
//! engine detects inconsistency, it does not prevent races.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::Item;
use crate::core::ItemId;
use crate::core::SetId;

// ============================================================================
// SECTION: Item Repository
// ============================================================================

/// Read-only lookup surface over persisted question-set items.
pub trait ItemRepository {
    /// Fetches one item by identifier, or `None` when it does not exist.
    fn get(&self, id: ItemId) -> Option<Item>;

    /// Lists every item of a question-set, ordered by ascending seqno.
    ///
    /// An unknown set yields an empty listing.
    fn list_by_set(&self, set_id: SetId) -> Vec<Item>;
}
