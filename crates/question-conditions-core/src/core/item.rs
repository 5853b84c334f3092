// crates/question-conditions-core/src/core/item.rs
// ============================================================================
// Module: Question-Set Item Snapshot
// Description: Read-only item snapshot and write-path owner reference.
// Purpose: Carry the per-call graph context supplied by the item repository.
// Dependencies: crate::core::{answer, condition, identifiers}, serde
// ============================================================================

//! ## Overview
//! Items are owned and mutated exclusively by the external storage
//! collaborator; the engine receives them as read-only snapshots through the
//! [`crate::interfaces::ItemRepository`] trait and never creates or deletes
//! them. Each snapshot carries the item's persisted display condition so the
//! read path can assemble dependency maps without further lookups.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::answer::AnswerType;
use crate::core::condition::Condition;
use crate::core::identifiers::ItemId;
use crate::core::identifiers::Seqno;
use crate::core::identifiers::SetId;

// ============================================================================
// SECTION: Item Snapshot
// ============================================================================

/// One question occupying a position inside a question-set.
///
/// # Invariants
/// - `id` is globally unique across all question-sets.
/// - `seqno` orders the item within `set_id`; the repository listing is
///   sorted by it.
/// - Snapshots are never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item identifier.
    pub id: ItemId,
    /// Owning question-set identifier.
    pub set_id: SetId,
    /// Position within the owning set.
    pub seqno: Seqno,
    /// Answer kind the question collects.
    pub answer_type: AnswerType,
    /// Ordered choice strings for option-backed answer types.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Persisted display condition (empty when the item is unconditional).
    #[serde(default, skip_serializing_if = "Condition::is_empty")]
    pub condition: Condition,
}

impl Item {
    /// Returns the owner reference used on the condition write path.
    #[must_use]
    pub const fn owner_ref(&self) -> ConditionOwner {
        ConditionOwner { item_id: self.id, set_id: self.set_id, seqno: self.seqno }
    }
}

// ============================================================================
// SECTION: Owner Reference
// ============================================================================

/// Minimal reference to the item whose condition is being written.
///
/// # Invariants
/// - Fields describe the same item; the host supplies them from the row
///   being edited, not from the condition document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionOwner {
    /// Identifier of the item owning the condition.
    pub item_id: ItemId,
    /// Question-set the owning item belongs to.
    pub set_id: SetId,
    /// Position of the owning item within its set.
    pub seqno: Seqno,
}
