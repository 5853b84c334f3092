// crates/question-conditions-core/src/core/condition.rs
// ============================================================================
// Module: Display Condition Value Object
// Description: Validated display condition with its stable wire contract.
// Purpose: Represent "show this item only if an earlier answer matches".
// Dependencies: crate::core::{identifiers, operator}, serde
// ============================================================================

//! ## Overview
//! A [`Condition`] is the structured visibility rule attached to one item of
//! a question-set. The serialized form is a stable JSON contract consumed by
//! web and disconnected mobile clients: default field values are skipped on
//! serialization, so the empty condition round-trips as `{}`.
//!
//! Instances produced by `runtime::schema::validate_condition` additionally
//! guarantee the sanitization caps below; constructing a `Condition` directly
//! bypasses sanitization and is intended for already-trusted data.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::ItemId;
use crate::core::operator::ConditionOperator;

// ============================================================================
// SECTION: Sanitization Caps
// ============================================================================

/// Maximum length in characters of one comparison value.
pub const VALUE_MAX_CHARS: usize = 500;

/// Maximum number of comparison values in one condition.
pub const VALUES_MAX_ENTRIES: usize = 50;

/// Maximum length in characters of the grouping label.
pub const GROUP_MAX_CHARS: usize = 100;

// ============================================================================
// SECTION: Condition
// ============================================================================

/// Dependency declaration inside a display condition.
///
/// # Invariants
/// - `item_id` refers to an item in the same question-set with a strictly
///   smaller seqno than the owning item (enforced by graph validation on the
///   write path).
/// - `values` entries are sanitized and capped when produced by the schema
///   validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependsOn {
    /// Item the condition depends on.
    pub item_id: ItemId,
    /// Comparison operator.
    pub operator: ConditionOperator,
    /// Comparison values; non-empty unless the operator is an emptiness check.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

/// Display condition attached to one question-set item.
///
/// # Invariants
/// - The empty condition (`depends_on == None`) serializes as `{}` and means
///   "always visible".
/// - `group` is UI-grouping metadata only and has no effect on evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Optional dependency on an earlier item's answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<DependsOn>,
    /// Whether a true comparison means "show" (`true`) or "hide" (`false`).
    #[serde(default = "default_show_if", skip_serializing_if = "is_true")]
    pub show_if: bool,
    /// Force dependents hidden whenever this item ends up hidden.
    #[serde(default, skip_serializing_if = "is_false")]
    pub cascade_hide: bool,
    /// Sanitized UI grouping label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl Condition {
    /// Creates the empty condition (always visible, no cascade, no group).
    #[must_use]
    pub const fn empty() -> Self {
        Self { depends_on: None, show_if: true, cascade_hide: false, group: None }
    }

    /// Returns true when the condition is the empty condition.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.depends_on.is_none()
    }

    /// Returns the dependency item, when one is declared.
    #[must_use]
    pub fn dependency(&self) -> Option<ItemId> {
        self.depends_on.as_ref().map(|depends_on| depends_on.item_id)
    }
}

impl Default for Condition {
    fn default() -> Self {
        Self::empty()
    }
}

// ============================================================================
// SECTION: Serde Defaults
// ============================================================================

/// Default for `show_if` when the field is absent on the wire.
const fn default_show_if() -> bool {
    true
}

/// Skip-serialization predicate for fields defaulting to `true`.
#[allow(clippy::trivially_copy_pass_by_ref, reason = "serde requires reference predicates")]
const fn is_true(value: &bool) -> bool {
    *value
}

/// Skip-serialization predicate for fields defaulting to `false`.
#[allow(clippy::trivially_copy_pass_by_ref, reason = "serde requires reference predicates")]
const fn is_false(value: &bool) -> bool {
    !*value
}
