// crates/question-conditions-core/src/runtime/map_builder.rs
// ============================================================================
// Module: Dependency Map Builder
// Description: Assembles the parent-to-dependents index for one question-set.
// Purpose: Give rendering clients the data for client-side visibility updates.
// Dependencies: crate::core, crate::interfaces, crate::runtime::{graph, snapshot}
// ============================================================================

//! ## Overview
//! Rendering clients call the builder once per question-set load, then
//! recompute visibility client-side per answer change using the evaluation
//! engine and the returned map. The builder runs the graph rules in soft
//! mode: violations become [`Warning`] entries alongside best-effort data
//! instead of failing the whole fetch. Clients should fail open on
//! `critical` warnings (treat the flagged item as always visible) rather
//! than silently hide content.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::core::ConditionOperator;
use crate::core::ItemId;
use crate::core::Seqno;
use crate::core::SetId;
use crate::interfaces::ItemRepository;
use crate::runtime::graph::GraphError;
use crate::runtime::graph::GraphPolicy;
use crate::runtime::graph::items_on_cycles;
use crate::runtime::graph::reference_violations;
use crate::runtime::snapshot::SetSnapshot;

// ============================================================================
// SECTION: Warnings
// ============================================================================

/// Severity of a soft-mode validation warning.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    /// Referential or ordering rule violated; the item's condition is
    /// unreliable but the rest of the map is usable.
    Error,
    /// The item sits on a dependency cycle; its visibility cannot be
    /// resolved and clients should fail open.
    Critical,
}

/// Non-fatal validation finding attached to the dependency map.
///
/// # Invariants
/// - `item_id` identifies the item owning the offending condition.
/// - `kind` carries the same payload the write path would have rejected
///   with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// Item owning the condition that violated a rule.
    pub item_id: ItemId,
    /// Warning severity.
    pub severity: WarningSeverity,
    /// The violated rule, in write-path error form.
    pub kind: GraphError,
}

// ============================================================================
// SECTION: Dependency Map
// ============================================================================

/// One dependent entry under a parent item.
///
/// Carries everything a rendering client needs to re-evaluate the dependent
/// when the parent's answer changes, without another fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependentEdge {
    /// Item owning the condition.
    pub dependent_id: ItemId,
    /// Position of the dependent within the set.
    pub dependent_seqno: Seqno,
    /// Comparison operator of the dependent's condition.
    pub operator: ConditionOperator,
    /// Comparison values of the dependent's condition.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
    /// Show-or-hide polarity of the dependent's condition.
    pub show_if: bool,
    /// Cascade flag of the dependent's condition.
    pub cascade_hide: bool,
    /// Grouping label of the dependent's condition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Dependency map for one question-set plus soft-mode warnings.
///
/// # Invariants
/// - `edges` is keyed by parent item; entries are in ascending dependent
///   seqno order.
/// - `warnings` never aborts a build; an empty map with warnings is a valid
///   outcome.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DependencyMap {
    /// Parent item to its direct dependents.
    pub edges: BTreeMap<ItemId, Vec<DependentEdge>>,
    /// Soft-mode validation findings.
    pub warnings: Vec<Warning>,
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builds the dependency map for a question-set through the repository.
#[must_use]
pub fn build_dependency_map(set_id: SetId, repo: &dyn ItemRepository) -> DependencyMap {
    build_from_snapshot(&SetSnapshot::load(set_id, repo), repo)
}

/// Builds the dependency map from an already-loaded snapshot.
///
/// The repository is consulted only to classify references that do not
/// resolve within the snapshot (missing vs cross-set).
#[must_use]
pub fn build_from_snapshot(snapshot: &SetSnapshot, repo: &dyn ItemRepository) -> DependencyMap {
    let mut map = DependencyMap::default();

    for item in snapshot.items() {
        let Some(depends_on) = &item.condition.depends_on else {
            continue;
        };
        let owner = item.owner_ref();

        for violation in
            reference_violations(depends_on, &owner, repo, GraphPolicy::default())
        {
            map.warnings.push(Warning {
                item_id: item.id,
                severity: WarningSeverity::Error,
                kind: violation,
            });
        }

        // Best-effort edge: ordering violations still get an edge so render
        // clients can fail open; unresolvable, cross-set, and self
        // references are warning-only.
        let resolves_in_set = depends_on.item_id != item.id
            && snapshot.item(depends_on.item_id).is_some();
        if resolves_in_set {
            map.edges.entry(depends_on.item_id).or_default().push(DependentEdge {
                dependent_id: item.id,
                dependent_seqno: item.seqno,
                operator: depends_on.operator,
                values: depends_on.values.clone(),
                show_if: item.condition.show_if,
                cascade_hide: item.condition.cascade_hide,
                group: item.condition.group.clone(),
            });
        }
    }

    append_cycle_warnings(snapshot, &mut map.warnings);
    map
}

// ============================================================================
// SECTION: Cycle Warnings
// ============================================================================

/// Appends a critical warning for every item found on a dependency cycle.
fn append_cycle_warnings(snapshot: &SetSnapshot, warnings: &mut Vec<Warning>) {
    let members = items_on_cycles(snapshot);
    let member_set: BTreeSet<ItemId> = members.iter().copied().collect();
    let mut reported: BTreeSet<ItemId> = BTreeSet::new();

    for member in members {
        if reported.contains(&member) {
            continue;
        }
        let path = trace_cycle(member, &member_set, snapshot);
        for id in &path {
            reported.insert(*id);
        }
        for id in &path {
            warnings.push(Warning {
                item_id: *id,
                severity: WarningSeverity::Critical,
                kind: GraphError::Cycle { path: path.clone() },
            });
        }
    }
}

/// Follows dependency edges from a known cycle member back to itself.
fn trace_cycle(start: ItemId, members: &BTreeSet<ItemId>, snapshot: &SetSnapshot) -> Vec<ItemId> {
    let mut path = vec![start];
    let mut current = start;
    while let Some(next) = snapshot
        .item(current)
        .and_then(|item| item.condition.dependency())
        .filter(|next| members.contains(next))
    {
        if next == start {
            break;
        }
        // Guard against index corruption; the member set bounds the walk.
        if path.contains(&next) {
            break;
        }
        path.push(next);
        current = next;
    }
    path
}
