// crates/question-conditions-core/src/runtime/graph.rs
// ============================================================================
// Module: Dependency Graph Validation
// Description: Referential, ordering, and cycle checks for condition edges.
// Purpose: Keep the per-set dependency graph acyclic and well-formed on write.
// Dependencies: crate::core, crate::interfaces, crate::runtime::snapshot, thiserror
// ============================================================================

//! ## Overview
//! Graph validation runs synchronously on every condition create or update;
//! a failure must abort the host's persistence transaction. The ordering
//! invariant (a dependency's seqno is strictly smaller than its dependent's)
//! makes cycles impossible by construction, but seqnos can be reassigned
//! independently of condition edges, so an explicit cycle walk runs as
//! defense in depth.
//!
//! The same rule checks serve the soft-mode read path: the dependency map
//! builder collects every violation instead of aborting on the first one.
//! Item deletion is never validated here; dangling references left by
//! deletes are the storage collaborator's responsibility.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::AnswerType;
use crate::core::Condition;
use crate::core::ConditionOperator;
use crate::core::ConditionOwner;
use crate::core::DependsOn;
use crate::core::ItemId;
use crate::core::Seqno;
use crate::core::SetId;
use crate::interfaces::ItemRepository;
use crate::runtime::snapshot::SetSnapshot;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Hard cap on cycle-walk depth, guarding against repository inconsistency.
///
/// Question-sets are typically under a hundred items; reaching this cap
/// means the repository returned corrupted data, and the write fails closed.
pub const MAX_TRAVERSAL_DEPTH: usize = 10_000;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Graph validation failures on the condition write path.
///
/// # Invariants
/// - Variants are stable for programmatic handling and serialization; the
///   read path re-emits them as warning payloads.
/// - On the write path, any variant must abort the host's persistence
///   transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphError {
    /// Dependency item does not exist.
    #[error("dependency item not found: {item_id}")]
    NotFound {
        /// The unresolved dependency identifier.
        item_id: ItemId,
    },
    /// Dependency item belongs to a different question-set.
    #[error(
        "dependency item {item_id} is in question-set {actual_set_id}, expected {expected_set_id}"
    )]
    CrossSet {
        /// The cross-set dependency identifier.
        item_id: ItemId,
        /// Question-set of the item owning the condition.
        expected_set_id: SetId,
        /// Question-set the dependency actually belongs to.
        actual_set_id: SetId,
    },
    /// Condition depends on its own item.
    #[error("condition may not depend on its own item")]
    SelfReference,
    /// Dependency does not precede its dependent in the set ordering.
    #[error(
        "dependency {dependency_id} at seqno {dependency_seqno} must precede seqno {owner_seqno}"
    )]
    OrderingViolation {
        /// The dependency identifier.
        dependency_id: ItemId,
        /// Position of the dependency within the set.
        dependency_seqno: Seqno,
        /// Position of the item owning the condition.
        owner_seqno: Seqno,
    },
    /// The edge would close a dependency cycle.
    #[error("dependency cycle detected: {}", render_path(.path))]
    Cycle {
        /// Item identifiers along the cycle, starting and ending at the owner.
        path: Vec<ItemId>,
    },
    /// Operator is not meaningful for the dependency's answer type.
    ///
    /// Raised only when [`GraphPolicy::enforce_operator_compat`] is enabled;
    /// compatibility is advisory by default.
    #[error("operator {operator} is not compatible with the dependency's answer type")]
    OperatorMismatch {
        /// The incompatible operator.
        operator: ConditionOperator,
        /// Answer type of the dependency item.
        answer_type: AnswerType,
    },
}

/// Renders a cycle path for error messages.
fn render_path(path: &[ItemId]) -> String {
    let rendered: Vec<String> = path.iter().map(ToString::to_string).collect();
    rendered.join(" -> ")
}

// ============================================================================
// SECTION: Policy
// ============================================================================

/// Host-selected strictness for advisory checks.
///
/// # Invariants
/// - The default policy matches the persisted-data contract: operator
///   compatibility stays advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphPolicy {
    /// Promote operator/answer-type incompatibility to a hard error.
    pub enforce_operator_compat: bool,
}

// ============================================================================
// SECTION: Write-Path Validation
// ============================================================================

/// Validates a condition against the current question-set graph.
///
/// Runs existence, same-set, self-reference, ordering, and cycle checks in
/// order, under the default [`GraphPolicy`].
///
/// # Errors
///
/// Returns the first [`GraphError`] encountered; the host must abort the
/// persistence transaction on any error.
pub fn validate_graph(
    condition: &Condition,
    owner: &ConditionOwner,
    repo: &dyn ItemRepository,
) -> Result<(), GraphError> {
    validate_graph_with_policy(condition, owner, repo, GraphPolicy::default())
}

/// Validates a condition under an explicit policy.
///
/// # Errors
///
/// Returns the first [`GraphError`] encountered, including
/// [`GraphError::OperatorMismatch`] when the policy promotes compatibility
/// to a hard check.
pub fn validate_graph_with_policy(
    condition: &Condition,
    owner: &ConditionOwner,
    repo: &dyn ItemRepository,
    policy: GraphPolicy,
) -> Result<(), GraphError> {
    let Some(depends_on) = &condition.depends_on else {
        return Ok(());
    };

    let violations = reference_violations(depends_on, owner, repo, policy);
    if let Some(violation) = violations.into_iter().next() {
        return Err(violation);
    }

    let snapshot = SetSnapshot::load(owner.set_id, repo);
    if let Some(path) = cycle_path(owner, depends_on, &snapshot) {
        return Err(GraphError::Cycle { path });
    }

    Ok(())
}

// ============================================================================
// SECTION: Shared Rule Checks
// ============================================================================

/// Runs the referential rule checks (existence, same-set, self-reference,
/// ordering, and policy-promoted compatibility), collecting every violation.
///
/// The write path takes the first entry and aborts; the dependency map
/// builder converts the full list into warnings.
pub(crate) fn reference_violations(
    depends_on: &DependsOn,
    owner: &ConditionOwner,
    repo: &dyn ItemRepository,
    policy: GraphPolicy,
) -> Vec<GraphError> {
    let Some(dependency) = repo.get(depends_on.item_id) else {
        return vec![GraphError::NotFound { item_id: depends_on.item_id }];
    };

    let mut violations = Vec::new();
    if dependency.set_id != owner.set_id {
        violations.push(GraphError::CrossSet {
            item_id: depends_on.item_id,
            expected_set_id: owner.set_id,
            actual_set_id: dependency.set_id,
        });
        return violations;
    }
    if depends_on.item_id == owner.item_id {
        violations.push(GraphError::SelfReference);
        return violations;
    }
    if dependency.seqno >= owner.seqno {
        violations.push(GraphError::OrderingViolation {
            dependency_id: depends_on.item_id,
            dependency_seqno: dependency.seqno,
            owner_seqno: owner.seqno,
        });
    }
    if policy.enforce_operator_compat
        && !depends_on.operator.is_compatible(dependency.answer_type)
    {
        violations.push(GraphError::OperatorMismatch {
            operator: depends_on.operator,
            answer_type: dependency.answer_type,
        });
    }
    violations
}

// ============================================================================
// SECTION: Cycle Detection
// ============================================================================

/// Walks the dependency chain from the candidate edge looking for the owner.
///
/// Each item carries at most one outgoing dependency edge, so the chain
/// starting at the candidate dependency visits every node a cycle through
/// the owner could use; the owner's persisted edge is superseded by the
/// candidate. The walk is iterative with a `visited` set and the
/// [`MAX_TRAVERSAL_DEPTH`] hard cap; exceeding the cap fails closed as a
/// cycle, since only corrupted repository data can reach it.
fn cycle_path(
    owner: &ConditionOwner,
    candidate: &DependsOn,
    snapshot: &SetSnapshot,
) -> Option<Vec<ItemId>> {
    let mut path = vec![owner.item_id];
    let mut visited: BTreeSet<ItemId> = BTreeSet::new();
    visited.insert(owner.item_id);

    let mut next = Some(candidate.item_id);
    let mut depth: usize = 0;
    while let Some(current) = next {
        depth += 1;
        path.push(current);
        if current == owner.item_id || depth > MAX_TRAVERSAL_DEPTH {
            return Some(path);
        }
        if !visited.insert(current) {
            // Pre-existing loop that does not pass through the owner; the
            // set-wide sweep on the read path reports it.
            return None;
        }
        next = snapshot.item(current).and_then(|item| item.condition.dependency());
    }
    None
}

// ============================================================================
// SECTION: Set-Wide Cycle Sweep
// ============================================================================

/// Finds every item sitting on a dependency cycle within the set.
///
/// Kahn-style trimming over the persisted edges: items nobody depends on
/// are retired repeatedly, peeling away the acyclic dependent forest; every
/// item that survives lies on a cycle, because each item carries at most
/// one outgoing dependency edge. Returns the offending item identifiers in
/// seqno order.
#[must_use]
pub fn items_on_cycles(snapshot: &SetSnapshot) -> Vec<ItemId> {
    let mut dependent_count: BTreeMap<ItemId, usize> = snapshot
        .items()
        .iter()
        .map(|item| (item.id, snapshot.dependents_of(item.id).len()))
        .collect();

    let mut queue: Vec<ItemId> = dependent_count
        .iter()
        .filter(|(_, count)| **count == 0)
        .map(|(id, _)| *id)
        .collect();

    while let Some(id) = queue.pop() {
        let dependency = snapshot
            .item(id)
            .and_then(|item| item.condition.dependency())
            .filter(|target| *target != id);
        if let Some(target) = dependency
            && let Some(count) = dependent_count.get_mut(&target)
        {
            *count = count.saturating_sub(1);
            if *count == 0 {
                queue.push(target);
            }
        }
    }

    snapshot
        .items()
        .iter()
        .filter(|item| dependent_count.get(&item.id).copied().unwrap_or(0) > 0)
        .map(|item| item.id)
        .collect()
}
