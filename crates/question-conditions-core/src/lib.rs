// crates/question-conditions-core/src/lib.rs
// ============================================================================
// Module: Question Conditions Core Library
// Description: Conditional display engine for ordered question-sets.
// Purpose: Validate and evaluate "show me only if" rules over question items.
// Dependencies: bigdecimal, serde, serde_json, thiserror, time
// ============================================================================

//! ## Overview
//! Question Conditions is the conditional display engine of a
//! facility-management backend: a question inside an ordered question-set
//! can declare that it is shown only when an earlier question in the same
//! set was answered a certain way. The crate is a pure validation and
//! evaluation library; it persists nothing, fetches no answers, and renders
//! nothing. Hosts supply per-call graph context through the
//! [`interfaces::ItemRepository`] collaborator.
//!
//! Invariants maintained for every persisted condition:
//! - The dependency exists, lives in the same question-set, and strictly
//!   precedes its dependent in seqno order.
//! - The per-set dependency graph is acyclic.
//! - Value-requiring operators carry at least one comparison value.
//! - All persisted strings are sanitized and length-capped.
//!
//! Security posture: condition documents and answer values are untrusted
//! input; evaluation is total and the write path fails closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::ALL_OPERATORS;
pub use self::core::AnswerMap;
pub use self::core::AnswerType;
pub use self::core::AnswerValue;
pub use self::core::Condition;
pub use self::core::ConditionOperator;
pub use self::core::ConditionOwner;
pub use self::core::DependsOn;
pub use self::core::GROUP_MAX_CHARS;
pub use self::core::Item;
pub use self::core::ItemId;
pub use self::core::OperatorClass;
pub use self::core::Seqno;
pub use self::core::SetId;
pub use self::core::VALUES_MAX_ENTRIES;
pub use self::core::VALUE_MAX_CHARS;
pub use self::core::operator_class_for;
pub use interfaces::ItemRepository;
pub use runtime::DependencyMap;
pub use runtime::DependentEdge;
pub use runtime::GraphError;
pub use runtime::GraphPolicy;
pub use runtime::InMemoryItemRepository;
pub use runtime::MAX_TRAVERSAL_DEPTH;
pub use runtime::SchemaError;
pub use runtime::SetSnapshot;
pub use runtime::Warning;
pub use runtime::WarningSeverity;
pub use runtime::build_dependency_map;
pub use runtime::build_from_snapshot;
pub use runtime::evaluate;
pub use runtime::items_on_cycles;
pub use runtime::resolve_visibility;
pub use runtime::serialize_condition;
pub use runtime::validate_condition;
pub use runtime::validate_graph;
pub use runtime::validate_graph_with_policy;
