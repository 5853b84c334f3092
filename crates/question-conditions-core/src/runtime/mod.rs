// crates/question-conditions-core/src/runtime/mod.rs
// ============================================================================
// Module: Question Conditions Runtime
// Description: Validation, evaluation, and map-building passes.
// Purpose: Implement the engine's write-path and read-path operations.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The runtime holds the four engine passes. Write path: raw documents run
//! through [`schema::validate_condition`], then [`graph::validate_graph`],
//! and only then may the host persist. Read path:
//! [`map_builder::build_dependency_map`] assembles the per-set dependency
//! index with soft-mode warnings, and [`evaluator::evaluate`] /
//! [`evaluator::resolve_visibility`] compute visibility per answer change.
//! Every pass is stateless; per-request caching is explicit via
//! [`snapshot::SetSnapshot`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod evaluator;
pub mod graph;
pub mod map_builder;
pub mod memory;
pub mod sanitize;
pub mod schema;
pub mod snapshot;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use evaluator::evaluate;
pub use evaluator::resolve_visibility;
pub use graph::GraphError;
pub use graph::GraphPolicy;
pub use graph::MAX_TRAVERSAL_DEPTH;
pub use graph::items_on_cycles;
pub use graph::validate_graph;
pub use graph::validate_graph_with_policy;
pub use map_builder::DependencyMap;
pub use map_builder::DependentEdge;
pub use map_builder::Warning;
pub use map_builder::WarningSeverity;
pub use map_builder::build_dependency_map;
pub use map_builder::build_from_snapshot;
pub use memory::InMemoryItemRepository;
pub use sanitize::sanitize_group;
pub use sanitize::sanitize_value;
pub use schema::SchemaError;
pub use schema::serialize_condition;
pub use schema::validate_condition;
pub use snapshot::SetSnapshot;
