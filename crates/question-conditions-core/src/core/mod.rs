// crates/question-conditions-core/src/core/mod.rs
// ============================================================================
// Module: Question Conditions Core Types
// Description: Value objects shared by every engine pass.
// Purpose: Define identifiers, answers, operators, conditions, and items.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Leaf value objects of the conditional display engine. Everything here is
//! plain data with documented invariants; validation and evaluation live in
//! [`crate::runtime`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod answer;
pub mod condition;
pub mod identifiers;
pub mod item;
pub mod operator;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use answer::AnswerMap;
pub use answer::AnswerType;
pub use answer::AnswerValue;
pub use condition::Condition;
pub use condition::DependsOn;
pub use condition::GROUP_MAX_CHARS;
pub use condition::VALUES_MAX_ENTRIES;
pub use condition::VALUE_MAX_CHARS;
pub use identifiers::ItemId;
pub use identifiers::Seqno;
pub use identifiers::SetId;
pub use item::ConditionOwner;
pub use item::Item;
pub use operator::ALL_OPERATORS;
pub use operator::ConditionOperator;
pub use operator::OperatorClass;
pub use operator::operator_class_for;
