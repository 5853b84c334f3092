// crates/question-conditions-core/src/core/operator.rs
// ============================================================================
// Module: Conditional Operator Table
// Description: Closed comparison-operator set and answer-type compatibility.
// Purpose: Define operator semantics classes for validation and evaluation.
// Dependencies: crate::core::answer, serde
// ============================================================================

//! ## Overview
//! The operator table is the closed set of comparisons a display condition
//! may use. Every operator is matched exhaustively by the evaluation engine;
//! there is no catch-all branch, so an operator outside this set cannot
//! silently evaluate to visible. Compatibility with answer types is advisory
//! guidance for authoring surfaces and is promoted to a hard write-path
//! error only when the host opts in (see `runtime::graph::GraphPolicy`).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::answer::AnswerType;

// ============================================================================
// SECTION: Operator Set
// ============================================================================

/// Comparison operator attached to a display condition.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
/// - Wire names are SCREAMING_SNAKE_CASE (`"GREATER_THAN_OR_EQUAL"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionOperator {
    /// Answer is a member of the condition values.
    Equals,
    /// Answer is not a member of the condition values.
    NotEquals,
    /// Answer text contains any condition value as a substring.
    Contains,
    /// Negation of `Contains`.
    NotContains,
    /// Set membership; same semantics as `Equals`.
    In,
    /// Negation of `In`.
    NotIn,
    /// Numeric comparison against the first condition value.
    GreaterThan,
    /// Numeric comparison against the first condition value.
    GreaterThanOrEqual,
    /// Numeric comparison against the first condition value.
    LessThan,
    /// Numeric comparison against the first condition value.
    LessThanOrEqual,
    /// Answer is absent, null, or the empty string.
    IsEmpty,
    /// Negation of `IsEmpty`.
    IsNotEmpty,
}

/// All operators in wire order, for iteration in tests and authoring UIs.
pub const ALL_OPERATORS: [ConditionOperator; 12] = [
    ConditionOperator::Equals,
    ConditionOperator::NotEquals,
    ConditionOperator::Contains,
    ConditionOperator::NotContains,
    ConditionOperator::In,
    ConditionOperator::NotIn,
    ConditionOperator::GreaterThan,
    ConditionOperator::GreaterThanOrEqual,
    ConditionOperator::LessThan,
    ConditionOperator::LessThanOrEqual,
    ConditionOperator::IsEmpty,
    ConditionOperator::IsNotEmpty,
];

impl ConditionOperator {
    /// Returns the stable wire name for the operator.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Equals => "EQUALS",
            Self::NotEquals => "NOT_EQUALS",
            Self::Contains => "CONTAINS",
            Self::NotContains => "NOT_CONTAINS",
            Self::In => "IN",
            Self::NotIn => "NOT_IN",
            Self::GreaterThan => "GREATER_THAN",
            Self::GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
            Self::LessThan => "LESS_THAN",
            Self::LessThanOrEqual => "LESS_THAN_OR_EQUAL",
            Self::IsEmpty => "IS_EMPTY",
            Self::IsNotEmpty => "IS_NOT_EMPTY",
        }
    }

    /// Parses a wire name into an operator (returns `None` when unknown).
    #[must_use]
    pub fn from_wire_name(name: &str) -> Option<Self> {
        ALL_OPERATORS.into_iter().find(|operator| operator.wire_name() == name)
    }

    /// Returns true for the emptiness checks (`IS_EMPTY` / `IS_NOT_EMPTY`).
    #[must_use]
    pub const fn is_emptiness_check(self) -> bool {
        matches!(self, Self::IsEmpty | Self::IsNotEmpty)
    }

    /// Returns true when the operator requires a non-empty value list.
    #[must_use]
    pub const fn requires_values(self) -> bool {
        !self.is_emptiness_check()
    }

    /// Returns the compatibility classes the operator belongs to.
    #[must_use]
    pub const fn classes(self) -> &'static [OperatorClass] {
        match self {
            Self::Equals | Self::NotEquals | Self::IsEmpty | Self::IsNotEmpty => {
                &[OperatorClass::Numeric, OperatorClass::Text, OperatorClass::Choice]
            }
            Self::Contains | Self::NotContains => &[OperatorClass::Text],
            Self::In | Self::NotIn => &[OperatorClass::Choice],
            Self::GreaterThan
            | Self::GreaterThanOrEqual
            | Self::LessThan
            | Self::LessThanOrEqual => &[OperatorClass::Numeric],
        }
    }

    /// Returns true when the operator is meaningful for the answer type.
    ///
    /// Emptiness checks are compatible with every answer type. Answer types
    /// with no operator class (signatures, GPS fixes, informational items)
    /// support only emptiness checks.
    #[must_use]
    pub fn is_compatible(self, answer_type: AnswerType) -> bool {
        if self.is_emptiness_check() {
            return true;
        }
        let Some(class) = operator_class_for(answer_type) else {
            return false;
        };
        self.classes().contains(&class)
    }
}

impl fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

// ============================================================================
// SECTION: Compatibility Classes
// ============================================================================

/// Operator compatibility class keyed to answer types.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorClass {
    /// Ordered values: numeric entries, ratings, meter readings, dates, times.
    Numeric,
    /// Free-text values.
    Text,
    /// Option-backed values.
    Choice,
}

/// Maps an answer type to its operator compatibility class.
///
/// Returns `None` for answer types that carry no comparable value
/// (signatures, GPS fixes, informational items).
#[must_use]
pub const fn operator_class_for(answer_type: AnswerType) -> Option<OperatorClass> {
    match answer_type {
        AnswerType::Numeric
        | AnswerType::Rating
        | AnswerType::MeterReading
        | AnswerType::Date
        | AnswerType::Time => Some(OperatorClass::Numeric),
        AnswerType::SingleLineText | AnswerType::MultiLineText | AnswerType::Email => {
            Some(OperatorClass::Text)
        }
        AnswerType::Checkbox
        | AnswerType::Dropdown
        | AnswerType::MultiSelect
        | AnswerType::PeopleList
        | AnswerType::SiteList => Some(OperatorClass::Choice),
        AnswerType::Signature | AnswerType::Gps | AnswerType::None => None,
    }
}
