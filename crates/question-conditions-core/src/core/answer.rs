// crates/question-conditions-core/src/core/answer.rs
// ============================================================================
// Module: Answer Types and Values
// Description: Question answer kinds and caller-supplied answer values.
// Purpose: Classify answers for operator compatibility and evaluation.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! Answers are supplied to the engine by the caller; the engine never stores
//! or fetches them. [`AnswerType`] is the closed set of question kinds the
//! facility-management backend supports and drives operator-compatibility
//! guidance. [`AnswerValue`] is the wire shape of one known answer: a single
//! string, a list of strings, or nothing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::ItemId;

// ============================================================================
// SECTION: Answer Types
// ============================================================================

/// Question answer kind.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerType {
    /// Single-line free text.
    SingleLineText,
    /// Multi-line free text.
    MultiLineText,
    /// Email address text.
    Email,
    /// Numeric entry.
    Numeric,
    /// Rating scale entry.
    Rating,
    /// Meter reading entry.
    MeterReading,
    /// Checkbox selection.
    Checkbox,
    /// Single-choice dropdown.
    Dropdown,
    /// Multiple-choice selection.
    MultiSelect,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Drawn signature.
    Signature,
    /// People picker.
    PeopleList,
    /// Site picker.
    SiteList,
    /// GPS coordinates.
    Gps,
    /// Informational item with no answer.
    None,
}

// ============================================================================
// SECTION: Answer Values
// ============================================================================

/// One caller-supplied answer value.
///
/// # Invariants
/// - `Empty` is equivalent to a missing map entry; evaluation treats both as
///   "not answered", never as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// No answer (wire `null`).
    #[default]
    Empty,
    /// Single text answer.
    Text(String),
    /// Multi-select answer.
    Multi(Vec<String>),
}

impl AnswerValue {
    /// Returns true when the value counts as empty for `IS_EMPTY` semantics.
    #[must_use]
    pub fn is_empty_value(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.is_empty(),
            Self::Multi(entries) => entries.is_empty(),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multi(values)
    }
}

/// Caller-supplied map of already-known answers keyed by item.
///
/// A missing entry is equivalent to [`AnswerValue::Empty`].
pub type AnswerMap = BTreeMap<ItemId, AnswerValue>;
