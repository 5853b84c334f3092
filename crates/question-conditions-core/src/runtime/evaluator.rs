// crates/question-conditions-core/src/runtime/evaluator.rs
// ============================================================================
// Module: Condition Evaluation Engine
// Description: Computes item visibility from conditions and known answers.
// Purpose: Decide show/hide per item, including single-pass cascade hiding.
// Dependencies: crate::core, crate::runtime::snapshot, bigdecimal, time
// ============================================================================

//! ## Overview
//! Evaluation is total: every combination of operator and answer value
//! produces a boolean, never a panic or an error. Malformed operands (a
//! non-numeric answer under an ordering operator, a multi-select answer
//! where text is expected) evaluate to `false` before the `showIf`
//! inversion is applied. Numeric ordering is decimal-aware; operands that
//! are not decimals fall back to temporal comparison for date and
//! time-of-day answers.
//!
//! Single-condition evaluation consults only the answer map. Whole-set
//! resolution with cascade hiding runs over a [`SetSnapshot`] in ascending
//! seqno order, which is sufficient because every dependency precedes its
//! dependents.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use time::Date;
use time::OffsetDateTime;
use time::Time;
use time::format_description::well_known::Rfc3339;

use crate::core::AnswerMap;
use crate::core::AnswerValue;
use crate::core::Condition;
use crate::core::ConditionOperator;
use crate::core::ItemId;
use crate::runtime::snapshot::SetSnapshot;

// ============================================================================
// SECTION: Condition Evaluation
// ============================================================================

/// Evaluates a condition against the caller's known answers.
///
/// Returns the raw visibility of the owning item: `true` means visible. An
/// item without a dependency is always visible. A missing answer map entry
/// is treated as an empty value, not an error.
#[must_use]
pub fn evaluate(condition: &Condition, answers: &AnswerMap) -> bool {
    let Some(depends_on) = &condition.depends_on else {
        return true;
    };
    let missing = AnswerValue::Empty;
    let answer = answers.get(&depends_on.item_id).unwrap_or(&missing);
    let matched = evaluate_operator(depends_on.operator, answer, &depends_on.values);
    if condition.show_if { matched } else { !matched }
}

/// Evaluates one operator against an answer value.
fn evaluate_operator(
    operator: ConditionOperator,
    answer: &AnswerValue,
    values: &[String],
) -> bool {
    match operator {
        ConditionOperator::Equals | ConditionOperator::In => is_member(answer, values),
        ConditionOperator::NotEquals | ConditionOperator::NotIn => !is_member(answer, values),
        ConditionOperator::Contains => contains_any(answer, values),
        ConditionOperator::NotContains => !contains_any(answer, values),
        ConditionOperator::GreaterThan => {
            ordering_matches(answer, values, Ordering::is_gt)
        }
        ConditionOperator::GreaterThanOrEqual => {
            ordering_matches(answer, values, Ordering::is_ge)
        }
        ConditionOperator::LessThan => ordering_matches(answer, values, Ordering::is_lt),
        ConditionOperator::LessThanOrEqual => {
            ordering_matches(answer, values, Ordering::is_le)
        }
        ConditionOperator::IsEmpty => answer.is_empty_value(),
        ConditionOperator::IsNotEmpty => !answer.is_empty_value(),
    }
}

/// Membership check for `EQUALS` / `IN` semantics.
///
/// A multi-select answer is a member when any of its selections matches.
fn is_member(answer: &AnswerValue, values: &[String]) -> bool {
    match answer {
        AnswerValue::Empty => false,
        AnswerValue::Text(text) => values.iter().any(|value| value == text),
        AnswerValue::Multi(entries) => {
            entries.iter().any(|entry| values.iter().any(|value| value == entry))
        }
    }
}

/// Substring check for `CONTAINS` semantics; a missing value never matches.
fn contains_any(answer: &AnswerValue, values: &[String]) -> bool {
    match answer {
        AnswerValue::Empty => false,
        AnswerValue::Text(text) => values.iter().any(|needle| text.contains(needle.as_str())),
        AnswerValue::Multi(entries) => entries
            .iter()
            .any(|entry| values.iter().any(|needle| entry.contains(needle.as_str()))),
    }
}

/// Ordering check against the first comparison value.
///
/// Only single text answers order; multi-select and empty answers yield
/// `false`, as do operand pairs that parse as neither decimals nor temporal
/// values.
fn ordering_matches(
    answer: &AnswerValue,
    values: &[String],
    accept: impl Fn(Ordering) -> bool,
) -> bool {
    let AnswerValue::Text(text) = answer else {
        return false;
    };
    let Some(target) = values.first() else {
        return false;
    };
    operand_cmp(text, target).is_some_and(accept)
}

// ============================================================================
// SECTION: Operand Comparison
// ============================================================================

/// Orders two operand strings: decimal-aware first, temporal fallback.
fn operand_cmp(left: &str, right: &str) -> Option<Ordering> {
    if let (Ok(left), Ok(right)) =
        (BigDecimal::from_str(left.trim()), BigDecimal::from_str(right.trim()))
    {
        return Some(left.cmp(&right));
    }
    temporal_cmp(left.trim(), right.trim())
}

/// Compares RFC3339 date-times, date-only values, or times of day.
fn temporal_cmp(left: &str, right: &str) -> Option<Ordering> {
    if let (Ok(left), Ok(right)) =
        (OffsetDateTime::parse(left, &Rfc3339), OffsetDateTime::parse(right, &Rfc3339))
    {
        return Some(left.cmp(&right));
    }
    if let (Some(left), Some(right)) = (parse_date(left), parse_date(right)) {
        return Some(left.cmp(&right));
    }
    let left = parse_time_of_day(left)?;
    let right = parse_time_of_day(right)?;
    Some(left.cmp(&right))
}

/// Parses a date-only value (YYYY-MM-DD).
fn parse_date(value: &str) -> Option<Date> {
    let mut parts = value.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let month = time::Month::try_from(month).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

/// Parses a time-of-day value (HH:MM or HH:MM:SS).
fn parse_time_of_day(value: &str) -> Option<Time> {
    let mut parts = value.split(':');
    let hour: u8 = parts.next()?.parse().ok()?;
    let minute: u8 = parts.next()?.parse().ok()?;
    let second: u8 = match parts.next() {
        Some(raw) => raw.parse().ok()?,
        None => 0,
    };
    if parts.next().is_some() {
        return None;
    }
    Time::from_hms(hour, minute, second).ok()
}

// ============================================================================
// SECTION: Set Visibility Resolution
// ============================================================================

/// Resolves visibility for every item of a question-set in one pass.
///
/// Items are processed in ascending seqno order. An item is visible when it
/// has not been force-hidden by a cascading dependency and its own condition
/// evaluates visible. When an item ends up hidden for either reason and its
/// condition sets `cascadeHide`, all of its dependents are force-hidden;
/// transitive cascades compose because dependents always come later in the
/// pass.
#[must_use]
pub fn resolve_visibility(snapshot: &SetSnapshot, answers: &AnswerMap) -> BTreeMap<ItemId, bool> {
    let mut visibility = BTreeMap::new();
    let mut forced_hidden: BTreeSet<ItemId> = BTreeSet::new();

    for item in snapshot.items() {
        let visible =
            !forced_hidden.contains(&item.id) && evaluate(&item.condition, answers);
        if !visible && item.condition.cascade_hide {
            for dependent in snapshot.dependents_of(item.id) {
                forced_hidden.insert(*dependent);
            }
        }
        visibility.insert(item.id, visible);
    }

    visibility
}
