// crates/question-conditions-core/tests/evaluator_unit.rs
// ============================================================================
// Module: Evaluator Unit Tests
// Description: Validate operator semantics and showIf polarity.
// Purpose: Ensure visibility decisions match the documented contract.
// Dependencies: question-conditions-core
// ============================================================================

//! Evaluation engine behavior tests across the full operator table.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only assertions and helpers are permitted."
)]

use question_conditions_core::AnswerMap;
use question_conditions_core::AnswerValue;
use question_conditions_core::Condition;
use question_conditions_core::ConditionOperator;
use question_conditions_core::DependsOn;
use question_conditions_core::ItemId;
use question_conditions_core::evaluate;

/// Identifier of the dependency question used throughout.
fn q1() -> ItemId {
    ItemId::from_raw(1).expect("nonzero item id")
}

/// Builds a condition depending on Q1.
fn condition(operator: ConditionOperator, values: &[&str], show_if: bool) -> Condition {
    Condition {
        depends_on: Some(DependsOn {
            item_id: q1(),
            operator,
            values: values.iter().map(|value| (*value).to_owned()).collect(),
        }),
        show_if,
        cascade_hide: false,
        group: None,
    }
}

/// Builds an answer map holding one answer for Q1.
fn answered(value: AnswerValue) -> AnswerMap {
    let mut answers = AnswerMap::new();
    answers.insert(q1(), value);
    answers
}

#[test]
fn no_dependency_is_always_visible() {
    assert!(evaluate(&Condition::empty(), &AnswerMap::new()));
}

#[test]
fn equals_matches_membership() {
    let condition = condition(ConditionOperator::Equals, &["Yes"], true);
    assert!(evaluate(&condition, &answered(AnswerValue::from("Yes"))));
    assert!(!evaluate(&condition, &answered(AnswerValue::from("No"))));
    assert!(!evaluate(&condition, &AnswerMap::new()));
}

#[test]
fn show_if_false_inverts_the_result() {
    let condition = condition(ConditionOperator::Equals, &["Yes"], false);
    assert!(!evaluate(&condition, &answered(AnswerValue::from("Yes"))));
    assert!(evaluate(&condition, &answered(AnswerValue::from("No"))));
}

#[test]
fn multi_select_answers_match_on_any_selection() {
    let condition = condition(ConditionOperator::In, &["Roof", "Basement"], true);
    let answer = AnswerValue::from(vec!["Lobby".to_owned(), "Roof".to_owned()]);
    assert!(evaluate(&condition, &answered(answer)));

    let no_overlap = AnswerValue::from(vec!["Lobby".to_owned()]);
    assert!(!evaluate(&condition, &answered(no_overlap)));
}

#[test]
fn not_equals_holds_for_missing_answers() {
    let condition = condition(ConditionOperator::NotEquals, &["Yes"], true);
    assert!(evaluate(&condition, &AnswerMap::new()));
    assert!(evaluate(&condition, &answered(AnswerValue::from("No"))));
    assert!(!evaluate(&condition, &answered(AnswerValue::from("Yes"))));
}

#[test]
fn contains_is_substring_on_any_value() {
    let condition = condition(ConditionOperator::Contains, &["leak", "rust"], true);
    assert!(evaluate(&condition, &answered(AnswerValue::from("water leak near pump"))));
    assert!(!evaluate(&condition, &answered(AnswerValue::from("all clear"))));
    // Missing value never contains anything.
    assert!(!evaluate(&condition, &AnswerMap::new()));

    let negated = condition_clone_negate(&condition);
    assert!(evaluate(&negated, &AnswerMap::new()));
}

/// Clones a condition, swapping `CONTAINS` for `NOT_CONTAINS`.
fn condition_clone_negate(original: &Condition) -> Condition {
    let mut negated = original.clone();
    if let Some(depends_on) = &mut negated.depends_on {
        depends_on.operator = ConditionOperator::NotContains;
    }
    negated
}

#[test]
fn ordering_operators_compare_decimals() {
    let condition = condition(ConditionOperator::GreaterThan, &["40"], true);
    assert!(evaluate(&condition, &answered(AnswerValue::from("40.5"))));
    assert!(!evaluate(&condition, &answered(AnswerValue::from("40"))));
    assert!(!evaluate(&condition, &answered(AnswerValue::from("39.99"))));

    let gte = condition_with(ConditionOperator::GreaterThanOrEqual, &["40"]);
    assert!(evaluate(&gte, &answered(AnswerValue::from("40.0"))));

    let lt = condition_with(ConditionOperator::LessThan, &["-1.5"]);
    assert!(evaluate(&lt, &answered(AnswerValue::from("-2"))));

    let lte = condition_with(ConditionOperator::LessThanOrEqual, &["100"]);
    assert!(evaluate(&lte, &answered(AnswerValue::from("100"))));
}

/// Builds a show-if condition on Q1 with the given operator and values.
fn condition_with(operator: ConditionOperator, values: &[&str]) -> Condition {
    condition(operator, values, true)
}

#[test]
fn ordering_operators_fail_closed_on_malformed_operands() {
    let condition = condition(ConditionOperator::GreaterThan, &["40"], true);
    assert!(!evaluate(&condition, &answered(AnswerValue::from("not a number"))));
    assert!(!evaluate(&condition, &AnswerMap::new()));
    assert!(!evaluate(&condition, &answered(AnswerValue::from(vec!["41".to_owned()]))));

    let malformed_target = condition_with(ConditionOperator::LessThan, &["forty"]);
    assert!(!evaluate(&malformed_target, &answered(AnswerValue::from("39"))));

    let no_target = condition_with(ConditionOperator::LessThan, &[]);
    assert!(!evaluate(&no_target, &answered(AnswerValue::from("39"))));
}

#[test]
fn ordering_operators_compare_dates_and_times() {
    let after = condition_with(ConditionOperator::GreaterThan, &["2026-01-15"]);
    assert!(evaluate(&after, &answered(AnswerValue::from("2026-02-01"))));
    assert!(!evaluate(&after, &answered(AnswerValue::from("2025-12-31"))));

    let before_noon = condition_with(ConditionOperator::LessThan, &["12:00"]);
    assert!(evaluate(&before_noon, &answered(AnswerValue::from("08:30"))));
    assert!(!evaluate(&before_noon, &answered(AnswerValue::from("14:15:30"))));
}

#[test]
fn emptiness_checks_cover_absent_null_and_blank() {
    let is_empty = condition_with(ConditionOperator::IsEmpty, &[]);
    assert!(evaluate(&is_empty, &AnswerMap::new()));
    assert!(evaluate(&is_empty, &answered(AnswerValue::Empty)));
    assert!(evaluate(&is_empty, &answered(AnswerValue::from(""))));
    assert!(evaluate(&is_empty, &answered(AnswerValue::Multi(Vec::new()))));
    assert!(!evaluate(&is_empty, &answered(AnswerValue::from("x"))));

    let is_not_empty = condition_with(ConditionOperator::IsNotEmpty, &[]);
    assert!(!evaluate(&is_not_empty, &AnswerMap::new()));
    assert!(evaluate(&is_not_empty, &answered(AnswerValue::from("x"))));
}
