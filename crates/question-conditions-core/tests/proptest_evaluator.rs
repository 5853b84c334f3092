// crates/question-conditions-core/tests/proptest_evaluator.rs
// ============================================================================
// Module: Evaluator Property-Based Tests
// Description: Property tests for evaluation totality and polarity.
// Purpose: Detect panics and invariants across wide input ranges.
// ============================================================================

//! Property-based tests for evaluation engine invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use proptest::prelude::*;
use question_conditions_core::ALL_OPERATORS;
use question_conditions_core::AnswerMap;
use question_conditions_core::AnswerValue;
use question_conditions_core::Condition;
use question_conditions_core::ConditionOperator;
use question_conditions_core::DependsOn;
use question_conditions_core::ItemId;
use question_conditions_core::evaluate;

/// Identifier of the dependency question used throughout.
fn dependency_id() -> ItemId {
    ItemId::from_raw(1).expect("nonzero item id")
}

/// Builds a condition on the fixed dependency.
fn condition(
    operator: ConditionOperator,
    values: Vec<String>,
    show_if: bool,
) -> Condition {
    Condition {
        depends_on: Some(DependsOn { item_id: dependency_id(), operator, values }),
        show_if,
        cascade_hide: false,
        group: None,
    }
}

/// Strategy over arbitrary answer values, including malformed shapes.
fn answer_value_strategy() -> impl Strategy<Value = AnswerValue> {
    prop_oneof![
        Just(AnswerValue::Empty),
        ".*".prop_map(AnswerValue::Text),
        prop::collection::vec(".*", 0 .. 4).prop_map(AnswerValue::Multi),
    ]
}

proptest! {
    #[test]
    fn evaluation_is_total_for_every_operator(
        answer in answer_value_strategy(),
        values in prop::collection::vec(".*", 0 .. 4),
        show_if in any::<bool>(),
        answered in any::<bool>(),
    ) {
        let mut answers = AnswerMap::new();
        if answered {
            answers.insert(dependency_id(), answer);
        }
        for operator in ALL_OPERATORS {
            let _ = evaluate(&condition(operator, values.clone(), show_if), &answers);
        }
    }

    #[test]
    fn show_if_false_is_exact_inversion(
        answer in answer_value_strategy(),
        values in prop::collection::vec(".*", 0 .. 4),
    ) {
        let mut answers = AnswerMap::new();
        answers.insert(dependency_id(), answer);
        for operator in ALL_OPERATORS {
            let shown = evaluate(&condition(operator, values.clone(), true), &answers);
            let inverted = evaluate(&condition(operator, values.clone(), false), &answers);
            prop_assert_eq!(shown, !inverted);
        }
    }

    #[test]
    fn missing_answer_equals_explicit_empty(
        values in prop::collection::vec(".*", 0 .. 4),
        show_if in any::<bool>(),
    ) {
        let missing = AnswerMap::new();
        let mut explicit = AnswerMap::new();
        explicit.insert(dependency_id(), AnswerValue::Empty);
        for operator in ALL_OPERATORS {
            let built = condition(operator, values.clone(), show_if);
            prop_assert_eq!(evaluate(&built, &missing), evaluate(&built, &explicit));
        }
    }

    #[test]
    fn negated_operators_mirror_their_positives(
        answer in answer_value_strategy(),
        values in prop::collection::vec(".*", 1 .. 4),
    ) {
        let mut answers = AnswerMap::new();
        answers.insert(dependency_id(), answer);
        let pairs = [
            (ConditionOperator::Equals, ConditionOperator::NotEquals),
            (ConditionOperator::In, ConditionOperator::NotIn),
            (ConditionOperator::Contains, ConditionOperator::NotContains),
            (ConditionOperator::IsEmpty, ConditionOperator::IsNotEmpty),
        ];
        for (positive, negative) in pairs {
            let positive_result =
                evaluate(&condition(positive, values.clone(), true), &answers);
            let negative_result =
                evaluate(&condition(negative, values.clone(), true), &answers);
            prop_assert_eq!(positive_result, !negative_result);
        }
    }

    #[test]
    fn numeric_ordering_matches_integer_ordering(a in any::<i32>(), b in any::<i32>()) {
        let mut answers = AnswerMap::new();
        answers.insert(dependency_id(), AnswerValue::Text(a.to_string()));
        let values = vec![b.to_string()];

        let gt = evaluate(
            &condition(ConditionOperator::GreaterThan, values.clone(), true),
            &answers,
        );
        let lt = evaluate(
            &condition(ConditionOperator::LessThan, values.clone(), true),
            &answers,
        );
        let gte = evaluate(
            &condition(ConditionOperator::GreaterThanOrEqual, values.clone(), true),
            &answers,
        );
        let lte = evaluate(
            &condition(ConditionOperator::LessThanOrEqual, values, true),
            &answers,
        );

        prop_assert_eq!(gt, a > b);
        prop_assert_eq!(lt, a < b);
        prop_assert_eq!(gte, a >= b);
        prop_assert_eq!(lte, a <= b);
    }
}
