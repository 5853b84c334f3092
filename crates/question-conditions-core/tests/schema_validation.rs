// crates/question-conditions-core/tests/schema_validation.rs
// ============================================================================
// Module: Schema Validation Tests
// Description: Validate condition document parsing, normalization, and caps.
// Purpose: Ensure untrusted documents normalize deterministically or fail cleanly.
// Dependencies: question-conditions-core, serde_json
// ============================================================================

//! Schema validator behavior tests: legacy aliases, sanitization, and errors.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    reason = "Test-only assertions and helpers are permitted."
)]

use question_conditions_core::Condition;
use question_conditions_core::ConditionOperator;
use question_conditions_core::GROUP_MAX_CHARS;
use question_conditions_core::ItemId;
use question_conditions_core::SchemaError;
use question_conditions_core::VALUES_MAX_ENTRIES;
use question_conditions_core::VALUE_MAX_CHARS;
use question_conditions_core::serialize_condition;
use question_conditions_core::validate_condition;
use serde_json::json;

#[test]
fn empty_object_and_null_normalize_to_empty_condition() {
    let from_object = validate_condition(&json!({})).expect("empty object validates");
    let from_null = validate_condition(&json!(null)).expect("null validates");
    assert_eq!(from_object, Condition::empty());
    assert_eq!(from_null, Condition::empty());
    assert_eq!(serialize_condition(&from_object), json!({}));
}

#[test]
fn full_document_round_trips() {
    let raw = json!({
        "dependsOn": { "itemId": 7, "operator": "EQUALS", "values": ["Yes"] },
        "showIf": false,
        "cascadeHide": true,
        "group": "labour_work"
    });
    let condition = validate_condition(&raw).expect("document validates");

    let depends_on = condition.depends_on.as_ref().expect("dependency present");
    assert_eq!(depends_on.item_id, ItemId::from_raw(7).expect("nonzero"));
    assert_eq!(depends_on.operator, ConditionOperator::Equals);
    assert_eq!(depends_on.values, vec!["Yes".to_owned()]);
    assert!(!condition.show_if);
    assert!(condition.cascade_hide);
    assert_eq!(condition.group.as_deref(), Some("labour_work"));

    let reparsed =
        validate_condition(&serialize_condition(&condition)).expect("round trip validates");
    assert_eq!(reparsed, condition);
}

#[test]
fn legacy_identifier_aliases_normalize_to_item_id() {
    for key in ["questionId", "questionSeqno"] {
        let raw = json!({
            "dependsOn": { key: 12, "operator": "IS_EMPTY" }
        });
        let condition = validate_condition(&raw).expect("legacy document validates");
        let depends_on = condition.depends_on.expect("dependency present");
        assert_eq!(depends_on.item_id, ItemId::from_raw(12).expect("nonzero"));
    }
}

#[test]
fn legacy_string_identifier_is_accepted() {
    let raw = json!({
        "dependsOn": { "itemId": "34", "operator": "IS_NOT_EMPTY" }
    });
    let condition = validate_condition(&raw).expect("string id validates");
    assert_eq!(
        condition.depends_on.expect("dependency present").item_id,
        ItemId::from_raw(34).expect("nonzero")
    );
}

#[test]
fn unknown_keys_are_tolerated_and_never_reemitted() {
    let raw = json!({
        "dependsOn": {
            "itemId": 3,
            "operator": "EQUALS",
            "values": ["Yes"],
            "colour": "red"
        },
        "legacyFlag": true
    });
    let condition = validate_condition(&raw).expect("document validates");
    let wire = serialize_condition(&condition);
    assert!(wire.get("legacyFlag").is_none());
    assert!(wire["dependsOn"].get("colour").is_none());
}

#[test]
fn unknown_operator_is_rejected() {
    let raw = json!({
        "dependsOn": { "itemId": 3, "operator": "MATCHES_REGEX", "values": ["x"] }
    });
    let error = validate_condition(&raw).expect_err("unknown operator rejected");
    assert_eq!(error, SchemaError::InvalidOperator { operator: "MATCHES_REGEX".to_owned() });
}

#[test]
fn value_requiring_operator_with_no_values_is_rejected() {
    for operator in ["EQUALS", "CONTAINS", "GREATER_THAN", "NOT_IN"] {
        let raw = json!({
            "dependsOn": { "itemId": 3, "operator": operator, "values": [] }
        });
        let error = validate_condition(&raw).expect_err("missing values rejected");
        assert!(matches!(error, SchemaError::ValuesRequired { .. }), "{operator}: {error:?}");
    }
}

#[test]
fn emptiness_operators_need_no_values() {
    for operator in ["IS_EMPTY", "IS_NOT_EMPTY"] {
        let raw = json!({
            "dependsOn": { "itemId": 3, "operator": operator }
        });
        let condition = validate_condition(&raw).expect("emptiness operator validates");
        assert!(condition.depends_on.expect("dependency present").values.is_empty());
    }
}

#[test]
fn markup_is_stripped_and_values_are_truncated() {
    let long_tail = "a".repeat(VALUE_MAX_CHARS + 50);
    let raw = json!({
        "dependsOn": {
            "itemId": 3,
            "operator": "EQUALS",
            "values": ["<script>alert(1)</script>Yes", long_tail]
        }
    });
    let condition = validate_condition(&raw).expect("document validates");
    let values = condition.depends_on.expect("dependency present").values;
    assert_eq!(values[0], "alert(1)Yes");
    assert_eq!(values[1].chars().count(), VALUE_MAX_CHARS);
}

#[test]
fn values_list_is_capped() {
    let entries: Vec<String> = (0 .. VALUES_MAX_ENTRIES + 10).map(|n| n.to_string()).collect();
    let raw = json!({
        "dependsOn": { "itemId": 3, "operator": "IN", "values": entries }
    });
    let condition = validate_condition(&raw).expect("document validates");
    assert_eq!(
        condition.depends_on.expect("dependency present").values.len(),
        VALUES_MAX_ENTRIES
    );
}

#[test]
fn numeric_values_keep_their_literal_text() {
    let raw = json!({
        "dependsOn": { "itemId": 3, "operator": "GREATER_THAN", "values": [40] }
    });
    let condition = validate_condition(&raw).expect("document validates");
    assert_eq!(condition.depends_on.expect("dependency present").values, vec!["40".to_owned()]);
}

#[test]
fn group_is_reduced_to_safe_characters() {
    let raw = json!({ "group": "labour work! #7" });
    let condition = validate_condition(&raw).expect("document validates");
    assert_eq!(condition.group.as_deref(), Some("labourwork7"));

    let oversized = json!({ "group": "g".repeat(GROUP_MAX_CHARS * 2) });
    let condition = validate_condition(&oversized).expect("document validates");
    assert_eq!(condition.group.expect("group present").len(), GROUP_MAX_CHARS);

    let hostile = json!({ "group": "<>!!" });
    let condition = validate_condition(&hostile).expect("document validates");
    assert_eq!(condition.group, None);
}

#[test]
fn show_and_cascade_flags_reset_without_a_dependency() {
    let raw = json!({ "showIf": false, "cascadeHide": true, "group": "ops" });
    let condition = validate_condition(&raw).expect("document validates");
    assert!(condition.show_if);
    assert!(!condition.cascade_hide);
    assert_eq!(condition.group.as_deref(), Some("ops"));
}

#[test]
fn malformed_shapes_are_rejected() {
    let cases = [
        json!("not an object"),
        json!({ "dependsOn": 5 }),
        json!({ "dependsOn": { "operator": "EQUALS", "values": ["x"] } }),
        json!({ "dependsOn": { "itemId": 0, "operator": "EQUALS", "values": ["x"] } }),
        json!({ "dependsOn": { "itemId": 3, "values": ["x"] } }),
        json!({ "dependsOn": { "itemId": 3, "operator": "EQUALS", "values": "x" } }),
        json!({ "dependsOn": { "itemId": 3, "operator": "EQUALS", "values": [true] } }),
        json!({
            "dependsOn": { "itemId": 3, "operator": "EQUALS", "values": ["x"] },
            "showIf": "yes"
        }),
        json!({ "group": 9 }),
    ];
    for raw in cases {
        let error = validate_condition(&raw).expect_err("malformed document rejected");
        assert!(matches!(error, SchemaError::MalformedInput { .. }), "{raw}: {error:?}");
    }
}
