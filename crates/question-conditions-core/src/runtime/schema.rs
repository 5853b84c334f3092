// crates/question-conditions-core/src/runtime/schema.rs
// ============================================================================
// Module: Condition Schema Validation
// Description: Parses and sanitizes raw condition documents.
// Purpose: Turn untrusted structured input into validated conditions.
// Dependencies: crate::core, crate::runtime::sanitize, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The schema validator is the single entry point through which raw
//! condition documents become [`Condition`] values. It normalizes legacy key
//! names, sanitizes every string, enforces the closed operator set, and
//! requires comparison values for all operators except the emptiness checks.
//! Unknown keys are tolerated for backward compatibility but never re-emitted.
//!
//! This pass is a pure function of its input: referential and ordering
//! checks against the question-set live in [`crate::runtime::graph`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

use crate::core::Condition;
use crate::core::ConditionOperator;
use crate::core::DependsOn;
use crate::core::ItemId;
use crate::core::VALUES_MAX_ENTRIES;
use crate::runtime::sanitize::sanitize_group;
use crate::runtime::sanitize::sanitize_value;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Schema validation failures for raw condition documents.
///
/// # Invariants
/// - Variants are stable for programmatic handling and field-level messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Operator is outside the closed operator table.
    #[error("unknown conditional operator: {operator}")]
    InvalidOperator {
        /// The rejected operator text.
        operator: String,
    },
    /// Operator requires comparison values but none were supplied.
    #[error("operator {operator} requires at least one comparison value")]
    ValuesRequired {
        /// The operator missing its values.
        operator: ConditionOperator,
    },
    /// Document shape or field type is invalid.
    #[error("malformed condition document: {detail}")]
    MalformedInput {
        /// Description of the offending field or shape.
        detail: String,
    },
}

// ============================================================================
// SECTION: Legacy Key Names
// ============================================================================

/// Accepted spellings of the dependency identifier key, current name first.
///
/// Both legacy aliases historically stored the cross-set-unique item id
/// under ambiguous names; this list is the single place the ambiguity is
/// resolved. Downstream components only ever see the normalized `itemId`.
const ITEM_ID_KEYS: [&str; 3] = ["itemId", "questionId", "questionSeqno"];

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates a raw condition document into a [`Condition`].
///
/// `null` and the empty object both normalize to the empty condition.
///
/// # Errors
///
/// Returns [`SchemaError`] when the document shape is invalid, the operator
/// is unknown, or a value-requiring operator has no comparison values.
pub fn validate_condition(raw: &Value) -> Result<Condition, SchemaError> {
    let document = match raw {
        Value::Null => return Ok(Condition::empty()),
        Value::Object(document) => document,
        other => {
            return Err(SchemaError::MalformedInput {
                detail: format!("condition document must be a JSON object, got {}", kind_of(other)),
            });
        }
    };

    let depends_on = match document.get("dependsOn") {
        None | Some(Value::Null) => None,
        Some(Value::Object(dependency)) => Some(parse_depends_on(dependency)?),
        Some(other) => {
            return Err(SchemaError::MalformedInput {
                detail: format!("dependsOn must be an object or null, got {}", kind_of(other)),
            });
        }
    };

    let group = match document.get("group") {
        None | Some(Value::Null) => None,
        Some(Value::String(raw_group)) => sanitize_group(raw_group),
        Some(other) => {
            return Err(SchemaError::MalformedInput {
                detail: format!("group must be a string or null, got {}", kind_of(other)),
            });
        }
    };

    // showIf and cascadeHide are meaningless without a dependency; they
    // normalize to their defaults when dependsOn is absent.
    let (show_if, cascade_hide) = if depends_on.is_some() {
        (
            parse_bool_field(document, "showIf", true)?,
            parse_bool_field(document, "cascadeHide", false)?,
        )
    } else {
        (true, false)
    };

    Ok(Condition { depends_on, show_if, cascade_hide, group })
}

/// Serializes a condition into its canonical wire form.
///
/// Default field values are skipped, so the empty condition serializes as
/// `{}`. The output contains only current key names, never legacy aliases.
#[must_use]
pub fn serialize_condition(condition: &Condition) -> Value {
    let mut document = Map::new();
    if let Some(depends_on) = &condition.depends_on {
        let mut dependency = Map::new();
        dependency.insert("itemId".to_owned(), Value::from(depends_on.item_id.get()));
        dependency
            .insert("operator".to_owned(), Value::from(depends_on.operator.wire_name()));
        if !depends_on.values.is_empty() {
            dependency.insert(
                "values".to_owned(),
                Value::Array(depends_on.values.iter().cloned().map(Value::from).collect()),
            );
        }
        document.insert("dependsOn".to_owned(), Value::Object(dependency));
    }
    if !condition.show_if {
        document.insert("showIf".to_owned(), Value::from(false));
    }
    if condition.cascade_hide {
        document.insert("cascadeHide".to_owned(), Value::from(true));
    }
    if let Some(group) = &condition.group {
        document.insert("group".to_owned(), Value::from(group.clone()));
    }
    Value::Object(document)
}

// ============================================================================
// SECTION: Field Parsing
// ============================================================================

/// Parses the `dependsOn` object into a [`DependsOn`].
fn parse_depends_on(dependency: &Map<String, Value>) -> Result<DependsOn, SchemaError> {
    let item_id = parse_item_id(dependency)?;
    let operator = parse_operator(dependency)?;
    let values = parse_values(dependency)?;

    if operator.requires_values() && values.is_empty() {
        return Err(SchemaError::ValuesRequired { operator });
    }

    Ok(DependsOn { item_id, operator, values })
}

/// Resolves the dependency identifier from the current or legacy key names.
fn parse_item_id(dependency: &Map<String, Value>) -> Result<ItemId, SchemaError> {
    let (key, value) = ITEM_ID_KEYS
        .iter()
        .find_map(|key| dependency.get(*key).map(|value| (*key, value)))
        .ok_or_else(|| SchemaError::MalformedInput {
            detail: "dependsOn is missing the itemId field".to_owned(),
        })?;

    let raw = match value {
        Value::Number(number) => number.as_u64(),
        // Legacy documents produced by older mobile clients carry the
        // identifier as a decimal string.
        Value::String(text) => text.parse::<u64>().ok(),
        _ => None,
    };
    raw.and_then(ItemId::from_raw).ok_or_else(|| SchemaError::MalformedInput {
        detail: format!("{key} must be a positive integer identifier"),
    })
}

/// Parses and checks the operator against the closed operator table.
fn parse_operator(dependency: &Map<String, Value>) -> Result<ConditionOperator, SchemaError> {
    let value = dependency.get("operator").ok_or_else(|| SchemaError::MalformedInput {
        detail: "dependsOn is missing the operator field".to_owned(),
    })?;
    let Value::String(name) = value else {
        return Err(SchemaError::MalformedInput {
            detail: format!("operator must be a string, got {}", kind_of(value)),
        });
    };
    ConditionOperator::from_wire_name(name)
        .ok_or_else(|| SchemaError::InvalidOperator { operator: name.clone() })
}

/// Parses and sanitizes the comparison values list.
fn parse_values(dependency: &Map<String, Value>) -> Result<Vec<String>, SchemaError> {
    let entries = match dependency.get("values") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            return Err(SchemaError::MalformedInput {
                detail: format!("values must be an array, got {}", kind_of(other)),
            });
        }
    };

    entries
        .iter()
        .take(VALUES_MAX_ENTRIES)
        .map(|entry| match entry {
            Value::String(text) => Ok(sanitize_value(text)),
            // Numeric comparison values arrive as JSON numbers from some
            // authoring clients; keep their literal text.
            Value::Number(number) => Ok(number.to_string()),
            other => Err(SchemaError::MalformedInput {
                detail: format!("values entries must be strings, got {}", kind_of(other)),
            }),
        })
        .collect()
}

/// Parses an optional boolean field with a default.
fn parse_bool_field(
    document: &Map<String, Value>,
    key: &str,
    default: bool,
) -> Result<bool, SchemaError> {
    match document.get(key) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(other) => Err(SchemaError::MalformedInput {
            detail: format!("{key} must be a boolean, got {}", kind_of(other)),
        }),
    }
}

/// Returns a short JSON type name for error messages.
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
