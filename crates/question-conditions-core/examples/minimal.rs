// crates/question-conditions-core/examples/minimal.rs
// ============================================================================
// Module: Question Conditions Minimal Example
// Description: Minimal write-path and read-path flow using the in-memory repository.
// Purpose: Demonstrate condition validation, map building, and visibility resolution.
// Dependencies: question-conditions-core
// ============================================================================

//! ## Overview
//! Authors a small question-set, validates and persists a display condition,
//! builds the dependency map, and resolves visibility for a set of answers.
//! This example is backend-agnostic and suitable for quick verification.

#![allow(
    clippy::print_stdout,
    clippy::use_debug,
    reason = "Example output is printed for the reader."
)]

use question_conditions_core::AnswerMap;
use question_conditions_core::AnswerType;
use question_conditions_core::AnswerValue;
use question_conditions_core::Condition;
use question_conditions_core::InMemoryItemRepository;
use question_conditions_core::Item;
use question_conditions_core::ItemId;
use question_conditions_core::Seqno;
use question_conditions_core::SetId;
use question_conditions_core::SetSnapshot;
use question_conditions_core::build_dependency_map;
use question_conditions_core::resolve_visibility;
use question_conditions_core::validate_condition;
use question_conditions_core::validate_graph;
use serde_json::json;

/// Error type for example preconditions.
#[derive(Debug)]
struct ExampleError(&'static str);

impl std::fmt::Display for ExampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ExampleError {}

/// Builds an unconditional item for the example set.
fn item(id: u64, seqno: u32, answer_type: AnswerType) -> Result<Item, ExampleError> {
    Ok(Item {
        id: ItemId::from_raw(id).ok_or_else(|| ExampleError("nonzero item id"))?,
        set_id: SetId::from_raw(1).ok_or_else(|| ExampleError("nonzero set id"))?,
        seqno: Seqno::new(seqno),
        answer_type,
        options: Vec::new(),
        condition: Condition::empty(),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let set_id = SetId::from_raw(1).ok_or_else(|| ExampleError("nonzero set id"))?;

    // Q1: "Any defects found?"  Q2: "Describe the defects."
    let gate_question = item(1, 1, AnswerType::Dropdown)?;
    let detail_question = item(2, 2, AnswerType::MultiLineText)?;
    let mut repo =
        InMemoryItemRepository::with_items([gate_question, detail_question.clone()]);

    // Write path: show Q2 only when Q1 was answered "Yes".
    let raw = json!({
        "dependsOn": { "itemId": 1, "operator": "EQUALS", "values": ["Yes"] }
    });
    let condition = validate_condition(&raw)?;
    validate_graph(&condition, &detail_question.owner_ref(), &repo)?;
    repo.replace_condition(detail_question.id, condition);

    // Read path: one map build per set load.
    let map = build_dependency_map(set_id, &repo);
    println!("dependents of Q1: {:?}", map.edges.get(&gate_question_id()?));
    println!("warnings: {:?}", map.warnings);

    // Per-answer-change visibility, client-side.
    let snapshot = SetSnapshot::load(set_id, &repo);
    let mut answers = AnswerMap::new();
    answers.insert(gate_question_id()?, AnswerValue::from("Yes"));
    println!("with Yes: {:?}", resolve_visibility(&snapshot, &answers));

    answers.insert(gate_question_id()?, AnswerValue::from("No"));
    println!("with No: {:?}", resolve_visibility(&snapshot, &answers));

    Ok(())
}

/// Identifier of the gating question.
fn gate_question_id() -> Result<ItemId, ExampleError> {
    ItemId::from_raw(1).ok_or_else(|| ExampleError("nonzero item id"))
}
