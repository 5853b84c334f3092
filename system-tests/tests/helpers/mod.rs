// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Seeded question-set modeling a facility-inspection checklist.
// Purpose: Give the suites a realistic set to drive end to end.
// Dependencies: question-conditions-core
// ============================================================================

//! Shared fixtures: a five-question inspection checklist with stable ids.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    dead_code,
    reason = "Test-only fixtures; not every suite uses every helper."
)]

use question_conditions_core::AnswerType;
use question_conditions_core::Condition;
use question_conditions_core::InMemoryItemRepository;
use question_conditions_core::Item;
use question_conditions_core::ItemId;
use question_conditions_core::Seqno;
use question_conditions_core::SetId;

/// Identifier of the seeded inspection set.
pub fn inspection_set_id() -> SetId {
    SetId::from_raw(10).expect("nonzero set id")
}

/// Identifier of the item at the given 1-based checklist position.
pub fn checklist_item_id(position: u64) -> ItemId {
    ItemId::from_raw(100 + position).expect("nonzero item id")
}

/// Seeds the inspection checklist without any conditions.
///
/// Positions: 1 "Any defects found?" (dropdown), 2 "Describe the defects"
/// (multi-line), 3 "Affected areas" (multi-select), 4 "Meter reading"
/// (meter), 5 "Inspector signature" (signature).
pub fn seed_inspection_set() -> InMemoryItemRepository {
    let answer_types = [
        (1u32, AnswerType::Dropdown),
        (2, AnswerType::MultiLineText),
        (3, AnswerType::MultiSelect),
        (4, AnswerType::MeterReading),
        (5, AnswerType::Signature),
    ];
    let mut repo = InMemoryItemRepository::new();
    for (position, answer_type) in answer_types {
        repo.insert(Item {
            id: checklist_item_id(u64::from(position)),
            set_id: inspection_set_id(),
            seqno: Seqno::new(position),
            answer_type,
            options: Vec::new(),
            condition: Condition::empty(),
        });
    }
    repo
}
