// system-tests/src/lib.rs
// ============================================================================
// Module: Question Conditions System Tests Library
// Description: Anchor crate for the cross-pass system test suites.
// Purpose: Host the end-to-end suites under system-tests/tests.
// Dependencies: question-conditions-core
// ============================================================================

//! ## Overview
//! This crate exists to host the system-test suites in `system-tests/tests`,
//! which drive the engine's write path and read path end to end against the
//! in-memory repository. Shared fixtures live in `tests/helpers`.
