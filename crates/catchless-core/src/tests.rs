// crates/catchless-core/src/tests.rs
// ============================================================================
// Module: Catchless Core Unit Tests
// Description: Unit tests for crate-private catalog helpers.
// Purpose: Cover helpers that integration tests cannot reach.
// Dependencies: catchless-core
// ============================================================================

//! ## Overview
//! Provides test-only lint relaxations and unit tests for private helpers.

// ============================================================================
// SECTION: Lint Configuration
// ============================================================================

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
    reason = "Test-only output and panic-based assertions are permitted."
)]

use crate::kind::OperandKind;
use crate::signature::operand_tuples;

// ============================================================================
// SECTION: Operand Tuples
// ============================================================================

#[test]
fn operand_tuples_cover_every_kind_combination() {
    assert_eq!(operand_tuples(0), vec![Vec::<OperandKind>::new()]);
    assert_eq!(operand_tuples(1).len(), OperandKind::ALL.len());
    assert_eq!(operand_tuples(2).len(), OperandKind::ALL.len() * OperandKind::ALL.len());
}

#[test]
fn operand_tuples_keep_first_operand_outermost() {
    let pairs = operand_tuples(2);
    assert_eq!(pairs[0], vec![OperandKind::Generic, OperandKind::Generic]);
    assert_eq!(pairs[1], vec![OperandKind::Generic, OperandKind::Boolean]);
    assert_eq!(pairs[5], vec![OperandKind::Boolean, OperandKind::Generic]);
}
