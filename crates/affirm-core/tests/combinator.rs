// crates/affirm-core/tests/combinator.rs
// ============================================================================
// Module: Combinator Tests
// Description: Evaluation order, aggregation, and error propagation.
// Purpose: Ensure any_of/none_of short-circuit and report failures exactly.
// Dependencies: affirm-core
// ============================================================================
//! ## Overview
//! Exercises `any_of` and `none_of` with counting predicates, assertion
//! failures, foreign errors, and non-callable elements.

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

use std::cell::Cell;
use std::io;

use affirm_core::AssertResult;
use affirm_core::AssertionError;
use affirm_core::Branch;
use affirm_core::BranchOutcome;
use affirm_core::CheckError;
use affirm_core::CombinatorTrace;
use affirm_core::Issue;
use affirm_core::Value;
use affirm_core::any_of;
use affirm_core::any_of_traced;
use affirm_core::assert_bigint;
use affirm_core::assert_number;
use affirm_core::assert_string;
use affirm_core::codes;
use affirm_core::none_of;
use affirm_core::none_of_traced;

fn failing(code: &str, expected: &str, received: i32) -> AssertionError {
    AssertionError::new(Issue::new(code, "", received, expected))
}

#[derive(Default)]
struct RecordingTrace {
    events: Vec<(usize, BranchOutcome)>,
}

impl CombinatorTrace for RecordingTrace {
    fn on_branch_evaluated(&mut self, index: usize, outcome: &BranchOutcome) {
        self.events.push((index, outcome.clone()));
    }
}

// ============================================================================
// SECTION: any_of
// ============================================================================

#[test]
fn any_of_passes_when_first_branch_passes() {
    let value = Value::from(3);
    let result: AssertResult = any_of([
        Branch::check(&|| assert_number(&value, None)),
        Branch::check(&|| assert_string(&value, None)),
    ]);
    assert!(result.is_ok());
}

#[test]
fn any_of_stops_at_first_passing_branch() {
    let calls = Cell::new(0_u32);
    let passing = || {
        calls.set(calls.get() + 1);
        Ok::<(), AssertionError>(())
    };
    let result: AssertResult = any_of([
        Branch::check(&passing),
        Branch::check(&passing),
        Branch::check(&passing),
    ]);
    assert!(result.is_ok());
    assert_eq!(calls.get(), 1);
}

#[test]
fn any_of_evaluates_until_a_branch_passes() {
    let calls = Cell::new(0_u32);
    let failing_branch = || {
        calls.set(calls.get() + 1);
        Err::<(), _>(failing("A", "a", 1))
    };
    let passing_branch = || {
        calls.set(calls.get() + 10);
        Ok::<(), AssertionError>(())
    };
    let result: AssertResult = any_of([
        Branch::check(&failing_branch),
        Branch::check(&passing_branch),
        Branch::check(&failing_branch),
    ]);
    assert!(result.is_ok());
    assert_eq!(calls.get(), 11);
}

#[test]
fn any_of_aggregates_every_failure() {
    let first = || Err::<(), _>(failing("A", "a", 1));
    let second = || Err::<(), _>(failing("B", "b", 2));
    let error = any_of::<AssertionError, _>([Branch::check(&first), Branch::check(&second)])
        .unwrap_err();
    assert_eq!(error.code(), codes::NOT_ANY_OF);
    assert_eq!(error.message(), "Expected any of: a | b");
    assert_eq!(error.expected().to_string(), "a | b");
    assert!(Value::same_value(error.received(), &Value::from(1)));
}

#[test]
fn any_of_type_alternatives_report_both_types() {
    let value = Value::from("text");
    let error = any_of::<AssertionError, _>([
        Branch::check(&|| assert_number(&value, None)),
        Branch::check(&|| assert_bigint(&value, None)),
    ])
    .unwrap_err();
    assert_eq!(error.code(), codes::NOT_ANY_OF);
    assert_eq!(error.expected().to_string(), "number | bigint");
    assert_eq!(error.received().to_string(), "text");
}

#[test]
fn any_of_with_no_branches_passes() {
    let result = any_of::<AssertionError, _>([]);
    assert!(result.is_ok());

    let mut trace = RecordingTrace::default();
    assert!(any_of_traced::<AssertionError, _, _>([], &mut trace).is_ok());
    assert!(trace.events.is_empty());
}

#[test]
fn any_of_rejects_non_callable_before_evaluating() {
    let calls = Cell::new(0_u32);
    let counting = || {
        calls.set(calls.get() + 1);
        Ok::<(), AssertionError>(())
    };
    let error = any_of::<AssertionError, _>([Branch::check(&counting), Branch::from(Value::from(42))])
        .unwrap_err();
    assert_eq!(error.code(), codes::NOT_FUNCTION);
    assert_eq!(error.message(), "Expected value to be a function");
    assert!(Value::same_value(error.received(), &Value::from(42)));
    assert_eq!(error.expected().to_string(), "function");
    assert_eq!(calls.get(), 0);
}

#[test]
fn any_of_propagates_foreign_errors_unchanged() {
    let calls = Cell::new(0_u32);
    let foreign = || Err::<(), _>(CheckError::foreign(io::Error::other("disk on fire")));
    let later = || {
        calls.set(calls.get() + 1);
        Ok::<(), CheckError>(())
    };
    let error =
        any_of::<CheckError, _>([Branch::check(&foreign), Branch::check(&later)]).unwrap_err();
    assert!(!error.is_assertion());
    assert_eq!(error.to_string(), "disk on fire");
    assert_eq!(calls.get(), 0);
}

#[test]
fn any_of_recovers_assertions_wrapped_in_check_error() {
    let value = Value::from(1);
    let as_string = || assert_string(&value, None).map_err(CheckError::from);
    let as_number = || assert_number(&value, None).map_err(CheckError::from);
    let result: Result<(), CheckError> =
        any_of([Branch::check(&as_string), Branch::check(&as_number)]);
    assert!(result.is_ok());
}

#[test]
fn any_of_traced_reports_each_evaluated_branch() {
    let value = Value::from(1);
    let mut trace = RecordingTrace::default();
    let result: AssertResult = any_of_traced(
        [
            Branch::check(&|| assert_string(&value, None)),
            Branch::check(&|| assert_number(&value, None)),
            Branch::check(&|| assert_bigint(&value, None)),
        ],
        &mut trace,
    );
    assert!(result.is_ok());
    assert_eq!(
        trace.events,
        vec![
            (0, BranchOutcome::Failed { code: codes::NOT_STRING.to_string() }),
            (1, BranchOutcome::Passed),
        ]
    );
}

#[test]
fn any_of_macro_builds_branches() {
    let value = Value::bigint(5);
    let result: AssertResult =
        affirm_core::any_of!(|| assert_number(&value, None), || assert_bigint(&value, None));
    assert!(result.is_ok());
}

// ============================================================================
// SECTION: none_of
// ============================================================================

#[test]
fn none_of_passes_when_every_branch_fails() {
    let value = Value::Null;
    let result: AssertResult = none_of([
        Branch::check(&|| assert_number(&value, None)),
        Branch::check(&|| assert_string(&value, None)),
    ]);
    assert!(result.is_ok());
}

#[test]
fn none_of_with_no_branches_passes() {
    assert!(none_of::<AssertionError, _>([]).is_ok());
}

#[test]
fn none_of_reports_index_of_first_passing_branch() {
    let calls = Cell::new(0_u32);
    let failing_branch = || Err::<(), _>(failing("A", "a", 1));
    let passing_branch = || {
        calls.set(calls.get() + 1);
        Ok::<(), AssertionError>(())
    };
    let error = none_of::<AssertionError, _>([
        Branch::check(&failing_branch),
        Branch::check(&passing_branch),
        Branch::check(&passing_branch),
    ])
    .unwrap_err();
    assert_eq!(error.code(), codes::UNEXPECTED_PASS);
    assert_eq!(
        error.message(),
        "Assertion at index 1 unexpectedly passed (it should have failed)"
    );
    assert_eq!(error.expected().to_string(), "assertion to fail");
    assert_eq!(error.received().to_string(), "assertion passed");
    assert_eq!(calls.get(), 1);
}

#[test]
fn none_of_rejects_non_callable_before_evaluating() {
    let calls = Cell::new(0_u32);
    let counting = || {
        calls.set(calls.get() + 1);
        Err::<(), _>(failing("A", "a", 1))
    };
    let error = none_of::<AssertionError, _>([
        Branch::check(&counting),
        Branch::check(&counting),
        Branch::from(Value::from("not callable")),
    ])
    .unwrap_err();
    assert_eq!(error.code(), codes::NOT_FUNCTION);
    assert_eq!(error.message(), "Expected value to be a function");
    assert_eq!(calls.get(), 0);
}

#[test]
fn none_of_propagates_foreign_errors_unchanged() {
    let foreign = || Err::<(), _>(CheckError::foreign(io::Error::other("boom")));
    let error = none_of::<CheckError, _>([Branch::check(&foreign)]).unwrap_err();
    assert!(matches!(error, CheckError::Foreign(_)));
    assert_eq!(error.to_string(), "boom");
}

#[test]
fn none_of_traced_reports_failures_in_order() {
    let value = Value::Null;
    let mut trace = RecordingTrace::default();
    let result: AssertResult = none_of_traced(
        [
            Branch::check(&|| assert_number(&value, None)),
            Branch::check(&|| assert_string(&value, None)),
        ],
        &mut trace,
    );
    assert!(result.is_ok());
    assert_eq!(
        trace.events,
        vec![
            (0, BranchOutcome::Failed { code: codes::NOT_NUMBER.to_string() }),
            (1, BranchOutcome::Failed { code: codes::NOT_STRING.to_string() }),
        ]
    );
}

#[test]
fn none_of_macro_builds_branches() {
    let value = Value::from(true);
    let result: AssertResult =
        affirm_core::none_of!(|| assert_number(&value, None), || assert_string(&value, None));
    assert!(result.is_ok());
}
