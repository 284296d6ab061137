// crates/affirm-core/tests/deep_equal.rs
// ============================================================================
// Module: Deep Equality Tests
// Description: Rule-by-rule tests for the structural comparator.
// Purpose: Pin down every branch of the equality decision list.
// Dependencies: affirm-core
// ============================================================================
//! ## Overview
//! Covers identity shortcuts, absent values, category mismatches, dates,
//! patterns, arrays, maps, sets, records, and opaque values.

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

use affirm_core::Class;
use affirm_core::Value;
use affirm_core::assert_deep_equal;
use affirm_core::codes;
use affirm_core::is_deep_equal;

fn record(fields: Vec<(&str, Value)>) -> Value {
    Value::record(fields)
}

// ============================================================================
// SECTION: Primitives and Identity
// ============================================================================

#[test]
fn identical_primitives_are_equal() {
    assert!(is_deep_equal(&Value::from(1), &Value::from(1)));
    assert!(is_deep_equal(&Value::from("a"), &Value::from("a")));
    assert!(is_deep_equal(&Value::from(true), &Value::from(true)));
    assert!(is_deep_equal(&Value::bigint(7), &Value::bigint(7)));
    assert!(is_deep_equal(&Value::Null, &Value::Null));
    assert!(is_deep_equal(&Value::Undefined, &Value::Undefined));
}

#[test]
fn nan_equals_nan() {
    assert!(is_deep_equal(&Value::from(f64::NAN), &Value::from(f64::NAN)));
}

#[test]
fn positive_and_negative_zero_differ() {
    assert!(!is_deep_equal(&Value::from(0.0), &Value::from(-0.0)));
}

#[test]
fn distinct_primitives_differ() {
    assert!(!is_deep_equal(&Value::from(1), &Value::from(2)));
    assert!(!is_deep_equal(&Value::from("1"), &Value::from(1)));
    assert!(!is_deep_equal(&Value::bigint(1), &Value::from(1)));
}

#[test]
fn symbols_compare_by_identity() {
    let symbol = Value::symbol("id");
    assert!(is_deep_equal(&symbol, &symbol.clone()));
    assert!(!is_deep_equal(&symbol, &Value::symbol("id")));
}

#[test]
fn absent_values_only_match_themselves() {
    assert!(!is_deep_equal(&Value::Null, &Value::Undefined));
    assert!(!is_deep_equal(&Value::Null, &record(vec![])));
    assert!(!is_deep_equal(&Value::array(vec![]), &Value::Undefined));
}

// ============================================================================
// SECTION: Category Discrimination
// ============================================================================

#[test]
fn array_and_record_differ() {
    assert!(!is_deep_equal(&Value::array(vec![]), &record(vec![])));
}

#[test]
fn date_and_number_differ() {
    assert!(!is_deep_equal(&Value::date_from_millis(0), &Value::from(0)));
}

#[test]
fn date_and_record_differ() {
    assert!(!is_deep_equal(&Value::date_from_millis(0), &record(vec![])));
}

#[test]
fn map_and_set_differ() {
    assert!(!is_deep_equal(&Value::map(vec![]), &Value::set(vec![])));
}

// ============================================================================
// SECTION: Dates and Patterns
// ============================================================================

#[test]
fn dates_compare_by_timestamp() {
    assert!(is_deep_equal(&Value::date_from_millis(1_000), &Value::date_from_millis(1_000)));
    assert!(!is_deep_equal(&Value::date_from_millis(1_000), &Value::date_from_millis(1_001)));
}

#[test]
fn rfc3339_and_millis_dates_agree() {
    let parsed = Value::date_rfc3339("1970-01-01T00:00:01Z");
    assert!(is_deep_equal(&parsed, &Value::date_from_millis(1_000)));
}

#[test]
fn invalid_dates_never_match_each_other() {
    assert!(!is_deep_equal(&Value::invalid_date(), &Value::invalid_date()));
    let invalid = Value::invalid_date();
    assert!(is_deep_equal(&invalid, &invalid.clone()));
}

#[test]
fn patterns_compare_source_and_flags() {
    let left = Value::reg_exp("a+b", "gi").unwrap();
    let right = Value::reg_exp("a+b", "ig").unwrap();
    assert!(is_deep_equal(&left, &right));
    let other_flags = Value::reg_exp("a+b", "g").unwrap();
    assert!(!is_deep_equal(&left, &other_flags));
    let other_source = Value::reg_exp("a+c", "gi").unwrap();
    assert!(!is_deep_equal(&left, &other_source));
}

#[test]
fn patterns_compare_escaped_delimiters() {
    let bare = Value::reg_exp("a/b", "").unwrap();
    let escaped = Value::reg_exp(r"a\/b", "").unwrap();
    assert!(is_deep_equal(&bare, &escaped));
    assert_eq!(bare.to_string(), r"/a\/b/");

    let raw_newline = Value::reg_exp("a\nb", "").unwrap();
    let spelled_newline = Value::reg_exp(r"a\nb", "").unwrap();
    assert!(is_deep_equal(&raw_newline, &spelled_newline));

    let in_class = Value::reg_exp("[/]", "").unwrap();
    assert_eq!(in_class.to_string(), "/[/]/");
}

// ============================================================================
// SECTION: Arrays
// ============================================================================

#[test]
fn arrays_compare_elementwise() {
    let left = Value::array(vec![Value::from(1), record(vec![("a", Value::from(2))])]);
    let right = Value::array(vec![Value::from(1), record(vec![("a", Value::from(2))])]);
    assert!(is_deep_equal(&left, &right));
}

#[test]
fn arrays_are_order_sensitive() {
    let left = Value::array(vec![Value::from(1), Value::from(2)]);
    let right = Value::array(vec![Value::from(2), Value::from(1)]);
    assert!(!is_deep_equal(&left, &right));
}

#[test]
fn arrays_of_different_length_differ() {
    let left = Value::array(vec![Value::from(1)]);
    let right = Value::array(vec![Value::from(1), Value::from(1)]);
    assert!(!is_deep_equal(&left, &right));
}

// ============================================================================
// SECTION: Maps and Sets
// ============================================================================

#[test]
fn maps_compare_values_deeply() {
    let left = Value::map(vec![(Value::from("k"), Value::array(vec![Value::from(1)]))]);
    let right = Value::map(vec![(Value::from("k"), Value::array(vec![Value::from(1)]))]);
    assert!(is_deep_equal(&left, &right));
}

#[test]
fn maps_ignore_insertion_order() {
    let left = Value::map(vec![
        (Value::from("a"), Value::from(1)),
        (Value::from("b"), Value::from(2)),
    ]);
    let right = Value::map(vec![
        (Value::from("b"), Value::from(2)),
        (Value::from("a"), Value::from(1)),
    ]);
    assert!(is_deep_equal(&left, &right));
}

#[test]
fn maps_with_different_values_differ() {
    let left = Value::map(vec![(Value::from("k"), Value::from(1))]);
    let right = Value::map(vec![(Value::from("k"), Value::from(2))]);
    assert!(!is_deep_equal(&left, &right));
}

#[test]
fn map_keys_use_native_equality() {
    let left = Value::map(vec![(Value::array(vec![]), Value::from(1))]);
    let right = Value::map(vec![(Value::array(vec![]), Value::from(1))]);
    assert!(!is_deep_equal(&left, &right));
    let shared_key = Value::array(vec![]);
    let left = Value::map(vec![(shared_key.clone(), Value::from(1))]);
    let right = Value::map(vec![(shared_key, Value::from(1))]);
    assert!(is_deep_equal(&left, &right));
}

#[test]
fn sets_compare_primitive_members() {
    let left = Value::set(vec![Value::from(1), Value::from(2)]);
    let right = Value::set(vec![Value::from(2), Value::from(1)]);
    assert!(is_deep_equal(&left, &right));
}

#[test]
fn sets_with_distinct_but_equal_composites_differ() {
    let left = Value::set(vec![record(vec![("a", Value::from(1))])]);
    let right = Value::set(vec![record(vec![("a", Value::from(1))])]);
    assert!(!is_deep_equal(&left, &right));
}

#[test]
fn sets_of_different_size_differ() {
    let left = Value::set(vec![Value::from(1)]);
    let right = Value::set(vec![Value::from(1), Value::from(2)]);
    assert!(!is_deep_equal(&left, &right));
}

// ============================================================================
// SECTION: Records and Opaque Values
// ============================================================================

#[test]
fn records_ignore_key_order() {
    let left = record(vec![("a", Value::from(1)), ("b", Value::from(2))]);
    let right = record(vec![("b", Value::from(2)), ("a", Value::from(1))]);
    assert!(is_deep_equal(&left, &right));
}

#[test]
fn records_with_extra_keys_differ() {
    let left = record(vec![("a", Value::from(1))]);
    let right = record(vec![("a", Value::from(1)), ("b", Value::from(2))]);
    assert!(!is_deep_equal(&left, &right));
    assert!(!is_deep_equal(&right, &left));
}

#[test]
fn records_require_matching_key_names() {
    let left = record(vec![("a", Value::Undefined)]);
    let right = record(vec![("b", Value::Undefined)]);
    assert!(!is_deep_equal(&left, &right));
}

#[test]
fn nested_records_compare_recursively() {
    let left = record(vec![("a", record(vec![("b", Value::array(vec![Value::from(1)]))]))]);
    let right = record(vec![("a", record(vec![("b", Value::array(vec![Value::from(1)]))]))]);
    assert!(is_deep_equal(&left, &right));
    let changed = record(vec![("a", record(vec![("b", Value::array(vec![Value::from(2)]))]))]);
    assert!(!is_deep_equal(&left, &changed));
}

#[test]
fn functions_compare_by_identity() {
    let function = Value::function("f");
    assert!(is_deep_equal(&function, &function.clone()));
    assert!(!is_deep_equal(&Value::function("f"), &Value::function("f")));
}

#[test]
fn instances_compare_by_identity() {
    let class = Class::new("Point");
    let left = Value::instance(&class, vec![("x", Value::from(1))]);
    let right = Value::instance(&class, vec![("x", Value::from(1))]);
    assert!(is_deep_equal(&left, &left.clone()));
    assert!(!is_deep_equal(&left, &right));
}

#[test]
fn instance_and_record_differ() {
    let class = Class::new("Point");
    let instance = Value::instance(&class, vec![("x", Value::from(1))]);
    assert!(!is_deep_equal(&instance, &record(vec![("x", Value::from(1))])));
}

// ============================================================================
// SECTION: Matcher
// ============================================================================

#[test]
fn assert_deep_equal_reports_both_values() {
    let received = record(vec![("a", Value::from(1))]);
    let expected = record(vec![("a", Value::from(2))]);
    let error = assert_deep_equal(&received, &expected, None).unwrap_err();
    assert_eq!(error.code(), codes::NOT_DEEP_EQUAL);
    assert_eq!(error.message(), r#"Expected deep equal {"a":2}, but got {"a":1}"#);
    assert!(is_deep_equal(error.received(), &received));
    assert!(is_deep_equal(error.expected(), &expected));
}

#[test]
fn assert_deep_equal_uses_custom_message() {
    let error = assert_deep_equal(&Value::from(1), &Value::from(2), Some("numbers differ"))
        .unwrap_err();
    assert_eq!(error.message(), "numbers differ");
}

#[test]
fn assert_deep_equal_passes_on_equal_values() {
    let left = Value::array(vec![Value::from("x")]);
    let right = Value::array(vec![Value::from("x")]);
    assert!(assert_deep_equal(&left, &right, None).is_ok());
}
