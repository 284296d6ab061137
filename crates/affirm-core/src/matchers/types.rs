// crates/affirm-core/src/matchers/types.rs
// ============================================================================
// Module: Affirm Type Matchers
// Description: Assertions on the runtime shape of a value.
// Purpose: Narrow a dynamically-typed value to one concrete shape.
// Dependencies: crate::core::{issue, value}, num-bigint
// ============================================================================

//! ## Overview
//! Each matcher checks one shape and returns the narrowed payload. Records and
//! class instances both count as objects; [`assert_record`] additionally
//! rejects instances.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::rc::Rc;

use num_bigint::BigInt;

use super::failure;
use crate::core::issue::AssertResult;
use crate::core::issue::codes;
use crate::core::value::Class;
use crate::core::value::DateValue;
use crate::core::value::FunctionValue;
use crate::core::value::Instance;
use crate::core::value::MapValue;
use crate::core::value::Pattern;
use crate::core::value::Record;
use crate::core::value::SetValue;
use crate::core::value::SymbolValue;
use crate::core::value::Value;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default message shared by both failure modes of [`assert_record`].
const RECORD_MESSAGE: &str = "Expected value to be a plain record object";

// ============================================================================
// SECTION: Primitives
// ============================================================================

/// Asserts that the value is a string.
///
/// # Errors
///
/// Returns `NOT_STRING` otherwise.
pub fn assert_string<'a>(received: &'a Value, message: Option<&str>) -> AssertResult<&'a str> {
    match received {
        Value::String(text) => Ok(text),
        _ => Err(failure(
            codes::NOT_STRING,
            message,
            "Expected value to be a string",
            received,
            "string",
        )),
    }
}

/// Asserts that the value is a number (including `NaN`).
///
/// # Errors
///
/// Returns `NOT_NUMBER` otherwise.
pub fn assert_number(received: &Value, message: Option<&str>) -> AssertResult<f64> {
    match received {
        Value::Number(number) => Ok(*number),
        _ => Err(failure(
            codes::NOT_NUMBER,
            message,
            "Expected value to be a number",
            received,
            "number",
        )),
    }
}

/// Asserts that the value is a bigint.
///
/// # Errors
///
/// Returns `NOT_BIGINT` otherwise.
pub fn assert_bigint<'a>(received: &'a Value, message: Option<&str>) -> AssertResult<&'a BigInt> {
    match received {
        Value::BigInt(number) => Ok(number),
        _ => Err(failure(
            codes::NOT_BIGINT,
            message,
            "Expected value to be a bigint",
            received,
            "bigint",
        )),
    }
}

/// Asserts that the value is a boolean.
///
/// # Errors
///
/// Returns `NOT_BOOLEAN` otherwise.
pub fn assert_boolean(received: &Value, message: Option<&str>) -> AssertResult<bool> {
    match received {
        Value::Bool(flag) => Ok(*flag),
        _ => Err(failure(
            codes::NOT_BOOLEAN,
            message,
            "Expected value to be a boolean",
            received,
            "boolean",
        )),
    }
}

/// Asserts that the value is a symbol.
///
/// # Errors
///
/// Returns `NOT_SYMBOL` otherwise.
pub fn assert_symbol<'a>(
    received: &'a Value,
    message: Option<&str>,
) -> AssertResult<&'a Rc<SymbolValue>> {
    match received {
        Value::Symbol(symbol) => Ok(symbol),
        _ => Err(failure(
            codes::NOT_SYMBOL,
            message,
            "Expected value to be a symbol",
            received,
            "symbol",
        )),
    }
}

// ============================================================================
// SECTION: References
// ============================================================================

/// Asserts that the value is a function.
///
/// # Errors
///
/// Returns `NOT_FUNCTION` otherwise.
pub fn assert_function<'a>(
    received: &'a Value,
    message: Option<&str>,
) -> AssertResult<&'a FunctionValue> {
    match received {
        Value::Function(function) => Ok(function),
        _ => Err(failure(
            codes::NOT_FUNCTION,
            message,
            "Expected value to be a function",
            received,
            "function",
        )),
    }
}

/// Asserts that the value is an array.
///
/// # Errors
///
/// Returns `NOT_ARRAY` otherwise.
pub fn assert_array<'a>(received: &'a Value, message: Option<&str>) -> AssertResult<&'a [Value]> {
    match received {
        Value::Array(items) => Ok(items.as_slice()),
        _ => Err(failure(
            codes::NOT_ARRAY,
            message,
            "Expected value to be an array",
            received,
            "array",
        )),
    }
}

/// Asserts that the value is an object: a plain record or a class instance.
///
/// Arrays, maps, sets, dates, patterns, and functions are not objects here.
///
/// # Errors
///
/// Returns `NOT_OBJECT` otherwise.
pub fn assert_object<'a>(received: &'a Value, message: Option<&str>) -> AssertResult<&'a Value> {
    match received {
        Value::Record(_) | Value::Instance(_) => Ok(received),
        _ => Err(failure(
            codes::NOT_OBJECT,
            message,
            "Expected value to be an object",
            received,
            "object",
        )),
    }
}

/// Asserts that the value is a plain record.
///
/// # Errors
///
/// Returns `NOT_OBJECT` for non-objects and `NOT_RECORD` for class instances.
pub fn assert_record<'a>(received: &'a Value, message: Option<&str>) -> AssertResult<&'a Record> {
    let message = Some(message.unwrap_or(RECORD_MESSAGE));
    match assert_object(received, message)? {
        Value::Record(record) => Ok(record),
        _ => Err(failure(codes::NOT_RECORD, message, RECORD_MESSAGE, received, "record")),
    }
}

/// Asserts that the value is a map.
///
/// # Errors
///
/// Returns `NOT_MAP` otherwise.
pub fn assert_map<'a>(received: &'a Value, message: Option<&str>) -> AssertResult<&'a MapValue> {
    match received {
        Value::Map(map) => Ok(map),
        _ => Err(failure(codes::NOT_MAP, message, "Expected value to be a Map", received, "map")),
    }
}

/// Asserts that the value is a set.
///
/// # Errors
///
/// Returns `NOT_SET` otherwise.
pub fn assert_set<'a>(received: &'a Value, message: Option<&str>) -> AssertResult<&'a SetValue> {
    match received {
        Value::Set(set) => Ok(set),
        _ => Err(failure(codes::NOT_SET, message, "Expected value to be a Set", received, "set")),
    }
}

/// Asserts that the value is a date. Invalid dates pass.
///
/// # Errors
///
/// Returns `NOT_DATE` otherwise.
pub fn assert_date<'a>(received: &'a Value, message: Option<&str>) -> AssertResult<&'a DateValue> {
    match received {
        Value::Date(date) => Ok(date),
        _ => Err(failure(
            codes::NOT_DATE,
            message,
            "Expected value to be a Date",
            received,
            "date",
        )),
    }
}

/// Asserts that the value is a regular expression.
///
/// # Errors
///
/// Returns `NOT_REG_EXP` otherwise.
pub fn assert_reg_exp<'a>(received: &'a Value, message: Option<&str>) -> AssertResult<&'a Pattern> {
    match received {
        Value::RegExp(pattern) => Ok(pattern),
        _ => Err(failure(
            codes::NOT_REG_EXP,
            message,
            "Expected value to be a RegExp",
            received,
            "regexp",
        )),
    }
}

// ============================================================================
// SECTION: Classes and Thenables
// ============================================================================

/// Asserts that the value is an instance of `class` or of a subclass.
///
/// # Errors
///
/// Returns `NOT_INSTANCE_OF` otherwise; `expected` is the class name.
pub fn assert_instance_of<'a>(
    received: &'a Value,
    class: &Class,
    message: Option<&str>,
) -> AssertResult<&'a Instance> {
    match received {
        Value::Instance(instance) if instance.class().inherits_from(class) => Ok(instance),
        _ => Err(failure(
            codes::NOT_INSTANCE_OF,
            message,
            format!("Expected an instance of {}", class.name()),
            received,
            class.name(),
        )),
    }
}

/// Asserts that the value is an object with a callable `then` field.
///
/// # Errors
///
/// - `NOT_OBJECT` when the value is not an object.
/// - `NOT_THENABLE` when it has no own `then` field.
/// - `NOT_FUNCTION` when `then` is not a function; `received` is the field.
pub fn assert_thenable<'a>(received: &'a Value, message: Option<&str>) -> AssertResult<&'a Value> {
    let then = match assert_object(received, message)? {
        Value::Record(record) => record.get("then"),
        Value::Instance(instance) => instance.get("then"),
        _ => None,
    };
    let Some(then) = then else {
        return Err(failure(
            codes::NOT_THENABLE,
            message,
            "Expected value to be thenable",
            received,
            "thenable",
        ));
    };
    assert_function(then, message)?;
    Ok(received)
}
