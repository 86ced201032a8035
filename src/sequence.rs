//! Validation for inputs that arrive untyped, e.g. decoded JSON.
//!
//! The generic engine takes `&[T]`, so a wrong input type is a compile error
//! there. Only data crossing a dynamic boundary needs this runtime check.

use serde_json::Value;

use crate::error::{Argument, LevenshteinError, Result};
use crate::levenshtein::{compute, Mode, Score};
use crate::trace::TraceSink;

/// Name used in `TypeMismatch` for each JSON kind.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Accepts a JSON string and returns its `char`s.
pub fn symbols_from_json(value: &Value, argument: Argument) -> Result<Vec<char>> {
    match value {
        Value::String(s) => Ok(s.chars().collect()),
        other => Err(LevenshteinError::TypeMismatch {
            argument,
            found: json_type_name(other).to_string(),
        }),
    }
}

/// Checks both arguments, first one first, then runs the engine.
pub fn compute_json(
    a: &Value,
    b: &Value,
    mode: Mode,
    trace: Option<&mut dyn TraceSink>,
) -> Result<Score> {
    let a = symbols_from_json(a, Argument::First)?;
    let b = symbols_from_json(b, Argument::Second)?;
    compute(&a, &b, mode, trace)
}
