//! Browser bindings. Arguments arrive as untyped `JsValue`s, so this is the
//! one place where the string check runs at runtime.

use wasm_bindgen::prelude::*;

use crate::error::{Argument, LevenshteinError};
use crate::levenshtein::{compute, distance_matrix, Mode};
use crate::matrix::DistanceMatrix;
use crate::trace::TraceSink;

fn symbols(value: &JsValue, argument: Argument) -> Result<Vec<char>, LevenshteinError> {
    match value.as_string() {
        Some(s) => Ok(s.chars().collect()),
        None => Err(LevenshteinError::TypeMismatch {
            argument,
            found: value.js_typeof().as_string().unwrap_or_default(),
        }),
    }
}

fn mode(ratio: bool) -> Mode {
    if ratio {
        Mode::Ratio
    } else {
        Mode::Absolute
    }
}

fn to_js(e: LevenshteinError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Distance (or ratio) between two JS strings, optionally logging the
/// matrix to the browser console.
#[wasm_bindgen]
pub fn levenshtein(
    a: JsValue,
    b: JsValue,
    ratio: bool,
    print_matrix: bool,
) -> Result<f64, JsValue> {
    let a = symbols(&a, Argument::First).map_err(to_js)?;
    let b = symbols(&b, Argument::Second).map_err(to_js)?;

    let mut console = |m: &DistanceMatrix| {
        web_sys::console::log_1(&JsValue::from_str(&m.to_string()));
    };
    let trace: Option<&mut dyn TraceSink> = if print_matrix {
        Some(&mut console)
    } else {
        None
    };

    compute(&a, &b, mode(ratio), trace).map(|score| score.as_f64()).map_err(to_js)
}

/// Like [`levenshtein`], but the matrix goes to `callback` as a JSON string.
#[wasm_bindgen]
pub fn levenshtein_with_trace(
    a: JsValue,
    b: JsValue,
    ratio: bool,
    callback: &js_sys::Function,
) -> Result<f64, JsValue> {
    let a = symbols(&a, Argument::First).map_err(to_js)?;
    let b = symbols(&b, Argument::Second).map_err(to_js)?;

    // A failed hand-off is reported instead of the score.
    let mut failure: Option<JsValue> = None;
    let mut forward = |m: &DistanceMatrix| {
        let delivered = serde_json::to_string(m)
            .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {}", e)))
            .and_then(|payload| callback.call1(&JsValue::NULL, &JsValue::from_str(&payload)));
        if let Err(e) = delivered {
            failure = Some(e);
        }
    };

    let score = compute(&a, &b, mode(ratio), Some(&mut forward)).map_err(to_js)?;
    match failure {
        Some(e) => Err(e),
        None => Ok(score.as_f64()),
    }
}

#[wasm_bindgen]
pub fn distance_matrix_json(a: &str, b: &str) -> Result<String, JsValue> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    serde_json::to_string(&distance_matrix(&a, &b))
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {}", e)))
}
