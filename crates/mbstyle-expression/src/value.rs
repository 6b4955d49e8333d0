//! Value model helpers: equality classes, class-aware equality and coercion.
//!
//! Runtime values are plain [`serde_json::Value`]s. What this module adds is
//! the comparison semantics the style grammar needs, which differ from both
//! JSON equality (`1` vs `1.0`) and the host engine's string-based equality
//! (`true` vs `"true"`).

use serde_json::{Number, Value};
use std::fmt;

/// The dynamic type tag of a value. Two values are only ever equal when
/// their classes match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EqualityClass {
    Null,
    Boolean,
    Number,
    String,
    Sequence,
    Mapping,
}

impl EqualityClass {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => EqualityClass::Null,
            Value::Bool(_) => EqualityClass::Boolean,
            Value::Number(_) => EqualityClass::Number,
            Value::String(_) => EqualityClass::String,
            Value::Array(_) => EqualityClass::Sequence,
            Value::Object(_) => EqualityClass::Mapping,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EqualityClass::Null => "null",
            EqualityClass::Boolean => "boolean",
            EqualityClass::Number => "number",
            EqualityClass::String => "string",
            EqualityClass::Sequence => "array",
            EqualityClass::Mapping => "object",
        }
    }
}

impl fmt::Display for EqualityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shorthand for `EqualityClass::of(value).name()`, used in error messages.
pub fn type_name(value: &Value) -> &'static str {
    EqualityClass::of(value).name()
}

/// Class-aware equality.
///
/// - `null` equals only `null`.
/// - Values of different classes are unequal, never coerced.
/// - Numbers compare by numeric value, so `1` equals `1.0`.
/// - Sequences and mappings compare element-wise with the same rules.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(k, x)| b.get(k).is_some_and(|y| values_equal(x, y)))
        }
        _ => false,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a == b;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Returns true if `haystack` contains a value equal to `needle`.
pub fn contains(haystack: &[Value], needle: &Value) -> bool {
    haystack.iter().any(|v| values_equal(v, needle))
}

/// Returns the numeric value of a `Value::Number`, `None` for anything else.
pub fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Lenient numeric coercion used by the `mbToNumber` shim.
///
/// `null` and `false` become 0, `true` becomes 1, numeric strings parse,
/// numbers pass through. Anything else yields `None`.
pub fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Builds a number value. Integral results are stored as integers so that
/// `["+", 1, 2]` folds to `3` rather than `3.0`; non-finite results become
/// `null`.
pub fn number(n: f64) -> Value {
    const MAX_SAFE: f64 = 9_007_199_254_740_991.0;
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE {
        return Value::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
}

/// String form used by concatenation. `null` renders empty.
pub fn str_val(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
