//! Numeric and array coercion, and hex encoding.

use super::{eval_number, names};
use crate::error::ExprError;
use crate::eval_ctx::EvalCtx;
use crate::evaluate::evaluate;
use crate::expression::Expression;
use crate::types::{Arity, FunctionDefinition};
use crate::value::{number, to_number, type_name, EqualityClass};
use serde_json::Value;
use std::sync::Arc;

/// Returns the first argument that converts to a number.
fn to_number_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let mut first_class = None;
    for arg in args {
        let value = evaluate(arg, ctx)?;
        if let Some(n) = to_number(&value) {
            return Ok(number(n));
        }
        first_class.get_or_insert(type_name(&value));
    }
    Err(ExprError::invalid_argument(
        names::TO_NUMBER,
        0,
        "a value convertible to a number",
        first_class.unwrap_or("nothing"),
    ))
}

/// Returns the first argument that evaluates to an array.
fn to_array_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let mut first_class = None;
    for arg in args {
        let value = evaluate(arg, ctx)?;
        if value.is_array() {
            return Ok(value);
        }
        first_class.get_or_insert(type_name(&value));
    }
    Err(ExprError::invalid_argument(
        names::ARRAY,
        0,
        "an array",
        first_class.unwrap_or("nothing"),
    ))
}

/// Lowercase hex of the integer part, padded to two digits. Negative input
/// is encoded as its 32-bit two's complement.
pub(crate) fn to_hex(n: f64) -> String {
    let int = n.trunc() as i64;
    if int < 0 {
        format!("{:x}", int as i32 as u32)
    } else {
        format!("{:02x}", int)
    }
}

fn to_hex_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let n = eval_number(names::TO_HEX, 0, args, ctx)?;
    Ok(Value::String(to_hex(n)))
}

pub fn functions() -> Vec<Arc<FunctionDefinition>> {
    vec![
        Arc::new(FunctionDefinition {
            name: names::TO_NUMBER,
            arity: Arity::AtLeast(1),
            returns: Some(EqualityClass::Number),
            eval_fn: to_number_eval,
        }),
        Arc::new(FunctionDefinition {
            name: names::ARRAY,
            arity: Arity::AtLeast(1),
            returns: Some(EqualityClass::Sequence),
            eval_fn: to_array_eval,
        }),
        Arc::new(FunctionDefinition {
            name: names::TO_HEX,
            arity: Arity::Fixed(1),
            returns: Some(EqualityClass::String),
            eval_fn: to_hex_eval,
        }),
    ]
}
