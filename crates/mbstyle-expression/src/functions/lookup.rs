use super::{eval_string, names};
use crate::error::ExprError;
use crate::eval_ctx::EvalCtx;
use crate::evaluate::evaluate;
use crate::expression::Expression;
use crate::types::{Arity, FunctionDefinition};
use crate::value::{number, type_name, EqualityClass};
use serde_json::Value;
use std::sync::Arc;

/// Length of a string in characters or of a sequence in elements.
pub(crate) fn length_of(function: &str, value: &Value) -> Result<Value, ExprError> {
    match value {
        Value::String(s) => Ok(number(s.chars().count() as f64)),
        Value::Array(a) => Ok(number(a.len() as f64)),
        other => Err(ExprError::invalid_argument(
            function,
            0,
            "a string or array",
            type_name(other),
        )),
    }
}

fn list_size_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    match evaluate(&args[0], ctx)? {
        Value::Array(a) => Ok(number(a.len() as f64)),
        other => Err(ExprError::invalid_argument(
            names::LIST_SIZE,
            0,
            "an array",
            type_name(&other),
        )),
    }
}

fn str_length_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let s = eval_string(names::STR_LENGTH, 0, args, ctx)?;
    Ok(number(s.chars().count() as f64))
}

fn length_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let value = evaluate(&args[0], ctx)?;
    length_of(names::LENGTH, &value)
}

fn property_exists_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let name = eval_string(names::PROPERTY_EXISTS, 0, args, ctx)?;
    Ok(Value::Bool(ctx.source.property(&name)?.is_some()))
}

pub fn functions() -> Vec<Arc<FunctionDefinition>> {
    let num = Some(EqualityClass::Number);
    vec![
        Arc::new(FunctionDefinition {
            name: names::LIST_SIZE,
            arity: Arity::Fixed(1),
            returns: num,
            eval_fn: list_size_eval,
        }),
        Arc::new(FunctionDefinition {
            name: names::STR_LENGTH,
            arity: Arity::Fixed(1),
            returns: num,
            eval_fn: str_length_eval,
        }),
        Arc::new(FunctionDefinition {
            name: names::LENGTH,
            arity: Arity::Fixed(1),
            returns: num,
            eval_fn: length_eval,
        }),
        Arc::new(FunctionDefinition {
            name: names::PROPERTY_EXISTS,
            arity: Arity::Fixed(1),
            returns: Some(EqualityClass::Boolean),
            eval_fn: property_exists_eval,
        }),
    ]
}
