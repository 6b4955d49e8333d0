use super::{eval_string, names};
use crate::error::ExprError;
use crate::eval_ctx::EvalCtx;
use crate::evaluate::evaluate;
use crate::expression::Expression;
use crate::types::{Arity, FunctionDefinition};
use crate::value::{str_val, EqualityClass};
use serde_json::Value;
use std::sync::Arc;

fn concatenate_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let mut result = String::new();
    for arg in args {
        let value = evaluate(arg, ctx)?;
        result.push_str(&str_val(&value));
    }
    Ok(Value::String(result))
}

fn to_lower_case_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let s = eval_string(names::TO_LOWER_CASE, 0, args, ctx)?;
    Ok(Value::String(s.to_lowercase()))
}

fn to_upper_case_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let s = eval_string(names::TO_UPPER_CASE, 0, args, ctx)?;
    Ok(Value::String(s.to_uppercase()))
}

pub fn functions() -> Vec<Arc<FunctionDefinition>> {
    let string = Some(EqualityClass::String);
    vec![
        Arc::new(FunctionDefinition {
            name: names::CONCATENATE,
            arity: Arity::AtLeast(1),
            returns: string,
            eval_fn: concatenate_eval,
        }),
        Arc::new(FunctionDefinition {
            name: names::TO_LOWER_CASE,
            arity: Arity::Fixed(1),
            returns: string,
            eval_fn: to_lower_case_eval,
        }),
        Arc::new(FunctionDefinition {
            name: names::TO_UPPER_CASE,
            arity: Arity::Fixed(1),
            returns: string,
            eval_fn: to_upper_case_eval,
        }),
    ]
}
