//! Decision functions: negation, comparisons and the deferred forms of
//! `==`, `all`, `any`, `case`, `coalesce` and `match`.

use super::names;
use crate::error::ExprError;
use crate::eval_ctx::EvalCtx;
use crate::evaluate::evaluate;
use crate::expression::Expression;
use crate::types::{Arity, FunctionDefinition};
use crate::value::{contains, type_name, values_equal, EqualityClass};
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::Arc;

fn not_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    match evaluate(&args[0], ctx)? {
        Value::Bool(b) => Ok(Value::Bool(!b)),
        other => Err(ExprError::invalid_argument(
            names::NOT,
            0,
            "a boolean",
            type_name(&other),
        )),
    }
}

/// Orders two numbers or two strings. Anything else is a type error.
fn compare(
    function: &str,
    args: &[Expression],
    ctx: &mut EvalCtx<'_>,
) -> Result<Option<Ordering>, ExprError> {
    let left = evaluate(&args[0], ctx)?;
    let right = evaluate(&args[1], ctx)?;
    match (&left, &right) {
        (Value::Number(a), Value::Number(b)) => Ok(a.as_f64().partial_cmp(&b.as_f64())),
        (Value::String(a), Value::String(b)) => Ok(Some(a.cmp(b))),
        (Value::Number(_), other) => Err(ExprError::invalid_argument(
            function,
            1,
            "a number",
            type_name(other),
        )),
        (Value::String(_), other) => Err(ExprError::invalid_argument(
            function,
            1,
            "a string",
            type_name(other),
        )),
        (other, _) => Err(ExprError::invalid_argument(
            function,
            0,
            "a number or string",
            type_name(other),
        )),
    }
}

fn less_than_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let ord = compare(names::LESS_THAN, args, ctx)?;
    Ok(Value::Bool(ord == Some(Ordering::Less)))
}

fn less_equal_than_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let ord = compare(names::LESS_EQUAL_THAN, args, ctx)?;
    Ok(Value::Bool(matches!(
        ord,
        Some(Ordering::Less | Ordering::Equal)
    )))
}

fn greater_than_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let ord = compare(names::GREATER_THAN, args, ctx)?;
    Ok(Value::Bool(ord == Some(Ordering::Greater)))
}

fn greater_equal_than_eval(
    args: &[Expression],
    ctx: &mut EvalCtx<'_>,
) -> Result<Value, ExprError> {
    let ord = compare(names::GREATER_EQUAL_THAN, args, ctx)?;
    Ok(Value::Bool(matches!(
        ord,
        Some(Ordering::Greater | Ordering::Equal)
    )))
}

/// Unlike the engine's own `equalTo`, nulls are equal to each other and
/// values of different classes are never equal.
fn equal_to_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let left = evaluate(&args[0], ctx)?;
    let right = evaluate(&args[1], ctx)?;
    Ok(Value::Bool(values_equal(&left, &right)))
}

fn all_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    for arg in args {
        if evaluate(arg, ctx)? != Value::Bool(true) {
            return Ok(Value::Bool(false));
        }
    }
    Ok(Value::Bool(true))
}

fn any_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    for arg in args {
        if evaluate(arg, ctx)? == Value::Bool(true) {
            return Ok(Value::Bool(true));
        }
    }
    Ok(Value::Bool(false))
}

/// `[cond, out, cond, out, ..., default?]`
fn case_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let mut pairs = args.chunks_exact(2);
    for pair in pairs.by_ref() {
        if evaluate(&pair[0], ctx)? == Value::Bool(true) {
            return evaluate(&pair[1], ctx);
        }
    }
    match pairs.remainder() {
        [default] => evaluate(default, ctx),
        _ => Err(ExprError::NoMatchingCase),
    }
}

fn coalesce_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    for arg in args {
        let value = evaluate(arg, ctx)?;
        if !value.is_null() {
            return Ok(value);
        }
    }
    Ok(Value::Null)
}

/// Checks that a `match` label is a number, a string or an array of them.
pub(crate) fn check_label(function: &str, index: usize, label: &Value) -> Result<(), ExprError> {
    match label {
        Value::Number(_) | Value::String(_) => Ok(()),
        Value::Array(labels) => match labels
            .iter()
            .find(|l| !matches!(l, Value::Number(_) | Value::String(_)))
        {
            Some(bad) => Err(ExprError::invalid_argument(
                function,
                index,
                "an array of numbers or strings",
                type_name(bad),
            )),
            None => Ok(()),
        },
        other => Err(ExprError::invalid_argument(
            function,
            index,
            "a number, string or array label",
            type_name(other),
        )),
    }
}

/// Returns true if `input` matches a scalar label or is contained in an
/// array label.
pub(crate) fn label_matches(
    function: &str,
    index: usize,
    label: &Value,
    input: &Value,
) -> Result<bool, ExprError> {
    check_label(function, index, label)?;
    Ok(match label {
        Value::Array(labels) => contains(labels, input),
        scalar => values_equal(scalar, input),
    })
}

/// Checks that a `match` input is a number or a string.
pub(crate) fn check_match_input(input: &Value) -> Result<(), ExprError> {
    match EqualityClass::of(input) {
        EqualityClass::Number | EqualityClass::String => Ok(()),
        class => Err(ExprError::InvalidInputType {
            operator: "match".to_string(),
            found: class.name(),
        }),
    }
}

/// `[input, label, out, label, out, ..., default?]`
fn match_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let input = evaluate(&args[0], ctx)?;
    check_match_input(&input)?;
    let mut pairs = args[1..].chunks_exact(2);
    let mut index = 1;
    for pair in pairs.by_ref() {
        let label = evaluate(&pair[0], ctx)?;
        if label_matches(names::MATCH, index, &label, &input)? {
            return evaluate(&pair[1], ctx);
        }
        index += 2;
    }
    match pairs.remainder() {
        [default] => evaluate(default, ctx),
        _ => Err(ExprError::NoMatchingLabel),
    }
}

pub fn functions() -> Vec<Arc<FunctionDefinition>> {
    let boolean = Some(EqualityClass::Boolean);
    vec![
        Arc::new(FunctionDefinition {
            name: names::NOT,
            arity: Arity::Fixed(1),
            returns: boolean,
            eval_fn: not_eval,
        }),
        Arc::new(FunctionDefinition {
            name: names::LESS_THAN,
            arity: Arity::Fixed(2),
            returns: boolean,
            eval_fn: less_than_eval,
        }),
        Arc::new(FunctionDefinition {
            name: names::LESS_EQUAL_THAN,
            arity: Arity::Fixed(2),
            returns: boolean,
            eval_fn: less_equal_than_eval,
        }),
        Arc::new(FunctionDefinition {
            name: names::GREATER_THAN,
            arity: Arity::Fixed(2),
            returns: boolean,
            eval_fn: greater_than_eval,
        }),
        Arc::new(FunctionDefinition {
            name: names::GREATER_EQUAL_THAN,
            arity: Arity::Fixed(2),
            returns: boolean,
            eval_fn: greater_equal_than_eval,
        }),
        Arc::new(FunctionDefinition {
            name: names::EQUAL_TO,
            arity: Arity::Fixed(2),
            returns: boolean,
            eval_fn: equal_to_eval,
        }),
        Arc::new(FunctionDefinition {
            name: names::ALL,
            arity: Arity::AtLeast(1),
            returns: boolean,
            eval_fn: all_eval,
        }),
        Arc::new(FunctionDefinition {
            name: names::ANY,
            arity: Arity::AtLeast(1),
            returns: boolean,
            eval_fn: any_eval,
        }),
        Arc::new(FunctionDefinition {
            name: names::CASE,
            arity: Arity::AtLeast(1),
            returns: None,
            eval_fn: case_eval,
        }),
        Arc::new(FunctionDefinition {
            name: names::COALESCE,
            arity: Arity::AtLeast(1),
            returns: None,
            eval_fn: coalesce_eval,
        }),
        Arc::new(FunctionDefinition {
            name: names::MATCH,
            arity: Arity::AtLeast(2),
            returns: None,
            eval_fn: match_eval,
        }),
    ]
}
