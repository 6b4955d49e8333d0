//! Typed access to the arguments of a raw expression array.
//!
//! Index 0 of `node` is the operator name, so argument `i` is `node[i]`.

use crate::compile::compile_node;
use crate::compile_ctx::CompileCtx;
use crate::error::ExprError;
use crate::expression::Expression;
use crate::functions::names;
use crate::operators::Operator;
use crate::value::{type_name, EqualityClass};
use serde_json::{Map, Value};

/// Fails unless `node` is headed by `expected`.
pub fn expect_operator(expected: &str, node: &[Value]) -> Result<(), ExprError> {
    match node.first().and_then(Value::as_str) {
        Some(actual) if actual == expected => Ok(()),
        actual => Err(ExprError::UnexpectedOperator {
            expected: expected.to_string(),
            actual: actual.map_or_else(|| "nothing".to_string(), str::to_string),
        }),
    }
}

/// Returns true if `value` is an array whose head names a known operator.
pub fn is_expression(value: &Value) -> bool {
    value
        .as_array()
        .and_then(|arr| arr.first())
        .and_then(Value::as_str)
        .is_some_and(|name| Operator::from_name(name).is_some())
}

/// The raw argument at `index`, taken verbatim.
pub fn literal_at<'v>(
    operator: &str,
    node: &'v [Value],
    index: usize,
) -> Result<&'v Value, ExprError> {
    node.get(index).ok_or_else(|| {
        ExprError::MalformedExpression(format!(
            "\"{}\" is missing argument #{}",
            operator, index
        ))
    })
}

/// Compiles the argument at `index`.
///
/// Arrays headed by a string are expressions; any other array, object or
/// scalar is a literal. The result is folded when it is constant.
pub fn expression_at(
    operator: &str,
    node: &[Value],
    index: usize,
    ctx: &mut CompileCtx,
) -> Result<Expression, ExprError> {
    match literal_at(operator, node, index)? {
        Value::Array(arr) if arr.first().is_some_and(Value::is_string) => compile_node(arr, ctx),
        other => Ok(Expression::Literal(other.clone())),
    }
}

/// Compiles the argument at `index` only if it is a known expression.
///
/// Arrays whose head is not an operator name are literal sequences here, so
/// `["a", "b"]` is a list of two strings.
pub fn value_or_expression_at(
    operator: &str,
    node: &[Value],
    index: usize,
    ctx: &mut CompileCtx,
) -> Result<Expression, ExprError> {
    match literal_at(operator, node, index)? {
        Value::Array(arr) if is_expression(&node[index]) => compile_node(arr, ctx),
        other => Ok(Expression::Literal(other.clone())),
    }
}

/// Resolves the argument at `index` to a value at compile time.
pub fn constant_at(
    operator: &str,
    node: &[Value],
    index: usize,
    ctx: &mut CompileCtx,
    expected: &'static str,
) -> Result<Value, ExprError> {
    let expr = value_or_expression_at(operator, node, index, ctx)?;
    ctx.try_constant(&expr)?.ok_or_else(|| {
        ExprError::invalid_argument(operator, index, expected, "a feature-dependent expression")
    })
}

pub fn string_value_at(
    operator: &str,
    node: &[Value],
    index: usize,
    ctx: &mut CompileCtx,
) -> Result<String, ExprError> {
    const EXPECTED: &str = "a constant string";
    match constant_at(operator, node, index, ctx, EXPECTED)? {
        Value::String(s) => Ok(s),
        other => Err(ExprError::invalid_argument(operator, index, EXPECTED, type_name(&other))),
    }
}

pub fn number_value_at(
    operator: &str,
    node: &[Value],
    index: usize,
    ctx: &mut CompileCtx,
) -> Result<f64, ExprError> {
    const EXPECTED: &str = "a constant number";
    let value = constant_at(operator, node, index, ctx, EXPECTED)?;
    value
        .as_f64()
        .ok_or_else(|| ExprError::invalid_argument(operator, index, EXPECTED, type_name(&value)))
}

/// A constant array, given either literally or as an expression that folds
/// to one.
pub fn typed_array_at(
    operator: &str,
    node: &[Value],
    index: usize,
    ctx: &mut CompileCtx,
) -> Result<Vec<Value>, ExprError> {
    const EXPECTED: &str = "a constant array";
    match constant_at(operator, node, index, ctx, EXPECTED)? {
        Value::Array(arr) => Ok(arr),
        other => Err(ExprError::invalid_argument(operator, index, EXPECTED, type_name(&other))),
    }
}

pub fn object_at(
    operator: &str,
    node: &[Value],
    index: usize,
    ctx: &mut CompileCtx,
) -> Result<Map<String, Value>, ExprError> {
    const EXPECTED: &str = "a constant object";
    match constant_at(operator, node, index, ctx, EXPECTED)? {
        Value::Object(obj) => Ok(obj),
        other => Err(ExprError::invalid_argument(operator, index, EXPECTED, type_name(&other))),
    }
}

/// A raw numeric literal, e.g. a ramp stop.
pub fn number_literal_at(operator: &str, node: &[Value], index: usize) -> Result<f64, ExprError> {
    let value = literal_at(operator, node, index)?;
    value
        .as_f64()
        .ok_or_else(|| {
            ExprError::invalid_argument(operator, index, "a number literal", type_name(value))
        })
}

/// Compiles a numeric operand.
///
/// Constants must be numbers. Deferred operands whose class cannot be known
/// until render time are wrapped in `mbToNumber`.
pub fn number_expression_at(
    operator: &str,
    node: &[Value],
    index: usize,
    ctx: &mut CompileCtx,
) -> Result<Expression, ExprError> {
    let expr = expression_at(operator, node, index, ctx)?;
    match ctx.static_class(&expr) {
        Some(EqualityClass::Number) => Ok(expr),
        Some(class) => Err(ExprError::invalid_argument(operator, index, "a number", class.name())),
        None => Ok(Expression::function(names::TO_NUMBER, vec![expr])),
    }
}

/// Fails unless the arguments after the first `fixed` ones come in pairs.
pub fn expect_pairs(operator: &str, node: &[Value], fixed: usize) -> Result<(), ExprError> {
    let rest = node.len().saturating_sub(1 + fixed);
    if rest % 2 == 0 {
        Ok(())
    } else {
        Err(ExprError::Arity {
            operator: operator.to_string(),
            expected: format!("{} plus an even number of", fixed),
            found: node.len() - 1,
        })
    }
}
