//! `at`, `get`, `has` and `length`.

use super::deferred;
use crate::args;
use crate::compile_ctx::CompileCtx;
use crate::error::ExprError;
use crate::expression::Expression;
use crate::functions::lookup::length_of;
use crate::functions::names;
use crate::operators::LookupOp;
use crate::value::EqualityClass;
use serde_json::Value;

pub fn compile(
    op: LookupOp,
    node: &[Value],
    ctx: &mut CompileCtx,
) -> Result<Expression, ExprError> {
    args::expect_operator(op.name(), node)?;
    match op {
        LookupOp::At => at(node, ctx),
        LookupOp::Get => get(node, ctx),
        LookupOp::Has => has(node, ctx),
        LookupOp::Length => length(node, ctx),
    }
}

fn at(node: &[Value], ctx: &mut CompileCtx) -> Result<Expression, ExprError> {
    let name = LookupOp::At.name();
    let index = args::number_value_at(name, node, 1, ctx)?;
    let array = args::typed_array_at(name, node, 2, ctx)?;
    if index.fract() != 0.0 {
        return Err(ExprError::invalid_argument(name, 1, "an integer index", "number"));
    }
    let position = index as i64;
    usize::try_from(position)
        .ok()
        .and_then(|i| array.get(i))
        .map(|value| Expression::Literal(value.clone()))
        .ok_or(ExprError::IndexOutOfBounds {
            operator: name.to_string(),
            index: position,
            len: array.len(),
        })
}

fn get(node: &[Value], ctx: &mut CompileCtx) -> Result<Expression, ExprError> {
    let name = LookupOp::Get.name();
    let key = args::string_value_at(name, node, 1, ctx)?;
    if node.len() == 2 {
        return Ok(Expression::Property(key));
    }
    let object = args::object_at(name, node, 2, ctx)?;
    Ok(Expression::Literal(object.get(&key).cloned().unwrap_or(Value::Null)))
}

fn has(node: &[Value], ctx: &mut CompileCtx) -> Result<Expression, ExprError> {
    let name = LookupOp::Has.name();
    let key = args::string_value_at(name, node, 1, ctx)?;
    if node.len() == 2 {
        return deferred(name, names::PROPERTY_EXISTS, vec![Expression::literal(key)]);
    }
    let object = args::object_at(name, node, 2, ctx)?;
    Ok(Expression::literal(object.contains_key(&key)))
}

/// Picks the cheapest runtime function the argument's class allows.
fn length(node: &[Value], ctx: &mut CompileCtx) -> Result<Expression, ExprError> {
    let name = LookupOp::Length.name();
    let arg = args::value_or_expression_at(name, node, 1, ctx)?;
    if let Some(value) = arg.as_literal() {
        return length_of(name, value).map(Expression::Literal);
    }
    match ctx.static_class(&arg) {
        Some(EqualityClass::String) => deferred(name, names::STR_LENGTH, vec![arg]),
        Some(EqualityClass::Sequence) => deferred(name, names::LIST_SIZE, vec![arg]),
        Some(class) => Err(ExprError::invalid_argument(name, 1, "a string or array", class.name())),
        None => deferred(name, names::LENGTH, vec![arg]),
    }
}
