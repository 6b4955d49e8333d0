//! `!`, comparisons, `all`, `any`, `case`, `coalesce` and `match`.
//!
//! Whatever can be decided from constants is decided here; the rest becomes
//! a call to the matching runtime shim.

use super::deferred;
use crate::args;
use crate::compile_ctx::CompileCtx;
use crate::error::ExprError;
use crate::expression::Expression;
use crate::functions::decision::{check_label, check_match_input, label_matches};
use crate::functions::names;
use crate::operators::DecisionOp;
use crate::value::{type_name, values_equal, EqualityClass};
use serde_json::Value;

pub fn compile(
    op: DecisionOp,
    node: &[Value],
    ctx: &mut CompileCtx,
) -> Result<Expression, ExprError> {
    args::expect_operator(op.name(), node)?;
    match op {
        DecisionOp::Not => {
            let arg = args::expression_at(op.name(), node, 1, ctx)?;
            ctx.fold(Expression::function(names::NOT, vec![arg]))
        }
        DecisionOp::Equal => equality(op, node, ctx, false),
        DecisionOp::NotEqual => equality(op, node, ctx, true),
        DecisionOp::Less => comparison(op, names::LESS_THAN, node, ctx),
        DecisionOp::LessEqual => comparison(op, names::LESS_EQUAL_THAN, node, ctx),
        DecisionOp::Greater => comparison(op, names::GREATER_THAN, node, ctx),
        DecisionOp::GreaterEqual => comparison(op, names::GREATER_EQUAL_THAN, node, ctx),
        DecisionOp::All => logical(op, names::ALL, false, node, ctx),
        DecisionOp::Any => logical(op, names::ANY, true, node, ctx),
        DecisionOp::Case => case(node, ctx),
        DecisionOp::Coalesce => coalesce(node, ctx),
        DecisionOp::Match => match_(node, ctx),
    }
}

fn equality(
    op: DecisionOp,
    node: &[Value],
    ctx: &mut CompileCtx,
    negate: bool,
) -> Result<Expression, ExprError> {
    let left = args::expression_at(op.name(), node, 1, ctx)?;
    let right = args::expression_at(op.name(), node, 2, ctx)?;
    if ctx.options.fold_constants {
        if let (Some(a), Some(b)) = (left.as_literal(), right.as_literal()) {
            return Ok(Expression::literal(values_equal(a, b) != negate));
        }
    }
    let equal = deferred(op.name(), names::EQUAL_TO, vec![left, right])?;
    if negate {
        Ok(Expression::function(names::NOT, vec![equal]))
    } else {
        Ok(equal)
    }
}

fn comparison(
    op: DecisionOp,
    function: &'static str,
    node: &[Value],
    ctx: &mut CompileCtx,
) -> Result<Expression, ExprError> {
    let left = args::expression_at(op.name(), node, 1, ctx)?;
    let right = args::expression_at(op.name(), node, 2, ctx)?;
    ctx.fold(Expression::function(function, vec![left, right]))
}

/// `all` and `any`. `decisive` is the value that ends evaluation: `false`
/// for `all`, `true` for `any`.
fn logical(
    op: DecisionOp,
    shim: &'static str,
    decisive: bool,
    node: &[Value],
    ctx: &mut CompileCtx,
) -> Result<Expression, ExprError> {
    let mut compiled = Vec::with_capacity(node.len() - 1);
    let mut pending = false;
    for index in 1..node.len() {
        let arg = args::expression_at(op.name(), node, index, ctx)?;
        match arg.as_literal() {
            Some(Value::Bool(b)) if *b == decisive => {
                if !pending {
                    return Ok(Expression::literal(decisive));
                }
                compiled.push(arg);
                break;
            }
            Some(Value::Bool(_)) => compiled.push(arg),
            Some(other) => {
                return Err(ExprError::invalid_argument(
                    op.name(),
                    index,
                    "a boolean",
                    type_name(other),
                ))
            }
            None => {
                let class = ctx.static_class(&arg);
                if let Some(class) = class.filter(|c| *c != EqualityClass::Boolean) {
                    return Err(ExprError::invalid_argument(
                        op.name(),
                        index,
                        "a boolean",
                        class.name(),
                    ));
                }
                pending = true;
                compiled.push(arg);
            }
        }
    }
    if !pending {
        return Ok(Expression::literal(!decisive));
    }
    deferred(op.name(), shim, compiled)
}

fn case(node: &[Value], ctx: &mut CompileCtx) -> Result<Expression, ExprError> {
    let name = DecisionOp::Case.name();
    let mut compiled = Vec::new();
    let mut index = 1;
    while index + 1 < node.len() {
        let condition = args::expression_at(name, node, index, ctx)?;
        match condition.as_literal() {
            Some(Value::Bool(true)) => {
                let output = args::expression_at(name, node, index + 1, ctx)?;
                if compiled.is_empty() {
                    return Ok(output);
                }
                // The constant branch is the runtime default.
                compiled.push(output);
                return deferred(name, names::CASE, compiled);
            }
            Some(Value::Bool(false)) => {}
            Some(other) => {
                return Err(ExprError::invalid_argument(name, index, "a boolean", type_name(other)))
            }
            None => {
                compiled.push(condition);
                compiled.push(args::expression_at(name, node, index + 1, ctx)?);
            }
        }
        index += 2;
    }

    if index < node.len() {
        let default = args::expression_at(name, node, index, ctx)?;
        if compiled.is_empty() {
            return Ok(default);
        }
        compiled.push(default);
    } else if compiled.is_empty() {
        return Err(ExprError::NoMatchingCase);
    }
    deferred(name, names::CASE, compiled)
}

fn coalesce(node: &[Value], ctx: &mut CompileCtx) -> Result<Expression, ExprError> {
    let name = DecisionOp::Coalesce.name();
    let mut compiled = Vec::new();
    for index in 1..node.len() {
        let arg = args::expression_at(name, node, index, ctx)?;
        match arg.as_literal() {
            Some(Value::Null) => {}
            Some(_) if compiled.is_empty() => return Ok(arg),
            Some(_) => {
                compiled.push(arg);
                break;
            }
            None => compiled.push(arg),
        }
    }
    if compiled.is_empty() {
        return Ok(Expression::Literal(Value::Null));
    }
    deferred(name, names::COALESCE, compiled)
}

fn match_(node: &[Value], ctx: &mut CompileCtx) -> Result<Expression, ExprError> {
    let name = DecisionOp::Match.name();
    let input = args::expression_at(name, node, 1, ctx)?;

    if let Some(value) = input.as_literal() {
        check_match_input(value)?;
        let mut index = 2;
        while index + 1 < node.len() {
            let label = args::literal_at(name, node, index)?;
            if label_matches(name, index, label, value)? {
                return args::expression_at(name, node, index + 1, ctx);
            }
            index += 2;
        }
        if index < node.len() {
            return args::expression_at(name, node, index, ctx);
        }
        return Err(ExprError::NoMatchingLabel);
    }

    if let Some(class) = ctx.static_class(&input) {
        if !matches!(class, EqualityClass::Number | EqualityClass::String) {
            return Err(ExprError::InvalidInputType {
                operator: name.to_string(),
                found: class.name(),
            });
        }
    }
    let mut compiled = vec![input];
    let mut index = 2;
    while index + 1 < node.len() {
        let label = args::literal_at(name, node, index)?;
        check_label(name, index, label)?;
        compiled.push(Expression::Literal(label.clone()));
        compiled.push(args::expression_at(name, node, index + 1, ctx)?);
        index += 2;
    }
    if index < node.len() {
        compiled.push(args::expression_at(name, node, index, ctx)?);
    }
    deferred(name, names::MATCH, compiled)
}
