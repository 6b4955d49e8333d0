//! `let` and `var`.
//!
//! Bindings are substituted at compile time, so a bound expression is
//! compiled once and inlined at every `var`.

use crate::args;
use crate::compile_ctx::CompileCtx;
use crate::error::ExprError;
use crate::expression::Expression;
use crate::operators::VariableOp;
use crate::value::type_name;
use serde_json::Value;
use std::collections::HashMap;

pub fn compile(
    op: VariableOp,
    node: &[Value],
    ctx: &mut CompileCtx,
) -> Result<Expression, ExprError> {
    args::expect_operator(op.name(), node)?;
    match op {
        VariableOp::Let => {
            // name, value, ..., body
            args::expect_pairs(op.name(), node, 1)?;
            let body = node.len() - 1;
            let mut bindings = HashMap::new();
            for index in (1..body).step_by(2) {
                let name = variable_name(op, node, index)?;
                // Bindings see the enclosing scope, not each other.
                let value = args::expression_at(op.name(), node, index + 1, ctx)?;
                bindings.insert(name, value);
            }
            ctx.push_scope(bindings);
            let result = args::expression_at(op.name(), node, body, ctx);
            ctx.pop_scope();
            result
        }
        VariableOp::Var => {
            let name = variable_name(op, node, 1)?;
            ctx.lookup(&name)
                .cloned()
                .ok_or(ExprError::UnboundVariable(name))
        }
    }
}

fn variable_name(op: VariableOp, node: &[Value], index: usize) -> Result<String, ExprError> {
    match args::literal_at(op.name(), node, index)? {
        Value::String(name) => Ok(name.clone()),
        other => Err(ExprError::invalid_argument(
            op.name(),
            index,
            "a variable name",
            type_name(other),
        )),
    }
}
