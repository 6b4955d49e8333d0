//! Arithmetic operators.
//!
//! Constant operands fold; the rest compile to the engine's math functions.

use crate::args;
use crate::compile_ctx::CompileCtx;
use crate::error::ExprError;
use crate::expression::Expression;
use crate::functions::math;
use crate::operators::MathOp;
use crate::value::number;
use serde_json::Value;
use std::f64::consts;

pub fn compile(op: MathOp, node: &[Value], ctx: &mut CompileCtx) -> Result<Expression, ExprError> {
    args::expect_operator(op.name(), node)?;
    let function = match op {
        MathOp::E => return Ok(Expression::Literal(number(consts::E))),
        MathOp::Pi => return Ok(Expression::Literal(number(consts::PI))),
        MathOp::Ln2 => return Ok(Expression::Literal(number(consts::LN_2))),
        MathOp::Subtract if node.len() == 2 => math::NEG,
        MathOp::Subtract => math::SUB,
        MathOp::Add => math::ADD,
        MathOp::Multiply => math::MUL,
        MathOp::Divide => math::DIV,
        MathOp::Remainder => math::MOD,
        MathOp::Power => math::POW,
        MathOp::Max => math::MAX,
        MathOp::Min => math::MIN,
        // The remaining unary operators share the engine's name.
        other => other.name(),
    };
    let operands = (1..node.len())
        .map(|index| args::number_expression_at(op.name(), node, index, ctx))
        .collect::<Result<Vec<_>, _>>()?;
    ctx.fold(Expression::function(function, operands))
}
