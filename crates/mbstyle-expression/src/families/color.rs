use crate::args;
use crate::compile_ctx::CompileCtx;
use crate::error::ExprError;
use crate::expression::Expression;
use crate::functions::{math, names};
use crate::operators::ColorOp;
use serde_json::Value;

/// `rgb` becomes `"#rrggbb"`. Channels are rounded but not range checked.
pub fn compile(op: ColorOp, node: &[Value], ctx: &mut CompileCtx) -> Result<Expression, ExprError> {
    args::expect_operator(op.name(), node)?;
    match op {
        ColorOp::Rgb => {
            let mut parts = vec![Expression::literal("#")];
            for index in 1..=3 {
                let channel = args::number_expression_at(op.name(), node, index, ctx)?;
                let rounded = ctx.fold(Expression::function(math::ROUND, vec![channel]))?;
                parts.push(ctx.fold(Expression::function(names::TO_HEX, vec![rounded]))?);
            }
            ctx.fold(Expression::function(names::CONCATENATE, parts))
        }
        ColorOp::Rgba | ColorOp::ToRgba => Err(ExprError::NotSupported(op.name().to_string())),
    }
}
