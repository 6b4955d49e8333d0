//! `interpolate` and `step`.
//!
//! Stops are number literals in strictly ascending order. The node folds
//! when its input is constant, even if outputs away from the input are not.

use crate::args;
use crate::compile_ctx::CompileCtx;
use crate::error::ExprError;
use crate::expression::Expression;
use crate::functions::names;
use crate::functions::ramps::Interpolation;
use crate::operators::RampOp;
use crate::value::{number, type_name};
use serde_json::Value;
use tracing::debug;

pub fn compile(op: RampOp, node: &[Value], ctx: &mut CompileCtx) -> Result<Expression, ExprError> {
    args::expect_operator(op.name(), node)?;
    args::expect_pairs(op.name(), node, 2)?;
    let compiled = match op {
        RampOp::Interpolate => {
            let curve = args::literal_at(op.name(), node, 1)?;
            let interpolation = Interpolation::parse(curve).ok_or_else(|| {
                ExprError::invalid_argument(
                    op.name(),
                    1,
                    "[\"linear\"], [\"exponential\", base] or [\"cubic-bezier\", x1, y1, x2, y2]",
                    type_name(curve),
                )
            })?;
            let mut parts = vec![
                Expression::Literal(interpolation.to_value()),
                args::number_expression_at(op.name(), node, 2, ctx)?,
            ];
            parts.extend(stops(op, node, 3, ctx)?);
            Expression::function(names::INTERPOLATE, parts)
        }
        RampOp::Step => {
            let mut parts = vec![
                args::number_expression_at(op.name(), node, 1, ctx)?,
                args::expression_at(op.name(), node, 2, ctx)?,
            ];
            parts.extend(stops(op, node, 3, ctx)?);
            Expression::function(names::STEP, parts)
        }
    };
    let folded = ctx.try_fold(compiled)?;
    if !folded.is_literal() {
        debug!(operator = op.name(), "ramp deferred to runtime");
    }
    Ok(folded)
}

/// Compiles the `stop, output` pairs starting at `first`.
fn stops(
    op: RampOp,
    node: &[Value],
    first: usize,
    ctx: &mut CompileCtx,
) -> Result<Vec<Expression>, ExprError> {
    let mut parts = Vec::with_capacity(node.len() - first);
    let mut previous: Option<f64> = None;
    for index in (first..node.len()).step_by(2) {
        let stop = args::number_literal_at(op.name(), node, index)?;
        if previous.is_some_and(|p| stop <= p) {
            return Err(ExprError::invalid_argument(
                op.name(),
                index,
                "a stop greater than the previous one",
                "number",
            ));
        }
        previous = Some(stop);
        parts.push(Expression::Literal(number(stop)));
        parts.push(args::expression_at(op.name(), node, index + 1, ctx)?);
    }
    Ok(parts)
}
