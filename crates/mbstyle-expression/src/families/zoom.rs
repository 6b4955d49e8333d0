use crate::args;
use crate::compile_ctx::CompileCtx;
use crate::error::ExprError;
use crate::expression::Expression;
use crate::functions::feature::SCALE_DENOMINATOR;
use crate::functions::names;
use crate::operators::ZoomOp;
use serde_json::Value;

/// `zoom` is derived from the scale denominator of the render pass, so it is
/// never constant.
pub fn compile(op: ZoomOp, node: &[Value], _ctx: &mut CompileCtx) -> Result<Expression, ExprError> {
    args::expect_operator(op.name(), node)?;
    match op {
        ZoomOp::Zoom => {
            let scale =
                Expression::function(names::ENV, vec![Expression::literal(SCALE_DENOMINATOR)]);
            super::deferred(
                op.name(),
                names::ZOOM_LEVEL,
                vec![scale, Expression::literal("EPSG:3857")],
            )
        }
    }
}
