use crate::args;
use crate::compile_ctx::CompileCtx;
use crate::error::ExprError;
use crate::expression::Expression;
use crate::functions::names;
use crate::operators::HeatmapOp;
use serde_json::Value;

/// Environment variable the renderer sets to the kernel density of the
/// current heatmap pixel.
pub const HEATMAP_DENSITY: &str = "heatmap-density";

pub fn compile(
    op: HeatmapOp,
    node: &[Value],
    _ctx: &mut CompileCtx,
) -> Result<Expression, ExprError> {
    args::expect_operator(op.name(), node)?;
    match op {
        HeatmapOp::HeatmapDensity => super::deferred(
            op.name(),
            names::ENV,
            vec![Expression::literal(HEATMAP_DENSITY)],
        ),
    }
}
