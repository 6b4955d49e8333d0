use crate::args;
use crate::compile_ctx::CompileCtx;
use crate::error::ExprError;
use crate::expression::Expression;
use crate::functions::names;
use crate::operators::FeatureDataOp;
use serde_json::Value;

pub fn compile(
    op: FeatureDataOp,
    node: &[Value],
    _ctx: &mut CompileCtx,
) -> Result<Expression, ExprError> {
    args::expect_operator(op.name(), node)?;
    let function = match op {
        FeatureDataOp::GeometryType => names::GEOMETRY_TYPE,
        FeatureDataOp::Id => names::ID,
        FeatureDataOp::Properties => names::PROPERTIES,
    };
    super::deferred(op.name(), function, Vec::new())
}
