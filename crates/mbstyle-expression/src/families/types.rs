use crate::args;
use crate::compile_ctx::CompileCtx;
use crate::error::ExprError;
use crate::expression::Expression;
use crate::operators::TypesOp;
use serde_json::Value;

/// Type assertions and conversions are recognised but not supported.
pub fn compile(
    op: TypesOp,
    node: &[Value],
    _ctx: &mut CompileCtx,
) -> Result<Expression, ExprError> {
    args::expect_operator(op.name(), node)?;
    Err(ExprError::NotSupported(op.name().to_string()))
}
