use crate::args;
use crate::compile_ctx::CompileCtx;
use crate::error::ExprError;
use crate::expression::Expression;
use crate::functions::names;
use crate::operators::StringOp;
use serde_json::Value;

pub fn compile(
    op: StringOp,
    node: &[Value],
    ctx: &mut CompileCtx,
) -> Result<Expression, ExprError> {
    args::expect_operator(op.name(), node)?;
    let function = match op {
        StringOp::Concat => names::CONCATENATE,
        StringOp::Downcase => names::TO_LOWER_CASE,
        StringOp::Upcase => names::TO_UPPER_CASE,
    };
    let parts = (1..node.len())
        .map(|index| args::expression_at(op.name(), node, index, ctx))
        .collect::<Result<Vec<_>, _>>()?;
    ctx.fold(Expression::function(function, parts))
}
