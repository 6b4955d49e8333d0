//! The unified evaluator.
//!
//! Constant folding and per-feature evaluation share this one function; only
//! the [`ValueSource`](crate::source::ValueSource) behind the context differs.

use crate::error::ExprError;
use crate::eval_ctx::EvalCtx;
use crate::expression::Expression;
use crate::types::assert_arity;
use serde_json::Value;

/// Evaluates a compiled expression against an execution context.
///
/// - Literals evaluate to themselves.
/// - Property accessors ask the value source; a missing property is `null`.
/// - Function nodes dispatch to the registered definition, which receives its
///   arguments unevaluated.
pub fn evaluate(expr: &Expression, ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    match expr {
        Expression::Literal(v) => Ok(v.clone()),
        Expression::Property(name) => Ok(ctx.source.property(name)?.unwrap_or(Value::Null)),
        Expression::Function { name, args } => {
            if ctx.depth >= ctx.max_depth {
                return Err(ExprError::Resolution(format!(
                    "evaluation of \"{}\" exceeds the maximum depth of {}",
                    name, ctx.max_depth
                )));
            }
            let def = ctx
                .functions
                .get(*name)
                .cloned()
                .ok_or_else(|| ExprError::UnknownFunction(name.to_string()))?;
            assert_arity(def.name, def.arity, args.len())?;

            ctx.depth += 1;
            let result = (def.eval_fn)(args, ctx);
            ctx.depth -= 1;
            result
        }
    }
}
