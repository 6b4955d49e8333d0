//! Per-family compilers.
//!
//! Each module exposes `compile(op, node, ctx)`, called by the dispatcher
//! after the operator's arity has been checked. `node[0]` is the operator
//! name.

pub mod color;
pub mod decision;
pub mod feature_data;
pub mod heatmap;
pub mod lookup;
pub mod math;
pub mod ramps;
pub mod string;
pub mod types;
pub mod variable;
pub mod zoom;

use crate::error::ExprError;
use crate::expression::Expression;
use tracing::debug;

/// Emits a call to a runtime function for a node that could not be resolved
/// at compile time.
pub(crate) fn deferred(
    operator: &str,
    function: &'static str,
    args: Vec<Expression>,
) -> Result<Expression, ExprError> {
    debug!(operator, function, "deferred to runtime");
    Ok(Expression::function(function, args))
}
