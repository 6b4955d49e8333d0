//! Functions that read the feature or the render environment. None of them
//! can be folded: the constants-only source leaves them unresolved.

use super::{eval_number, eval_string, names};
use crate::error::ExprError;
use crate::eval_ctx::EvalCtx;
use crate::expression::Expression;
use crate::types::{Arity, FunctionDefinition};
use crate::value::{number, EqualityClass};
use serde_json::Value;
use std::sync::Arc;

/// Environment variable holding the current scale denominator.
pub const SCALE_DENOMINATOR: &str = "wms_scale_denominator";

/// Scale denominator of zoom level 0 in web mercator, at 0.28mm per pixel.
const ZOOM_ZERO_SCALE: f64 = 559_082_264.028_717_8;

/// Converts a scale denominator to a (fractional) zoom level.
pub fn zoom_level(scale_denominator: f64) -> f64 {
    (ZOOM_ZERO_SCALE / scale_denominator).log2()
}

fn geometry_type_eval(_args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    ctx.source.geometry_type()
}

fn id_eval(_args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    ctx.source.feature_id()
}

fn properties_eval(_args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    ctx.source.properties()
}

fn env_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let name = eval_string(names::ENV, 0, args, ctx)?;
    ctx.source.env(&name)
}

/// `zoomLevel(scaleDenominator, crs)`. Only web mercator is supported.
fn zoom_level_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let scale = eval_number(names::ZOOM_LEVEL, 0, args, ctx)?;
    let crs = eval_string(names::ZOOM_LEVEL, 1, args, ctx)?;
    if crs != "EPSG:3857" {
        return Err(ExprError::NotSupported(format!("zoom level in {}", crs)));
    }
    Ok(number(zoom_level(scale)))
}

pub fn functions() -> Vec<Arc<FunctionDefinition>> {
    vec![
        Arc::new(FunctionDefinition {
            name: names::GEOMETRY_TYPE,
            arity: Arity::Fixed(0),
            returns: None,
            eval_fn: geometry_type_eval,
        }),
        Arc::new(FunctionDefinition {
            name: names::ID,
            arity: Arity::Fixed(0),
            returns: None,
            eval_fn: id_eval,
        }),
        Arc::new(FunctionDefinition {
            name: names::PROPERTIES,
            arity: Arity::Fixed(0),
            returns: Some(EqualityClass::Mapping),
            eval_fn: properties_eval,
        }),
        Arc::new(FunctionDefinition {
            name: names::ENV,
            arity: Arity::Fixed(1),
            returns: None,
            eval_fn: env_eval,
        }),
        Arc::new(FunctionDefinition {
            name: names::ZOOM_LEVEL,
            arity: Arity::Fixed(2),
            returns: Some(EqualityClass::Number),
            eval_fn: zoom_level_eval,
        }),
    ]
}
