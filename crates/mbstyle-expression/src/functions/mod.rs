//! Runtime functions referenced by compiled trees.
//!
//! Two kinds live here: the shims that carry style semantics the engine does
//! not have (`mbEqualTo`, `mbCase`, ...) and the engine built-ins the compiler
//! emits (`not`, `add`, `Concatenate`, ...). Registering both in one map lets
//! the constant folder and the per-feature evaluator share every definition.

pub mod convert;
pub mod decision;
pub mod feature;
pub mod lookup;
pub mod math;
pub mod ramps;
pub mod string;

use crate::error::ExprError;
use crate::eval_ctx::EvalCtx;
use crate::evaluate::evaluate;
use crate::expression::Expression;
use crate::types::{functions_to_map, FunctionDefinition, FunctionMap};
use crate::value::{as_f64, type_name};
use serde_json::Value;
use std::sync::Arc;

/// Names of the registered functions.
pub mod names {
    pub const EQUAL_TO: &str = "mbEqualTo";
    pub const ALL: &str = "mbAll";
    pub const ANY: &str = "mbAny";
    pub const CASE: &str = "mbCase";
    pub const COALESCE: &str = "mbCoalesce";
    pub const MATCH: &str = "mbMatch";
    pub const LIST_SIZE: &str = "listSize";
    pub const STR_LENGTH: &str = "strLength";
    pub const LENGTH: &str = "mbLength";
    pub const TO_NUMBER: &str = "mbToNumber";
    pub const ARRAY: &str = "mbArray";
    pub const TO_HEX: &str = "tohex";

    pub const NOT: &str = "not";
    pub const LESS_THAN: &str = "lessThan";
    pub const LESS_EQUAL_THAN: &str = "lessEqualThan";
    pub const GREATER_THAN: &str = "greaterThan";
    pub const GREATER_EQUAL_THAN: &str = "greaterEqualThan";

    pub const CONCATENATE: &str = "Concatenate";
    pub const TO_LOWER_CASE: &str = "strToLowerCase";
    pub const TO_UPPER_CASE: &str = "strToUpperCase";

    pub const PROPERTY_EXISTS: &str = "PropertyExists";
    pub const GEOMETRY_TYPE: &str = "geometryType";
    pub const ID: &str = "id";
    pub const PROPERTIES: &str = "properties";
    pub const ENV: &str = "env";
    pub const ZOOM_LEVEL: &str = "zoomLevel";

    pub const INTERPOLATE: &str = "interpolate";
    pub const STEP: &str = "step";
}

/// All functions combined.
pub fn all_functions() -> Vec<Arc<FunctionDefinition>> {
    let mut fns = Vec::new();
    fns.extend(decision::functions());
    fns.extend(lookup::functions());
    fns.extend(convert::functions());
    fns.extend(math::functions());
    fns.extend(string::functions());
    fns.extend(feature::functions());
    fns.extend(ramps::functions());
    fns
}

/// Build the function map from all functions.
pub fn functions_map() -> FunctionMap {
    functions_to_map(all_functions())
}

pub(crate) fn eval_number(
    function: &str,
    index: usize,
    args: &[Expression],
    ctx: &mut EvalCtx<'_>,
) -> Result<f64, ExprError> {
    let value = evaluate(&args[index], ctx)?;
    as_f64(&value)
        .ok_or_else(|| ExprError::invalid_argument(function, index, "a number", type_name(&value)))
}

pub(crate) fn eval_string(
    function: &str,
    index: usize,
    args: &[Expression],
    ctx: &mut EvalCtx<'_>,
) -> Result<String, ExprError> {
    match evaluate(&args[index], ctx)? {
        Value::String(s) => Ok(s),
        other => Err(ExprError::invalid_argument(
            function,
            index,
            "a string",
            type_name(&other),
        )),
    }
}
