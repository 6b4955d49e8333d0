//! Arithmetic functions. Every argument must evaluate to a number.
//!
//! A result outside the finite range becomes `null`. Functions that can get
//! there from finite input (`div`, `log2`, `sqrt`, ...) declare no fixed
//! class, so operators consuming them coerce through `mbToNumber`.

use super::eval_number;
use crate::error::ExprError;
use crate::eval_ctx::EvalCtx;
use crate::expression::Expression;
use crate::types::{Arity, FunctionDefinition};
use crate::value::{number, EqualityClass};
use serde_json::Value;
use std::sync::Arc;

pub const ADD: &str = "add";
pub const SUB: &str = "sub";
pub const MUL: &str = "mul";
pub const DIV: &str = "div";
pub const MOD: &str = "mod";
pub const POW: &str = "pow";
pub const NEG: &str = "neg";
pub const MAX: &str = "max";
pub const MIN: &str = "min";
pub const ROUND: &str = "round";

fn numbers(
    function: &str,
    args: &[Expression],
    ctx: &mut EvalCtx<'_>,
) -> Result<Vec<f64>, ExprError> {
    (0..args.len())
        .map(|i| eval_number(function, i, args, ctx))
        .collect()
}

fn add_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    Ok(number(numbers(ADD, args, ctx)?.into_iter().sum()))
}

fn mul_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    Ok(number(numbers(MUL, args, ctx)?.into_iter().product()))
}

fn sub_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let a = eval_number(SUB, 0, args, ctx)?;
    let b = eval_number(SUB, 1, args, ctx)?;
    Ok(number(a - b))
}

fn div_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let a = eval_number(DIV, 0, args, ctx)?;
    let b = eval_number(DIV, 1, args, ctx)?;
    Ok(number(a / b))
}

fn mod_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let a = eval_number(MOD, 0, args, ctx)?;
    let b = eval_number(MOD, 1, args, ctx)?;
    Ok(number(a % b))
}

fn pow_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let a = eval_number(POW, 0, args, ctx)?;
    let b = eval_number(POW, 1, args, ctx)?;
    Ok(number(a.powf(b)))
}

fn max_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let ns = numbers(MAX, args, ctx)?;
    Ok(number(ns.into_iter().fold(f64::NEG_INFINITY, f64::max)))
}

fn min_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let ns = numbers(MIN, args, ctx)?;
    Ok(number(ns.into_iter().fold(f64::INFINITY, f64::min)))
}

macro_rules! unary {
    ($($fn_name:ident => $name:literal, $op:expr, $returns:expr;)*) => {
        $(
            fn $fn_name(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
                let f: fn(f64) -> f64 = $op;
                Ok(number(f(eval_number($name, 0, args, ctx)?)))
            }
        )*

        fn unary_functions() -> Vec<Arc<FunctionDefinition>> {
            vec![
                $(Arc::new(FunctionDefinition {
                    name: $name,
                    arity: Arity::Fixed(1),
                    returns: $returns,
                    eval_fn: $fn_name,
                }),)*
            ]
        }
    };
}

const NUMBER: Option<EqualityClass> = Some(EqualityClass::Number);

unary! {
    neg_eval => "neg", |x| -x, NUMBER;
    abs_eval => "abs", f64::abs, NUMBER;
    acos_eval => "acos", f64::acos, None;
    asin_eval => "asin", f64::asin, None;
    atan_eval => "atan", f64::atan, NUMBER;
    ceil_eval => "ceil", f64::ceil, NUMBER;
    cos_eval => "cos", f64::cos, NUMBER;
    floor_eval => "floor", f64::floor, NUMBER;
    ln_eval => "ln", f64::ln, None;
    log10_eval => "log10", f64::log10, None;
    log2_eval => "log2", f64::log2, None;
    round_eval => "round", f64::round, NUMBER;
    sin_eval => "sin", f64::sin, NUMBER;
    sqrt_eval => "sqrt", f64::sqrt, None;
    tan_eval => "tan", f64::tan, NUMBER;
}

pub fn functions() -> Vec<Arc<FunctionDefinition>> {
    let num = NUMBER;
    let mut fns = vec![
        Arc::new(FunctionDefinition {
            name: ADD,
            arity: Arity::AtLeast(2),
            returns: num,
            eval_fn: add_eval,
        }),
        Arc::new(FunctionDefinition {
            name: MUL,
            arity: Arity::AtLeast(2),
            returns: num,
            eval_fn: mul_eval,
        }),
        Arc::new(FunctionDefinition {
            name: SUB,
            arity: Arity::Fixed(2),
            returns: num,
            eval_fn: sub_eval,
        }),
        Arc::new(FunctionDefinition {
            name: DIV,
            arity: Arity::Fixed(2),
            returns: None,
            eval_fn: div_eval,
        }),
        Arc::new(FunctionDefinition {
            name: MOD,
            arity: Arity::Fixed(2),
            returns: None,
            eval_fn: mod_eval,
        }),
        Arc::new(FunctionDefinition {
            name: POW,
            arity: Arity::Fixed(2),
            returns: None,
            eval_fn: pow_eval,
        }),
        Arc::new(FunctionDefinition {
            name: MAX,
            arity: Arity::AtLeast(1),
            returns: num,
            eval_fn: max_eval,
        }),
        Arc::new(FunctionDefinition {
            name: MIN,
            arity: Arity::AtLeast(1),
            returns: num,
            eval_fn: min_eval,
        }),
    ];
    fns.extend(unary_functions());
    fns
}
