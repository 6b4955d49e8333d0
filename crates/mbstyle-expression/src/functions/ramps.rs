//! `interpolate` and `step` ramps.
//!
//! Compiled layout:
//! - `interpolate(curve, input, stop_1, output_1, ..., stop_n, output_n)`
//!   where `curve` is the literal interpolation array, e.g. `["linear"]`.
//! - `step(input, output_0, stop_1, output_1, ..., stop_n, output_n)`
//!
//! Only the outputs adjacent to the input are evaluated.

use super::{eval_number, names};
use crate::error::ExprError;
use crate::eval_ctx::EvalCtx;
use crate::evaluate::evaluate;
use crate::expression::Expression;
use crate::types::{Arity, FunctionDefinition};
use crate::value::{as_f64, number, type_name};
use serde_json::Value;
use std::sync::Arc;

/// How `interpolate` moves between two stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interpolation {
    Linear,
    Exponential(f64),
    CubicBezier([f64; 4]),
}

impl Interpolation {
    /// Parses `["linear"]`, `["exponential", base]` or
    /// `["cubic-bezier", x1, y1, x2, y2]`.
    pub fn parse(value: &Value) -> Option<Self> {
        let arr = value.as_array()?;
        let nums: Option<Vec<f64>> = arr.iter().skip(1).map(as_f64).collect();
        let nums = nums?;
        match (arr.first()?.as_str()?, nums.as_slice()) {
            ("linear", []) => Some(Interpolation::Linear),
            ("exponential", [base]) => Some(Interpolation::Exponential(*base)),
            ("cubic-bezier", [x1, y1, x2, y2]) => {
                Some(Interpolation::CubicBezier([*x1, *y1, *x2, *y2]))
            }
            _ => None,
        }
    }

    pub fn to_value(self) -> Value {
        match self {
            Interpolation::Linear => Value::Array(vec![Value::from("linear")]),
            Interpolation::Exponential(base) => {
                Value::Array(vec![Value::from("exponential"), number(base)])
            }
            Interpolation::CubicBezier(points) => {
                let mut arr = vec![Value::from("cubic-bezier")];
                arr.extend(points.iter().map(|p| number(*p)));
                Value::Array(arr)
            }
        }
    }

    /// Progress in `[0, 1]` of `input` between `lower` and `upper`.
    pub fn factor(self, input: f64, lower: f64, upper: f64) -> f64 {
        let diff = upper - lower;
        if diff == 0.0 {
            return 0.0;
        }
        let progress = input - lower;
        match self {
            Interpolation::Linear => progress / diff,
            Interpolation::Exponential(base) if base == 1.0 => progress / diff,
            Interpolation::Exponential(base) => {
                (base.powf(progress) - 1.0) / (base.powf(diff) - 1.0)
            }
            Interpolation::CubicBezier([x1, y1, x2, y2]) => {
                UnitBezier::new(x1, y1, x2, y2).solve(progress / diff)
            }
        }
    }
}

struct UnitBezier {
    ax: f64,
    bx: f64,
    cx: f64,
    ay: f64,
    by: f64,
    cy: f64,
}

impl UnitBezier {
    const EPSILON: f64 = 1e-6;

    fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        UnitBezier {
            ax: 1.0 - cx - bx,
            bx,
            cx,
            ay: 1.0 - cy - by,
            by,
            cy,
        }
    }

    fn sample_x(&self, t: f64) -> f64 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    fn sample_y(&self, t: f64) -> f64 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    fn sample_dx(&self, t: f64) -> f64 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    /// Finds `t` such that `sample_x(t) == x`: Newton first, bisection if it
    /// stalls.
    fn solve_x(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..8 {
            let err = self.sample_x(t) - x;
            if err.abs() < Self::EPSILON {
                return t;
            }
            let d = self.sample_dx(t);
            if d.abs() < Self::EPSILON {
                break;
            }
            t -= err / d;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        t = x.clamp(lo, hi);
        while lo < hi {
            let sample = self.sample_x(t);
            if (sample - x).abs() < Self::EPSILON {
                break;
            }
            if x > sample {
                lo = t;
            } else {
                hi = t;
            }
            t = (hi - lo) * 0.5 + lo;
            if hi - lo < Self::EPSILON {
                break;
            }
        }
        t
    }

    fn solve(&self, x: f64) -> f64 {
        self.sample_y(self.solve_x(x))
    }
}

fn lerp(index: usize, a: &Value, b: &Value, t: f64) -> Result<Value, ExprError> {
    match (a, b) {
        (Value::Number(_), Value::Number(_)) => {
            let (a, b) = (as_f64(a).unwrap_or(0.0), as_f64(b).unwrap_or(0.0));
            Ok(number(a + (b - a) * t))
        }
        (Value::Array(xs), Value::Array(ys)) if xs.len() == ys.len() => xs
            .iter()
            .zip(ys)
            .map(|(x, y)| lerp(index, x, y, t))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        (Value::Number(_) | Value::Array(_), other) | (other, _) => Err(ExprError::invalid_argument(
            names::INTERPOLATE,
            index,
            "a number or array of numbers",
            type_name(other),
        )),
    }
}

fn interpolate_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let curve = evaluate(&args[0], ctx)?;
    let interpolation = Interpolation::parse(&curve).ok_or_else(|| {
        ExprError::invalid_argument(
            names::INTERPOLATE,
            0,
            "an interpolation type",
            type_name(&curve),
        )
    })?;
    let input = eval_number(names::INTERPOLATE, 1, args, ctx)?;

    let pairs = (args.len() - 2) / 2;
    let stop_at = |i: usize| 2 + 2 * i;
    let mut stops = Vec::with_capacity(pairs);
    for i in 0..pairs {
        stops.push(eval_number(names::INTERPOLATE, stop_at(i), args, ctx)?);
    }

    let last = pairs - 1;
    if input <= stops[0] {
        return evaluate(&args[stop_at(0) + 1], ctx);
    }
    if input >= stops[last] {
        return evaluate(&args[stop_at(last) + 1], ctx);
    }
    let upper = stops.iter().position(|s| input < *s).unwrap_or(last);
    let lower = upper - 1;
    let t = interpolation.factor(input, stops[lower], stops[upper]);
    let a = evaluate(&args[stop_at(lower) + 1], ctx)?;
    let b = evaluate(&args[stop_at(upper) + 1], ctx)?;
    lerp(stop_at(upper) + 1, &a, &b, t)
}

fn step_eval(args: &[Expression], ctx: &mut EvalCtx<'_>) -> Result<Value, ExprError> {
    let input = eval_number(names::STEP, 0, args, ctx)?;
    let mut output = 1;
    let mut stop = 2;
    while stop + 1 < args.len() {
        if input < eval_number(names::STEP, stop, args, ctx)? {
            break;
        }
        output = stop + 1;
        stop += 2;
    }
    evaluate(&args[output], ctx)
}

pub fn functions() -> Vec<Arc<FunctionDefinition>> {
    vec![
        Arc::new(FunctionDefinition {
            name: names::INTERPOLATE,
            arity: Arity::AtLeast(4),
            returns: None,
            eval_fn: interpolate_eval,
        }),
        Arc::new(FunctionDefinition {
            name: names::STEP,
            arity: Arity::AtLeast(2),
            returns: None,
            eval_fn: step_eval,
        }),
    ]
}
