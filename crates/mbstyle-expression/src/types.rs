use crate::error::ExprError;
use crate::eval_ctx::EvalCtx;
use crate::expression::Expression;
use crate::value::EqualityClass;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Number of arguments an operator or function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Skip the arity check.
    Any,
    /// Exactly `n` arguments.
    Fixed(usize),
    /// `n` or more arguments.
    AtLeast(usize),
    /// Between `min` and `max` arguments, inclusive.
    Range(usize, usize),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Any => true,
            Arity::Fixed(n) => count == n,
            Arity::AtLeast(n) => count >= n,
            Arity::Range(min, max) => (min..=max).contains(&count),
        }
    }

    fn describe(&self) -> String {
        match *self {
            Arity::Any => "any number of".to_string(),
            Arity::Fixed(n) => format!("exactly {}", n),
            Arity::AtLeast(n) => format!("at least {}", n),
            Arity::Range(min, max) => format!("{} to {}", min, max),
        }
    }
}

/// Asserts that `count` arguments (operator name excluded) fit `arity`.
pub fn assert_arity(operator: &str, arity: Arity, count: usize) -> Result<(), ExprError> {
    if arity.accepts(count) {
        Ok(())
    } else {
        Err(ExprError::Arity {
            operator: operator.to_string(),
            expected: arity.describe(),
            found: count,
        })
    }
}

/// Evaluation function of a registered runtime function.
///
/// Receives the unevaluated argument nodes so that short-circuiting functions
/// only evaluate what they need.
pub type EvalFn = for<'a> fn(&[Expression], &mut EvalCtx<'a>) -> Result<Value, ExprError>;

/// A named callable the compiled tree may reference.
pub struct FunctionDefinition {
    pub name: &'static str,
    pub arity: Arity,
    /// Class of every value the function returns, when it is fixed.
    pub returns: Option<EqualityClass>,
    pub eval_fn: EvalFn,
}

/// Map of function name -> definition.
pub type FunctionMap = HashMap<&'static str, Arc<FunctionDefinition>>;

/// Builds a `FunctionMap` from a list of function definitions.
pub fn functions_to_map(functions: Vec<Arc<FunctionDefinition>>) -> FunctionMap {
    let mut map = HashMap::with_capacity(functions.len());
    for def in functions {
        map.insert(def.name, def);
    }
    map
}
