//! Entry point: raw style expression in, compiled [`Expression`] out.

use crate::compile_ctx::CompileCtx;
use crate::error::ExprError;
use crate::eval_ctx::{EvalCtx, DEFAULT_MAX_DEPTH, EVAL_DEPTH_FACTOR};
use crate::evaluate::evaluate;
use crate::expression::Expression;
use crate::families;
use crate::functions::functions_map;
use crate::operators::Operator;
use crate::source::ValueSource;
use crate::types::{assert_arity, FunctionMap};
use serde_json::Value;
use std::sync::Arc;
use tracing::trace;

/// Options for [`Compiler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerOptions {
    /// Maximum nesting of raw expression arrays. Evaluation allows
    /// [`eval_depth`](Self::eval_depth) nested calls.
    pub max_depth: usize,
    /// Replace computed constant sub-trees with their value.
    ///
    /// Structural choices happen either way: operators that require a
    /// constant argument (`at`, `get` with an object, ramp stops) resolve it,
    /// and `all`, `any`, `case`, `coalesce` and `match` still select or drop
    /// branches whose condition is a literal.
    pub fold_constants: bool,
}

impl CompilerOptions {
    /// Bound on nested function calls when evaluating a compiled tree.
    pub fn eval_depth(&self) -> usize {
        self.max_depth.saturating_mul(EVAL_DEPTH_FACTOR)
    }
}

impl Default for CompilerOptions {
    fn default() -> Self {
        CompilerOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            fold_constants: true,
        }
    }
}

/// Compiles style expressions against a registry of runtime functions.
///
/// A compiler holds no per-call state and can be shared between threads.
#[derive(Clone)]
pub struct Compiler {
    functions: Arc<FunctionMap>,
    options: CompilerOptions,
}

impl Compiler {
    pub fn new(options: CompilerOptions) -> Self {
        Self::with_functions(Arc::new(functions_map()), options)
    }

    /// Uses a caller-supplied function map, e.g. one extended with extra
    /// engine functions.
    pub fn with_functions(functions: Arc<FunctionMap>, options: CompilerOptions) -> Self {
        Compiler { functions, options }
    }

    pub fn functions(&self) -> &Arc<FunctionMap> {
        &self.functions
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Compiles one raw expression.
    #[tracing::instrument(level = "debug", skip(self), err)]
    pub fn compile(&self, raw: &Value) -> Result<Expression, ExprError> {
        let node = raw.as_array().ok_or_else(|| {
            ExprError::MalformedExpression(format!(
                "expected an expression array, found {}",
                raw
            ))
        })?;
        let mut ctx = CompileCtx::new(Arc::clone(&self.functions), self.options);
        compile_node(node, &mut ctx)
    }

    /// Evaluates a compiled expression against `source`.
    pub fn evaluate(
        &self,
        expr: &Expression,
        source: &dyn ValueSource,
    ) -> Result<Value, ExprError> {
        let mut ctx = EvalCtx::new(source, Arc::clone(&self.functions))
            .with_max_depth(self.options.eval_depth());
        evaluate(expr, &mut ctx)
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Compiler::new(CompilerOptions::default())
    }
}

/// Compiles `raw` with default options.
pub fn compile(raw: &Value) -> Result<Expression, ExprError> {
    Compiler::default().compile(raw)
}

/// Compiles one expression array: resolves the operator, checks its arity
/// and hands the node to its family.
pub(crate) fn compile_node(
    node: &[Value],
    ctx: &mut CompileCtx,
) -> Result<Expression, ExprError> {
    let name = node.first().and_then(Value::as_str).ok_or_else(|| {
        ExprError::MalformedExpression(
            "requires a string naming the expression at position 0".to_string(),
        )
    })?;
    let op =
        Operator::from_name(name).ok_or_else(|| ExprError::UnknownOperator(name.to_string()))?;
    assert_arity(name, op.arity(), node.len() - 1)?;

    if ctx.depth >= ctx.options.max_depth {
        return Err(ExprError::Resolution(format!(
            "\"{}\" is nested deeper than the maximum depth of {}",
            name, ctx.options.max_depth
        )));
    }
    trace!(operator = name, family = ?op.family(), depth = ctx.depth, "compiling");

    ctx.depth += 1;
    let result = match op {
        Operator::Color(op) => families::color::compile(op, node, ctx),
        Operator::Decision(op) => families::decision::compile(op, node, ctx),
        Operator::FeatureData(op) => families::feature_data::compile(op, node, ctx),
        Operator::Heatmap(op) => families::heatmap::compile(op, node, ctx),
        Operator::Lookup(op) => families::lookup::compile(op, node, ctx),
        Operator::Math(op) => families::math::compile(op, node, ctx),
        Operator::Ramps(op) => families::ramps::compile(op, node, ctx),
        Operator::String(op) => families::string::compile(op, node, ctx),
        Operator::Types(op) => families::types::compile(op, node, ctx),
        Operator::VariableBinding(op) => families::variable::compile(op, node, ctx),
        Operator::Zoom(op) => families::zoom::compile(op, node, ctx),
    };
    ctx.depth -= 1;
    result
}
