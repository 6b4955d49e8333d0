use crate::compile::CompilerOptions;
use crate::error::ExprError;
use crate::eval_ctx::EvalCtx;
use crate::evaluate::evaluate;
use crate::expression::Expression;
use crate::source::Constants;
use crate::types::FunctionMap;
use crate::value::EqualityClass;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;

/// State carried through one compilation.
pub struct CompileCtx {
    pub functions: Arc<FunctionMap>,
    pub options: CompilerOptions,
    /// Current nesting depth of raw expression arrays.
    pub depth: usize,
    scopes: Vec<HashMap<String, Expression>>,
}

impl CompileCtx {
    pub fn new(functions: Arc<FunctionMap>, options: CompilerOptions) -> Self {
        CompileCtx {
            functions,
            options,
            depth: 0,
            scopes: Vec::new(),
        }
    }

    /// Evaluates `expr` against the constants-only source.
    ///
    /// Returns `Ok(None)` when the tree depends on feature or render data.
    /// Any other evaluation error is fatal.
    pub fn try_constant(&self, expr: &Expression) -> Result<Option<Value>, ExprError> {
        if let Expression::Literal(v) = expr {
            return Ok(Some(v.clone()));
        }
        let mut eval = EvalCtx::new(&Constants, Arc::clone(&self.functions))
            .with_max_depth(self.options.eval_depth());
        match evaluate(expr, &mut eval) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_unresolved() => {
                trace!(expression = %expr, reason = %e, "not constant");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Replaces a function node whose arguments are all literals with its
    /// value. Nodes that need feature data are returned unchanged.
    pub fn fold(&self, expr: Expression) -> Result<Expression, ExprError> {
        let foldable = match &expr {
            Expression::Function { args, .. } => args.iter().all(Expression::is_literal),
            _ => false,
        };
        if !foldable {
            return Ok(expr);
        }
        self.try_fold(expr)
    }

    /// Like [`fold`](Self::fold) but attempts evaluation regardless of the
    /// argument shapes. Used for nodes that only evaluate some of their
    /// arguments.
    pub fn try_fold(&self, expr: Expression) -> Result<Expression, ExprError> {
        if expr.is_literal() || !self.options.fold_constants {
            return Ok(expr);
        }
        match self.try_constant(&expr)? {
            Some(value) => Ok(Expression::Literal(value)),
            None => Ok(expr),
        }
    }

    pub fn static_class(&self, expr: &Expression) -> Option<EqualityClass> {
        expr.static_class(&self.functions)
    }

    pub fn push_scope(&mut self, bindings: HashMap<String, Expression>) {
        self.scopes.push(bindings);
    }

    pub fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    /// Innermost binding of `name`.
    pub fn lookup(&self, name: &str) -> Option<&Expression> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }
}
