//! Compiled expression tree and the builder seam into the target engine.

use crate::types::FunctionMap;
use crate::value::EqualityClass;
use serde_json::Value;
use std::fmt;

/// Result of compiling one raw expression.
///
/// A `Literal` is fully resolved. `Property` and `Function` nodes are left
/// for the target engine to evaluate per feature.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A resolved value.
    Literal(Value),
    /// Feature property accessor.
    Property(String),
    /// Call of a named engine function or runtime shim.
    Function {
        name: &'static str,
        args: Vec<Expression>,
    },
}

impl Expression {
    pub fn literal(value: impl Into<Value>) -> Self {
        Expression::Literal(value.into())
    }

    pub fn property(name: impl Into<String>) -> Self {
        Expression::Property(name.into())
    }

    pub fn function(name: &'static str, args: Vec<Expression>) -> Self {
        Expression::Function { name, args }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Expression::Literal(_))
    }

    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Expression::Literal(v) => Some(v),
            _ => None,
        }
    }

    /// The class this node is known to produce without evaluating it, if any.
    ///
    /// Literals report their own class, functions report the class declared in
    /// their definition, and property accessors are unknown.
    pub fn static_class(&self, functions: &FunctionMap) -> Option<EqualityClass> {
        match self {
            Expression::Literal(v) => Some(EqualityClass::of(v)),
            Expression::Property(_) => None,
            Expression::Function { name, .. } => functions.get(*name).and_then(|def| def.returns),
        }
    }

    /// Lowers the tree into the target engine's own representation.
    pub fn build<B: ExpressionBuilder>(&self, builder: &B) -> B::Output {
        match self {
            Expression::Literal(v) => builder.literal(v),
            Expression::Property(name) => builder.property(name),
            Expression::Function { name, args } => {
                let args = args.iter().map(|a| a.build(builder)).collect();
                builder.function(name, args)
            }
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(v) => write!(f, "{}", v),
            Expression::Property(name) => write!(f, "[{}]", name),
            Expression::Function { name, args } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(")")
            }
        }
    }
}

/// The three node constructors the target engine has to provide.
pub trait ExpressionBuilder {
    type Output;

    fn literal(&self, value: &Value) -> Self::Output;

    fn property(&self, name: &str) -> Self::Output;

    fn function(&self, name: &str, args: Vec<Self::Output>) -> Self::Output;
}
