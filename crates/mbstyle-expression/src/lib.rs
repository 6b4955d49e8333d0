//! Compiler for Mapbox-style JSON expressions.
//!
//! # Overview
//!
//! A style expression is a JSON array `[operator, ...arguments]`. Compiling
//! it yields an [`Expression`] tree in which everything that can be known
//! without a feature has already been evaluated. What remains are property
//! accessors and calls to runtime functions (`mbEqualTo`, `mbCase`, ...),
//! which the rendering engine evaluates per feature.
//!
//! The compiled tree can be evaluated directly, against a [`FeatureScope`],
//! or lowered into another engine's representation through
//! [`ExpressionBuilder`].
//!
//! # Example
//!
//! ```
//! use mbstyle_expression::{Compiler, Expression, Feature, RenderContext};
//! use serde_json::json;
//!
//! let compiler = Compiler::default();
//!
//! let color = compiler.compile(&json!(["rgb", 255, 128, 0])).unwrap();
//! assert_eq!(color, Expression::literal("#ff8000"));
//!
//! let label = compiler
//!     .compile(&json!(["case", ["==", ["get", "kind"], "city"], "big", "small"]))
//!     .unwrap();
//! assert!(!label.is_literal());
//!
//! let feature = Feature::new().with_property("kind", "city");
//! let render = RenderContext::new();
//! let value = compiler.evaluate(&label, &render.scope(&feature)).unwrap();
//! assert_eq!(value, json!("big"));
//! ```

pub mod args;
pub mod compile;
pub mod compile_ctx;
pub mod error;
pub mod eval_ctx;
pub mod evaluate;
pub mod expression;
pub mod families;
pub mod functions;
pub mod operators;
pub mod source;
pub mod types;
pub mod value;

pub use compile::{compile, Compiler, CompilerOptions};
pub use compile_ctx::CompileCtx;
pub use error::ExprError;
pub use eval_ctx::{EvalCtx, DEFAULT_MAX_DEPTH, EVAL_DEPTH_FACTOR};
pub use evaluate::evaluate;
pub use expression::{Expression, ExpressionBuilder};
pub use functions::{functions_map, names};
pub use operators::{Family, Operator};
pub use source::{Constants, Feature, FeatureScope, RenderContext, ValueSource};
pub use types::{Arity, FunctionDefinition, FunctionMap};
pub use value::EqualityClass;
