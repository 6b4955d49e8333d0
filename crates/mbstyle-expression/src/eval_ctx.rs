use crate::source::ValueSource;
use crate::types::FunctionMap;
use std::sync::Arc;

/// Default bound on the nesting of raw expression arrays.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Call depth allowed per level of raw nesting. Compiling a node can emit
/// several nested calls (`mbToNumber`, `round`, `tohex`, ...), so evaluation
/// gets a proportionally larger bound.
pub const EVAL_DEPTH_FACTOR: usize = 4;

/// The execution context passed to every runtime function.
pub struct EvalCtx<'a> {
    /// Where property, feature and environment values come from.
    pub source: &'a dyn ValueSource,
    /// The function map used for recursive evaluation.
    pub functions: Arc<FunctionMap>,
    pub depth: usize,
    pub max_depth: usize,
}

impl<'a> EvalCtx<'a> {
    pub fn new(source: &'a dyn ValueSource, functions: Arc<FunctionMap>) -> Self {
        EvalCtx {
            source,
            functions,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH * EVAL_DEPTH_FACTOR,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
