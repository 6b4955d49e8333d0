use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    #[error("Malformed expression: {0}")]
    MalformedExpression(String),

    #[error("Expression \"{0}\" invalid.")]
    UnknownOperator(String),

    #[error("\"{operator}\" expression expects {expected} argument(s), found {found}.")]
    Arity {
        operator: String,
        expected: String,
        found: usize,
    },

    #[error("Unexpected operation. Expected \"{expected}\" but parsed \"{actual}\".")]
    UnexpectedOperator { expected: String, actual: String },

    #[error("\"{operator}\" argument #{index} must be {expected}, found {found}.")]
    InvalidArgumentType {
        operator: String,
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("\"{operator}\" requires a number or string input, found {found}.")]
    InvalidInputType {
        operator: String,
        found: &'static str,
    },

    #[error("\"case\" had no conditions that evaluated true and no default.")]
    NoMatchingCase,

    #[error("\"match\" had no matching labels and no default.")]
    NoMatchingLabel,

    #[error("\"{0}\" expressions are not supported.")]
    NotSupported(String),

    #[error("Variable \"{0}\" is not bound.")]
    UnboundVariable(String),

    #[error("\"{operator}\" index {index} is out of bounds for array of length {len}.")]
    IndexOutOfBounds {
        operator: String,
        index: i64,
        len: usize,
    },

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Resolution failed: {0}")]
    Resolution(String),

    /// Raised by a value source that cannot answer at compile time. The
    /// constant folder turns it into a deferred node; it never escapes
    /// [`crate::Compiler::compile`].
    #[error("UNRESOLVED: {0}")]
    Unresolved(String),
}

impl ExprError {
    pub fn invalid_argument(
        operator: &str,
        index: usize,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        ExprError::InvalidArgumentType {
            operator: operator.to_string(),
            index,
            expected,
            found,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, ExprError::Unresolved(_))
    }
}
