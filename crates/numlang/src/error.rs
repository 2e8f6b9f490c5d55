//! Error types for numlang evaluation

use thiserror::Error;

/// Errors raised while evaluating an expression tree.
///
/// No variant is recovered locally: a failing sub-expression aborts its
/// parent and the error reaches the caller of [`crate::evaluate`] unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Variable lookup miss
    #[error("variable '{name}' is not defined")]
    UnboundVariable {
        /// The variable name
        name: String,
    },

    /// Arithmetic or condition node given an unrecognized operator
    #[error("unknown operator '{op}'")]
    UnknownOperator {
        /// The operator symbol as written in the node
        op: String,
    },

    /// Invocation of a function that was never declared
    #[error("function '{name}' is not defined")]
    UndefinedFunction {
        /// The function name
        name: String,
    },

    /// Invocation with the wrong number of arguments
    #[error("function '{name}' expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        /// The function name
        name: String,
        /// Number of declared parameters
        expected: usize,
        /// Number of supplied arguments
        actual: usize,
    },

    /// Numeric failure (division by zero, non-finite result)
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    /// Call depth limit exceeded
    #[error("call depth {depth} exceeds maximum of {max}")]
    StackOverflow {
        /// Depth at which the call was attempted
        depth: usize,
        /// Configured maximum
        max: usize,
    },

    /// A block with no expressions reached evaluation
    #[error("cannot evaluate an empty block")]
    EmptyBlock,
}

/// Numeric failures raised by arithmetic nodes.
///
/// Infinity and NaN are never returned as values; they are reported here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    /// Right operand of `div` or `mod` was zero
    #[error("division by zero")]
    DivisionByZero,

    /// The operation produced infinity or NaN
    #[error("'{op}' produced a non-finite result")]
    NonFinite {
        /// The operator that overflowed
        op: String,
    },
}

/// Errors raised while building expression nodes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// `Block` constructed without any expression
    #[error("a block must contain at least one expression")]
    EmptyBlock,

    /// A parameter name appears twice in one declaration
    #[error("duplicate parameter '{param}' in function '{function}'")]
    DuplicateParameter {
        /// The function being declared
        function: String,
        /// The repeated parameter name
        param: String,
    },
}

/// Result type alias for evaluation
pub type Result<T> = std::result::Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = EvalError::UnboundVariable {
            name: "pi".to_string(),
        };
        assert_eq!(err.to_string(), "variable 'pi' is not defined");

        let err = EvalError::ArityMismatch {
            name: "add".to_string(),
            expected: 2,
            actual: 3,
        };
        assert_eq!(err.to_string(), "function 'add' expects 2 argument(s), got 3");
    }

    #[test]
    fn test_arithmetic_is_transparent() {
        let err: EvalError = ArithmeticError::DivisionByZero.into();
        assert_eq!(err.to_string(), "division by zero");
    }
}
