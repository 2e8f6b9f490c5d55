//! Evaluation context

mod frame;

pub use frame::CallFrame;

use crate::environment::Environment;
use crate::registry::FunctionRegistry;

/// Mutable state threaded through evaluation.
///
/// Holds the current variable environment and the function registry, plus
/// call depth bookkeeping for stack overflow protection. A context may be
/// reused across several top-level evaluations so later expressions see
/// earlier assignments and declarations.
///
/// # Example
///
/// ```
/// use numlang::{evaluate, EvalContext, Expr};
///
/// let mut ctx = EvalContext::new();
/// evaluate(&Expr::assign("r", Expr::literal(10.0)), &mut ctx).unwrap();
///
/// let area = Expr::arith("mult", Expr::var("r"), Expr::var("r"));
/// assert_eq!(evaluate(&area, &mut ctx), Ok(100.0));
/// assert_eq!(ctx.variable("r"), Some(10.0));
/// ```
#[derive(Debug, Clone)]
pub struct EvalContext {
    /// Variables of the innermost active scope
    pub variables: Environment,

    /// Functions visible from every scope
    pub functions: FunctionRegistry,

    /// Current call depth
    call_depth: usize,

    /// Maximum call depth (stack overflow protection)
    max_call_depth: usize,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            variables: Environment::new(),
            functions: FunctionRegistry::new(),
            call_depth: 0,
            max_call_depth: 1000,
        }
    }
}

impl EvalContext {
    /// Create a new empty context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom call depth limit.
    pub fn with_max_call_depth(max_depth: usize) -> Self {
        Self {
            max_call_depth: max_depth,
            ..Default::default()
        }
    }

    /// Value of a variable in the current scope.
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name)
    }

    /// Check if a function is declared.
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains(name)
    }

    /// Get current call depth.
    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    /// Get the configured call depth limit.
    pub fn max_call_depth(&self) -> usize {
        self.max_call_depth
    }

    /// Drop all variables and functions, keeping the configuration.
    pub fn reset(&mut self) {
        self.variables.clear();
        self.functions.clear();
        self.call_depth = 0;
    }
}
