//! RAII guard for function call scopes

use std::ops::{Deref, DerefMut};

use super::EvalContext;
use crate::environment::Environment;
use crate::error::{EvalError, Result};

/// Guard for one active function call.
///
/// While alive, the context's variables are the callee's locals. On drop
/// the caller's environment is put back and the call depth restored,
/// whether the body succeeded or failed.
///
/// # Example
///
/// ```
/// use numlang::{Environment, EvalContext};
///
/// let mut ctx = EvalContext::new();
/// ctx.variables.define("x", 1.0);
///
/// {
///     let locals: Environment = [("n", 5.0)].into_iter().collect();
///     let frame = ctx.enter_call(locals).unwrap();
///     assert_eq!(frame.variable("n"), Some(5.0));
///     assert_eq!(frame.variable("x"), None); // Caller's bindings are not visible
/// }
///
/// assert_eq!(ctx.variable("x"), Some(1.0));
/// assert_eq!(ctx.variable("n"), None);
/// ```
pub struct CallFrame<'a> {
    ctx: &'a mut EvalContext,
    caller: Environment,
}

impl EvalContext {
    /// Enter a function call with `locals` as its environment.
    ///
    /// # Errors
    ///
    /// Returns `StackOverflow` if the call depth limit would be exceeded.
    pub fn enter_call(&mut self, locals: Environment) -> Result<CallFrame<'_>> {
        if self.call_depth >= self.max_call_depth {
            return Err(EvalError::StackOverflow {
                depth: self.call_depth,
                max: self.max_call_depth,
            });
        }
        self.call_depth += 1;

        let caller = std::mem::replace(&mut self.variables, locals);
        Ok(CallFrame { ctx: self, caller })
    }
}

impl<'a> Drop for CallFrame<'a> {
    fn drop(&mut self) {
        self.ctx.variables = std::mem::take(&mut self.caller);
        self.ctx.call_depth = self.ctx.call_depth.saturating_sub(1);
    }
}

impl<'a> Deref for CallFrame<'a> {
    type Target = EvalContext;

    fn deref(&self) -> &Self::Target {
        self.ctx
    }
}

impl<'a> DerefMut for CallFrame<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.ctx
    }
}
