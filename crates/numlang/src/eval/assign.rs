//! Assignment and variable lookup

use crate::ast::Assignment;
use crate::error::{EvalError, Result};
use crate::EvalContext;

use super::Evaluate;

impl Evaluate for Assignment {
    /// Evaluate the value and bind it in the current environment.
    ///
    /// Inside a function call the current environment is the call's own,
    /// so an assignment there never touches the caller's variables.
    fn evaluate(&self, ctx: &mut EvalContext) -> Result<f64> {
        let value = self.value.evaluate(ctx)?;
        ctx.variables.define(self.name.as_str(), value);
        Ok(value)
    }
}

/// Look up a variable in the current environment.
///
/// # Errors
///
/// Returns `UnboundVariable` if `name` has no binding.
pub fn eval_variable(name: &str, ctx: &EvalContext) -> Result<f64> {
    ctx.variables
        .get(name)
        .ok_or_else(|| EvalError::UnboundVariable {
            name: name.to_string(),
        })
}
