//! Function declaration

use crate::ast::FunctionDeclaration;
use crate::error::Result;
use crate::registry::FunctionDef;
use crate::EvalContext;

use super::Evaluate;

impl Evaluate for FunctionDeclaration {
    /// Register the function and return 0.0. The body is not evaluated.
    fn evaluate(&self, ctx: &mut EvalContext) -> Result<f64> {
        let def = FunctionDef::from(self);
        let arity = def.arity();

        if ctx.functions.declare(def).is_some() {
            tracing::debug!(name = self.name(), arity, "redeclared function");
        } else {
            tracing::debug!(name = self.name(), arity, "declared function");
        }

        Ok(0.0)
    }
}
