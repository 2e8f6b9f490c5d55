//! Function call evaluation

use std::sync::Arc;

use crate::ast::FunctionInvocation;
use crate::environment::Environment;
use crate::error::{EvalError, Result};
use crate::EvalContext;

use super::Evaluate;

impl Evaluate for FunctionInvocation {
    fn evaluate(&self, ctx: &mut EvalContext) -> Result<f64> {
        // Hold our own handle so a redeclaration inside the body can't pull it away
        let func = ctx
            .functions
            .get(&self.name)
            .map(Arc::clone)
            .ok_or_else(|| EvalError::UndefinedFunction {
                name: self.name.clone(),
            })?;

        // Check arity before touching any argument
        if self.args.len() != func.arity() {
            return Err(EvalError::ArityMismatch {
                name: self.name.clone(),
                expected: func.arity(),
                actual: self.args.len(),
            });
        }

        // Arguments see the caller's scope
        let args = self
            .args
            .iter()
            .map(|arg| arg.evaluate(ctx))
            .collect::<Result<Vec<_>>>()?;

        let locals: Environment = func.params.iter().cloned().zip(args).collect();

        let mut frame = ctx.enter_call(locals)?;
        tracing::trace!(name = %self.name, depth = frame.call_depth(), "calling function");

        func.body.evaluate(&mut frame)
    }
}
