//! Block evaluation

use crate::ast::Block;
use crate::error::{EvalError, Result};
use crate::EvalContext;

use super::Evaluate;

impl Evaluate for Block {
    /// Evaluate every expression in order, returning the last value.
    ///
    /// Blocks do not open a scope: all children share `ctx`. A failing
    /// child stops the block, and whatever earlier children committed
    /// stays committed.
    fn evaluate(&self, ctx: &mut EvalContext) -> Result<f64> {
        let mut last_value = None;

        for expr in self.body() {
            last_value = Some(expr.evaluate(ctx)?);
        }

        last_value.ok_or(EvalError::EmptyBlock)
    }
}
