//! If/else evaluation

use crate::ast::IfElse;
use crate::error::Result;
use crate::EvalContext;

use super::Evaluate;

impl Evaluate for IfElse {
    fn evaluate(&self, ctx: &mut EvalContext) -> Result<f64> {
        // Only the selected branch runs
        if self.test.test(ctx)? {
            self.then_branch.evaluate(ctx)
        } else {
            self.else_branch.evaluate(ctx)
        }
    }
}
