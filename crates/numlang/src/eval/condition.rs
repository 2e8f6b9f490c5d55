//! Relational conditions

use crate::ast::Condition;
use crate::error::Result;
use crate::ops::CondOp;
use crate::EvalContext;

use super::Evaluate;

impl Condition {
    /// Evaluate both operands and compare them.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOperator` for an unrecognized operator, before
    /// either operand is evaluated.
    pub fn test(&self, ctx: &mut EvalContext) -> Result<bool> {
        let op = CondOp::parse(&self.op)?;
        let left = self.left.evaluate(ctx)?;
        let right = self.right.evaluate(ctx)?;
        Ok(op.holds(left, right))
    }
}

impl Evaluate for Condition {
    /// 1.0 when the condition holds, 0.0 otherwise.
    fn evaluate(&self, ctx: &mut EvalContext) -> Result<f64> {
        Ok(if self.test(ctx)? { 1.0 } else { 0.0 })
    }
}
