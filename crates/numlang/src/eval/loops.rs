//! While loop evaluation

use crate::ast::WhileLoop;
use crate::error::Result;
use crate::EvalContext;

use super::Evaluate;

impl Evaluate for WhileLoop {
    /// Run the body while the test holds.
    ///
    /// Returns the value of the last body evaluation, or 0.0 when the body
    /// never ran. There is no iteration limit.
    fn evaluate(&self, ctx: &mut EvalContext) -> Result<f64> {
        let mut last_value = 0.0;

        while self.test.test(ctx)? {
            last_value = self.body.evaluate(ctx)?;
        }

        Ok(last_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Condition, EvalError, Expr};

    fn counter(limit: f64) -> Expr {
        Expr::while_loop(
            Condition::new("lt", Expr::var("i"), Expr::literal(limit)),
            Expr::assign("i", Expr::arith("plus", Expr::var("i"), Expr::literal(1))),
        )
    }

    #[test]
    fn test_returns_last_body_value() {
        let mut ctx = EvalContext::new();
        ctx.variables.define("i", 0.0);
        assert_eq!(counter(5.0).evaluate(&mut ctx), Ok(5.0));
        assert_eq!(ctx.variable("i"), Some(5.0));
    }

    #[test]
    fn test_zero_iterations() {
        let mut ctx = EvalContext::new();
        ctx.variables.define("i", 10.0);
        assert_eq!(counter(5.0).evaluate(&mut ctx), Ok(0.0));
    }

    #[test]
    fn test_error_in_test_propagates() {
        let mut ctx = EvalContext::new();
        assert_eq!(
            counter(5.0).evaluate(&mut ctx),
            Err(EvalError::UnboundVariable {
                name: "i".to_string()
            })
        );
    }
}
