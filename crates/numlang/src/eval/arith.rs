//! Arithmetic evaluation

use crate::ast::Arithmetic;
use crate::error::Result;
use crate::ops::{ArithOp, UnaryOp};
use crate::EvalContext;

use super::Evaluate;

impl Evaluate for Arithmetic {
    fn evaluate(&self, ctx: &mut EvalContext) -> Result<f64> {
        match &self.right {
            None => {
                let op = UnaryOp::parse(&self.op)?;
                let operand = self.left.evaluate(ctx)?;
                op.apply(operand)
            }
            Some(right) => {
                // Resolve first so a bad operator fails before any operand side effects
                let op = ArithOp::parse(&self.op)?;
                let left = self.left.evaluate(ctx)?;
                let right = right.evaluate(ctx)?;
                op.apply(left, right)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArithmeticError, EvalError};
    use crate::Expr;

    fn eval(expr: Expr) -> Result<f64> {
        expr.evaluate(&mut EvalContext::new())
    }

    #[test]
    fn test_binary_ops() {
        assert_eq!(eval(Expr::arith("plus", Expr::literal(1), Expr::literal(2))), Ok(3.0));
        assert_eq!(eval(Expr::arith("sub", Expr::literal(1), Expr::literal(2))), Ok(-1.0));
        assert_eq!(eval(Expr::arith("mult", Expr::literal(3), Expr::literal(4))), Ok(12.0));
        assert_eq!(eval(Expr::arith("div", Expr::literal(1), Expr::literal(4))), Ok(0.25));
        assert_eq!(eval(Expr::arith("pow", Expr::literal(2), Expr::literal(10))), Ok(1024.0));
    }

    #[test]
    fn test_unary_negation() {
        assert_eq!(eval(Expr::unary("sub", Expr::literal(5))), Ok(-5.0));
        assert_eq!(eval(Expr::unary("neg", Expr::literal(-5))), Ok(5.0));
        assert_eq!(eval(Expr::unary("plus", Expr::literal(5))), Ok(5.0));
    }

    #[test]
    fn test_unknown_unary() {
        assert_eq!(
            eval(Expr::unary("mult", Expr::literal(5))),
            Err(EvalError::UnknownOperator {
                op: "mult".to_string()
            })
        );
    }

    #[test]
    fn test_bad_operator_skips_operands() {
        let mut ctx = EvalContext::new();
        let expr = Expr::arith(
            "blah",
            Expr::assign("x", Expr::literal(1)),
            Expr::literal(2),
        );
        assert!(expr.evaluate(&mut ctx).is_err());
        assert!(!ctx.variables.contains("x"));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            eval(Expr::arith("div", Expr::literal(1), Expr::literal(0))),
            Err(EvalError::Arithmetic(ArithmeticError::DivisionByZero))
        );
    }
}
