//! Expression evaluation

pub mod arith;
pub mod assign;
pub mod block;
pub mod call;
pub mod condition;
pub mod function;
pub mod if_expr;
pub mod loops;

use crate::ast::Expr;
use crate::error::Result;
use crate::EvalContext;

/// Trait for evaluating AST nodes to values.
///
/// This is the core abstraction for the tree-walking interpreter.
/// Each node kind implements it; [`Expr`] dispatches to them.
pub trait Evaluate {
    /// Evaluate this node against the given context.
    fn evaluate(&self, ctx: &mut EvalContext) -> Result<f64>;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

/// Remaining stack below which evaluation moves to a fresh segment
const STACK_RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment
const STACK_GROW_SIZE: usize = 4 * 1024 * 1024;

impl Evaluate for Expr {
    fn evaluate(&self, ctx: &mut EvalContext) -> Result<f64> {
        // Deep trees continue on a heap segment instead of overflowing the thread stack
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || dispatch(self, ctx))
    }
}

fn dispatch(expr: &Expr, ctx: &mut EvalContext) -> Result<f64> {
    match expr {
        Expr::Literal(value) => Ok(*value),
        Expr::Arithmetic(expr) => expr.evaluate(ctx),
        Expr::Assignment(expr) => expr.evaluate(ctx),
        Expr::Variable(name) => assign::eval_variable(name, ctx),
        Expr::Condition(expr) => expr.evaluate(ctx),
        Expr::IfElse(expr) => expr.evaluate(ctx),
        Expr::Block(expr) => expr.evaluate(ctx),
        Expr::WhileLoop(expr) => expr.evaluate(ctx),
        Expr::FunctionDeclaration(expr) => expr.evaluate(ctx),
        Expr::FunctionInvocation(expr) => expr.evaluate(ctx),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate an expression against a context.
///
/// Side effects (assignments, declarations) stay in `ctx` after the call,
/// including those committed before a failure.
pub fn evaluate(expr: &Expr, ctx: &mut EvalContext) -> Result<f64> {
    expr.evaluate(ctx)
}

/// Evaluate an expression against a fresh, empty context.
pub fn evaluate_fresh(expr: &Expr) -> Result<f64> {
    expr.evaluate(&mut EvalContext::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_ignores_context() {
        let mut ctx = EvalContext::new();
        ctx.variables.define("x", 9.0);
        assert_eq!(evaluate(&Expr::literal(3.1415), &mut ctx), Ok(3.1415));
        assert_eq!(evaluate_fresh(&Expr::literal(-1)), Ok(-1.0));
    }
}
