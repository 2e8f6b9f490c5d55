//! Canonical text rendering
//!
//! Every node renders fully parenthesized so output is stable and
//! diffable:
//!
//! | Node | Rendering |
//! |---|---|
//! | Literal | `3.1415`, `100.0` |
//! | Arithmetic | `(op left)`, `(op left right)` |
//! | Assignment | `name = value` |
//! | Variable | `name` |
//! | Condition | `(op left right)` |
//! | IfElse | `(if test then else)` |
//! | Block | `{e1; e2}` |
//! | WhileLoop | `(while test body)` |
//! | FunctionDeclaration | `(def name (p1 p2) body)` |
//! | FunctionInvocation | `name(a1, a2)` |

use std::fmt;

use crate::ast::{Condition, Expr};

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(value) => write!(f, "{:?}", value),

            Expr::Arithmetic(arith) => match &arith.right {
                Some(right) => write!(f, "({} {} {})", arith.op, arith.left, right),
                None => write!(f, "({} {})", arith.op, arith.left),
            },

            Expr::Assignment(assign) => write!(f, "{} = {}", assign.name, assign.value),

            Expr::Variable(name) => write!(f, "{}", name),

            Expr::Condition(cond) => write!(f, "{}", cond),

            Expr::IfElse(if_else) => write!(
                f,
                "(if {} {} {})",
                if_else.test, if_else.then_branch, if_else.else_branch
            ),

            Expr::Block(block) => {
                write!(f, "{{")?;
                for (i, expr) in block.body().iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", expr)?;
                }
                write!(f, "}}")
            }

            Expr::WhileLoop(while_loop) => {
                write!(f, "(while {} {})", while_loop.test, while_loop.body)
            }

            Expr::FunctionDeclaration(decl) => {
                write!(f, "(def {} ({}) {})", decl.name(), decl.params().join(" "), decl.body())
            }

            Expr::FunctionInvocation(call) => {
                write!(f, "{}(", call.name)?;
                for (i, arg) in call.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.op, self.left, self.right)
    }
}

/// Render an expression as canonical text.
pub fn to_text(expr: &Expr) -> String {
    expr.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_keeps_fraction() {
        assert_eq!(to_text(&Expr::literal(100)), "100.0");
        assert_eq!(to_text(&Expr::literal(3.1415)), "3.1415");
        assert_eq!(to_text(&Expr::literal(-1)), "-1.0");
    }

    #[test]
    fn test_unary() {
        assert_eq!(to_text(&Expr::unary("sub", Expr::var("x"))), "(sub x)");
    }

    #[test]
    fn test_empty_invocation() {
        assert_eq!(to_text(&Expr::invoke("blah", vec![])), "blah()");
    }
}
