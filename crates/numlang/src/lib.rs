//! # numlang
//!
//! A tree-walking evaluator for a small numeric expression language.
//!
//! Programs are expression trees built in code (or decoded from JSON via
//! `serde`); there is no parser. Every value is an `f64`.
//!
//! ## Architecture
//!
//! - **Expression nodes** ([`Expr`]): an immutable, closed set of ten node
//!   kinds, rendered with [`to_text`]
//! - **Evaluation context** ([`EvalContext`]): the variable
//!   [`Environment`] of the current scope plus the shared
//!   [`FunctionRegistry`]
//! - **Evaluator** ([`Evaluate`]): depth-first evaluation returning
//!   `Result<f64, EvalError>`
//!
//! Function calls run in a fresh environment holding only their parameters.
//! They see every declared function, so recursion works, but never the
//! caller's variables.
//!
//! ## Example
//!
//! ```
//! use numlang::{evaluate_fresh, Condition, Expr};
//!
//! // def fib(n): if n le 2 then 1 else fib(n - 1) + fib(n - 2)
//! let fib = Expr::func_decl(
//!     "fib",
//!     ["n"],
//!     Expr::if_else(
//!         Condition::new("le", Expr::var("n"), Expr::literal(2)),
//!         Expr::literal(1),
//!         Expr::arith(
//!             "plus",
//!             Expr::invoke("fib", vec![Expr::arith("sub", Expr::var("n"), Expr::literal(1))]),
//!             Expr::invoke("fib", vec![Expr::arith("sub", Expr::var("n"), Expr::literal(2))]),
//!         ),
//!     ),
//! )
//! .unwrap();
//!
//! let program = Expr::block(vec![fib, Expr::invoke("fib", vec![Expr::literal(20)])]).unwrap();
//! assert_eq!(evaluate_fresh(&program), Ok(6765.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod context;
pub mod environment;
pub mod error;
pub mod eval;
pub mod ops;
pub mod registry;
pub mod render;

// Re-export main types
pub use ast::{
    Arithmetic, Assignment, Block, Condition, Expr, FunctionDeclaration, FunctionInvocation,
    IfElse, WhileLoop,
};
pub use context::{CallFrame, EvalContext};
pub use environment::Environment;
pub use error::{ArithmeticError, BuildError, EvalError, Result};
pub use eval::{evaluate, evaluate_fresh, Evaluate};
pub use registry::{FunctionDef, FunctionRegistry};
pub use render::to_text;

/// numlang version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
