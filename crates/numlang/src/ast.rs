//! Expression tree
//!
//! Nodes are immutable once built. Evaluation only ever mutates the
//! [`EvalContext`](crate::EvalContext), never the tree.
//!
//! Two invariants are enforced at construction time rather than at
//! evaluation time: a [`Block`] is never empty, and a
//! [`FunctionDeclaration`] never repeats a parameter name. Both types keep
//! their fields private and are deserialized through the same validating
//! constructors.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::BuildError;

/// An expression node.
///
/// The set of variants is closed; evaluation and rendering match on it
/// exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// A constant number
    Literal(f64),

    /// Unary or binary numeric operator
    Arithmetic(Arithmetic),

    /// Bind or overwrite a variable in the current environment
    Assignment(Assignment),

    /// Read a variable
    Variable(String),

    /// Relational test, evaluating to 1.0 or 0.0
    Condition(Condition),

    /// Two-way branch
    IfElse(IfElse),

    /// Sequence of expressions
    Block(Block),

    /// Repeat a body while a condition holds
    WhileLoop(WhileLoop),

    /// Register a function in the context
    FunctionDeclaration(FunctionDeclaration),

    /// Call a declared function
    FunctionInvocation(FunctionInvocation),
}

/// `(op left)` or `(op left right)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arithmetic {
    /// Operator symbol (`plus`, `sub`, `mult`, `div`, ...)
    pub op: String,

    /// Left operand, or the sole operand of a unary form
    pub left: Box<Expr>,

    /// Right operand; absent for unary forms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<Expr>>,
}

/// `name = value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Target variable
    pub name: String,

    /// Value expression
    pub value: Box<Expr>,
}

/// Relational comparison of two operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Operator symbol (`lt`, `le`, `gt`, `ge`, `eq`, `ne`)
    pub op: String,

    /// Left operand
    pub left: Box<Expr>,

    /// Right operand
    pub right: Box<Expr>,
}

/// `if test then then_branch else else_branch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfElse {
    /// Branch selector
    pub test: Condition,

    /// Evaluated when `test` holds
    pub then_branch: Box<Expr>,

    /// Evaluated when `test` does not hold
    pub else_branch: Box<Expr>,
}

/// A non-empty sequence of expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Expr>", into = "Vec<Expr>")]
pub struct Block {
    body: Vec<Expr>,
}

impl Block {
    /// Create a block.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::EmptyBlock` if `body` is empty.
    pub fn new(body: Vec<Expr>) -> Result<Self, BuildError> {
        if body.is_empty() {
            return Err(BuildError::EmptyBlock);
        }
        Ok(Self { body })
    }

    /// The expressions of this block, in evaluation order.
    pub fn body(&self) -> &[Expr] {
        &self.body
    }
}

impl TryFrom<Vec<Expr>> for Block {
    type Error = BuildError;

    fn try_from(body: Vec<Expr>) -> Result<Self, Self::Error> {
        Self::new(body)
    }
}

impl From<Block> for Vec<Expr> {
    fn from(block: Block) -> Self {
        block.body
    }
}

/// `while test { body }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileLoop {
    /// Loop guard, re-checked before every iteration
    pub test: Condition,

    /// Loop body
    pub body: Box<Expr>,
}

/// `def name(params) = body`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FunctionDeclarationRepr", into = "FunctionDeclarationRepr")]
pub struct FunctionDeclaration {
    name: String,
    params: Vec<String>,
    body: Arc<Expr>,
}

impl FunctionDeclaration {
    /// Create a declaration.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::DuplicateParameter` if a parameter name repeats.
    pub fn new(name: String, params: Vec<String>, body: Expr) -> Result<Self, BuildError> {
        let mut seen = HashSet::with_capacity(params.len());
        for param in &params {
            if !seen.insert(param.as_str()) {
                return Err(BuildError::DuplicateParameter {
                    function: name,
                    param: param.clone(),
                });
            }
        }

        Ok(Self {
            name,
            params,
            body: Arc::new(body),
        })
    }

    /// The declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter names, in positional order.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// The function body, shared with the registry once declared.
    pub fn body(&self) -> &Arc<Expr> {
        &self.body
    }
}

#[derive(Serialize, Deserialize)]
struct FunctionDeclarationRepr {
    name: String,
    params: Vec<String>,
    body: Expr,
}

impl TryFrom<FunctionDeclarationRepr> for FunctionDeclaration {
    type Error = BuildError;

    fn try_from(repr: FunctionDeclarationRepr) -> Result<Self, Self::Error> {
        Self::new(repr.name, repr.params, repr.body)
    }
}

impl From<FunctionDeclaration> for FunctionDeclarationRepr {
    fn from(decl: FunctionDeclaration) -> Self {
        Self {
            name: decl.name,
            params: decl.params,
            body: Arc::unwrap_or_clone(decl.body),
        }
    }
}

/// `name(args)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionInvocation {
    /// Function to call
    pub name: String,

    /// Argument expressions, evaluated left to right in the caller's scope
    pub args: Vec<Expr>,
}

// ═══════════════════════════════════════════════════════════════════════
// Builders
// ═══════════════════════════════════════════════════════════════════════

impl Expr {
    /// A literal number.
    pub fn literal(value: impl Into<f64>) -> Self {
        Expr::Literal(value.into())
    }

    /// A binary arithmetic node.
    pub fn arith(op: impl Into<String>, left: Expr, right: Expr) -> Self {
        Expr::Arithmetic(Arithmetic {
            op: op.into(),
            left: Box::new(left),
            right: Some(Box::new(right)),
        })
    }

    /// A unary arithmetic node, such as `(sub x)`.
    pub fn unary(op: impl Into<String>, operand: Expr) -> Self {
        Expr::Arithmetic(Arithmetic {
            op: op.into(),
            left: Box::new(operand),
            right: None,
        })
    }

    /// An assignment.
    pub fn assign(name: impl Into<String>, value: Expr) -> Self {
        Expr::Assignment(Assignment {
            name: name.into(),
            value: Box::new(value),
        })
    }

    /// A variable reference.
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    /// A condition used as a standalone expression.
    pub fn cond(op: impl Into<String>, left: Expr, right: Expr) -> Self {
        Expr::Condition(Condition::new(op, left, right))
    }

    /// An if/else node.
    pub fn if_else(test: Condition, then_branch: Expr, else_branch: Expr) -> Self {
        Expr::IfElse(IfElse {
            test,
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        })
    }

    /// A block node.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::EmptyBlock` if `body` is empty.
    pub fn block(body: Vec<Expr>) -> Result<Self, BuildError> {
        Block::new(body).map(Expr::Block)
    }

    /// A while loop.
    pub fn while_loop(test: Condition, body: Expr) -> Self {
        Expr::WhileLoop(WhileLoop {
            test,
            body: Box::new(body),
        })
    }

    /// A function declaration.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::DuplicateParameter` if a parameter name repeats.
    pub fn func_decl<I, S>(name: impl Into<String>, params: I, body: Expr) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let params = params.into_iter().map(Into::into).collect();
        FunctionDeclaration::new(name.into(), params, body).map(Expr::FunctionDeclaration)
    }

    /// A function invocation.
    pub fn invoke(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::FunctionInvocation(FunctionInvocation {
            name: name.into(),
            args,
        })
    }
}

impl Condition {
    /// Create a condition.
    pub fn new(op: impl Into<String>, left: Expr, right: Expr) -> Self {
        Self {
            op: op.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}
