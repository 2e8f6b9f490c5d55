//! Operator resolution
//!
//! Nodes carry operators as symbols; these enums are what the evaluator
//! actually dispatches on.

use std::fmt;

use crate::error::{ArithmeticError, EvalError, Result};

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    /// `plus`
    Plus,
    /// `sub`
    Sub,
    /// `mult`
    Mult,
    /// `div`
    Div,
    /// `mod` (remainder, sign follows the dividend)
    Mod,
    /// `pow`
    Pow,
}

impl ArithOp {
    /// Resolve a binary operator symbol.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOperator` for anything outside the recognized set.
    pub fn parse(symbol: &str) -> Result<Self> {
        match symbol {
            "plus" => Ok(ArithOp::Plus),
            "sub" => Ok(ArithOp::Sub),
            "mult" => Ok(ArithOp::Mult),
            "div" => Ok(ArithOp::Div),
            "mod" => Ok(ArithOp::Mod),
            "pow" => Ok(ArithOp::Pow),
            other => Err(unknown(other)),
        }
    }

    /// The symbol this operator is written as.
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Plus => "plus",
            ArithOp::Sub => "sub",
            ArithOp::Mult => "mult",
            ArithOp::Div => "div",
            ArithOp::Mod => "mod",
            ArithOp::Pow => "pow",
        }
    }

    /// Apply the operator.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when dividing (or taking a remainder) by zero, and
    /// `NonFinite` when the result is infinite or NaN.
    pub fn apply(self, left: f64, right: f64) -> Result<f64> {
        let value = match self {
            ArithOp::Plus => left + right,
            ArithOp::Sub => left - right,
            ArithOp::Mult => left * right,
            ArithOp::Div | ArithOp::Mod if right == 0.0 => {
                return Err(ArithmeticError::DivisionByZero.into());
            }
            ArithOp::Div => left / right,
            ArithOp::Mod => left % right,
            ArithOp::Pow => left.powf(right),
        };
        finite(value, self.symbol())
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `sub` or `neg`
    Neg,
    /// `plus`; returns the operand unchanged
    Identity,
}

impl UnaryOp {
    /// Resolve a unary operator symbol.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOperator` for anything outside the recognized set.
    pub fn parse(symbol: &str) -> Result<Self> {
        match symbol {
            "sub" | "neg" => Ok(UnaryOp::Neg),
            "plus" => Ok(UnaryOp::Identity),
            other => Err(unknown(other)),
        }
    }

    /// Apply the operator. Never fails; a non-finite operand comes back
    /// as-is (negated for `Neg`).
    pub fn apply(self, operand: f64) -> Result<f64> {
        match self {
            UnaryOp::Neg => Ok(-operand),
            UnaryOp::Identity => Ok(operand),
        }
    }
}

/// Relational operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CondOp {
    /// `lt`
    Lt,
    /// `le`
    Le,
    /// `gt`
    Gt,
    /// `ge`
    Ge,
    /// `eq`
    Eq,
    /// `ne`
    Ne,
}

impl CondOp {
    /// Resolve a relational operator symbol.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOperator` for anything outside the recognized set.
    pub fn parse(symbol: &str) -> Result<Self> {
        match symbol {
            "lt" => Ok(CondOp::Lt),
            "le" => Ok(CondOp::Le),
            "gt" => Ok(CondOp::Gt),
            "ge" => Ok(CondOp::Ge),
            "eq" => Ok(CondOp::Eq),
            "ne" => Ok(CondOp::Ne),
            other => Err(unknown(other)),
        }
    }

    /// Compare two operands.
    pub fn holds(self, left: f64, right: f64) -> bool {
        match self {
            CondOp::Lt => left < right,
            CondOp::Le => left <= right,
            CondOp::Gt => left > right,
            CondOp::Ge => left >= right,
            CondOp::Eq => left == right,
            CondOp::Ne => left != right,
        }
    }
}

fn unknown(symbol: &str) -> EvalError {
    EvalError::UnknownOperator {
        op: symbol.to_string(),
    }
}

fn finite(value: f64, op: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ArithmeticError::NonFinite { op: op.to_string() }.into())
    }
}
