//! Abstract Syntax Tree for the reduced FORTRAN 77 dialect.
//!
//! The tree mirrors the grammar one-to-one: a [`Program`] owns an ordered list of [`Statement`]s, and expressions are
//! a plain recursive [`Expr`] enum with boxed children.
//!
//! ## Notes
//! - Parenthesized sub-expressions do not get their own node; grouping is encoded by tree shape.
//! - Numeric literals keep their source spelling (`"3"`, `"3.5"`); nothing is evaluated.

use std::fmt;

use f77_core::lang::keywords::{self, KeywordId};
use f77_core::lang::operators::{self, OperatorId};

/// Source span (byte offsets, end exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Identifier spelling, exactly as written in the source.
pub type Ident = String;

/// A whole `PROGRAM ... END` unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub name: Ident,
    pub statements: Vec<Statement>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Declaration(Declaration),
    Assignment(Assignment),
    CountedLoop(CountedLoop),
}

/// `INTEGER A, B` / `REAL X`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclKind,
    pub names: Vec<Ident>,
}

/// Type keyword of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Integer,
    Real,
}

impl DeclKind {
    /// Map a type keyword to its declaration kind.
    pub fn from_keyword(id: KeywordId) -> Option<Self> {
        match id {
            KeywordId::Integer => Some(DeclKind::Integer),
            KeywordId::Real => Some(DeclKind::Real),
            _ => None,
        }
    }

    pub fn keyword_id(self) -> KeywordId {
        match self {
            DeclKind::Integer => KeywordId::Integer,
            DeclKind::Real => KeywordId::Real,
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(keywords::as_str(self.keyword_id()))
    }
}

/// `X = expr`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub target: Ident,
    pub value: Expr,
}

/// `DO J = start, end`
///
/// Only the loop header is modelled. The body lines that follow are ordinary statements of the enclosing list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountedLoop {
    pub variable: Ident,
    pub start: Expr,
    pub end: Expr,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Left-associative `+ - * /`.
    Binary(Box<Expr>, BinaryOp, Box<Expr>),
    /// Right-associative `base ** exponent`.
    Power(Box<Expr>, Box<Expr>),
    /// Unsigned numeric literal, source spelling preserved.
    Number(String),
    /// Variable reference.
    Variable(Ident),
}

impl Expr {
    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::Binary(Box::new(left), op, Box::new(right))
    }

    pub fn power(base: Expr, exponent: Expr) -> Self {
        Expr::Power(Box::new(base), Box::new(exponent))
    }

    pub fn number(text: impl Into<String>) -> Self {
        Expr::Number(text.into())
    }

    pub fn variable(name: impl Into<Ident>) -> Self {
        Expr::Variable(name.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Map an operator token to a binary operator (`**` and `=` are not binary operators here).
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        match id {
            OperatorId::Plus => Some(BinaryOp::Add),
            OperatorId::Minus => Some(BinaryOp::Sub),
            OperatorId::Star => Some(BinaryOp::Mul),
            OperatorId::Slash => Some(BinaryOp::Div),
            OperatorId::StarStar | OperatorId::Assign => None,
        }
    }

    pub fn operator_id(self) -> OperatorId {
        match self {
            BinaryOp::Add => OperatorId::Plus,
            BinaryOp::Sub => OperatorId::Minus,
            BinaryOp::Mul => OperatorId::Star,
            BinaryOp::Div => OperatorId::Slash,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(operators::as_str(self.operator_id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_op_display_uses_registry_spelling() {
        assert_eq!(BinaryOp::Add.to_string(), "+");
        assert_eq!(BinaryOp::Div.to_string(), "/");
    }

    #[test]
    fn test_binary_op_from_operator() {
        assert_eq!(BinaryOp::from_operator(OperatorId::Star), Some(BinaryOp::Mul));
        assert_eq!(BinaryOp::from_operator(OperatorId::StarStar), None);
        assert_eq!(BinaryOp::from_operator(OperatorId::Assign), None);
    }

    #[test]
    fn test_decl_kind_round_trips_keyword() {
        for kind in [DeclKind::Integer, DeclKind::Real] {
            assert_eq!(DeclKind::from_keyword(kind.keyword_id()), Some(kind));
        }
        assert_eq!(DeclKind::from_keyword(KeywordId::Do), None);
        assert_eq!(DeclKind::Real.to_string(), "REAL");
    }
}
