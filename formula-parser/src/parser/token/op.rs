//! Structs to help parse binary operators.

use crate::{parser::Precedence, tokenizer::TokenKind};
use std::{fmt::{Display, Formatter}, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Or,
    And,
    Eq,
    Less,
    Greater,
    Add,
    Sub,
    Mul,
    Div,
    Exp,
}

impl BinOpKind {
    /// The order in which the parser looks for operators to split an expression at, from the
    /// loosest-binding operator to the tightest.
    pub const SCAN_ORDER: [Self; 10] = [
        Self::Or,
        Self::And,
        Self::Eq,
        Self::Greater,
        Self::Less,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Exp,
    ];

    /// Returns the symbol of the binary operation.
    pub fn symbol(self) -> char {
        match self {
            Self::Or => '|',
            Self::And => '&',
            Self::Eq => '=',
            Self::Less => '<',
            Self::Greater => '>',
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Exp => '^',
        }
    }

    /// Returns the operation for the given token kind, if it is an operator.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Or => Self::Or,
            TokenKind::And => Self::And,
            TokenKind::Eq => Self::Eq,
            TokenKind::Less => Self::Less,
            TokenKind::Greater => Self::Greater,
            TokenKind::Add => Self::Add,
            TokenKind::Sub => Self::Sub,
            TokenKind::Mul => Self::Mul,
            TokenKind::Div => Self::Div,
            TokenKind::Exp => Self::Exp,
            TokenKind::OpenParen | TokenKind::CloseParen | TokenKind::Comma | TokenKind::Atom => return None,
        })
    }

    /// Returns true if the operator can also appear as the sign of an operand.
    pub fn is_sign(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// Returns the precedence of the binary operation.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Or => Precedence::Or,
            Self::And => Precedence::And,
            Self::Eq | Self::Less | Self::Greater => Precedence::Compare,
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Exp => Precedence::Exp,
        }
    }
}

impl Display for BinOpKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A binary operator that takes two operands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinOp {
    /// The kind of binary operator.
    pub kind: BinOpKind,

    /// Whether this operator stands for the sign of its right operand, such as the `-` in `-x`.
    /// The left operand of such an operator is an implicit zero.
    pub implicit: bool,

    /// The region of the source code that this operator was parsed from.
    pub span: Range<usize>,
}

impl BinOp {
    /// Returns the precedence of the binary operator.
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }
}
