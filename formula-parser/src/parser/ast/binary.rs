use crate::parser::{ast::Node, token::op::BinOp, Precedence};
use formula_num::Scalar;
use std::{fmt::{Display, Formatter}, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
///
/// A leading sign, such as the `-` in `-x`, is also a binary expression, whose operator is marked
/// [`implicit`] and whose left operand is an implicit zero.
///
/// [`implicit`]: BinOp::implicit
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary<T> {
    /// The left-hand-side of the binary expression.
    pub lhs: Box<Node<T>>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand-side of the binary expression.
    pub rhs: Box<Node<T>>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl<T> Binary<T> {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns true if this expression is a leading sign, such as `-x`.
    pub fn is_sign(&self) -> bool {
        self.op.implicit
    }
}

/// Returns the operator of the node if it is a binary expression written with an explicit
/// operator.
fn explicit_precedence<T>(node: &Node<T>) -> Option<Precedence> {
    match node {
        Node::Binary(binary) if !binary.op.implicit => Some(binary.op.precedence()),
        _ => None,
    }
}

impl<T: Scalar> Display for Binary<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let precedence = self.op.precedence();

        if self.op.implicit {
            write!(f, "{}", self.op.kind)?;
            return match explicit_precedence(&self.rhs) {
                Some(rhs) if rhs <= Precedence::Term => write!(f, "({})", self.rhs),
                _ => write!(f, "{}", self.rhs),
            };
        }

        let lhs_parens = match &*self.lhs {
            Node::Binary(lhs) if lhs.op.implicit => precedence > Precedence::Term,
            Node::Number(lhs) if lhs.lexeme.starts_with(['-', '+']) => precedence > Precedence::Term,
            lhs => explicit_precedence(lhs).is_some_and(|lhs| lhs < precedence),
        };
        let rhs_parens = explicit_precedence(&self.rhs).is_some_and(|rhs| rhs <= precedence);

        if lhs_parens {
            write!(f, "({})", self.lhs)?;
        } else {
            write!(f, "{}", self.lhs)?;
        }
        write!(f, "{}", self.op.kind)?;
        if rhs_parens {
            write!(f, "({})", self.rhs)
        } else {
            write!(f, "{}", self.rhs)
        }
    }
}
