use crate::parser::{
    ast::{binary::Binary, call::Call, number::Number, variable::Variable},
    iter::NodeIter,
};
use formula_num::{FormatOptions, Scalar};
use std::{fmt::{Display, Formatter}, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of a parsed formula.
///
/// Every node exclusively owns its children, so a tree can be shared between threads for reading
/// and cloned into a fully independent copy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node<T> {
    /// A number, such as `2.5` or `pi`.
    Number(Number<T>),

    /// A variable, such as `x`.
    Variable(Variable),

    /// A function call with one argument, such as `sin(x)`.
    Call(Call<T>),

    /// A binary expression, such as `1 + 2`, or a leading sign, such as `-x`.
    Binary(Binary<T>),
}

impl<T> Node<T> {
    /// Returns the span of the node.
    pub fn span(&self) -> Range<usize> {
        match self {
            Node::Number(number) => number.span(),
            Node::Variable(variable) => variable.span(),
            Node::Call(call) => call.span(),
            Node::Binary(binary) => binary.span(),
        }
    }

    /// Returns an iterator that traverses the tree of nodes in left-to-right post-order (i.e.
    /// depth-first).
    pub fn post_order_iter(&self) -> NodeIter<'_, T> {
        NodeIter::new(self)
    }
}

impl<T: Scalar> Display for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Number(number) if number.lexeme.is_empty() => {
                write!(f, "{}", number.value.formatted(FormatOptions::default()))
            },
            Node::Number(number) => f.write_str(&number.lexeme),
            Node::Variable(variable) => write!(f, "{}", variable),
            Node::Call(call) => write!(f, "{}", call),
            Node::Binary(binary) => write!(f, "{}", binary),
        }
    }
}
