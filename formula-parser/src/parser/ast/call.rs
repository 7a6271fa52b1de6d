use crate::parser::{ast::Node, token::func::Func};
use formula_num::Scalar;
use std::{fmt::{Display, Formatter}, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function call, such as `sin(x)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call<T> {
    /// The function being called.
    pub func: Func,

    /// The argument passed to the function.
    pub arg: Box<Node<T>>,

    /// The region of the source code that this call was parsed from.
    pub span: Range<usize>,
}

impl<T> Call<T> {
    /// Returns the span of the call.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl<T: Scalar> Display for Call<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.func.kind, self.arg)
    }
}
