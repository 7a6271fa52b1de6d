use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number, such as `2.5e-3`, `pi` or the imaginary unit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Number<T> {
    /// The value of the number.
    pub value: T,

    /// The text the number was parsed from. This is empty for the implicit zero on the left side
    /// of a leading sign.
    pub lexeme: String,

    /// The region of the source code that this number was parsed from.
    pub span: Range<usize>,
}

impl<T> Number<T> {
    /// Returns the span of the number.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}
