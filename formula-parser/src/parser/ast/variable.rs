use std::{fmt::{Display, Formatter}, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A variable, such as `x` or `s_s_s.`, whose value is supplied when the formula is evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Variable {
    /// The name of the variable.
    pub name: String,

    /// The region of the source code that this variable was parsed from.
    pub span: Range<usize>,
}

impl Variable {
    /// Returns the span of the variable.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
