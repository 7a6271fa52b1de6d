//! The elementary functions a formula can call.

use std::{fmt::{Display, Formatter}, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The function that is being called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FuncKind {
    Sin,
    Asin,
    Cos,
    Acos,
    Tan,
    Atan,
    Exp,
    Log,
    Sqrt,
}

impl FuncKind {
    /// Every function, in no particular order.
    pub const ALL: [Self; 9] = [
        Self::Sin,
        Self::Asin,
        Self::Cos,
        Self::Acos,
        Self::Tan,
        Self::Atan,
        Self::Exp,
        Self::Log,
        Self::Sqrt,
    ];

    /// Returns the name the function is called by. `log` is the natural logarithm.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Asin => "asin",
            Self::Cos => "cos",
            Self::Acos => "acos",
            Self::Tan => "tan",
            Self::Atan => "atan",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
        }
    }

    /// Returns the function with the given name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|func| func.name() == name)
    }
}

impl Display for FuncKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The name of a called function.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Func {
    /// The function being called.
    pub kind: FuncKind,

    /// The region of the source code that the name was parsed from.
    pub span: Range<usize>,
}
