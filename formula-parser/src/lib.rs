//! Parser for string-encoded mathematical formulas, such as `(x+1)*(y-0.004)*(sin(x))^2`.
//!
//! The parser scans a formula for its lowest-precedence operator outside of any parentheses,
//! splits the formula there, and recurses into both sides. The result is a tree of [`Node`]s
//! holding numbers of any [`Scalar`] type.
//!
//! [`Node`]: parser::ast::Node
//! [`Scalar`]: formula_num::Scalar

pub mod parser;
pub mod tokenizer;
