//! Evaluation and differentiation of formulas parsed by [`formula_parser`].
//!
//! The [`Formula`] type is the simplest way to use this crate: it normalizes an expression,
//! decides whether it needs complex numbers, parses it at the requested precision, and evaluates
//! it or its derivative with different variable values as many times as needed.
//!
//! The lower-level pieces are also available for use with trees built directly by the parser:
//!
//! - [`eval::Eval`] evaluates a tree in a [`Ctxt`] of variable values,
//! - [`derivative::Derive`] evaluates the derivative of a tree with respect to one variable,
//! - [`collect::collect_variables`] lists the variables of a tree,
//! - [`funcs`] holds the evaluation and derivative rules of every operator and function.
//!
//! # Example
//!
//! ```
//! use formula_compute::{ctxt::Ctxt, derivative::Derive, eval::Eval};
//! use formula_num::{Float, Precision};
//! use formula_parser::parser::parse;
//!
//! let tree = parse::<Float>("x*sin(x)").unwrap();
//! let ctxt = Ctxt::from_f64s(Precision::MIN, [("x", 0.0)]);
//! assert_eq!(tree.eval(&ctxt).unwrap(), 0);
//! assert_eq!(tree.derive("x", &ctxt).unwrap(), 0);
//! ```

pub mod collect;
pub mod ctxt;
pub mod derivative;
pub mod error;
pub mod eval;
pub mod formula;
pub mod funcs;
pub mod value;

pub use ctxt::Ctxt;
pub use formula::{normalize_expression, Formula, FormulaBuilder, Tree};
pub use value::Value;
