//! The rules for evaluating and differentiating every operator and function a formula can use.
//!
//! Every binary operator has a forward rule and two partial-derivative rules, one per operand.
//! The derivative of a binary expression `f(u, v)` is assembled by the differentiator as
//! `∂f/∂u * u' + ∂f/∂v * v'`, so the rules only need the already-evaluated operands. Functions
//! have a forward rule and a single derivative rule.
//!
//! # Example
//!
//! ```
//! use formula_compute::funcs;
//! use formula_num::{Float, Precision, Scalar};
//! use formula_parser::parser::token::op::BinOpKind;
//!
//! let precision = Precision::MIN;
//! let a = <Float as Scalar>::from_f64(precision, 3.0);
//! let b = <Float as Scalar>::from_f64(precision, 2.0);
//!
//! // 3^2 and its partial derivative with respect to the base, 2 * 3^1
//! assert_eq!(funcs::eval_binary(BinOpKind::Exp, &a, &b, precision).unwrap(), 9);
//! assert_eq!(funcs::derive_left(BinOpKind::Exp, &a, &b, precision).unwrap(), 6);
//! ```

pub mod arithmetic;
pub mod logic;
pub mod power;
pub mod trigonometry;

use crate::error::{kind::DomainError, Error};
use formula_num::{DomainViolation, Precision, Scalar};
use formula_parser::parser::{
    error::kind::UnknownOperator,
    token::{func::FuncKind, op::BinOpKind},
};
use std::ops::Range;

/// Why a rule could not produce a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleError {
    /// The operands are outside the domain of the rule.
    Domain(DomainViolation),

    /// The rule does not exist for this kind of number. The note explains why.
    Unsupported(&'static str),
}

impl From<DomainViolation> for RuleError {
    fn from(violation: DomainViolation) -> Self {
        Self::Domain(violation)
    }
}

impl RuleError {
    /// Converts this error into an [`Error`] pointing at the given span, for the operator or
    /// function with the given name and arity.
    pub fn into_error(self, name: &str, arity: usize, span: Range<usize>) -> Error {
        match self {
            Self::Domain(violation) => Error::new(vec![span], DomainError {
                op: name.to_string(),
                violation,
            }),
            Self::Unsupported(note) => Error::new(vec![span], UnknownOperator {
                name: name.to_string(),
                arity,
                suggestions: Vec::new(),
                note: Some(note),
            }),
        }
    }
}

/// The result of a rule.
pub type RuleResult<T> = Result<T, RuleError>;

/// Applies a binary operator to its operands.
pub fn eval_binary<T: Scalar>(op: BinOpKind, a: &T, b: &T, precision: Precision) -> RuleResult<T> {
    match op {
        BinOpKind::Or => Ok(logic::or(a, b, precision)),
        BinOpKind::And => Ok(logic::and(a, b, precision)),
        BinOpKind::Eq => Ok(logic::eq(a, b, precision)),
        BinOpKind::Less => logic::less(a, b, precision),
        BinOpKind::Greater => logic::greater(a, b, precision),
        BinOpKind::Add => Ok(a.add(b)),
        BinOpKind::Sub => Ok(a.sub(b)),
        BinOpKind::Mul => Ok(a.mul(b)),
        BinOpKind::Div => Ok(a.div(b)?),
        BinOpKind::Exp => Ok(a.pow(b)?),
    }
}

/// Computes the partial derivative of a binary operator with respect to its left operand, at the
/// given operands.
pub fn derive_left<T: Scalar>(op: BinOpKind, a: &T, b: &T, precision: Precision) -> RuleResult<T> {
    match op {
        BinOpKind::Or | BinOpKind::And | BinOpKind::Eq | BinOpKind::Less | BinOpKind::Greater => {
            Err(RuleError::Unsupported(logic::NO_DERIVATIVE))
        },
        BinOpKind::Add | BinOpKind::Sub => Ok(T::one(precision)),
        BinOpKind::Mul => Ok(b.clone()),
        BinOpKind::Div => arithmetic::div_left(b, precision),
        BinOpKind::Exp => power::pow_left(a, b, precision),
    }
}

/// Computes the partial derivative of a binary operator with respect to its right operand, at the
/// given operands.
pub fn derive_right<T: Scalar>(op: BinOpKind, a: &T, b: &T, precision: Precision) -> RuleResult<T> {
    match op {
        BinOpKind::Or | BinOpKind::And | BinOpKind::Eq | BinOpKind::Less | BinOpKind::Greater => {
            Err(RuleError::Unsupported(logic::NO_DERIVATIVE))
        },
        BinOpKind::Add => Ok(T::one(precision)),
        BinOpKind::Sub => Ok(T::one(precision).neg()),
        BinOpKind::Mul => Ok(a.clone()),
        BinOpKind::Div => arithmetic::div_right(a, b),
        BinOpKind::Exp => power::pow_right(a, b),
    }
}

/// Applies a function to its argument.
pub fn eval_func<T: Scalar>(func: FuncKind, a: &T) -> RuleResult<T> {
    let result = match func {
        FuncKind::Sin => a.sin(),
        FuncKind::Asin => a.asin(),
        FuncKind::Cos => a.cos(),
        FuncKind::Acos => a.acos(),
        FuncKind::Tan => a.tan(),
        FuncKind::Atan => a.atan(),
        FuncKind::Exp => a.exp(),
        FuncKind::Log => a.ln(),
        FuncKind::Sqrt => a.sqrt(),
    };
    Ok(result?)
}

/// Computes the derivative of a function at the given argument.
pub fn derive_func<T: Scalar>(func: FuncKind, a: &T, precision: Precision) -> RuleResult<T> {
    match func {
        FuncKind::Sin => trigonometry::sin_derivative(a),
        FuncKind::Asin => trigonometry::asin_derivative(a, precision),
        FuncKind::Cos => trigonometry::cos_derivative(a),
        FuncKind::Acos => trigonometry::acos_derivative(a, precision),
        FuncKind::Tan => trigonometry::tan_derivative(a, precision),
        FuncKind::Atan => trigonometry::atan_derivative(a, precision),
        FuncKind::Exp => power::exp_derivative(a),
        FuncKind::Log => power::log_derivative(a, precision),
        FuncKind::Sqrt => power::sqrt_derivative(a, precision),
    }
}
