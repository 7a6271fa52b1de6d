//! Logical and comparison operators. These evaluate to one when they hold and zero otherwise.

use formula_num::{Precision, Scalar};
use std::cmp::Ordering;
use super::{RuleError, RuleResult};

/// Note attached to the error raised when differentiating a logical or comparison operator.
pub const NO_DERIVATIVE: &str = "logical and comparison operators have no derivative";

/// Note attached to the error raised when ordering complex numbers.
pub const NO_ORDERING: &str = "complex numbers cannot be ordered with `<` or `>`";

/// Converts a truth value to one or zero.
fn truth<T: Scalar>(value: bool, precision: Precision) -> T {
    if value {
        T::one(precision)
    } else {
        T::zero(precision)
    }
}

/// `a | b`: one if either operand is non-zero.
pub fn or<T: Scalar>(a: &T, b: &T, precision: Precision) -> T {
    truth(!a.is_zero() || !b.is_zero(), precision)
}

/// `a & b`: one if both operands are non-zero.
pub fn and<T: Scalar>(a: &T, b: &T, precision: Precision) -> T {
    truth(!a.is_zero() && !b.is_zero(), precision)
}

/// `a = b`: one if the operands are exactly equal.
pub fn eq<T: Scalar>(a: &T, b: &T, precision: Precision) -> T {
    truth(a == b, precision)
}

/// Compares two operands, treating an unordered pair of real numbers (NaN) as failing every
/// comparison.
fn ordering<T: Scalar>(a: &T, b: &T, expected: Ordering, precision: Precision) -> RuleResult<T> {
    if !T::ORDERED {
        return Err(RuleError::Unsupported(NO_ORDERING));
    }
    Ok(truth(a.compare(b) == Some(expected), precision))
}

/// `a < b`.
pub fn less<T: Scalar>(a: &T, b: &T, precision: Precision) -> RuleResult<T> {
    ordering(a, b, Ordering::Less, precision)
}

/// `a > b`.
pub fn greater<T: Scalar>(a: &T, b: &T, precision: Precision) -> RuleResult<T> {
    ordering(a, b, Ordering::Greater, precision)
}
