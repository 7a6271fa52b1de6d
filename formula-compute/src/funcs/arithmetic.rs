//! Partial derivatives of division. Addition, subtraction and multiplication have constant or
//! trivial partials that are written inline in the rule table.

use formula_num::{DomainViolation, Precision, Scalar};
use super::RuleResult;

/// `∂(a / b)/∂a = 1 / b`.
pub fn div_left<T: Scalar>(b: &T, precision: Precision) -> RuleResult<T> {
    Ok(T::one(precision).div(b)?)
}

/// `∂(a / b)/∂b = -a / b²`.
pub fn div_right<T: Scalar>(a: &T, b: &T) -> RuleResult<T> {
    if b.is_zero() {
        return Err(DomainViolation::DivisionByZero.into());
    }
    Ok(a.neg().div(&b.mul(b))?)
}
