//! Derivatives of the trigonometric functions and their inverses.

use formula_num::{DomainViolation, Precision, Scalar};
use super::RuleResult;

/// `sin'(a) = cos(a)`.
pub fn sin_derivative<T: Scalar>(a: &T) -> RuleResult<T> {
    Ok(a.cos()?)
}

/// `cos'(a) = -sin(a)`.
pub fn cos_derivative<T: Scalar>(a: &T) -> RuleResult<T> {
    Ok(a.sin()?.neg())
}

/// `tan'(a) = 1 / cos²(a)`.
pub fn tan_derivative<T: Scalar>(a: &T, precision: Precision) -> RuleResult<T> {
    let cos = a.cos()?;
    if cos.is_zero() {
        return Err(DomainViolation::Pole.into());
    }
    Ok(T::one(precision).div(&cos.mul(&cos))?)
}

/// Computes `1 / sqrt(1 - a²)`, which is undefined where `a² = 1`.
fn inverse_sine_factor<T: Scalar>(a: &T, precision: Precision) -> RuleResult<T> {
    let one = T::one(precision);
    let square = a.mul(a);
    if square == one {
        return Err(DomainViolation::DivisionByZero.into());
    }
    Ok(one.div(&one.sub(&square).sqrt()?)?)
}

/// `asin'(a) = 1 / sqrt(1 - a²)`.
pub fn asin_derivative<T: Scalar>(a: &T, precision: Precision) -> RuleResult<T> {
    inverse_sine_factor(a, precision)
}

/// `acos'(a) = -1 / sqrt(1 - a²)`.
pub fn acos_derivative<T: Scalar>(a: &T, precision: Precision) -> RuleResult<T> {
    Ok(inverse_sine_factor(a, precision)?.neg())
}

/// `atan'(a) = 1 / (1 + a²)`.
pub fn atan_derivative<T: Scalar>(a: &T, precision: Precision) -> RuleResult<T> {
    let one = T::one(precision);
    Ok(one.div(&one.add(&a.mul(a)))?)
}
