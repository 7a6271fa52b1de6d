//! Derivatives of powers, exponentials, logarithms and roots.

use formula_num::{DomainViolation, Precision, Scalar};
use super::RuleResult;

/// `∂(a^b)/∂a = b * a^(b - 1)`.
pub fn pow_left<T: Scalar>(a: &T, b: &T, precision: Precision) -> RuleResult<T> {
    let power = a.pow(&b.sub(&T::one(precision)))?;
    Ok(b.mul(&power))
}

/// `∂(a^b)/∂b = ln(a) * a^b`.
pub fn pow_right<T: Scalar>(a: &T, b: &T) -> RuleResult<T> {
    Ok(a.ln()?.mul(&a.pow(b)?))
}

/// `exp'(a) = exp(a)`.
pub fn exp_derivative<T: Scalar>(a: &T) -> RuleResult<T> {
    Ok(a.exp()?)
}

/// `log'(a) = 1 / a`.
pub fn log_derivative<T: Scalar>(a: &T, precision: Precision) -> RuleResult<T> {
    Ok(T::one(precision).div(a)?)
}

/// `sqrt'(a) = 1 / (2 * sqrt(a))`.
pub fn sqrt_derivative<T: Scalar>(a: &T, precision: Precision) -> RuleResult<T> {
    if a.is_zero() {
        return Err(DomainViolation::DivisionByZero.into());
    }
    let two = T::from_f64(precision, 2.0);
    Ok(T::one(precision).div(&two.mul(&a.sqrt()?))?)
}

#[cfg(test)]
mod tests {
    use formula_num::Float;
    use super::*;
    use crate::funcs::RuleError;

    fn real(n: f64) -> Float {
        <Float as Scalar>::from_f64(Precision::MIN, n)
    }

    #[test]
    fn power_partials() {
        let p = Precision::MIN;
        assert_eq!(pow_left(&real(3.0), &real(2.0), p).unwrap(), 6);
        assert_eq!(pow_left(&real(-3.0), &real(2.0), p).unwrap(), -6);
        assert_eq!(pow_right(&real(1.0), &real(5.0)).unwrap(), 0);
    }

    #[test]
    fn guards() {
        let p = Precision::MIN;
        let zero = Err(RuleError::Domain(DomainViolation::DivisionByZero));
        assert_eq!(log_derivative(&real(0.0), p), zero);
        assert_eq!(sqrt_derivative(&real(0.0), p), zero);
        assert_eq!(sqrt_derivative(&real(4.0), p).unwrap(), 0.25);
        assert_eq!(
            pow_right(&real(-1.0), &real(2.0)),
            Err(RuleError::Domain(DomainViolation::OutOfDomain)),
        );
    }
}
