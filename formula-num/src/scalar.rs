//! The [`Scalar`] trait, implemented by every number type a formula can be evaluated with.

use crate::{
    consts,
    error::InvalidNumber,
    fmt::{self as num_fmt, FormatOptions},
    precision::Precision,
    primitive::{complex, float, float_from_str},
};
use rug::{ops::Pow, Complex, Float};
use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
};

/// Describes why an operation has no value for the given operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainViolation {
    /// A division by zero, including a zero raised to a negative power.
    DivisionByZero,

    /// The function has a pole at the given point, such as the tangent at `π/2`.
    Pole,

    /// The operand lies outside the domain of the function, such as the logarithm of a negative
    /// real number.
    OutOfDomain,

    /// The result is not a real number, such as `(-8)^(1/3)` in real arithmetic.
    NotReal,
}

impl DomainViolation {
    /// A short description of the violation.
    pub fn description(self) -> &'static str {
        match self {
            Self::DivisionByZero => "division by zero",
            Self::Pole => "the function has a pole here",
            Self::OutOfDomain => "the argument is outside the domain of the function",
            Self::NotReal => "the result is not a real number",
        }
    }
}

impl Display for DomainViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// A number that formulas can be evaluated with.
///
/// All operations produce a new number at the precision of `self`. Operations that can fail
/// return the [`DomainViolation`] that makes them undefined.
pub trait Scalar: Clone + Debug + PartialEq + Send + Sync + 'static {
    /// A human-readable name for this kind of number.
    const NAME: &'static str;

    /// Whether numbers of this kind can be ordered with `<` and `>`.
    const ORDERED: bool;

    /// Zero, at the given precision.
    fn zero(precision: Precision) -> Self;

    /// One, at the given precision.
    fn one(precision: Precision) -> Self;

    /// π, at the given precision.
    fn pi(precision: Precision) -> Self;

    /// The imaginary unit, if this kind of number has one.
    fn imaginary_unit(precision: Precision) -> Option<Self>;

    /// Converts a native floating-point number.
    fn from_f64(precision: Precision, n: f64) -> Self;

    /// Parses a decimal literal, such as `-002.5e-3`.
    fn parse_literal(precision: Precision, s: &str) -> Result<Self, InvalidNumber>;

    /// Returns true if this number is exactly zero.
    fn is_zero(&self) -> bool;

    /// Compares two numbers. Returns [`None`] if this kind of number has no ordering, or if
    /// either number is NaN.
    fn compare(&self, other: &Self) -> Option<Ordering>;

    fn add(&self, rhs: &Self) -> Self;
    fn sub(&self, rhs: &Self) -> Self;
    fn mul(&self, rhs: &Self) -> Self;
    fn neg(&self) -> Self;

    /// Divides `self` by `rhs`, failing if `rhs` is zero.
    fn div(&self, rhs: &Self) -> Result<Self, DomainViolation>;

    /// Raises `self` to the power of `rhs`.
    fn pow(&self, rhs: &Self) -> Result<Self, DomainViolation>;

    fn sin(&self) -> Result<Self, DomainViolation>;
    fn cos(&self) -> Result<Self, DomainViolation>;
    fn tan(&self) -> Result<Self, DomainViolation>;
    fn asin(&self) -> Result<Self, DomainViolation>;
    fn acos(&self) -> Result<Self, DomainViolation>;
    fn atan(&self) -> Result<Self, DomainViolation>;
    fn exp(&self) -> Result<Self, DomainViolation>;

    /// The natural logarithm.
    fn ln(&self) -> Result<Self, DomainViolation>;
    fn sqrt(&self) -> Result<Self, DomainViolation>;

    /// Writes this number using the given formatting options.
    fn write_formatted(&self, f: &mut Formatter<'_>, options: FormatOptions) -> std::fmt::Result;

    /// Returns a [`Display`]able wrapper that formats this number using the given options.
    fn formatted(&self, options: FormatOptions) -> ScalarFormatter<'_, Self> {
        ScalarFormatter { value: self, options }
    }
}

/// Formatter for a [`Scalar`].
#[derive(Debug, Clone, Copy)]
pub struct ScalarFormatter<'a, T: Scalar> {
    /// The value to format.
    pub value: &'a T,

    /// The options to use when formatting.
    pub options: FormatOptions,
}

impl<T: Scalar> Display for ScalarFormatter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.value.write_formatted(f, self.options)
    }
}

/// Maps a NaN produced from non-NaN operands to [`DomainViolation::NotReal`].
fn real_result(n: Float, operands: &[&Float]) -> Result<Float, DomainViolation> {
    if n.is_nan() && operands.iter().all(|op| !op.is_nan()) {
        Err(DomainViolation::NotReal)
    } else {
        Ok(n)
    }
}

impl Scalar for Float {
    const NAME: &'static str = "real";
    const ORDERED: bool = true;

    fn zero(precision: Precision) -> Self {
        float(precision, 0)
    }

    fn one(precision: Precision) -> Self {
        float(precision, 1)
    }

    fn pi(precision: Precision) -> Self {
        consts::pi(precision)
    }

    fn imaginary_unit(_: Precision) -> Option<Self> {
        None
    }

    fn from_f64(precision: Precision, n: f64) -> Self {
        float(precision, n)
    }

    fn parse_literal(precision: Precision, s: &str) -> Result<Self, InvalidNumber> {
        float_from_str(precision, s)
    }

    fn is_zero(&self) -> bool {
        Float::is_zero(self)
    }

    fn compare(&self, other: &Self) -> Option<Ordering> {
        self.partial_cmp(other)
    }

    fn add(&self, rhs: &Self) -> Self {
        self.clone() + rhs
    }

    fn sub(&self, rhs: &Self) -> Self {
        self.clone() - rhs
    }

    fn mul(&self, rhs: &Self) -> Self {
        self.clone() * rhs
    }

    fn neg(&self) -> Self {
        -self.clone()
    }

    fn div(&self, rhs: &Self) -> Result<Self, DomainViolation> {
        if Float::is_zero(rhs) {
            return Err(DomainViolation::DivisionByZero);
        }
        Ok(self.clone() / rhs)
    }

    fn pow(&self, rhs: &Self) -> Result<Self, DomainViolation> {
        if Float::is_zero(self) && rhs.is_sign_negative() && !Float::is_zero(rhs) {
            return Err(DomainViolation::DivisionByZero);
        }
        real_result(Pow::pow(self.clone(), rhs), &[self, rhs])
    }

    fn sin(&self) -> Result<Self, DomainViolation> {
        Ok(Float::sin(self.clone()))
    }

    fn cos(&self) -> Result<Self, DomainViolation> {
        Ok(Float::cos(self.clone()))
    }

    fn tan(&self) -> Result<Self, DomainViolation> {
        if Float::is_zero(&Float::cos(self.clone())) {
            return Err(DomainViolation::Pole);
        }
        Ok(Float::tan(self.clone()))
    }

    fn asin(&self) -> Result<Self, DomainViolation> {
        if *self.as_abs() > 1 {
            return Err(DomainViolation::OutOfDomain);
        }
        Ok(Float::asin(self.clone()))
    }

    fn acos(&self) -> Result<Self, DomainViolation> {
        if *self.as_abs() > 1 {
            return Err(DomainViolation::OutOfDomain);
        }
        Ok(Float::acos(self.clone()))
    }

    fn atan(&self) -> Result<Self, DomainViolation> {
        Ok(Float::atan(self.clone()))
    }

    fn exp(&self) -> Result<Self, DomainViolation> {
        Ok(Float::exp(self.clone()))
    }

    fn ln(&self) -> Result<Self, DomainViolation> {
        if *self <= 0 {
            return Err(DomainViolation::OutOfDomain);
        }
        Ok(Float::ln(self.clone()))
    }

    fn sqrt(&self) -> Result<Self, DomainViolation> {
        if *self < 0 {
            return Err(DomainViolation::OutOfDomain);
        }
        Ok(Float::sqrt(self.clone()))
    }

    fn write_formatted(&self, f: &mut Formatter<'_>, options: FormatOptions) -> std::fmt::Result {
        num_fmt::float::fmt(f, self, options)
    }
}

impl Scalar for Complex {
    const NAME: &'static str = "complex";
    const ORDERED: bool = false;

    fn zero(precision: Precision) -> Self {
        complex(precision, 0)
    }

    fn one(precision: Precision) -> Self {
        complex(precision, 1)
    }

    fn pi(precision: Precision) -> Self {
        complex(precision, consts::pi(precision))
    }

    fn imaginary_unit(precision: Precision) -> Option<Self> {
        Some(complex(precision, (0, 1)))
    }

    fn from_f64(precision: Precision, n: f64) -> Self {
        complex(precision, n)
    }

    fn parse_literal(precision: Precision, s: &str) -> Result<Self, InvalidNumber> {
        float_from_str(precision, s).map(|re| complex(precision, re))
    }

    fn is_zero(&self) -> bool {
        Complex::is_zero(self)
    }

    fn compare(&self, _: &Self) -> Option<Ordering> {
        None
    }

    fn add(&self, rhs: &Self) -> Self {
        self.clone() + rhs
    }

    fn sub(&self, rhs: &Self) -> Self {
        self.clone() - rhs
    }

    fn mul(&self, rhs: &Self) -> Self {
        self.clone() * rhs
    }

    fn neg(&self) -> Self {
        -self.clone()
    }

    fn div(&self, rhs: &Self) -> Result<Self, DomainViolation> {
        if Complex::is_zero(rhs) {
            return Err(DomainViolation::DivisionByZero);
        }
        Ok(self.clone() / rhs)
    }

    fn pow(&self, rhs: &Self) -> Result<Self, DomainViolation> {
        if Complex::is_zero(self) && rhs.real().is_sign_negative() && !rhs.real().is_zero() {
            return Err(DomainViolation::DivisionByZero);
        }
        Ok(Pow::pow(self.clone(), rhs))
    }

    fn sin(&self) -> Result<Self, DomainViolation> {
        Ok(Complex::sin(self.clone()))
    }

    fn cos(&self) -> Result<Self, DomainViolation> {
        Ok(Complex::cos(self.clone()))
    }

    fn tan(&self) -> Result<Self, DomainViolation> {
        if Complex::is_zero(&Complex::cos(self.clone())) {
            return Err(DomainViolation::Pole);
        }
        Ok(Complex::tan(self.clone()))
    }

    fn asin(&self) -> Result<Self, DomainViolation> {
        Ok(Complex::asin(self.clone()))
    }

    fn acos(&self) -> Result<Self, DomainViolation> {
        Ok(Complex::acos(self.clone()))
    }

    fn atan(&self) -> Result<Self, DomainViolation> {
        Ok(Complex::atan(self.clone()))
    }

    fn exp(&self) -> Result<Self, DomainViolation> {
        Ok(Complex::exp(self.clone()))
    }

    fn ln(&self) -> Result<Self, DomainViolation> {
        if Complex::is_zero(self) {
            return Err(DomainViolation::OutOfDomain);
        }
        Ok(Complex::ln(self.clone()))
    }

    fn sqrt(&self) -> Result<Self, DomainViolation> {
        Ok(Complex::sqrt(self.clone()))
    }

    fn write_formatted(&self, f: &mut Formatter<'_>, options: FormatOptions) -> std::fmt::Result {
        num_fmt::complex::fmt(f, self, options)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn real(n: f64) -> Float {
        <Float as Scalar>::from_f64(Precision::MIN, n)
    }

    #[test]
    fn real_domain() {
        assert_eq!(Scalar::div(&real(1.0), &real(0.0)), Err(DomainViolation::DivisionByZero));
        assert_eq!(Scalar::ln(&real(0.0)), Err(DomainViolation::OutOfDomain));
        assert_eq!(Scalar::ln(&real(-1.0)), Err(DomainViolation::OutOfDomain));
        assert_eq!(Scalar::sqrt(&real(-1.0)), Err(DomainViolation::OutOfDomain));
        assert_eq!(Scalar::asin(&real(1.5)), Err(DomainViolation::OutOfDomain));
        assert_eq!(Scalar::acos(&real(-1.5)), Err(DomainViolation::OutOfDomain));
        assert_eq!(Scalar::pow(&real(-8.0), &real(0.5)), Err(DomainViolation::NotReal));
        assert_eq!(Scalar::pow(&real(0.0), &real(-1.0)), Err(DomainViolation::DivisionByZero));
    }

    #[test]
    fn real_values() {
        assert_eq!(Scalar::pow(&real(-2.0), &real(3.0)).unwrap(), -8);
        assert_eq!(Scalar::pow(&real(0.0), &real(0.0)).unwrap(), 1);
        assert_eq!(Scalar::sqrt(&real(0.0)).unwrap(), 0);
        assert_eq!(Scalar::asin(&real(1.0)).unwrap() * 2u32, <Float as Scalar>::pi(Precision::MIN));
        assert_eq!(Scalar::compare(&real(1.0), &real(2.0)), Some(Ordering::Less));
    }

    #[test]
    fn complex_values() {
        let precision = Precision::MIN;
        let i = <Complex as Scalar>::imaginary_unit(precision).unwrap();
        assert_eq!(Scalar::mul(&i, &i), Scalar::neg(&<Complex as Scalar>::one(precision)));
        assert_eq!(Scalar::sqrt(&<Complex as Scalar>::from_f64(precision, -4.0)).unwrap(), complex(precision, (0, 2)));
        assert_eq!(Scalar::ln(&<Complex as Scalar>::zero(precision)), Err(DomainViolation::OutOfDomain));
        assert_eq!(Scalar::compare(&i, &i), None);
        assert!(<Float as Scalar>::imaginary_unit(precision).is_none());
    }
}
