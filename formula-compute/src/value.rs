use formula_num::{FormatOptions, Scalar};
use rug::{Complex, Float};
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of evaluating a formula, which is real or complex depending on the formula.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// A real number.
    Real(Float),

    /// A complex number.
    Complex(Complex),
}

impl Value {
    /// Returns the typename of this value.
    pub fn typename(&self) -> &'static str {
        match self {
            Value::Real(_) => <Float as Scalar>::NAME,
            Value::Complex(_) => <Complex as Scalar>::NAME,
        }
    }

    /// Returns true if the value is a complex number.
    pub fn is_complex(&self) -> bool {
        matches!(self, Value::Complex(_))
    }

    /// Returns the real part of the value.
    pub fn real(&self) -> &Float {
        match self {
            Value::Real(n) => n,
            Value::Complex(c) => c.real(),
        }
    }

    /// Returns the value as a native floating-point number, or [`None`] if it has a non-zero
    /// imaginary part.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Value::Real(n) => Some(n.to_f64()),
            Value::Complex(c) if c.imag().is_zero() => Some(c.real().to_f64()),
            Value::Complex(_) => None,
        }
    }

    /// Returns a formatter for the value with the given options.
    pub fn fmt(&self, options: FormatOptions) -> ValueFormatter {
        ValueFormatter {
            value: self,
            options,
        }
    }
}

impl From<Float> for Value {
    fn from(n: Float) -> Self {
        Value::Real(n)
    }
}

impl From<Complex> for Value {
    fn from(c: Complex) -> Self {
        Value::Complex(c)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.fmt(Default::default()).fmt(f)
    }
}

/// Formats a [`Value`] with the given options.
#[derive(Debug, Clone, Copy)]
pub struct ValueFormatter<'a> {
    /// The value to format.
    pub value: &'a Value,

    /// The options to use when formatting.
    pub options: FormatOptions,
}

impl Display for ValueFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.value {
            Value::Real(n) => n.write_formatted(f, self.options),
            Value::Complex(c) => c.write_formatted(f, self.options),
        }
    }
}
