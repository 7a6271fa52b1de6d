//! Functions to construct [`Float`]s and [`Complex`] numbers at a given [`Precision`].

use crate::{error::InvalidNumber, precision::Precision};
use rug::{Assign, Complex, Float};

/// Creates a [`Float`] with the given value.
pub fn float<T>(precision: Precision, n: T) -> Float
where
    Float: Assign<T>,
{
    Float::with_val(precision.bits(), n)
}

/// Creates a [`Complex`] with the given value.
pub fn complex<T>(precision: Precision, n: T) -> Complex
where
    Complex: Assign<T>,
{
    Complex::with_val(precision.bits(), n)
}

/// Rewrites a decimal literal into a form accepted by the number parser: a leading `+` is
/// dropped, and a bare decimal point gets a zero on its empty side (`.5` → `0.5`, `5.` → `5.0`).
fn normalize_literal(s: &str) -> String {
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => ("-", &s[1..]),
        Some(b'+') => ("", &s[1..]),
        _ => ("", s),
    };
    let (mantissa, exponent) = match rest.find(['e', 'E']) {
        Some(index) => rest.split_at(index),
        None => (rest, ""),
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push_str(sign);
    if mantissa.starts_with('.') {
        out.push('0');
    }
    out.push_str(mantissa);
    if mantissa.ends_with('.') {
        out.push('0');
    }
    out.push_str(exponent);
    out
}

/// Creates a [`Float`] from a decimal literal, such as `-002.5e-3` or `.5`.
pub fn float_from_str(precision: Precision, s: &str) -> Result<Float, InvalidNumber> {
    let normalized = normalize_literal(s);
    Float::parse(&normalized)
        .map(|incomplete| Float::with_val(precision.bits(), incomplete))
        .map_err(|_| InvalidNumber { text: s.to_string() })
}

/// Creates a [`Complex`] from the decimal literals of its real and imaginary parts.
pub fn complex_from_strs(precision: Precision, re: &str, im: &str) -> Result<Complex, InvalidNumber> {
    let re = float_from_str(precision, re)?;
    let im = float_from_str(precision, im)?;
    Ok(complex(precision, (re, im)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn normalize() {
        assert_eq!(normalize_literal(".5"), "0.5");
        assert_eq!(normalize_literal("5."), "5.0");
        assert_eq!(normalize_literal("+.9e-0"), "0.9e-0");
        assert_eq!(normalize_literal("-002.5e-3"), "-002.5e-3");
        assert_eq!(normalize_literal("8.E2"), "8.0E2");
    }

    #[test]
    fn parse_literals() {
        let precision = Precision::MIN;
        assert_eq!(float_from_str(precision, "-002.5e-3").unwrap(), float(precision, -25) / 10000);
        assert_eq!(float_from_str(precision, "000000000000000008.").unwrap(), 8);
        assert_eq!(float_from_str(precision, "+0e-0").unwrap(), 0);
        assert_eq!(float_from_str(precision, "1.5E3").unwrap(), 1500);
    }

    #[test]
    fn reject_garbage() {
        assert_eq!(
            float_from_str(Precision::MIN, "1.2.3"),
            Err(InvalidNumber { text: "1.2.3".to_string() }),
        );
    }

    #[test]
    fn complex_parts() {
        let c = complex_from_strs(Precision::MIN, "1.5", "-2").unwrap();
        assert_eq!(*c.real(), 1.5);
        assert_eq!(*c.imag(), -2);
    }
}
