//! Utility functions to format complex numbers.
//!
//! A complex number is written as `<re>+i*(<im>)`, with both parts formatted as floats. This
//! form can be read back by the formula parser.

use rug::Complex;
use std::fmt::Formatter;
use super::{float, FormatOptions};

/// Formats a complex number.
pub fn fmt(f: &mut Formatter<'_>, c: &Complex, options: FormatOptions) -> std::fmt::Result {
    float::fmt(f, c.real(), options)?;
    write!(f, "+i*(")?;
    float::fmt(f, c.imag(), options)?;
    write!(f, ")")
}
