//! Utility functions to format floating-point numbers.

use rug::{float::Round, Float};
use std::{cmp::Ordering, fmt::Formatter};
use super::{FormatOptions, NumberFormat, Scientific, Separator};

/// Returns true if the given float is small or large enough that it should be formatted in
/// scientific notation.
pub fn should_use_scientific(n: &Float) -> bool {
    let abs = n.as_abs();
    *abs <= 1e-6 || *abs >= 1e+12
}

/// Trims trailing zeros from the fractional part of a string assumed to represent a single
/// number in decimal notation, along with the decimal point if nothing remains after it.
fn trim_trailing(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Inserts commas every three digits to the left of the decimal point.
fn insert_separators(s: &mut String) {
    let decimal = s.find('.').unwrap_or(s.len());
    s.reserve(s.len() / 3); // reserve space for the commas

    // go backwards from the decimal point (backwards to avoid having to deal with the string
    // growing in index computation), inserting commas every 3 digits
    let mut i = decimal.saturating_sub(3);
    while i > 0 {
        s.insert(i, ',');
        i = i.saturating_sub(3);
    }
}

/// The number of significant digits to produce, where [`None`] means every stored digit.
fn significant_digits(options: FormatOptions) -> Option<usize> {
    options.precision.filter(|&digits| digits > 0)
}

/// Writes a float that is not a normal number: NaN, an infinity, or zero.
fn fmt_special(f: &mut Formatter<'_>, n: &Float) -> std::fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        write!(f, "{}inf", if n.is_sign_negative() { "-" } else { "" })
    } else {
        write!(f, "0")
    }
}

/// Formats a float as a standard number.
fn fmt_decimal(f: &mut Formatter<'_>, n: &Float, options: FormatOptions) -> std::fmt::Result {
    if !n.is_normal() {
        return fmt_special(f, n);
    }

    let (sign, mut s, exponent) = n.to_sign_string_exp_round(10, significant_digits(options), Round::Nearest);
    let Some(exponent) = exponent else {
        return fmt_special(f, n);
    };

    // add decimal point
    match exponent.cmp(&0) {
        Ordering::Less => s.insert_str(0, &format!("0.{}", "0".repeat(exponent.unsigned_abs() as usize))),
        Ordering::Equal => s.insert_str(0, "0."),
        Ordering::Greater => {
            let exponent = exponent as usize;
            match s.len().cmp(&exponent) {
                // if there are not enough digits before the decimal point, add zeros
                Ordering::Less => s.push_str(&"0".repeat(exponent - s.len())),

                // place the decimal point in the correct place
                Ordering::Greater => s.insert(exponent, '.'),

                // if len == exponent, the decimal point would be at the end of the string, so we
                // don't add anything
                Ordering::Equal => {},
            }
        },
    }

    if options.separators == Separator::Always {
        insert_separators(&mut s);
    }
    write!(f, "{}{}", if sign { "-" } else { "" }, trim_trailing(&s))
}

/// Formats a float in scientific notation.
pub fn fmt_scientific(f: &mut Formatter<'_>, n: &Float, options: FormatOptions) -> std::fmt::Result {
    if !n.is_normal() {
        return fmt_special(f, n);
    }

    let (sign, mut s, exponent) = n.to_sign_string_exp_round(10, significant_digits(options), Round::Nearest);
    let Some(mut exponent) = exponent else {
        return fmt_special(f, n);
    };

    // add decimal point
    s.insert(1, '.');

    // subtract 1 from the exponent because we inserted a decimal point after the first digit
    exponent -= 1;

    write!(f, "{}{}{}{}",
        if sign { "-" } else { "" },
        trim_trailing(&s),
        match options.scientific {
            Scientific::E => "e",
            Scientific::Times => " × 10 ^ ",
        },
        exponent,
    )
}

/// Format a floating-point number using the given formatting options.
pub fn fmt(f: &mut Formatter<'_>, n: &Float, options: FormatOptions) -> std::fmt::Result {
    match options.number {
        NumberFormat::Auto => {
            if should_use_scientific(n) {
                fmt_scientific(f, n, options)
            } else {
                fmt_decimal(f, n, options)
            }
        },
        NumberFormat::Decimal => fmt_decimal(f, n, options),
        NumberFormat::Scientific => fmt_scientific(f, n, options),
    }
}
