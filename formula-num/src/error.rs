//! Errors produced while configuring numbers.

use formula_attrs::ErrorKind;

/// The requested precision is larger than the largest supported tier.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("the selected precision of {} digits exceeds the allowed maximum of {} digits", requested, max),
    labels = [""],
    help = "choose a smaller precision",
)]
pub struct PrecisionTooLarge {
    /// The requested number of digits.
    pub requested: u32,

    /// The largest supported number of digits.
    pub max: u32,
}

/// A number literal could not be converted to a number.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("`{}` is not a valid number", text),
    labels = ["this number"],
)]
pub struct InvalidNumber {
    /// The text of the literal.
    pub text: String,
}
