use ariadne::Fmt;
use formula_attrs::ErrorKind;
use formula_error::EXPR;
use formula_num::DomainViolation;

/// The formula references a variable that was given no value.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("unbound variable `{}`", name),
    labels = ["this variable"],
    help = if suggestions.is_empty() {
        format!("give `{}` a value before evaluating the formula", name.fg(EXPR))
    } else {
        format!(
            "did you mean {}?",
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
)]
pub struct UnboundVariable {
    /// The name of the variable.
    pub name: String,

    /// Bound variables with a similar name.
    pub suggestions: Vec<String>,
}

/// An operation has no value for its operands, such as a division by zero.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("cannot evaluate `{}`: {}", op, violation),
    labels = ["this operation"],
    help = match violation {
        DomainViolation::DivisionByZero => "check the values of the variables that make the divisor zero",
        DomainViolation::Pole => "the tangent is undefined at odd multiples of π/2",
        DomainViolation::OutOfDomain => "`log` and `sqrt` need a non-negative argument, and `asin` and `acos` an argument between -1 and 1",
        DomainViolation::NotReal => "evaluate the formula with complex numbers instead",
    },
)]
pub struct DomainError {
    /// The operator or function that failed.
    pub op: String,

    /// Why the operation has no value.
    pub violation: DomainViolation,
}
