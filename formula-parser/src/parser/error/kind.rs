use ariadne::Fmt;
use formula_attrs::ErrorKind;
use formula_error::EXPR;

/// There is nothing to parse where an expression was expected.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = "expected an expression",
    labels = [format!("you might need to add an {} here", "expression".fg(EXPR))],
)]
pub struct EmptyExpression;

/// What is wrong with the parentheses of a [`MalformedBrackets`] error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketProblem {
    /// An opening parenthesis is never closed.
    Unclosed,

    /// A closing parenthesis has no matching opening parenthesis.
    Unopened,

    /// Two groups, or a number and a group, are written next to each other with no operator
    /// between them, such as `(x+1)(y+1)`.
    MissingOperator,
}

/// The parentheses of the expression are unbalanced or misplaced.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = match problem {
        BracketProblem::Unclosed => "unclosed parenthesis",
        BracketProblem::Unopened => "unmatched closing parenthesis",
        BracketProblem::MissingOperator => "missing operator between parenthesized groups",
    },
    labels = match problem {
        BracketProblem::Unclosed => vec!["this parenthesis is never closed".to_string()],
        BracketProblem::Unopened => vec!["this parenthesis has nothing to close".to_string()],
        BracketProblem::MissingOperator => vec![
            "this group".to_string(),
            format!("is directly followed by {}", "this".fg(EXPR)),
        ],
    },
    help = match problem {
        BracketProblem::MissingOperator => format!("add an operator, such as {}, between them", "*".fg(EXPR)),
        _ => "every `(` must be matched by a `)` that comes after it".to_string(),
    },
)]
pub struct MalformedBrackets {
    /// What is wrong with the parentheses.
    pub problem: BracketProblem,
}

/// A variable name contains characters that are not allowed in one.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = if *leading {
        format!(
            "variable name `{}` starts with the forbidden character `{}`",
            name,
            chars.iter().collect::<String>(),
        )
    } else {
        format!(
            "variable name `{}` contains the forbidden character(s) {}",
            name,
            chars.iter().map(|c| format!("`{}`", c)).collect::<Vec<_>>().join(", "),
        )
    },
    labels = chars.iter().map(|_| "here").collect::<Vec<_>>(),
    help = if *leading {
        "a variable name cannot begin with a digit or a point".to_string()
    } else {
        format!("a variable name cannot contain any of {}", FORBIDDEN_CHARS.fg(EXPR))
    },
)]
pub struct InvalidIdentifier {
    /// The name that was rejected.
    pub name: String,

    /// The offending characters, in the order they appear in the name.
    pub chars: Vec<char>,

    /// Whether the offending character is the first character of the name.
    pub leading: bool,
}

/// The characters that cannot appear anywhere in a variable name.
pub const FORBIDDEN_CHARS: &str = "()[]{}~!@#$%\\?,;`'\"|&=><+*/^-";

/// The operator or function has no rule for the number of operands it was given, or for the
/// kind of number it was applied to.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("`{}` is not a known operator or function taking {} operand(s)", name, arity),
    labels = ["this operation"],
    help = if let Some(note) = note {
        note.to_string()
    } else if suggestions.is_empty() {
        "the available functions are: sin, asin, cos, acos, tan, atan, exp, log, sqrt".to_string()
    } else if suggestions.len() == 1 {
        format!("did you mean the `{}` function?", (&*suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these functions? {}",
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
)]
pub struct UnknownOperator {
    /// The name of the operator or function.
    pub name: String,

    /// The number of operands it was given.
    pub arity: usize,

    /// Known names that are similar to the given one.
    pub suggestions: Vec<String>,

    /// An explanation of why the operation is unavailable, if it is a known operation.
    pub note: Option<&'static str>,
}

/// The imaginary unit was used in a formula that is evaluated with real numbers.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("the imaginary unit `{}` cannot be used with real numbers", unit),
    labels = ["this imaginary unit"],
    help = "evaluate the formula with complex numbers instead",
)]
pub struct ComplexNotSupported {
    /// The character used as the imaginary unit.
    pub unit: char,
}

/// The expression is nested too deeply to be parsed.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = "expression is nested too deeply",
    labels = ["this expression"],
    help = format!("the maximum nesting depth is {}", max),
)]
pub struct NestingTooDeep {
    /// The maximum nesting depth.
    pub max: usize,
}
