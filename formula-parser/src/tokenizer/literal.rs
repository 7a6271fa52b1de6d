//! Recognition of numeric literals.

use logos::Logos;

/// A numeric literal, such as `1`, `-.5`, `8.` or `+002.5e-3`.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
enum LiteralKind {
    #[regex(r"[+-]?([0-9]+\.?|[0-9]*\.[0-9]+)([eE][+-]?[0-9]+)?")]
    Number,
}

/// Returns true if the whole of `s` is a single numeric literal.
pub fn is_number_literal(s: &str) -> bool {
    let mut lexer = LiteralKind::lexer(s);
    matches!(lexer.next(), Some(Ok(LiteralKind::Number))) && lexer.span() == (0..s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals() {
        for s in ["1", "-1", "+1", "8.", ".5", "-.5", "000000000000000008.", "-002.5e-3", "0e0", "+.9e-0", "1E+10"] {
            assert!(is_number_literal(s), "{} should be a literal", s);
        }
    }

    #[test]
    fn not_literals() {
        for s in ["", ".", "e1", ".e-1", "1e", "1e-.1", "0eb", "1.2.3", "--1", "1-1", "x", "1e5x"] {
            assert!(!is_number_literal(s), "{} should not be a literal", s);
        }
    }
}
