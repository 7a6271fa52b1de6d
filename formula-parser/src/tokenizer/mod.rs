pub mod literal;
pub mod token;

use logos::{Lexer, Logos};
pub use literal::is_number_literal;
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer, so that the
/// parser can scan them in either direction.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(Ok(kind)) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1+2",
            [
                (TokenKind::Atom, "1"),
                (TokenKind::Add, "+"),
                (TokenKind::Atom, "2"),
            ],
        );
    }

    #[test]
    fn exponent_is_split() {
        compare_tokens(
            "x*-002.5e-3",
            [
                (TokenKind::Atom, "x"),
                (TokenKind::Mul, "*"),
                (TokenKind::Sub, "-"),
                (TokenKind::Atom, "002.5e"),
                (TokenKind::Sub, "-"),
                (TokenKind::Atom, "3"),
            ],
        );
    }

    #[test]
    fn call_and_unicode() {
        compare_tokens(
            "sin(йцу4,b)|c&d=e<f>g",
            [
                (TokenKind::Atom, "sin"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Atom, "йцу4"),
                (TokenKind::Comma, ","),
                (TokenKind::Atom, "b"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Or, "|"),
                (TokenKind::Atom, "c"),
                (TokenKind::And, "&"),
                (TokenKind::Atom, "d"),
                (TokenKind::Eq, "="),
                (TokenKind::Atom, "e"),
                (TokenKind::Less, "<"),
                (TokenKind::Atom, "f"),
                (TokenKind::Greater, ">"),
                (TokenKind::Atom, "g"),
            ],
        );
    }

    #[test]
    fn spans() {
        let tokens = tokenize_complete("ab/(c)");
        let spans = tokens.iter().map(|t| t.span.clone()).collect::<Vec<_>>();
        assert_eq!(spans, vec![0..2, 2..3, 3..4, 4..5, 5..6]);
    }
}
