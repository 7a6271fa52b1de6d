use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
///
/// Operators, parentheses and commas are single-character tokens. Everything between them,
/// including numbers, names and any stray punctuation, is an [`TokenKind::Atom`], which the
/// parser validates once it knows what the atom is supposed to be.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[token("|")]
    Or,

    #[token("&")]
    And,

    #[token("=")]
    Eq,

    #[token("<")]
    Less,

    #[token(">")]
    Greater,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token(",")]
    Comma,

    #[regex(r"[^|&=<>+\-*/^(),]+")]
    Atom,
}

impl TokenKind {
    /// Returns true if the token kind is a binary operator symbol.
    pub fn is_operator(self) -> bool {
        !matches!(self, Self::OpenParen | Self::CloseParen | Self::Comma | Self::Atom)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}
