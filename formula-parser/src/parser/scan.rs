//! Searching for the operator to split an expression at.

use crate::{
    parser::{token::op::BinOpKind, Parser},
    tokenizer::{is_number_literal, TokenKind},
};
use std::ops::Range;

/// Where and how to split an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Split {
    /// The expression starts with a sign, at token `index`.
    Sign { index: usize, kind: BinOpKind },

    /// The expression is a binary expression whose operator is at token `index`.
    Binary { index: usize, kind: BinOpKind },
}

impl Parser<'_> {
    /// Finds the operator to split the given range of tokens at: the loosest-binding operator
    /// outside of any parentheses, and of those, the rightmost one.
    pub(super) fn find_split(&self, range: &Range<usize>) -> Option<Split> {
        for kind in BinOpKind::SCAN_ORDER {
            // nesting depth of the current token, walking from right to left
            let mut depth = 0usize;
            for index in range.clone().rev() {
                let token_kind = self.tokens[index].kind;
                match token_kind {
                    TokenKind::CloseParen => depth += 1,
                    TokenKind::OpenParen => depth = depth.saturating_sub(1),
                    _ if depth > 0 => {},
                    _ if BinOpKind::from_token(token_kind) == Some(kind) => {
                        if kind.is_sign() {
                            if index == range.start {
                                return Some(Split::Sign { index, kind });
                            }
                            if self.is_signed_operand(index, range.start) {
                                continue;
                            }
                        }
                        return Some(Split::Binary { index, kind });
                    },
                    _ => {},
                }
            }
        }

        None
    }

    /// Returns true if the `+` or `-` at token `index` is the sign of an operand rather than a
    /// binary operator. This is the case after another operator (`x/-1`), and in the exponent of
    /// a number literal (`2.5e-3`).
    fn is_signed_operand(&self, index: usize, start: usize) -> bool {
        let prev = &self.tokens[index - 1];
        if prev.kind.is_operator() {
            return true;
        }
        prev.kind == TokenKind::Atom && self.is_exponent_sign(index, start)
    }

    /// Returns true if the sign at token `index` continues a number literal whose mantissa is the
    /// token before it, such as the `-` in `x*2e-3`.
    fn is_exponent_sign(&self, index: usize, start: usize) -> bool {
        let mantissa = &self.tokens[index - 1];
        let Some(digits) = mantissa.lexeme.strip_suffix(['e', 'E']) else {
            return false;
        };
        if !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return false;
        }

        // the mantissa must begin the expression or follow an operator
        let mantissa_index = index - 1;
        if mantissa_index != start && !self.tokens[mantissa_index - 1].kind.is_operator() {
            return false;
        }

        let Some(exponent) = self.tokens.get(index + 1).filter(|token| token.kind == TokenKind::Atom) else {
            return false;
        };
        let exponent_digits = exponent.lexeme.bytes().take_while(u8::is_ascii_digit).count();
        if exponent_digits == 0 {
            return false;
        }

        let literal = &self.source[mantissa.span.start..exponent.span.start + exponent_digits];
        is_number_literal(literal)
    }
}
