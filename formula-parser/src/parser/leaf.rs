//! Parsing of expressions that contain no operator outside of parentheses: numbers, variables
//! and function calls.

use crate::{
    parser::{
        ast::{Call, Node, Number, Variable},
        error::{kind, Error},
        token::func::{Func, FuncKind},
        Parser,
    },
    tokenizer::TokenKind,
};
use formula_num::Scalar;
use levenshtein::levenshtein;
use log::trace;
use std::ops::Range;

/// The name of the constant π.
const PI: &str = "pi";

/// Returns true if the character cannot begin a variable name.
fn is_forbidden_leading(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Checks that the given text, found at `offset` in the source, is a valid variable name.
fn validate_identifier(text: &str, offset: usize) -> Result<(), Error> {
    if let Some(first) = text.chars().next().filter(|&c| is_forbidden_leading(c)) {
        return Err(Error::new(vec![offset..offset + first.len_utf8()], kind::InvalidIdentifier {
            name: text.to_string(),
            chars: vec![first],
            leading: true,
        }));
    }

    let (spans, chars): (Vec<_>, Vec<_>) = text.char_indices()
        .filter(|&(_, c)| kind::FORBIDDEN_CHARS.contains(c))
        .map(|(i, c)| (offset + i..offset + i + c.len_utf8(), c))
        .unzip();
    if !chars.is_empty() {
        return Err(Error::new(spans, kind::InvalidIdentifier {
            name: text.to_string(),
            chars,
            leading: false,
        }));
    }

    Ok(())
}

/// Returns the names of the functions whose name is similar to the given name.
fn similar_functions(name: &str) -> Vec<String> {
    FuncKind::ALL.iter()
        .map(|func| func.name())
        .filter(|candidate| levenshtein(candidate, name) < 2)
        .map(str::to_string)
        .collect()
}

impl Parser<'_> {
    /// Parses a range of tokens that contains no operator outside of parentheses.
    pub(super) fn parse_leaf<T: Scalar>(&self, range: Range<usize>, depth: usize) -> Result<Node<T>, Error> {
        let open = range.clone().find(|&index| self.tokens[index].kind == TokenKind::OpenParen);
        match open {
            Some(open) => self.parse_call(range, open, depth),
            None => self.parse_atom(range),
        }
    }

    /// Parses a constant or a variable.
    fn parse_atom<T: Scalar>(&self, range: Range<usize>) -> Result<Node<T>, Error> {
        let span = self.byte_span(&range);
        let text = self.text(&range);

        if text == PI {
            return Ok(Node::Number(Number {
                value: T::pi(self.precision),
                lexeme: text.to_string(),
                span,
            }));
        }

        let mut chars = text.chars();
        if chars.next() == Some(self.imaginary_unit) && chars.next().is_none() {
            let value = T::imaginary_unit(self.precision).ok_or_else(|| {
                Error::new(vec![span.clone()], kind::ComplexNotSupported { unit: self.imaginary_unit })
            })?;
            return Ok(Node::Number(Number {
                value,
                lexeme: text.to_string(),
                span,
            }));
        }

        validate_identifier(text, span.start)?;
        trace!("`{}` is a variable", text);
        Ok(Node::Variable(Variable {
            name: text.to_string(),
            span,
        }))
    }

    /// Parses a function call whose first opening parenthesis is the token at `open`.
    fn parse_call<T: Scalar>(&self, range: Range<usize>, open: usize, depth: usize) -> Result<Node<T>, Error> {
        let close = self.matching_close(open, range.end).ok_or_else(|| {
            Error::new(vec![self.tokens[open].span.clone()], kind::MalformedBrackets {
                problem: kind::BracketProblem::Unclosed,
            })
        })?;
        if close != range.end - 1 {
            return Err(Error::new(
                vec![self.byte_span(&(open..close + 1)), self.byte_span(&(close + 1..range.end))],
                kind::MalformedBrackets { problem: kind::BracketProblem::MissingOperator },
            ));
        }

        let name_range = range.start..open;
        let name = self.text(&name_range);
        let name_span = self.byte_span(&name_range);
        if name.chars().next().map_or(true, is_forbidden_leading) {
            // a group preceded by nothing or by a number, such as `2(x)`
            return Err(Error::new(
                vec![name_span, self.byte_span(&(open..range.end))],
                kind::MalformedBrackets { problem: kind::BracketProblem::MissingOperator },
            ));
        }

        let args = open + 1..close;
        let mut nesting = 0usize;
        let mut arity = 1;
        for index in args.clone() {
            match self.tokens[index].kind {
                TokenKind::OpenParen => nesting += 1,
                TokenKind::CloseParen => nesting = nesting.saturating_sub(1),
                TokenKind::Comma if nesting == 0 => arity += 1,
                _ => {},
            }
        }

        let Some(func) = FuncKind::from_name(name).filter(|_| arity == 1) else {
            let suggestions = if arity == 1 { similar_functions(name) } else { Vec::new() };
            return Err(Error::new(vec![name_span], kind::UnknownOperator {
                name: name.to_string(),
                arity,
                suggestions,
                note: None,
            }));
        };

        trace!("`{}` is a call to `{}`", self.text(&range), func);
        let arg = self.parse_operand(args, depth + 1, self.byte_span(&(open..close + 1)))?;
        Ok(Node::Call(Call {
            func: Func { kind: func, span: name_span },
            arg: Box::new(arg),
            span: self.byte_span(&range),
        }))
    }
}
