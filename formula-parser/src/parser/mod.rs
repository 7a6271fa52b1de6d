pub mod ast;
pub mod error;
pub mod iter;
pub mod token;

mod leaf;
mod scan;

use ast::{Binary, Node, Number};
use error::{kind, Error};
use formula_num::{Precision, Scalar};
use log::trace;
use scan::Split;
use std::ops::Range;
use token::op::BinOp;
use crate::tokenizer::{is_number_literal, tokenize_complete, Token, TokenKind};

/// The maximum depth of the tree the parser will build. Every level of parentheses and every
/// operator split counts as one level.
pub const MAX_DEPTH: usize = 1 << 10;

/// The precedence of an operator, from loosest-binding to tightest-binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// `|`
    Or,

    /// `&`
    And,

    /// `=`, `<`, `>`
    Compare,

    /// `+`, `-`
    Term,

    /// `*`, `/`
    Factor,

    /// `^`
    Exp,
}

/// A high-level parser for formulas. It builds a tree of [`Node`]s from the source string.
///
/// The source must already be free of whitespace.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The source code being parsed.
    source: &'source str,

    /// The tokens of the source code.
    tokens: Box<[Token<'source>]>,

    /// The precision that numbers in the formula are parsed at.
    precision: Precision,

    /// The character that denotes the imaginary unit.
    imaginary_unit: char,
}

impl<'source> Parser<'source> {
    /// Creates a new parser for the given source, parsing numbers at [`Precision::MIN`] and using
    /// `i` as the imaginary unit.
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            tokens: tokenize_complete(source),
            precision: Precision::MIN,
            imaginary_unit: 'i',
        }
    }

    /// Sets the precision that numbers in the formula are parsed at.
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the character that denotes the imaginary unit.
    pub fn with_imaginary_unit(mut self, imaginary_unit: char) -> Self {
        self.imaginary_unit = imaginary_unit;
        self
    }

    /// Parses the whole source into a tree of [`Node`]s holding numbers of type `T`.
    pub fn try_parse_full<T: Scalar>(&self) -> Result<Node<T>, Error> {
        if self.tokens.is_empty() {
            return Err(Error::new(vec![0..self.source.len()], kind::EmptyExpression));
        }

        self.validate_brackets()?;
        self.parse_range(0..self.tokens.len(), 0)
    }

    /// Returns the source text spanned by the given range of tokens.
    fn text(&self, range: &Range<usize>) -> &'source str {
        &self.source[self.byte_span(range)]
    }

    /// Returns the region of the source code spanned by the given range of tokens.
    fn byte_span(&self, range: &Range<usize>) -> Range<usize> {
        if range.is_empty() {
            let at = self.tokens.get(range.start)
                .map(|token| token.span.start)
                .unwrap_or(self.source.len());
            return at..at;
        }
        self.tokens[range.start].span.start..self.tokens[range.end - 1].span.end
    }

    /// Returns the index of the parenthesis closing the one at `open`, searching no further than
    /// `end`.
    fn matching_close(&self, open: usize, end: usize) -> Option<usize> {
        let mut depth = 0usize;
        for index in open..end {
            match self.tokens[index].kind {
                TokenKind::OpenParen => depth += 1,
                TokenKind::CloseParen => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return Some(index);
                    }
                },
                _ => {},
            }
        }
        None
    }

    /// Checks that every parenthesis of the source is matched, and that no closing parenthesis
    /// comes before the parenthesis it closes.
    fn validate_brackets(&self) -> Result<(), Error> {
        let mut open = Vec::new();
        for token in self.tokens.iter() {
            match token.kind {
                TokenKind::OpenParen => open.push(token.span.clone()),
                TokenKind::CloseParen => if open.pop().is_none() {
                    return Err(Error::new(vec![token.span.clone()], kind::MalformedBrackets {
                        problem: kind::BracketProblem::Unopened,
                    }));
                },
                _ => {},
            }
        }

        match open.pop() {
            Some(span) => Err(Error::new(vec![span], kind::MalformedBrackets {
                problem: kind::BracketProblem::Unclosed,
            })),
            None => Ok(()),
        }
    }

    /// Parses the operand of an operator, which must not be empty. Errors for a missing operand
    /// point at `blame`.
    fn parse_operand<T: Scalar>(
        &self,
        range: Range<usize>,
        depth: usize,
        blame: Range<usize>,
    ) -> Result<Node<T>, Error> {
        if range.is_empty() {
            return Err(Error::new(vec![blame], kind::EmptyExpression));
        }
        self.parse_range(range, depth)
    }

    /// Parses the given non-empty range of tokens.
    fn parse_range<T: Scalar>(&self, mut range: Range<usize>, mut depth: usize) -> Result<Node<T>, Error> {
        // remove redundant parentheses around the whole range
        loop {
            if depth > MAX_DEPTH {
                return Err(Error::new(vec![self.byte_span(&range)], kind::NestingTooDeep {
                    max: MAX_DEPTH,
                }));
            }

            if self.tokens[range.start].kind != TokenKind::OpenParen
                || self.matching_close(range.start, range.end) != Some(range.end - 1)
            {
                break;
            }

            if range.len() == 2 {
                return Err(Error::new(vec![self.byte_span(&range)], kind::EmptyExpression));
            }
            range = range.start + 1..range.end - 1;
            depth += 1;
        }

        let span = self.byte_span(&range);
        let text = &self.source[span.clone()];
        if is_number_literal(text) {
            trace!("`{}` is a number", text);
            return self.parse_number(text, span);
        }

        match self.find_split(&range) {
            Some(Split::Sign { index, kind }) => {
                trace!("`{}` starts with the sign `{}`", text, kind);
                let op_span = self.tokens[index].span.clone();
                let rhs = self.parse_operand(index + 1..range.end, depth + 1, op_span.clone())?;
                let zero = Node::Number(Number {
                    value: T::zero(self.precision),
                    lexeme: String::new(),
                    span: op_span.start..op_span.start,
                });
                Ok(Node::Binary(Binary {
                    lhs: Box::new(zero),
                    op: BinOp { kind, implicit: true, span: op_span },
                    rhs: Box::new(rhs),
                    span,
                }))
            },
            Some(Split::Binary { index, kind }) => {
                trace!("splitting `{}` at `{}`", text, kind);
                let op_span = self.tokens[index].span.clone();
                let lhs = self.parse_operand(range.start..index, depth + 1, op_span.clone())?;
                let rhs = self.parse_operand(index + 1..range.end, depth + 1, op_span.clone())?;
                Ok(Node::Binary(Binary {
                    lhs: Box::new(lhs),
                    op: BinOp { kind, implicit: false, span: op_span },
                    rhs: Box::new(rhs),
                    span,
                }))
            },
            None => self.parse_leaf(range, depth),
        }
    }

    /// Parses a numeric literal.
    fn parse_number<T: Scalar>(&self, text: &str, span: Range<usize>) -> Result<Node<T>, Error> {
        let value = T::parse_literal(self.precision, text)
            .map_err(|err| Error::new(vec![span.clone()], err))?;
        Ok(Node::Number(Number {
            value,
            lexeme: text.to_string(),
            span,
        }))
    }
}

/// Parses the given source into a tree of [`Node`]s holding numbers of type `T`, at
/// [`Precision::MIN`] and with `i` as the imaginary unit.
pub fn parse<T: Scalar>(source: &str) -> Result<Node<T>, Error> {
    Parser::new(source).try_parse_full()
}

#[cfg(test)]
mod tests {
    use formula_num::{primitive::float_from_str, Complex, Float};
    use kind::*;
    use pretty_assertions::assert_eq;
    use token::{func::FuncKind, op::BinOpKind};
    use super::*;

    fn parse_real(source: &str) -> Result<Node<Float>, Error> {
        parse::<Float>(source)
    }

    /// Asserts that the source fails to parse with the error kind `K`, and returns the error.
    fn parse_err<K: formula_error::ErrorKind + 'static>(source: &str) -> Error {
        match parse_real(source) {
            Ok(node) => panic!("`{}` parsed as {:?}", source, node),
            Err(err) => {
                assert!(err.is::<K>(), "`{}` failed with {:?}", source, err);
                err
            },
        }
    }

    fn binary(node: &Node<Float>) -> &Binary<Float> {
        match node {
            Node::Binary(binary) => binary,
            other => panic!("expected a binary expression, found {:?}", other),
        }
    }

    #[test]
    fn literal() {
        let node = parse_real("-002.5e-3").unwrap();
        match node {
            Node::Number(number) => {
                assert_eq!(number.value, float_from_str(Precision::MIN, "-0.0025").unwrap());
                assert_eq!(number.lexeme, "-002.5e-3");
                assert_eq!(number.span, 0..9);
            },
            other => panic!("expected a number, found {:?}", other),
        }
    }

    #[test]
    fn subtraction_groups_left() {
        let node = parse_real("1-0-1").unwrap();
        let outer = binary(&node);
        assert_eq!(outer.op.kind, BinOpKind::Sub);
        assert_eq!(outer.op.span, 3..4);
        let inner = binary(&outer.lhs);
        assert_eq!(inner.op.kind, BinOpKind::Sub);
        assert_eq!(inner.span, 0..3);
    }

    #[test]
    fn division_groups_left() {
        let node = parse_real("2^5/2^2/2^2").unwrap();
        let outer = binary(&node);
        assert_eq!(outer.op.kind, BinOpKind::Div);
        assert_eq!(outer.op.span, 7..8);
        assert_eq!(binary(&outer.lhs).op.kind, BinOpKind::Div);
        assert_eq!(binary(&outer.rhs).op.kind, BinOpKind::Exp);
    }

    #[test]
    fn precedence() {
        let node = parse_real("a|b&c=d+e*f^g").unwrap();
        let or = binary(&node);
        assert_eq!(or.op.kind, BinOpKind::Or);
        let and = binary(&or.rhs);
        assert_eq!(and.op.kind, BinOpKind::And);
        let eq = binary(&and.rhs);
        assert_eq!(eq.op.kind, BinOpKind::Eq);
        let add = binary(&eq.rhs);
        assert_eq!(add.op.kind, BinOpKind::Add);
        let mul = binary(&add.rhs);
        assert_eq!(mul.op.kind, BinOpKind::Mul);
        assert_eq!(binary(&mul.rhs).op.kind, BinOpKind::Exp);
    }

    #[test]
    fn leading_sign() {
        let node = parse_real("-x").unwrap();
        let sign = binary(&node);
        assert!(sign.op.implicit);
        assert_eq!(sign.op.kind, BinOpKind::Sub);
        assert!(matches!(&*sign.lhs, Node::Number(zero) if zero.value == 0 && zero.lexeme.is_empty()));
        assert!(matches!(&*sign.rhs, Node::Variable(x) if x.name == "x"));

        let node = parse_real("--x").unwrap();
        let outer = binary(&node);
        assert!(outer.op.implicit);
        assert!(binary(&outer.rhs).op.implicit);
    }

    #[test]
    fn signed_operands() {
        // the `-` after another operator belongs to the operand
        let node = parse_real("x/-1").unwrap();
        let div = binary(&node);
        assert_eq!(div.op.kind, BinOpKind::Div);
        assert!(matches!(&*div.rhs, Node::Number(n) if n.value == -1));

        let node = parse_real("y^-x").unwrap();
        let exp = binary(&node);
        assert_eq!(exp.op.kind, BinOpKind::Exp);
        assert!(binary(&exp.rhs).op.implicit);
    }

    #[test]
    fn exponent_sign_is_not_split() {
        let node = parse_real("x*2e-3").unwrap();
        let mul = binary(&node);
        assert_eq!(mul.op.kind, BinOpKind::Mul);
        assert!(matches!(&*mul.rhs, Node::Number(n) if n.lexeme == "2e-3"));

        // `a2e` is a variable, so the `-` is a real subtraction
        let node = parse_real("a2e-3").unwrap();
        let sub = binary(&node);
        assert_eq!(sub.op.kind, BinOpKind::Sub);
        assert!(matches!(&*sub.lhs, Node::Variable(v) if v.name == "a2e"));
    }

    #[test]
    fn redundant_parens() {
        let node = parse_real("(((x)))").unwrap();
        assert!(matches!(node, Node::Variable(x) if x.name == "x" && x.span == (3..4)));

        let node = parse_real("(x)*(y)").unwrap();
        assert_eq!(binary(&node).op.kind, BinOpKind::Mul);
    }

    #[test]
    fn function_call() {
        let node = parse_real("2*asin(x)").unwrap();
        let mul = binary(&node);
        match &*mul.rhs {
            Node::Call(call) => {
                assert_eq!(call.func.kind, FuncKind::Asin);
                assert_eq!(call.func.span, 2..6);
                assert_eq!(call.span, 2..9);
                assert!(matches!(&*call.arg, Node::Variable(x) if x.name == "x"));
            },
            other => panic!("expected a call, found {:?}", other),
        }
    }

    #[test]
    fn pi_and_imaginary_unit() {
        let node = parse_real("pi").unwrap();
        assert!(matches!(node, Node::Number(n) if n.value == <Float as Scalar>::pi(Precision::MIN)));

        let node = parse::<Complex>("2*i").unwrap();
        let mul = match node {
            Node::Binary(binary) => binary,
            other => panic!("expected a binary expression, found {:?}", other),
        };
        assert!(matches!(&*mul.rhs, Node::Number(n) if *n.value.imag() == 1 && n.lexeme == "i"));

        let node = Parser::new("2*j")
            .with_imaginary_unit('j')
            .try_parse_full::<Complex>()
            .unwrap();
        assert!(matches!(node, Node::Binary(_)));

        parse_err::<ComplexNotSupported>("2*i");
    }

    #[test]
    fn variables_with_odd_names() {
        let node = parse_real("s_s_s.*16+йцу4").unwrap();
        let names = node.post_order_iter()
            .filter_map(|node| match node {
                Node::Variable(v) => Some(v.name.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["s_s_s.", "йцу4"]);
    }

    #[test]
    fn post_order() {
        let node = parse_real("a*sin(b)+c").unwrap();
        let order = node.post_order_iter()
            .map(|node| node.span())
            .collect::<Vec<_>>();
        assert_eq!(order, vec![0..1, 6..7, 2..8, 0..8, 9..10, 0..10]);
    }

    #[test]
    fn empty() {
        parse_err::<EmptyExpression>("");
        parse_err::<EmptyExpression>("()");
        parse_err::<EmptyExpression>("x+");
        parse_err::<EmptyExpression>("*x");
        parse_err::<EmptyExpression>("sin()");
    }

    #[test]
    fn brackets() {
        let err = parse_err::<MalformedBrackets>("(x+1)(y+1)");
        assert_eq!(err.kind_as::<MalformedBrackets>().unwrap().problem, BracketProblem::MissingOperator);
        assert_eq!(err.spans, vec![0..5, 5..10]);

        let err = parse_err::<MalformedBrackets>("sin(x");
        assert_eq!(err.kind_as::<MalformedBrackets>().unwrap().problem, BracketProblem::Unclosed);
        assert_eq!(err.spans, vec![3..4]);

        let err = parse_err::<MalformedBrackets>("x)+(y");
        assert_eq!(err.kind_as::<MalformedBrackets>().unwrap().problem, BracketProblem::Unopened);

        parse_err::<MalformedBrackets>("(((((0))))");
        parse_err::<MalformedBrackets>("2(x)");
    }

    #[test]
    fn invalid_identifiers() {
        let err = parse_err::<InvalidIdentifier>(".e-1");
        assert_eq!(err.kind_as::<InvalidIdentifier>().unwrap(), &InvalidIdentifier {
            name: ".e".to_string(),
            chars: vec!['.'],
            leading: true,
        });

        let err = parse_err::<InvalidIdentifier>("1+a,b;c");
        assert_eq!(err.kind_as::<InvalidIdentifier>().unwrap().chars, vec![',', ';']);
        assert_eq!(err.spans, vec![3..4, 5..6]);
        assert!(err.to_string().contains("`,`, `;`"));

        for source in ["-e-+.0e*0-e", "0eb-1", "1e-.1", "2eq-1e", "3eq-1", ".0.e-1"] {
            parse_err::<InvalidIdentifier>(source);
        }
    }

    #[test]
    fn unknown_function() {
        let err = parse_err::<UnknownOperator>("sinn(x)");
        let kind = err.kind_as::<UnknownOperator>().unwrap();
        assert_eq!(kind.name, "sinn");
        assert_eq!(kind.arity, 1);
        assert_eq!(kind.suggestions, vec!["sin".to_string()]);

        let err = parse_err::<UnknownOperator>("atan(y,x)");
        assert_eq!(err.kind_as::<UnknownOperator>().unwrap().arity, 2);
    }

    #[test]
    fn nesting_limit() {
        let deep = format!("{}x{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        parse_err::<NestingTooDeep>(&deep);

        let shallow = format!("{}x{}", "(".repeat(100), ")".repeat(100));
        assert!(parse_real(&shallow).is_ok());
    }

    #[test]
    fn display() {
        let cases = [
            ("1-0-1", "1-0-1"),
            ("1-(0-1)", "1-(0-1)"),
            ("(a+b)*c", "(a+b)*c"),
            ("-(a+b)", "-(a+b)"),
            ("(-x)^2", "(-x)^2"),
            ("--x", "--x"),
            ("2*asin((x))", "2*asin(x)"),
            ("x/-1", "x/-1"),
            ("(-2)^x", "(-2)^x"),
            ("(+2)*x", "(+2)*x"),
            ("(-2)-x", "-2-x"),
            ("-2^x", "-2^x"),
        ];
        for (source, expected) in cases {
            assert_eq!(parse_real(source).unwrap().to_string(), expected);
        }
    }

    #[test]
    fn clone_is_independent() {
        let original = parse_real("x+1").unwrap();
        let mut copy = original.clone();
        if let Node::Binary(binary) = &mut copy {
            binary.rhs = Box::new(Node::Variable(ast::Variable { name: "y".to_string(), span: 2..3 }));
        }
        assert_eq!(original.to_string(), "x+1");
        assert_eq!(copy.to_string(), "x+y");
    }
}
