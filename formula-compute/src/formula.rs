//! A high-level interface to parse a formula once and evaluate it many times.

use crate::{
    collect::collect_variables,
    ctxt::Ctxt,
    derivative::Derive,
    error::Error,
    eval::Eval,
    value::Value,
};
use formula_num::{FormatOptions, Precision, Scalar};
use formula_parser::parser::{ast::Node, Parser};
use log::debug;
use rug::{Complex, Float};
use std::{borrow::Borrow, collections::HashSet};

/// The whitespace characters removed from an expression before it is parsed.
const WHITESPACE: [char; 5] = [' ', '\n', '\r', '\t', '\x0B'];

/// Returns true if the character can be part of a word.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns true if the character appears in the expression as a word of its own, such as the `i`
/// in `2*i` but not in `sin(x)`.
fn contains_word(expression: &str, word: char) -> bool {
    expression.char_indices()
        .filter(|&(_, c)| c == word)
        .any(|(index, c)| {
            let before = expression[..index].chars().next_back();
            let after = expression[index + c.len_utf8()..].chars().next();
            !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
        })
}

/// Removes whitespace from the expression and, in case-insensitive mode, converts it to lowercase.
///
/// Spans of errors raised by [`Formula`] point into the normalized expression.
pub fn normalize_expression(expression: &str, case_insensitive: bool) -> String {
    let expression = expression.replace(WHITESPACE, "");
    if case_insensitive {
        expression.to_lowercase()
    } else {
        expression
    }
}

/// The parsed tree of a [`Formula`], holding real or complex numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
    /// A formula evaluated with real numbers.
    Real(Node<Float>),

    /// A formula evaluated with complex numbers, because it uses the imaginary unit.
    Complex(Node<Complex>),
}

/// A binding given to [`Formula`] methods, before it is converted to a number.
#[derive(Debug, Clone, Copy)]
enum Binding<'a> {
    /// A decimal literal.
    Str(&'a str),

    /// A native floating-point number.
    F64(f64),
}

/// Options to build a [`Formula`] with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormulaBuilder {
    /// The requested number of significant decimal digits.
    precision: u32,

    /// The character that denotes the imaginary unit.
    imaginary_unit: char,

    /// Whether variable and function names are case-insensitive.
    case_insensitive: bool,
}

impl Default for FormulaBuilder {
    fn default() -> Self {
        Self {
            precision: 0,
            imaginary_unit: 'i',
            case_insensitive: false,
        }
    }
}

impl FormulaBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the requested number of significant decimal digits. The formula uses the smallest
    /// [`Precision`] tier holding at least this many digits; `0` selects [`Precision::MIN`].
    pub fn precision(mut self, digits: u32) -> Self {
        self.precision = digits;
        self
    }

    /// Sets the character that denotes the imaginary unit. The default is `i`.
    pub fn imaginary_unit(mut self, imaginary_unit: char) -> Self {
        self.imaginary_unit = imaginary_unit;
        self
    }

    /// Makes the formula case-insensitive: the expression and the names of bound variables are
    /// converted to lowercase.
    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Parses the given expression into a [`Formula`].
    pub fn build(self, expression: &str) -> Result<Formula, Error> {
        let precision = Precision::nearest(self.precision)
            .map_err(|err| Error::new(Vec::new(), err))?;
        Formula::parse(expression, precision, self)
    }
}

/// A parsed formula that can be evaluated and differentiated with different variable values.
///
/// # Example
///
/// ```
/// use formula_compute::Formula;
///
/// let formula = Formula::new("x^2 + sin(y)").unwrap();
/// assert_eq!(formula.get_f64([("x", 3.0), ("y", 0.0)]).unwrap(), "9");
/// assert_eq!(formula.get_derivative("x", [("x", "3"), ("y", "0")]).unwrap(), "6");
/// ```
#[derive(Debug, Clone)]
pub struct Formula {
    /// The expression, stripped of whitespace and, in case-insensitive mode, lowercased.
    expression: String,

    /// The precision the formula is evaluated at.
    precision: Precision,

    /// The options the formula was built with.
    options: FormulaBuilder,

    /// The parsed tree.
    tree: Tree,
}

impl Formula {
    /// Parses the given expression into a formula with the default options.
    pub fn new(expression: &str) -> Result<Self, Error> {
        FormulaBuilder::new().build(expression)
    }

    /// Returns a builder to customize the options of a formula.
    pub fn builder() -> FormulaBuilder {
        FormulaBuilder::new()
    }

    /// Normalizes and parses the expression.
    fn parse(expression: &str, precision: Precision, options: FormulaBuilder) -> Result<Self, Error> {
        let expression = normalize_expression(expression, options.case_insensitive);
        let imaginary_unit = if options.case_insensitive {
            options.imaginary_unit.to_ascii_lowercase()
        } else {
            options.imaginary_unit
        };
        debug!("normalized expression: `{}`", expression);

        let parser = Parser::new(&expression)
            .with_precision(precision)
            .with_imaginary_unit(imaginary_unit);
        let tree = if contains_word(&expression, imaginary_unit) {
            debug!("using complex numbers at {}", precision);
            Tree::Complex(parser.try_parse_full()?)
        } else {
            debug!("using real numbers at {}", precision);
            Tree::Real(parser.try_parse_full()?)
        };

        Ok(Self {
            expression,
            precision,
            options,
            tree,
        })
    }

    /// Returns the normalized expression. Error spans point into this string.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Returns the precision the formula is evaluated at.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Returns true if the formula is evaluated with complex numbers.
    pub fn is_complex(&self) -> bool {
        matches!(self.tree, Tree::Complex(_))
    }

    /// Returns the parsed tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Replaces the expression, keeping the options of the formula. The formula is unchanged if
    /// the new expression fails to parse.
    pub fn set_expression(&mut self, expression: &str) -> Result<(), Error> {
        *self = Self::parse(expression, self.precision, self.options)?;
        Ok(())
    }

    /// Changes the precision, parsing the expression again so that its numbers are stored at the
    /// new precision. The formula is unchanged if the precision is too large.
    pub fn set_precision(&mut self, digits: u32) -> Result<(), Error> {
        let precision = Precision::nearest(digits)
            .map_err(|err| Error::new(Vec::new(), err))?;
        *self = Self::parse(&self.expression, precision, FormulaBuilder {
            precision: digits,
            ..self.options
        })?;
        Ok(())
    }

    /// Returns the names of the variables of the formula.
    pub fn variables(&self) -> HashSet<String> {
        match &self.tree {
            Tree::Real(node) => collect_variables(node),
            Tree::Complex(node) => collect_variables(node),
        }
    }

    /// The options used by the methods that do not take any, showing as many significant digits as
    /// the precision guarantees.
    fn default_format(&self) -> FormatOptions {
        FormatOptions {
            precision: Some(self.precision.digits() as usize),
            ..Default::default()
        }
    }

    /// Collects bindings, applying the case-folding of the expression to their names.
    fn bindings<'a, K: AsRef<str>>(
        &self,
        bindings: impl IntoIterator<Item = (K, Binding<'a>)>,
    ) -> Vec<(String, Binding<'a>)> {
        bindings.into_iter()
            .map(|(name, value)| {
                let name = name.as_ref();
                let name = if self.options.case_insensitive {
                    name.to_lowercase()
                } else {
                    name.to_string()
                };
                (name, value)
            })
            .collect()
    }

    /// Converts the bindings into a context.
    fn ctxt<T: Scalar>(&self, bindings: &[(String, Binding)]) -> Result<Ctxt<T>, Error> {
        let mut ctxt = Ctxt::new(self.precision);
        for (name, binding) in bindings {
            let value = match binding {
                Binding::Str(literal) => T::parse_literal(self.precision, literal.trim())
                    .map_err(|err| Error::new(Vec::new(), err))?,
                Binding::F64(n) => T::from_f64(self.precision, *n),
            };
            ctxt.add_var(name, value);
        }
        Ok(ctxt)
    }

    /// Evaluates the formula with the given bindings.
    fn eval_bindings(&self, bindings: &[(String, Binding)]) -> Result<Value, Error> {
        match &self.tree {
            Tree::Real(node) => node.eval(&self.ctxt(bindings)?).map(Value::Real),
            Tree::Complex(node) => node.eval(&self.ctxt(bindings)?).map(Value::Complex),
        }
    }

    /// Evaluates the derivative of the formula with the given bindings.
    fn derive_bindings(&self, var: &str, bindings: &[(String, Binding)]) -> Result<Value, Error> {
        let var = if self.options.case_insensitive {
            var.to_lowercase()
        } else {
            var.to_string()
        };
        match &self.tree {
            Tree::Real(node) => node.derive(&var, &self.ctxt(bindings)?).map(Value::Real),
            Tree::Complex(node) => node.derive(&var, &self.ctxt(bindings)?).map(Value::Complex),
        }
    }

    /// Evaluates the formula, with variables bound to decimal literals.
    pub fn get_value<K: AsRef<str>, V: AsRef<str>>(
        &self,
        bindings: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Value, Error> {
        let literals = bindings.into_iter().collect::<Vec<_>>();
        let bindings = self.bindings(literals.iter().map(|(k, v)| (k, Binding::Str(v.as_ref()))));
        self.eval_bindings(&bindings)
    }

    /// Evaluates the formula, with variables bound to native floating-point numbers.
    pub fn get_value_f64<K: AsRef<str>, V: Borrow<f64>>(
        &self,
        bindings: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Value, Error> {
        let bindings = self.bindings(bindings.into_iter().map(|(k, v)| (k, Binding::F64(*v.borrow()))));
        self.eval_bindings(&bindings)
    }

    /// Evaluates the formula, with variables bound to decimal literals, and formats the result
    /// with as many significant digits as the precision guarantees.
    pub fn get<K: AsRef<str>, V: AsRef<str>>(
        &self,
        bindings: impl IntoIterator<Item = (K, V)>,
    ) -> Result<String, Error> {
        self.get_with(bindings, self.default_format())
    }

    /// Evaluates the formula, with variables bound to decimal literals, and formats the result
    /// with the given options.
    pub fn get_with<K: AsRef<str>, V: AsRef<str>>(
        &self,
        bindings: impl IntoIterator<Item = (K, V)>,
        options: FormatOptions,
    ) -> Result<String, Error> {
        Ok(self.get_value(bindings)?.fmt(options).to_string())
    }

    /// Evaluates the formula, with variables bound to native floating-point numbers, and formats
    /// the result with as many significant digits as the precision guarantees.
    pub fn get_f64<K: AsRef<str>, V: Borrow<f64>>(
        &self,
        bindings: impl IntoIterator<Item = (K, V)>,
    ) -> Result<String, Error> {
        self.get_f64_with(bindings, self.default_format())
    }

    /// Evaluates the formula, with variables bound to native floating-point numbers, and formats
    /// the result with the given options.
    pub fn get_f64_with<K: AsRef<str>, V: Borrow<f64>>(
        &self,
        bindings: impl IntoIterator<Item = (K, V)>,
        options: FormatOptions,
    ) -> Result<String, Error> {
        Ok(self.get_value_f64(bindings)?.fmt(options).to_string())
    }

    /// Evaluates the derivative of the formula with respect to `var`, with variables bound to
    /// decimal literals.
    pub fn get_derivative_value<K: AsRef<str>, V: AsRef<str>>(
        &self,
        var: &str,
        bindings: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Value, Error> {
        let literals = bindings.into_iter().collect::<Vec<_>>();
        let bindings = self.bindings(literals.iter().map(|(k, v)| (k, Binding::Str(v.as_ref()))));
        self.derive_bindings(var, &bindings)
    }

    /// Evaluates the derivative of the formula with respect to `var`, with variables bound to
    /// native floating-point numbers.
    pub fn get_derivative_value_f64<K: AsRef<str>, V: Borrow<f64>>(
        &self,
        var: &str,
        bindings: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Value, Error> {
        let bindings = self.bindings(bindings.into_iter().map(|(k, v)| (k, Binding::F64(*v.borrow()))));
        self.derive_bindings(var, &bindings)
    }

    /// Evaluates the derivative of the formula with respect to `var`, with variables bound to
    /// decimal literals, and formats the result with as many significant digits as the precision
    /// guarantees.
    pub fn get_derivative<K: AsRef<str>, V: AsRef<str>>(
        &self,
        var: &str,
        bindings: impl IntoIterator<Item = (K, V)>,
    ) -> Result<String, Error> {
        self.get_derivative_with(var, bindings, self.default_format())
    }

    /// Evaluates the derivative of the formula with respect to `var`, with variables bound to
    /// decimal literals, and formats the result with the given options.
    pub fn get_derivative_with<K: AsRef<str>, V: AsRef<str>>(
        &self,
        var: &str,
        bindings: impl IntoIterator<Item = (K, V)>,
        options: FormatOptions,
    ) -> Result<String, Error> {
        Ok(self.get_derivative_value(var, bindings)?.fmt(options).to_string())
    }
}
