use crate::error::Error;
use formula_num::{Precision, Scalar};
use levenshtein::levenshtein;
use std::collections::HashMap;

/// A context to evaluate or differentiate a formula in, containing the values of its variables and
/// the precision that constants are created at.
///
/// The values must have been created at the same precision as the context.
#[derive(Debug, Clone)]
pub struct Ctxt<T> {
    /// The variables in the context.
    vars: HashMap<String, T>,

    /// The precision of the values in the context.
    precision: Precision,
}

impl<T: Scalar> Ctxt<T> {
    /// Creates a new context with no variables.
    pub fn new(precision: Precision) -> Self {
        Self {
            vars: HashMap::new(),
            precision,
        }
    }

    /// Creates a context from pairs of variable names and values.
    pub fn from_values<K: Into<String>>(precision: Precision, vars: impl IntoIterator<Item = (K, T)>) -> Self {
        Self {
            vars: vars.into_iter().map(|(name, value)| (name.into(), value)).collect(),
            precision,
        }
    }

    /// Creates a context from pairs of variable names and decimal literals, such as `("x", "2.5")`.
    ///
    /// Returns an error if a literal is not a valid number.
    pub fn from_strs<K: AsRef<str>, V: AsRef<str>>(
        precision: Precision,
        vars: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, Error> {
        let mut ctxt = Self::new(precision);
        for (name, literal) in vars {
            let value = T::parse_literal(precision, literal.as_ref().trim())
                .map_err(|err| Error::new(Vec::new(), err))?;
            ctxt.add_var(name.as_ref(), value);
        }
        Ok(ctxt)
    }

    /// Creates a context from pairs of variable names and native floating-point numbers.
    pub fn from_f64s<K: AsRef<str>>(precision: Precision, vars: impl IntoIterator<Item = (K, f64)>) -> Self {
        let mut ctxt = Self::new(precision);
        for (name, value) in vars {
            ctxt.add_var(name.as_ref(), T::from_f64(precision, value));
        }
        ctxt
    }

    /// Returns the precision of the values in the context.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Add a variable to the context, replacing any previous value.
    pub fn add_var(&mut self, name: &str, value: T) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<&T> {
        self.vars.get(name)
    }

    /// Returns all variables in the context with a name similar to the given name, sorted by name.
    pub fn get_similar_vars(&self, name: &str) -> Vec<&str> {
        let mut similar = self.vars
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .map(String::as_str)
            .collect::<Vec<_>>();
        similar.sort_unstable();
        similar
    }
}

#[cfg(test)]
mod tests {
    use formula_num::{error::InvalidNumber, Float};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn from_strs() {
        let ctxt = Ctxt::<Float>::from_strs(Precision::MIN, [("x", "2.5"), ("y", "-1e2")]).unwrap();
        assert_eq!(*ctxt.get_var("x").unwrap(), 2.5);
        assert_eq!(*ctxt.get_var("y").unwrap(), -100);
        assert!(ctxt.get_var("z").is_none());
    }

    #[test]
    fn invalid_literal() {
        let err = Ctxt::<Float>::from_strs(Precision::MIN, [("x", "two")]).unwrap_err();
        assert_eq!(err.kind_as::<InvalidNumber>(), Some(&InvalidNumber { text: "two".to_string() }));
    }

    #[test]
    fn similar_vars() {
        let ctxt = Ctxt::<Float>::from_f64s(Precision::MIN, [("xy", 1.0), ("x", 2.0), ("abc", 3.0)]);
        assert_eq!(ctxt.get_similar_vars("y"), vec!["x", "xy"]);
    }
}
