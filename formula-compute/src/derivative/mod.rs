//! Numerical evaluation of the symbolic derivative of a formula.
//!
//! The derivative is never built as a tree. Instead, every node computes its value and its
//! derivative together, and combines the values and derivatives of its children with the chain
//! rule:
//!
//! - a binary node `f(u, v)` has the derivative `∂f/∂u * u' + ∂f/∂v * v'`,
//! - a call `f(u)` has the derivative `f'(u) * u'`.
//!
//! The partial derivatives come from the rule tables in [`crate::funcs`], so an operator without a
//! derivative rule, or a rule whose operands are out of its domain, is an error even when the
//! partial would be multiplied by zero. The one exception is `∂(u^v)/∂v`, which needs `ln(u)` and
//! is skipped when `v'` is exactly zero, so that `x^2` can be differentiated at a negative `x`.

use crate::{ctxt::Ctxt, error::Error, eval::Eval, funcs};
use formula_num::Scalar;
use formula_parser::parser::{ast::{Binary, Call, Node}, token::op::BinOpKind};

/// Any type that can be differentiated with respect to a variable.
pub trait Derive<T> {
    /// Evaluates the derivative of the expression with respect to the variable `var`, at the
    /// values of the variables in the given context.
    fn derive(&self, var: &str, ctxt: &Ctxt<T>) -> Result<T, Error>;
}

impl<T: Scalar> Derive<T> for Node<T> {
    fn derive(&self, var: &str, ctxt: &Ctxt<T>) -> Result<T, Error> {
        match self {
            Node::Number(_) => Ok(T::zero(ctxt.precision())),
            Node::Variable(variable) if variable.name == var => Ok(T::one(ctxt.precision())),
            Node::Variable(_) => Ok(T::zero(ctxt.precision())),
            Node::Call(call) => {
                let (a, d) = value_and_derivative(&call.arg, var, ctxt)?;
                call_derivative(call, &a, &d, ctxt)
            },
            Node::Binary(binary) => {
                let (a, d) = value_and_derivative(&binary.lhs, var, ctxt)?;
                let (b, c) = value_and_derivative(&binary.rhs, var, ctxt)?;
                binary_derivative(binary, [&a, &d, &b, &c], ctxt)
            },
        }
    }
}

/// Evaluates a node and its derivative with respect to `var` in a single traversal.
fn value_and_derivative<T: Scalar>(node: &Node<T>, var: &str, ctxt: &Ctxt<T>) -> Result<(T, T), Error> {
    match node {
        Node::Number(number) => Ok((number.value.clone(), T::zero(ctxt.precision()))),
        Node::Variable(variable) => {
            let value = variable.eval(ctxt)?;
            let derivative = node.derive(var, ctxt)?;
            Ok((value, derivative))
        },
        Node::Call(call) => {
            let (a, d) = value_and_derivative(&call.arg, var, ctxt)?;
            let value = funcs::eval_func(call.func.kind, &a)
                .map_err(|err| err.into_error(call.func.kind.name(), 1, call.span.clone()))?;
            let derivative = call_derivative(call, &a, &d, ctxt)?;
            Ok((value, derivative))
        },
        Node::Binary(binary) => {
            let (a, d) = value_and_derivative(&binary.lhs, var, ctxt)?;
            let (b, c) = value_and_derivative(&binary.rhs, var, ctxt)?;
            let value = funcs::eval_binary(binary.op.kind, &a, &b, ctxt.precision())
                .map_err(|err| err.into_error(&binary.op.kind.to_string(), 2, binary.span.clone()))?;
            let derivative = binary_derivative(binary, [&a, &d, &b, &c], ctxt)?;
            Ok((value, derivative))
        },
    }
}

/// Applies the chain rule to a call whose argument has the value `a` and the derivative `d`.
fn call_derivative<T: Scalar>(call: &Call<T>, a: &T, d: &T, ctxt: &Ctxt<T>) -> Result<T, Error> {
    let outer = funcs::derive_func(call.func.kind, a, ctxt.precision())
        .map_err(|err| err.into_error(call.func.kind.name(), 1, call.span.clone()))?;
    Ok(outer.mul(d))
}

/// Applies the chain rule to a binary expression whose left operand has the value `a` and the
/// derivative `d`, and whose right operand has the value `b` and the derivative `c`.
fn binary_derivative<T: Scalar>(binary: &Binary<T>, [a, d, b, c]: [&T; 4], ctxt: &Ctxt<T>) -> Result<T, Error> {
    let precision = ctxt.precision();
    let op = binary.op.kind;
    let into_error = |err: funcs::RuleError| err.into_error(&op.to_string(), 2, binary.span.clone());

    let left = funcs::derive_left(op, a, b, precision).map_err(into_error)?;
    let derivative = left.mul(d);
    if op == BinOpKind::Exp && c.is_zero() {
        return Ok(derivative);
    }

    let right = funcs::derive_right(op, a, b, precision).map_err(into_error)?;
    Ok(derivative.add(&right.mul(c)))
}

/// Derivative tests depend on the parser and the evaluator, so ensure that their tests pass before
/// running these.
#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use crate::error::kind::{DomainError, UnboundVariable};
    use formula_num::{Complex, DomainViolation, Float, Precision};
    use formula_parser::parser::{error::kind::UnknownOperator, parse, Parser};
    use pretty_assertions::assert_eq;
    use super::*;

    fn ctxt(vars: &[(&str, f64)]) -> Ctxt<Float> {
        Ctxt::from_f64s(Precision::MIN, vars.iter().copied())
    }

    fn derive_real(source: &str, var: &str, vars: &[(&str, f64)]) -> Result<Float, Error> {
        parse::<Float>(source)?.derive(var, &ctxt(vars))
    }

    #[test]
    fn leaves() {
        assert_eq!(derive_real("2", "x", &[]).unwrap(), 0);
        assert_eq!(derive_real("x", "x", &[]).unwrap(), 1);
        assert_eq!(derive_real("y", "x", &[]).unwrap(), 0);
        assert_eq!(derive_real("pi", "x", &[]).unwrap(), 0);
    }

    #[test]
    fn rules() {
        let at = [("x", 3.0), ("y", 2.0)];
        assert_eq!(derive_real("x+y", "x", &at).unwrap(), 1);
        assert_eq!(derive_real("x-y", "y", &at).unwrap(), -1);
        assert_eq!(derive_real("x*y", "x", &at).unwrap(), 2);
        assert_eq!(derive_real("x*y", "y", &at).unwrap(), 3);
        assert_eq!(derive_real("x/y", "y", &at).unwrap(), -0.75);
        assert_eq!(derive_real("x^y", "x", &at).unwrap(), 6);
        assert_eq!(derive_real("-x", "x", &at).unwrap(), -1);
        assert_eq!(derive_real("--x", "x", &at).unwrap(), 1);
    }

    #[test]
    fn chain_rule() {
        let value = derive_real("sin(x^2)", "x", &[("x", 1.5)]).unwrap().to_f64();
        assert_float_absolute_eq!(value, 2.0 * 1.5 * (1.5f64 * 1.5).cos(), 1e-12);

        let value = derive_real("exp(2*x)", "x", &[("x", 0.5)]).unwrap().to_f64();
        assert_float_absolute_eq!(value, 2.0 * 1f64.exp(), 1e-12);
    }

    #[test]
    fn negative_base() {
        assert_eq!(derive_real("x^2", "x", &[("x", -3.0)]).unwrap(), -6);
    }

    #[test]
    fn variable_exponent() {
        let value = derive_real("2^x", "x", &[("x", 3.0)]).unwrap().to_f64();
        assert_float_absolute_eq!(value, 8.0 * 2f64.ln(), 1e-12);
    }

    /// Compares every derivative with a central finite difference of the evaluated formula.
    #[test]
    fn finite_difference() {
        let cases: [(&str, f64); 14] = [
            ("x^3-2*x", 1.3),
            ("x*sin(x)", 0.7),
            ("cos(x)/x", 2.1),
            ("tan(x)", 0.4),
            ("asin(x)+acos(x/2)", 0.3),
            ("atan(x^2)", -1.2),
            ("exp(-x^2)", 0.8),
            ("log(x)*sqrt(x)", 2.5),
            ("x^x", 1.7),
            ("2^(x+1)", 0.25),
            ("sqrt(1+x^2)", -0.6),
            ("sin(cos(x))*y", 1.1),
            ("(x+y)/(x-y)", 4.0),
            ("log(exp(x)+1)", -0.3),
        ];

        let h = 1e-6;
        for (source, x) in cases {
            let node = parse::<Float>(source).unwrap();
            let at = |x: f64| ctxt(&[("x", x), ("y", 0.5)]);
            let derivative = node.derive("x", &at(x)).unwrap().to_f64();
            let above = node.eval(&at(x + h)).unwrap().to_f64();
            let below = node.eval(&at(x - h)).unwrap().to_f64();
            let estimate = (above - below) / (2.0 * h);
            assert!(
                (derivative - estimate).abs() < 1e-6 * (1.0 + derivative.abs()),
                "d/dx {} at {}: {} vs {}",
                source,
                x,
                derivative,
                estimate,
            );
        }
    }

    /// The same comparison at 64 digits, where the error of the difference quotient shrinks with the
    /// step.
    #[test]
    fn finite_difference_high_precision() {
        let precision = Precision::nearest(64).unwrap();
        let h = Float::parse_literal(precision, "1e-20").unwrap();
        let two_h = h.add(&h);
        for (source, x) in [("x^3-2*x", "1.3"), ("x*sin(x)", "0.7"), ("exp(-x^2)", "0.8"), ("log(x)*sqrt(x)", "2.5")] {
            let node = Parser::new(source)
                .with_precision(precision)
                .try_parse_full::<Float>()
                .unwrap();
            let x = Float::parse_literal(precision, x).unwrap();
            let at = |x: Float| Ctxt::from_values(precision, [("x", x)]);

            let derivative = node.derive("x", &at(x.clone())).unwrap();
            let above = node.eval(&at(x.add(&h))).unwrap();
            let below = node.eval(&at(x.sub(&h))).unwrap();
            let estimate = above.sub(&below).div(&two_h).unwrap();

            let error = derivative.sub(&estimate).to_f64().abs();
            assert!(error < 1e-30 * (1.0 + derivative.to_f64().abs()), "d/dx {}: error {}", source, error);
        }
    }

    #[test]
    fn complex_derivative() {
        let node = parse::<Complex>("i*x^2").unwrap();
        let ctxt = Ctxt::from_f64s(Precision::MIN, [("x", 2.0)]);
        let value = node.derive("x", &ctxt).unwrap();
        assert_float_absolute_eq!(value.real().to_f64(), 0.0, 1e-12);
        assert_float_absolute_eq!(value.imag().to_f64(), 4.0, 1e-12);
    }

    #[test]
    fn domain_errors() {
        let err = derive_real("1/x", "x", &[("x", 0.0)]).unwrap_err();
        assert_eq!(err.kind_as::<DomainError>(), Some(&DomainError {
            op: "/".to_string(),
            violation: DomainViolation::DivisionByZero,
        }));
        assert!(derive_real("sqrt(x)", "x", &[("x", 0.0)]).unwrap_err().is::<DomainError>());
        assert!(derive_real("log(x)", "x", &[("x", 0.0)]).unwrap_err().is::<DomainError>());
        assert!(derive_real("asin(x)", "x", &[("x", 1.0)]).unwrap_err().is::<DomainError>());
    }

    #[test]
    fn no_derivative_of_comparison() {
        let err = derive_real("x<1", "x", &[("x", 0.0)]).unwrap_err();
        assert_eq!(err.kind_as::<UnknownOperator>().unwrap().name, "<");

        let err = derive_real("1<2", "x", &[]).unwrap_err();
        assert_eq!(err.kind_as::<UnknownOperator>().unwrap().name, "<");
        assert!(derive_real("x+(1<2)", "x", &[("x", 0.0)]).unwrap_err().is::<UnknownOperator>());
    }

    #[test]
    fn guards_apply_to_constant_operands() {
        let err = derive_real("1/x", "y", &[("x", 0.0)]).unwrap_err();
        assert_eq!(err.kind_as::<DomainError>(), Some(&DomainError {
            op: "/".to_string(),
            violation: DomainViolation::DivisionByZero,
        }));
        assert!(derive_real("y*sqrt(x)", "y", &[("x", 0.0), ("y", 1.0)]).unwrap_err().is::<DomainError>());
    }

    #[test]
    fn unbound_variable() {
        let err = derive_real("x*y", "x", &[("x", 1.0)]).unwrap_err();
        assert!(err.is::<UnboundVariable>());
    }
}
