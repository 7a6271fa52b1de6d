mod binary;
mod call;
mod leaf;

use crate::{ctxt::Ctxt, error::Error};
use formula_num::Scalar;
use formula_parser::parser::ast::Node;

/// Any type that can be evaluated to produce a value.
pub trait Eval<T> {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &Ctxt<T>) -> Result<T, Error>;
}

impl<T: Scalar> Eval<T> for Node<T> {
    fn eval(&self, ctxt: &Ctxt<T>) -> Result<T, Error> {
        match self {
            Node::Number(number) => number.eval(ctxt),
            Node::Variable(variable) => variable.eval(ctxt),
            Node::Call(call) => call.eval(ctxt),
            Node::Binary(binary) => binary.eval(ctxt),
        }
    }
}
