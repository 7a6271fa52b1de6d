use crate::{ctxt::Ctxt, error::Error, eval::Eval, funcs};
use formula_num::Scalar;
use formula_parser::parser::ast::Binary;

impl<T: Scalar> Eval<T> for Binary<T> {
    fn eval(&self, ctxt: &Ctxt<T>) -> Result<T, Error> {
        let left = self.lhs.eval(ctxt)?;
        let right = self.rhs.eval(ctxt)?;
        funcs::eval_binary(self.op.kind, &left, &right, ctxt.precision())
            .map_err(|err| err.into_error(&self.op.kind.to_string(), 2, self.span.clone()))
    }
}
