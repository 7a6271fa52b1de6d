use crate::{ctxt::Ctxt, error::Error, eval::Eval, funcs};
use formula_num::Scalar;
use formula_parser::parser::ast::Call;

impl<T: Scalar> Eval<T> for Call<T> {
    fn eval(&self, ctxt: &Ctxt<T>) -> Result<T, Error> {
        let arg = self.arg.eval(ctxt)?;
        funcs::eval_func(self.func.kind, &arg)
            .map_err(|err| err.into_error(self.func.kind.name(), 1, self.span.clone()))
    }
}
