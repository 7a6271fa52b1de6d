use crate::{ctxt::Ctxt, error::{kind::UnboundVariable, Error}, eval::Eval};
use formula_num::Scalar;
use formula_parser::parser::ast::{Number, Variable};

impl<T: Scalar> Eval<T> for Number<T> {
    fn eval(&self, _: &Ctxt<T>) -> Result<T, Error> {
        Ok(self.value.clone())
    }
}

impl<T: Scalar> Eval<T> for Variable {
    fn eval(&self, ctxt: &Ctxt<T>) -> Result<T, Error> {
        ctxt.get_var(&self.name)
            .cloned()
            .ok_or_else(|| Error::new(vec![self.span.clone()], UnboundVariable {
                name: self.name.clone(),
                suggestions: ctxt.get_similar_vars(&self.name)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            }))
    }
}
