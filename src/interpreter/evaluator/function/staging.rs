use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::FunctionDef,
    interpreter::{
        compiler::bytecode::SpecializedFunction,
        evaluator::core::{EvalResult, Evaluator, Stage},
        value::{callable::Callable, core::Binding},
    },
};

impl Evaluator<'_> {
    /// Declares a user function.
    ///
    /// The body is evaluated once with the parameters unbound. Everything
    /// that does not depend on a parameter is computed now, including reads
    /// of global variables, so later assignments to those globals do not
    /// change the function. The remaining formula is compiled and installed
    /// as a callable of the declared arity.
    ///
    /// The evaluator returns to its previous stage whether or not the body
    /// evaluates successfully.
    ///
    /// # Errors
    /// - `NotWritable` if the name is already declared by the program.
    /// - Any error raised while specializing the body outside a conditional
    ///   branch.
    pub(crate) fn declare_function(&mut self, def: &FunctionDef) -> EvalResult<()> {
        self.env.check_declarable(&def.name, def.pos)?;

        let previous = std::mem::replace(&mut self.stage, Stage::Specializing(def.params.clone()));
        let recorded = std::mem::take(&mut self.effects);
        let body = self.eval(&def.body);
        self.stage = previous;
        self.effects = recorded;

        let function =
            SpecializedFunction::compile(def.name.clone(), def.params.clone(), body?, def.pos);
        debug!(pos = %def.pos,
               %function,
               pure = function.is_pure(),
               instructions = function.code().len(),
               "compiled function");

        self.env.define(def.name.clone(),
                        Binding::Callable { arity:   function.arity(),
                                            body:    Callable::Specialized(Rc::new(function)),
                                            mutable: true, });
        Ok(())
    }
}
