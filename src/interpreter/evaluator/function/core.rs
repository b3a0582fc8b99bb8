use crate::{
    ast::{Expr, Position},
    error::RuntimeError,
    interpreter::{
        compiler::formula::Formula,
        evaluator::{
            core::{EvalResult, Evaluator},
            function::{builtin, print},
        },
        value::{
            callable::{Callable, NativeFunction},
            core::{Binding, Operand},
        },
    },
};

/// Defines the built-in function table.
///
/// Each entry provides:
/// - a string name,
/// - the number of arguments,
/// - whether calling it is free of effects,
/// - a function pointer implementing the built-in.
///
/// The macro produces `BUILTIN_FUNCTIONS`, the table every new environment is
/// seeded from.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                pure: $pure:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// The built-in functions installed in every new environment.
        pub static BUILTIN_FUNCTIONS: &[NativeFunction] = &[
            $(
                NativeFunction { name: $name, arity: $arity, pure: $pure, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "sin"   => { arity: 1, pure: true,  func: builtin::sin },
    "cos"   => { arity: 1, pure: true,  func: builtin::cos },
    "sqrt"  => { arity: 1, pure: true,  func: builtin::sqrt },
    "hypot" => { arity: 2, pure: true,  func: builtin::hypot },
    "print" => { arity: 1, pure: false, func: print::print },
}

impl Evaluator<'_> {
    /// Evaluates a function call.
    ///
    /// The callee is resolved and its arity checked before any argument is
    /// evaluated. Arguments are then evaluated left to right.
    ///
    /// The call is performed immediately when every argument is concrete and
    /// the call has no effect that specialization would have to preserve.
    /// Otherwise it becomes a call formula that the compiled function performs
    /// with concrete arguments.
    ///
    /// # Errors
    /// - `NotAFunction` if the name is a number or a parameter.
    /// - `UnboundName` if the name is not bound.
    /// - `ArityMismatch` if the argument count differs from the arity.
    /// - Any error raised by an argument or by the callee.
    pub(crate) fn eval_call(&mut self,
                            name: &str,
                            arguments: &[Expr],
                            pos: Position)
                            -> EvalResult<Operand> {
        let callee = self.resolve_callee(name, pos)?;

        if arguments.len() != callee.arity() {
            return Err(RuntimeError::ArityMismatch { name: name.to_string(),
                                                     expected: callee.arity(),
                                                     found: arguments.len(),
                                                     pos });
        }

        let operands = arguments.iter()
                                .map(|argument| self.eval(argument))
                                .collect::<EvalResult<Vec<_>>>()?;

        let deferred = operands.iter().any(Operand::is_symbolic)
                       || (self.stage.is_specializing() && !callee.is_pure());
        if deferred {
            let arguments = operands.into_iter().map(Operand::into_formula).collect();
            return Ok(Operand::Symbolic(Formula::Call { callee, arguments }));
        }

        let args = operands.iter()
                           .filter_map(Operand::as_concrete)
                           .collect::<Vec<_>>();
        Ok(Operand::Concrete(callee.invoke(&args, self.env.output())?))
    }

    /// Finds the function a call refers to.
    ///
    /// A parameter of the function being specialized shadows any global of
    /// the same name, and parameters are never callable.
    fn resolve_callee(&self, name: &str, pos: Position) -> EvalResult<Callable> {
        if self.stage.parameter_slot(name).is_some() {
            return Err(RuntimeError::NotAFunction { name: name.to_string(),
                                                    pos });
        }

        match self.env.lookup(name) {
            Some(Binding::Callable { body, .. }) => Ok(body.clone()),
            Some(Binding::Number { .. }) => Err(RuntimeError::NotAFunction { name: name.to_string(),
                                                                            pos }),
            None => Err(RuntimeError::UnboundName { name: name.to_string(),
                                                    pos }),
        }
    }
}
