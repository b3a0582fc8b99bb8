use std::rc::Rc;

use crate::interpreter::{
    compiler::bytecode::SpecializedFunction, evaluator::core::EvalResult, output::Output,
};

/// Signature of a native built-in.
///
/// A native receives exactly as many arguments as its arity and the print
/// channel, and always produces a number.
pub type NativeFn = fn(&[f64], &mut dyn Output) -> f64;

/// A built-in function implemented in Rust.
#[derive(Clone, Copy)]
pub struct NativeFunction {
    /// The name the built-in is installed under.
    pub name:  &'static str,
    /// Number of arguments the built-in accepts.
    pub arity: usize,
    /// `false` if calling the built-in has an observable effect.
    pub pure:  bool,
    /// The implementation.
    pub func:  NativeFn,
}

impl std::fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeFunction")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .field("pure", &self.pure)
         .finish_non_exhaustive()
    }
}

/// Anything that can be the target of a call.
#[derive(Debug, Clone)]
pub enum Callable {
    /// A built-in such as `sin` or `print`.
    Native(NativeFunction),
    /// A user function compiled at declaration time.
    Specialized(Rc<SpecializedFunction>),
}

impl Callable {
    /// The name of the function, used in diagnostics and formula rendering.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Native(native) => native.name,
            Self::Specialized(function) => function.name(),
        }
    }

    /// The number of arguments the function expects.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Self::Native(native) => native.arity,
            Self::Specialized(function) => function.arity(),
        }
    }

    /// Returns `true` if calling the function has no effect besides producing
    /// its result. Impure calls are never folded during specialization.
    #[must_use]
    pub fn is_pure(&self) -> bool {
        match self {
            Self::Native(native) => native.pure,
            Self::Specialized(function) => function.is_pure(),
        }
    }

    /// Calls the function with concrete arguments.
    ///
    /// The caller is responsible for checking the argument count against
    /// [`Callable::arity`].
    ///
    /// # Errors
    /// Specialized functions propagate any error raised by their body, such
    /// as an operand that violates the truthy/falsy invariant.
    pub fn invoke(&self, args: &[f64], output: &mut dyn Output) -> EvalResult<f64> {
        match self {
            Self::Native(native) => Ok((native.func)(args, output)),
            Self::Specialized(function) => function.call(args, output),
        }
    }
}
