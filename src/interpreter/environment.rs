use std::collections::HashMap;

use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::BUILTIN_FUNCTIONS},
        output::{Output, Stdout},
        value::{
            callable::{Callable, NativeFunction},
            core::Binding,
        },
    },
};

/// Built-in constants installed in every new environment.
pub const BUILTIN_CONSTANTS: &[(&str, f64)] = &[("π", std::f64::consts::PI)];

/// The symbol table.
///
/// A single flat mapping from names to bindings, shared by every statement of
/// a program, together with the print channel. There are no nested scopes:
/// blocks and loop bodies read and write the same table.
///
/// ## Usage
///
/// An `Environment` is created once per program run and passed explicitly to
/// [`crate::evaluate`]. Reusing it across several runs keeps earlier
/// declarations alive.
pub struct Environment {
    bindings: HashMap<String, Binding>,
    output:   Box<dyn Output>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
         .field("bindings", &self.bindings)
         .finish_non_exhaustive()
    }
}

impl Environment {
    /// Creates an environment that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(Stdout)
    }

    /// Creates an environment seeded with the built-ins that prints through
    /// `output`.
    ///
    /// # Example
    /// ```
    /// use bella::{Capture, Environment, interpreter::value::core::Binding};
    ///
    /// let env = Environment::with_output(Capture::default());
    ///
    /// assert!(matches!(env.lookup("π"), Some(Binding::Number { mutable: false, .. })));
    /// assert!(matches!(env.lookup("hypot"), Some(Binding::Callable { arity: 2, .. })));
    /// assert!(env.lookup("tan").is_none());
    /// ```
    #[must_use]
    pub fn with_output(output: impl Output + 'static) -> Self {
        let mut env = Self { bindings: HashMap::new(),
                             output:   Box::new(output), };

        for (name, value) in BUILTIN_CONSTANTS {
            env.define(*name,
                       Binding::Number { value:   *value,
                                         mutable: false, });
        }
        for native in BUILTIN_FUNCTIONS {
            env.define(native.name, builtin_binding(*native));
        }

        env
    }

    /// Looks up the binding for `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Installs or overwrites the binding for `name`.
    ///
    /// Declarations must call [`Environment::check_declarable`] first.
    pub fn define(&mut self, name: impl Into<String>, binding: Binding) {
        self.bindings.insert(name.into(), binding);
    }

    /// Enforces the write-access rule for declarations.
    ///
    /// A name may be declared if it is unbound or holds a built-in. Names that
    /// a program has already declared, as a variable or as a function, cannot
    /// be declared again.
    ///
    /// # Errors
    /// Returns `NotWritable` if `name` holds a user binding.
    pub fn check_declarable(&self, name: &str, pos: Position) -> EvalResult<()> {
        match self.bindings.get(name) {
            Some(binding) if binding.is_mutable() => {
                Err(RuntimeError::NotWritable { name: name.to_string(),
                                                details: "it is already declared".to_string(),
                                                pos })
            },
            _ => Ok(()),
        }
    }

    /// Overwrites the value of an existing mutable number.
    ///
    /// # Errors
    /// Returns `NotWritable` if `name` is unbound, holds a function, or holds
    /// a built-in constant.
    pub fn assign(&mut self, name: &str, value: f64, pos: Position) -> EvalResult<()> {
        let details = match self.bindings.get_mut(name) {
            Some(Binding::Number { value: current,
                                   mutable: true, }) => {
                *current = value;
                return Ok(());
            },
            Some(Binding::Number { mutable: false, .. }) => "it is a built-in constant",
            Some(Binding::Callable { .. }) => "it is a function",
            None => "cannot assign to an uninitialized identifier",
        };

        Err(RuntimeError::NotWritable { name: name.to_string(),
                                        details: details.to_string(),
                                        pos })
    }

    /// The print channel.
    pub fn output(&mut self) -> &mut dyn Output {
        self.output.as_mut()
    }
}

/// Wraps a native function in an immutable binding.
fn builtin_binding(native: NativeFunction) -> Binding {
    Binding::Callable { arity:   native.arity,
                        body:    Callable::Native(native),
                        mutable: false, }
}
