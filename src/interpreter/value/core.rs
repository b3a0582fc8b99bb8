use crate::interpreter::{compiler::formula::Formula, value::callable::Callable};

/// An entry in the environment.
///
/// Built-ins are created immutable. Everything a program declares is mutable
/// in the sense of the write-access rule: it can never be declared a second
/// time. Only mutable numbers can be the target of an assignment.
#[derive(Debug, Clone)]
pub enum Binding {
    /// A number, such as `π` or a `let` variable.
    Number {
        /// The current value.
        value:   f64,
        /// `false` for built-in constants.
        mutable: bool,
    },
    /// A built-in or user-declared function.
    Callable {
        /// The declared number of parameters.
        arity:   usize,
        /// The function itself.
        body:    Callable,
        /// `false` for built-in functions.
        mutable: bool,
    },
}

impl Binding {
    /// Returns `true` for bindings created by the program rather than seeded
    /// as built-ins.
    #[must_use]
    pub const fn is_mutable(&self) -> bool {
        match self {
            Self::Number { mutable, .. } | Self::Callable { mutable, .. } => *mutable,
        }
    }
}

/// The result of evaluating an expression.
///
/// Outside of function specialization every operand is concrete. While a
/// function body is specialized, anything that depends on a parameter is a
/// symbolic formula instead.
///
/// # Example
/// ```
/// use bella::interpreter::{compiler::formula::Formula, value::core::Operand};
///
/// let x = Operand::Symbolic(Formula::Param { index: 0,
///                                            name:  "x".into(), });
///
/// assert!(x.is_symbolic());
/// assert_eq!(Operand::Concrete(2.0).as_concrete(), Some(2.0));
/// ```
#[derive(Debug, Clone)]
pub enum Operand {
    /// A definite number.
    Concrete(f64),
    /// A formula over the parameters of the function being specialized.
    Symbolic(Formula),
}

impl Operand {
    /// Returns `true` if the operand depends on a parameter.
    #[must_use]
    pub const fn is_symbolic(&self) -> bool {
        matches!(self, Self::Symbolic(_))
    }

    /// Returns the number held by a concrete operand.
    #[must_use]
    pub const fn as_concrete(&self) -> Option<f64> {
        match self {
            Self::Concrete(value) => Some(*value),
            Self::Symbolic(_) => None,
        }
    }

    /// Converts the operand into a formula, embedding concrete values as
    /// constants.
    #[must_use]
    pub fn into_formula(self) -> Formula {
        match self {
            Self::Concrete(value) => Formula::Const(value),
            Self::Symbolic(formula) => formula,
        }
    }
}
