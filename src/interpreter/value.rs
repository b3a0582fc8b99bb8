/// Bindings and evaluation operands.
///
/// Defines `Binding`, the entry type of the environment, and `Operand`, the
/// result of evaluating an expression in either concrete or symbolic mode.
pub mod core;

/// Callable values.
///
/// Defines native built-in functions and the `Callable` wrapper shared by
/// built-ins and specialized user functions.
pub mod callable;
