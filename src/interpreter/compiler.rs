/// Symbolic formulas.
///
/// A formula is what a function body evaluates to while its parameters are
/// unbound: a tree of operators over parameter placeholders and constants.
pub mod formula;

/// Bytecode for specialized functions.
///
/// Lowers a closed-form formula once into a flat instruction list and runs it
/// on a value stack every time the function is called.
pub mod bytecode;
