/// Arithmetic and relational operators.
///
/// Implements the IEEE semantics of `+ - * / % **` and the six comparisons,
/// which yield `0` or `1`.
pub mod core;

/// Logical operators.
///
/// Implements `&&` and `||` over truthy/falsy operands.
pub mod logic;
