/// Built-in math function implementations.
///
/// Contains `sin`, `cos`, `sqrt` and `hypot`.
pub mod builtin;
/// The `print` function implementation.
///
/// Sends a value to the print channel and returns it.
pub mod print;
/// Function declarations.
///
/// Specializes a function body with its parameters unbound and compiles the
/// result.
pub mod staging;

pub mod core;
