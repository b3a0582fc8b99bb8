use crate::interpreter::output::Output;

/// Prints a value through the print channel and returns it unchanged.
///
/// Accepts exactly one argument.
///
/// # Panics
/// Panics if `args` is empty.
///
/// # Example
/// ```
/// use bella::{Capture, interpreter::evaluator::function::print::print};
///
/// let capture = Capture::default();
/// let result = print(&[42.0], &mut capture.clone());
///
/// assert_eq!(result, 42.0);
/// assert_eq!(capture.values(), vec![42.0]);
/// ```
pub fn print(args: &[f64], output: &mut dyn Output) -> f64 {
    output.print(args[0]);
    args[0]
}
