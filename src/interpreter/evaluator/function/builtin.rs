use crate::interpreter::output::Output;

/// Applies a unary `f64` method to the single argument of a built-in.
///
/// The generated functions expect exactly one argument; the evaluator checks
/// the arity before calling them.
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        #[doc = concat!("Computes `", stringify!($real_fn), "` of the single argument.")]
        ///
        /// # Panics
        /// Panics if `args` is empty.
        ///
        /// # Example
        /// ```
        /// use bella::{Capture, interpreter::evaluator::function::builtin::sqrt};
        ///
        /// assert_eq!(sqrt(&[9.0], &mut Capture::default()), 3.0);
        /// ```
        pub fn $fname(args: &[f64], _output: &mut dyn Output) -> f64 {
            args[0].$real_fn()
        }
    };
}

real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(sqrt, sqrt);

/// Computes `sqrt(a² + b²)` without intermediate overflow.
///
/// # Panics
/// Panics if `args` holds fewer than two values.
///
/// # Example
/// ```
/// use bella::{Capture, interpreter::evaluator::function::builtin::hypot};
///
/// assert_eq!(hypot(&[3.0, 4.0], &mut Capture::default()), 5.0);
/// ```
pub fn hypot(args: &[f64], _output: &mut dyn Output) -> f64 {
    args[0].hypot(args[1])
}
