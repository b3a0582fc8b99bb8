use tracing::trace;

use crate::{
    ast::{Block, Expr, Position},
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        utils::as_truthy,
    },
};

impl Evaluator<'_> {
    /// Evaluates a `while` loop.
    ///
    /// The guard is re-evaluated before every iteration and must be `0` or
    /// `1`. There is no iteration limit.
    ///
    /// # Example
    /// ```
    /// use bella::{Capture, Environment};
    ///
    /// let capture = Capture::default();
    /// let mut env = Environment::with_output(capture.clone());
    ///
    /// bella::run("let i = 0; while i < 3 { print i; i = i + 1; }", &mut env).unwrap();
    /// assert_eq!(capture.values(), vec![0.0, 1.0, 2.0]);
    /// ```
    pub(crate) fn eval_while(&mut self,
                             condition: &Expr,
                             body: &Block,
                             pos: Position)
                             -> EvalResult<()> {
        let guard_pos = condition.position();
        let mut iteration: u64 = 0;

        while as_truthy(self.eval_concrete(condition)?, guard_pos)? {
            trace!(%pos, iteration, "loop iteration");
            self.eval_block(body)?;
            iteration += 1;
        }

        Ok(())
    }
}
