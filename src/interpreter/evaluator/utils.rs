use tracing::trace;

use crate::{
    ast::{Block, Expr, Position},
    error::RuntimeError,
    interpreter::{
        compiler::formula::Formula,
        evaluator::core::{EvalResult, Evaluator},
        value::core::{Binding, Operand},
    },
};

/// Checks the truthy/falsy invariant and converts a number to a boolean.
///
/// # Errors
/// Returns `InvalidBooleanOperand` at `pos` for anything other than exactly
/// `0` or `1`.
///
/// # Example
/// ```
/// use bella::{ast::Position, interpreter::evaluator::utils::as_truthy};
///
/// assert_eq!(as_truthy(1.0, Position::new(1, 1)), Ok(true));
/// assert_eq!(as_truthy(0.0, Position::new(1, 1)), Ok(false));
/// assert!(as_truthy(2.0, Position::new(1, 1)).is_err());
/// ```
#[allow(clippy::float_cmp)]
pub fn as_truthy(value: f64, pos: Position) -> EvalResult<bool> {
    if value == 1.0 {
        Ok(true)
    } else if value == 0.0 {
        Ok(false)
    } else {
        Err(RuntimeError::InvalidBooleanOperand { value, pos })
    }
}

/// Encodes a boolean as `1` or `0`.
#[must_use]
pub const fn from_bool(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

impl Evaluator<'_> {
    /// Looks up a variable by name.
    ///
    /// Variable lookup checks, in order:
    /// 1. Parameters of the function being specialized, which evaluate to a
    ///    placeholder.
    /// 2. Number bindings in the environment.
    ///
    /// # Errors
    /// - `NotANumber` if the name is bound to a function.
    /// - `UnboundName` if the name is not bound at all.
    pub(crate) fn eval_variable(&self, name: &str, pos: Position) -> EvalResult<Operand> {
        if let Some(index) = self.stage.parameter_slot(name) {
            return Ok(Operand::Symbolic(Formula::Param { index,
                                                         name: name.to_string() }));
        }

        match self.env.lookup(name) {
            Some(Binding::Number { value, .. }) => Ok(Operand::Concrete(*value)),
            Some(Binding::Callable { .. }) => Err(RuntimeError::NotANumber { name: name.to_string(),
                                                                             pos }),
            None => Err(RuntimeError::UnboundName { name: name.to_string(),
                                                    pos }),
        }
    }

    /// Executes the statements of a block in order, in the global environment.
    pub(crate) fn eval_block(&mut self, block: &Block) -> EvalResult<()> {
        trace!(pos = %block.pos, statements = block.statements.len(), "entering block");
        for statement in &block.statements {
            self.eval_statement(statement)?;
        }
        Ok(())
    }

    /// Evaluates a ternary conditional.
    ///
    /// A concrete selector is validated and only the selected branch is
    /// evaluated. A symbolic selector evaluates both branches into a
    /// conditional formula; a branch that fails becomes a deferred error, so
    /// it only surfaces if a call actually selects it.
    pub(crate) fn eval_conditional(&mut self,
                                   condition: &Expr,
                                   then_branch: &Expr,
                                   else_branch: &Expr)
                                   -> EvalResult<Operand> {
        let pos = condition.position();

        match self.eval(condition)? {
            Operand::Concrete(selector) => {
                if as_truthy(selector, pos)? {
                    self.eval(then_branch)
                } else {
                    self.eval(else_branch)
                }
            },
            Operand::Symbolic(selector) => {
                let then_branch = self.eval_deferred(then_branch);
                let else_branch = self.eval_deferred(else_branch);

                Ok(Operand::Symbolic(Formula::Conditional { condition: Box::new(selector),
                                                            then_branch: Box::new(then_branch),
                                                            else_branch: Box::new(else_branch),
                                                            pos }))
            },
        }
    }

    /// Evaluates a branch that may not be taken, turning an error into a
    /// formula that raises it when reached.
    ///
    /// The failing formula first repeats the effects the branch completed
    /// before the error, so taking it prints what direct evaluation would.
    fn eval_deferred(&mut self, expr: &Expr) -> Formula {
        let mark = self.effects.len();

        match self.eval(expr) {
            Ok(operand) => operand.into_formula(),
            Err(error) => {
                let effects = self.effects.split_off(mark);
                trace!(%error, effects = effects.len(), "deferring branch error");
                Formula::Fail { effects, error }
            },
        }
    }
}
